pub mod security;
pub mod storage;
