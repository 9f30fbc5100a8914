/// Port for one-way credential hashing.
///
/// `hash` salts per call, so hashing the same input twice yields different
/// strings. `verify` must treat a malformed stored hash as a mismatch, never
/// as a panic or error.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> anyhow::Result<String>;
    fn verify(&self, plaintext: &str, stored: &str) -> bool;
}
