//! OpenAPI document for the REST surface, served at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "calc-server API",
        description = "User registration/login and calculation BREAD operations.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    paths(
        accounts::api::rest::handlers::register,
        accounts::api::rest::handlers::login,
        accounts::api::rest::handlers::get_account,
        calculations::api::rest::handlers::create_calculation,
        calculations::api::rest::handlers::list_calculations,
        calculations::api::rest::handlers::get_calculation,
        calculations::api::rest::handlers::update_calculation,
        calculations::api::rest::handlers::delete_calculation,
    ),
    components(schemas(
        accounts::api::rest::dto::AccountDto,
        accounts::api::rest::dto::RegisterReq,
        accounts::api::rest::dto::LoginReq,
        calculations::api::rest::dto::CalculationDto,
        calculations::api::rest::dto::CreateCalculationReq,
        calculations::api::rest::dto::UpdateCalculationReq,
        calculations::domain::model::CalcOp,
        api_problem::Problem,
        api_problem::FieldError,
    ))
)]
pub struct ApiDoc;

pub async fn serve() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
