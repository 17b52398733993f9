use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::{
    app_state::AppState,
    auth::BearerToken,
    errors::AppError,
    models::dto::response::{ApiResponse, VerifiedCallerDto},
};

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "app": "QuizCraft API",
        "status": "running",
        "version": "1.0.0",
    }))
}

/// Lets the frontend confirm a token is still accepted.
#[post("/api/verify-token")]
async fn verify_token(
    state: web::Data<AppState>,
    token: BearerToken,
) -> Result<HttpResponse, AppError> {
    let caller = state.verifier.require(token.as_deref()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        VerifiedCallerDto::from(caller),
        "Token is valid",
    )))
}
