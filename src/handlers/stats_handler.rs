use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::ApiResponse};

#[get("/api/stats")]
async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.quiz_service.get_stats().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(stats, "Success")))
}
