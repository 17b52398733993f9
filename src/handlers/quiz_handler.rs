use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::BearerToken,
    errors::AppError,
    models::dto::{
        request::{CreateQuizRequest, UpdateQuizRequest},
        response::{ApiResponse, CreatedQuizDto},
    },
};

#[get("/api/quizzes")]
async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_public().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(quizzes, "Success")))
}

#[get("/api/quizzes/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    token: BearerToken,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(token.as_deref(), &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(quiz, "Success")))
}

#[post("/api/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    token: BearerToken,
) -> Result<HttpResponse, AppError> {
    let id = state
        .quiz_service
        .create_quiz(token.as_deref(), request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        CreatedQuizDto { id },
        "Quiz created successfully",
    )))
}

#[put("/api/quizzes/{id}")]
async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
    token: BearerToken,
) -> Result<HttpResponse, AppError> {
    state
        .quiz_service
        .update_quiz(token.as_deref(), &id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Quiz updated successfully")))
}

#[delete("/api/quizzes/{id}")]
async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    token: BearerToken,
) -> Result<HttpResponse, AppError> {
    state
        .quiz_service
        .delete_quiz(token.as_deref(), &id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Quiz deleted successfully")))
}

#[post("/api/quizzes/{id}/play")]
async fn record_play(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.record_play(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Play recorded")))
}

#[get("/api/my-quizzes")]
async fn my_quizzes(
    state: web::Data<AppState>,
    token: BearerToken,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.my_quizzes(token.as_deref()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(quizzes, "Success")))
}
