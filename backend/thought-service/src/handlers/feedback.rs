/// Feedback handler - write-only capture of free-text feedback
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::config::Config;
use crate::error::Result;
use crate::services::ThoughtService;

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub feedback: String,
    pub email: Option<String>,
}

pub async fn submit_feedback(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: web::Json<SubmitFeedbackRequest>,
) -> Result<HttpResponse> {
    let service = ThoughtService::new((**pool).clone(), config.feed.clone());
    service
        .submit_feedback(&req.feedback, req.email.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
