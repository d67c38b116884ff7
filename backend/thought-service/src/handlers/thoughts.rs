/// Thought handlers - HTTP endpoints for listing, creating, and voting
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::Result;
use crate::models::Reaction;
use crate::services::{FeedMode, ThoughtService};

#[derive(Debug, Deserialize)]
pub struct FeedQueryParams {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateThoughtRequest {
    pub content: String,
    pub username: String,
    pub twitter: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub id: Uuid,
    pub vote_type: Option<Reaction>,
    pub previous_vote: Option<Reaction>,
}

/// List thoughts under the requested ordering
pub async fn list_thoughts(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    query: web::Query<FeedQueryParams>,
) -> Result<HttpResponse> {
    let mode = FeedMode::parse(query.filter.as_deref());
    let service = ThoughtService::new((**pool).clone(), config.feed.clone());
    let thoughts = service.get_feed(mode).await?;

    Ok(HttpResponse::Ok().json(thoughts))
}

/// Create a new thought
pub async fn create_thought(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: web::Json<CreateThoughtRequest>,
) -> Result<HttpResponse> {
    let service = ThoughtService::new((**pool).clone(), config.feed.clone());
    service
        .create_thought(&req.content, &req.username, req.twitter.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// Apply a vote transition and return the refreshed thought
pub async fn vote_thought(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: web::Json<VoteRequest>,
) -> Result<HttpResponse> {
    let service = ThoughtService::new((**pool).clone(), config.feed.clone());
    let thought = service
        .vote(req.id, req.previous_vote, req.vote_type)
        .await?;

    Ok(HttpResponse::Ok().json(thought))
}
