use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use resort_content::{Event, Hero, Interaction, SpecialOffer};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HeroQuery {
    /// Page key such as `homepage`. Omitted means only heroes shown everywhere.
    pub page: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/heroes", get(list_heroes))
        .route("/v1/heroes/{id}/{interaction}", post(record_interaction))
        .route("/v1/offers", get(list_offers))
        .route("/v1/events", get(list_events))
}

/// GET /v1/heroes?page=homepage
pub async fn list_heroes(
    State(state): State<AppState>,
    Query(query): Query<HeroQuery>,
) -> Json<Vec<Hero>> {
    let page = query.page.as_deref().map(str::trim).filter(|p| !p.is_empty());
    Json(state.content.heroes(Utc::now(), page).await)
}

/// GET /v1/offers
pub async fn list_offers(State(state): State<AppState>) -> Json<Vec<SpecialOffer>> {
    Json(state.content.offers(Utc::now()).await)
}

/// GET /v1/events
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.content.events(Utc::now()).await)
}

/// POST /v1/heroes/{id}/views | /v1/heroes/{id}/clicks
///
/// Answers before the counter is written; the increment runs in the background.
pub async fn record_interaction(
    State(state): State<AppState>,
    Path((id, interaction)): Path<(Uuid, String)>,
) -> Result<StatusCode, AppError> {
    let interaction: Interaction = interaction.parse()?;

    state.content.record_interaction(id, interaction);
    Ok(StatusCode::ACCEPTED)
}
