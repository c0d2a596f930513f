//! Request handlers for the risk API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use super::AppState;
use super::error::ApiError;
use crate::models::{CreateRiskRequest, Risk};

/// Handle `GET /v1/risks`.
pub async fn list_risks(State(state): State<AppState>) -> Json<Vec<Risk>> {
    Json(state.store.all())
}

/// Handle `POST /v1/risks`.
///
/// A body that fails to parse covers both malformed JSON and an invalid or
/// missing `state` value; both answer 400.
pub async fn create_risk(
    State(state): State<AppState>,
    payload: Result<Json<CreateRiskRequest>, JsonRejection>,
) -> Result<Json<Risk>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let risk = state.store.save(req.state, &req.title, &req.description)?;
    Ok(Json(risk))
}

/// Handle `GET /v1/risks/{id}`.
pub async fn get_risk(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Risk>, ApiError> {
    // The router cannot match an empty segment, but the contract is explicit.
    if id.is_empty() {
        return Err(ApiError::BadRequest("no risk id in request path".to_string()));
    }
    match state.store.get(&id)? {
        Some(risk) => Ok(Json(risk)),
        None => Err(ApiError::NotFound(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskState;
    use crate::storage::{MemoryStore, RiskStore};
    use std::sync::Arc;

    fn state() -> AppState {
        AppState {
            store: Arc::new(MemoryStore::new()),
        }
    }

    #[tokio::test]
    async fn get_risk_guards_against_an_empty_id() {
        let result = get_risk(State(state()), Path(String::new())).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn get_risk_answers_not_found_for_unknown_ids() {
        let result = get_risk(State(state()), Path("missing".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn get_risk_returns_the_stored_record() {
        let state = state();
        let saved = state.store.save(RiskState::Open, "t", "d").unwrap();
        let Json(found) = get_risk(State(state), Path(saved.id.clone())).await.unwrap();
        assert_eq!(found, saved);
    }
}
