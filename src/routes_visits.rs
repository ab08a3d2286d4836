// --------------------------------------------------
// Handles the visit-logging endpoint.
//
// Responsibilities:
// - Record one visit per explicit GET /log_visit call
// - Report the new running total back to the page
// --------------------------------------------------

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Local;
use serde::Serialize;

use crate::logic;
use crate::store::Store;

#[derive(Debug, Serialize)]
pub struct LogVisitResponse {
    pub status: &'static str,
    #[serde(rename = "totalVisits")]
    pub total_visits: u64,
}

// -----------------------------
// GET /log_visit
// Called once by the page on initial load to log the new visit
// -----------------------------
pub async fn log_visit(State(store): State<Arc<Store>>) -> impl IntoResponse {
    match logic::record_visit(&store, Local::now()) {
        Ok(total) => Json(LogVisitResponse {
            status: "logged",
            total_visits: total,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to record visit");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to record visit").into_response()
        }
    }
}
