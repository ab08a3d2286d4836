// --------------------------------------------------
// Handles the read-only analytics report endpoint.
// --------------------------------------------------

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::store::Store;

// -----------------------------
// GET /analytics
// Returns the stored document as-is; never updates it
// -----------------------------
pub async fn get_analytics(State(store): State<Arc<Store>>) -> impl IntoResponse {
    match store.load() {
        Ok(analytics) => Json(analytics).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load analytics");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to load analytics").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn analytics_passes_the_stored_document_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analytics.json");
        std::fs::write(
            &path,
            r#"{"totalVisits": 5, "uniqueVisitors": 2, "timeseries": [{"timestamp": "2024-01-01 00:00:00"}]}"#,
        )
        .unwrap();
        let store = Arc::new(Store::new(&path));

        let response = get_analytics(State(store)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "totalVisits": 5,
                "uniqueVisitors": 2,
                "timeseries": [{"timestamp": "2024-01-01 00:00:00"}],
            })
        );
    }

    #[tokio::test]
    async fn analytics_reads_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(Store::new(dir.path().join("analytics.json")));

        let first = body_json(get_analytics(State(store.clone())).await.into_response()).await;
        let second = body_json(get_analytics(State(store)).await.into_response()).await;
        assert_eq!(first, second);
        assert_eq!(first["totalVisits"], 0);
    }

    #[tokio::test]
    async fn analytics_maps_store_faults_to_500() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analytics.json");
        std::fs::write(&path, r#"{"uniqueVisitors": 2}"#).unwrap();
        let store = Arc::new(Store::new(&path));

        let response = get_analytics(State(store)).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
