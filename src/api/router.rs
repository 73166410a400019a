//! API router assembly.
//!
//! Two routes: a liveness probe and the chat operation. CORS is
//! permissive; the web front-end is served from a different origin.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::endpoints;
use super::types::ApiContext;

pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/api/health", get(endpoints::health::check))
        .route("/api/chatbot/message", post(endpoints::chat::message))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::chatbot::replies;
    use crate::config::ClassifierConfig;
    use crate::db::repository::upsert_patient;
    use crate::db::sqlite::open_database;
    use crate::models::Patient;

    /// Router over a seeded on-disk database; the classifier endpoint
    /// points at a closed port so every turn exercises the fallback.
    fn test_router() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("locker.db");

        let conn = open_database(&db_path).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        upsert_patient(
            &conn,
            &Patient {
                patient_id: "PID-001".into(),
                name: Some("Asha Rao".into()),
                date_of_birth: None,
                gender: None,
                blood_type: Some("O+".into()),
                emergency_contacts: None,
                current_medications: None,
                drug_allergies: None,
                other_allergies: None,
                recent_surgeries: None,
                medical_devices: None,
                dnr_status: false,
                organ_donor: false,
                created_at: now,
                updated_at: now,
            },
        )
        .unwrap();

        let ctx = ApiContext::new(db_path, ClassifierConfig::new("http://127.0.0.1:9", 1));
        (api_router(ctx), dir)
    }

    fn chat_request(message: &str, patient_id: &str) -> Request<Body> {
        let body = serde_json::json!({ "message": message, "patientId": patient_id });
        Request::builder()
            .method("POST")
            .uri("/api/chatbot/message")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let (router, _dir) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn chat_turn_answers_blood_type_via_fallback() {
        let (router, _dir) = test_router();
        let response = router
            .oneshot(chat_request("What's my blood type?", "PID-001"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["reply"], "Your blood group is O+.");
    }

    #[tokio::test]
    async fn diagnostic_request_is_refused() {
        let (router, _dir) = test_router();
        let response = router
            .oneshot(chat_request("diagnose my diabetes", "PID-001"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["reply"], replies::REFUSAL);
    }

    #[tokio::test]
    async fn empty_message_is_rejected_with_400() {
        let (router, _dir) = test_router();
        let response = router.oneshot(chat_request("  ", "PID-001")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["reply"], replies::MISSING_CONTEXT);
    }

    #[tokio::test]
    async fn missing_patient_id_is_rejected_with_400() {
        let (router, _dir) = test_router();
        let response = router
            .oneshot(chat_request("what is my blood type", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn unknown_patient_still_gets_a_polite_reply() {
        let (router, _dir) = test_router();
        let response = router
            .oneshot(chat_request("what is my blood type", "NOBODY"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["reply"], replies::BLOOD_GROUP_MISSING);
    }
}
