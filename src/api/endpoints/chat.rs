//! Chat endpoint.
//!
//! `POST /api/chatbot/message`: run one chat turn for a patient.
//!
//! The engine is blocking (SQLite + a bounded HTTP call), so the turn
//! runs inside `spawn_blocking`. If the client disconnects, axum drops
//! this handler's future and the turn is abandoned, not awaited; the
//! core persists nothing, so there is no state to roll back.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::chatbot::engine::ChatEngine;
use crate::chatbot::predictor::HttpIntentClient;
use crate::chatbot::replies;
use crate::chatbot::store::SqlitePatientReader;
use crate::chatbot::types::ChatReply;
use crate::db::sqlite::open_database;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub message: String,
    pub patient_id: String,
}

/// `POST /api/chatbot/message`: one message in, one reply out.
///
/// Validation failures return 400 with the same `{ success, reply }`
/// body shape. Every other outcome returns 200, including a downstream
/// store failure (which carries `success: false`).
pub async fn message(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<(StatusCode, Json<ChatReply>), ApiError> {
    if req.message.trim().is_empty() || req.patient_id.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ChatReply::failure(replies::MISSING_CONTEXT)),
        ));
    }

    let reply = tokio::task::spawn_blocking(move || {
        let conn = match open_database(&ctx.db_path) {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(error = %e, "Failed to open patient database");
                return ChatReply::failure(replies::SERVICE_ERROR);
            }
        };

        let predictor = HttpIntentClient::new(&ctx.classifier);
        let reader = SqlitePatientReader::new(&conn);
        let engine = ChatEngine::new(predictor, reader);
        engine.handle_turn(&req.message, &req.patient_id)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("chat task failed: {e}")))?;

    Ok((StatusCode::OK, Json(reply)))
}
