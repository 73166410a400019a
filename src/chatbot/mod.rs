//! Chat assistant core: intent resolution with a hard safety gate.
//!
//! A free-text message is classified into a closed set of intents, each
//! intent maps to one field-scoped profile read and a fixed reply
//! template, and anything resembling a diagnostic or treatment request
//! is refused before any data is touched.
//!
//! Flow per turn:
//! 1. validate inputs ([`engine`])
//! 2. primary classifier over HTTP ([`predictor`]), any failure → fallback
//! 3. keyword rules on the normalized text ([`rules`], [`normalize`])
//! 4. safety gate, then one scoped read + template ([`engine`], [`store`], [`replies`])

pub mod engine;
pub mod normalize;
pub mod predictor;
pub mod replies;
pub mod resolver;
pub mod rules;
pub mod store;
pub mod types;

use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Patient data read failed: {0}")]
    Store(#[from] DatabaseError),
}
