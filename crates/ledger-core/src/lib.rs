//! # Ledger Core
//!
//! Core business logic for the comment ledger service.
//!
//! This crate owns the in-memory comment sequence and the rules for mutating it:
//! - Append-only storage with monotonic integer identifiers
//! - Comment body validation
//!
//! **No API concerns**: HTTP endpoints, JSON request shapes, or CORS belong in `api-rest`.

pub mod error;
pub mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{Comment, CommentLedger};
