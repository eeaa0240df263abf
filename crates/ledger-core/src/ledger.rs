//! The comment ledger: an ordered, append-only, in-memory collection.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::LedgerResult;
use ledger_types::CommentBody;

/// A stored comment record.
///
/// Identifiers are assigned at insertion time and are dense: the Nth comment
/// accepted by the ledger has `id == N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: u64,
    #[schema(value_type = String)]
    pub body: CommentBody,
}

/// Owner of the comment sequence.
///
/// All mutation goes through [`CommentLedger::append`]; the sequence is never
/// reordered, updated in place, or truncated, and it lives only as long as
/// the process. Readers get snapshots, never references into the store.
#[derive(Debug, Default)]
pub struct CommentLedger {
    // Serialises concurrent appends into a single total order. The lock is
    // held only across Vec operations, which do not panic, so the mutex
    // cannot be poisoned.
    comments: Mutex<Vec<Comment>>,
}

impl CommentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `body` and appends it to the end of the sequence.
    ///
    /// The new record is assigned `id == previous length + 1` under the same
    /// lock that publishes it, so identifiers always match insertion order.
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidInput`](crate::LedgerError::InvalidInput)
    /// if `body` is empty or whitespace-only; the sequence is left untouched.
    pub fn append(&self, body: impl AsRef<str>) -> LedgerResult<Comment> {
        let body = CommentBody::new(body)?;

        let mut comments = self.comments.lock().unwrap();
        let comment = Comment {
            id: comments.len() as u64 + 1,
            body,
        };
        comments.push(comment.clone());
        tracing::debug!(id = comment.id, "comment appended");

        Ok(comment)
    }

    /// Returns all comments appended so far, in insertion order.
    pub fn list_all(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }

    /// Number of comments currently stored.
    pub fn len(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    /// True if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
