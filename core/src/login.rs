//! Login record with a sequential id.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out ids 1, 2, 3, ... in call order.
///
/// Pass the same sequence to every record that should share a numbering.
/// Consecutive ids are only guaranteed for sequential use.
#[derive(Debug)]
pub struct IdSequence {
    last: AtomicU64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// The next call to `next_id` returns 1 again.
    pub fn reset(&self) {
        self.last.store(0, Ordering::Relaxed);
    }
}

/// A username/email pair tagged with an id from an `IdSequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRecord {
    id: u64,
    username: String,
    email: String,
}

impl LoginRecord {
    pub fn new(ids: &IdSequence, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: ids.next_id(),
            username: username.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
