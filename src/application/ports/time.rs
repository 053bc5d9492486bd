// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for `createdAt`, `updatedAt` and `publishedAt`.
///
/// Injected so tests can pin timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
