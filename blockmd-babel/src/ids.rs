//! Generation-time capabilities for the JSON serializers.
//!
//! Block identifiers and document timestamps are the only non-deterministic
//! inputs in the whole crate. They are injected through these two traits so
//! the serializers stay pure functions of (document, capabilities) and tests
//! can pin both.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Supplies opaque identifiers for serialized blocks and sections.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Supplies the wall-clock timestamp stamped on serialized documents.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Production id source for clean JSON blocks: a 10-character slice of a
/// random UUID, matching the shape editors expect for block ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(10);
        id
    }
}

/// Production id source for sectioned documents: full hyphenated UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Production clock: milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}
