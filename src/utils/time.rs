use chrono::{DateTime, Utc};

use crate::constants::sqs::DEDUPLICATION_ID_FORMAT;

/// Deduplication token for a message submitted at `at`.
///
/// Millisecond precision: two submissions within the same millisecond share a token and the
/// queue keeps only the first.
pub fn deduplication_id(at: DateTime<Utc>) -> String {
    at.format(DEDUPLICATION_ID_FORMAT).to_string()
}
