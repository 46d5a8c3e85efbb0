/// Opaque draft identifier, minted at first save and stable thereafter.
pub type DraftId = uuid::Uuid;

/// Calendar date stamp (no time component). `created_at` is a date,
/// not an instant.
pub type DateStamp = chrono::NaiveDate;
