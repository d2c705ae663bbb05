/// Track identifiers are UUIDs assigned by the store at insert time.
pub type TrackId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
