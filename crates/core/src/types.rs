/// Primary keys of persisted log records (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Opaque, externally assigned business identifier.
pub type BusinessId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
