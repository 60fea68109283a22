/// Primary keys are UUIDs generated when a row is created.
pub type EntityId = uuid::Uuid;

/// Opaque user identifier issued by the authentication provider (the JWT `sub`).
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
