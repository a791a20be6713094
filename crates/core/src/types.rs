/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Slug of the single live row in singleton tables (press kit, site settings).
pub const MAIN_SLUG: &str = "main";
