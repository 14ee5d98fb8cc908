/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (due dates, inspection dates) carry no time component.
pub type DateOnly = chrono::NaiveDate;
