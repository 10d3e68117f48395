/// All primary keys are PostgreSQL UUIDs generated by the database.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates without a time component (birthdays, ledger dates).
pub type Date = chrono::NaiveDate;

/// Monetary amounts are integer cents.
pub type Cents = i64;
