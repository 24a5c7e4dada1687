//! SQLite schema definitions.

/// Key-value blob table.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS blobs (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
