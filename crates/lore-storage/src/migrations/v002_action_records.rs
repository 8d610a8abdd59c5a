//! v002: historical action records with their current verdict.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS action_records (
    id                TEXT PRIMARY KEY,
    method            TEXT NOT NULL,
    description       TEXT NOT NULL,
    artifacts_touched TEXT NOT NULL DEFAULT '[]',
    verdict           TEXT NOT NULL DEFAULT 'unset',
    verdict_reason    TEXT,
    learning_weight   REAL NOT NULL DEFAULT 1.0,
    created_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_action_records_verdict ON action_records(verdict);
CREATE INDEX IF NOT EXISTS idx_action_records_created ON action_records(created_at);
";
