//! v003: append-only feedback audit log.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS feedback_events (
    id               TEXT PRIMARY KEY,
    action_id        TEXT NOT NULL,
    verdict          TEXT NOT NULL,
    previous_verdict TEXT NOT NULL,
    reason           TEXT,
    reviewer_id      TEXT,
    learning_weight  REAL NOT NULL,
    recorded_at      TEXT NOT NULL,
    FOREIGN KEY (action_id) REFERENCES action_records(id)
);

CREATE INDEX IF NOT EXISTS idx_feedback_action ON feedback_events(action_id);
";
