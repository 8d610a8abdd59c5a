//! v001: patterns keyed by name.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS patterns (
    name                TEXT PRIMARY KEY,
    category            TEXT NOT NULL,
    confidence          REAL NOT NULL,
    success_rate        REAL NOT NULL,
    usage_frequency     INTEGER NOT NULL DEFAULT 0,
    rule_payload        TEXT NOT NULL,
    applicable_contexts TEXT NOT NULL DEFAULT '{}',
    is_active           INTEGER NOT NULL DEFAULT 1,
    created_at          TEXT NOT NULL,
    updated_at          TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_patterns_category ON patterns(category);
CREATE INDEX IF NOT EXISTS idx_patterns_confidence ON patterns(confidence);
CREATE INDEX IF NOT EXISTS idx_patterns_active ON patterns(is_active);
";
