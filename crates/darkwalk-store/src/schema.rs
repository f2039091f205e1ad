//! Store database schema.

/// SQL to create the progress table.
pub const CREATE_PROGRESS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS progress (
    id              UUID PRIMARY KEY,
    user_id         VARCHAR(255) NOT NULL,
    role            VARCHAR(64) NOT NULL,
    story_segment   BIGINT NOT NULL,
    selected_choice VARCHAR(255),
    recorded_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_progress_user_recorded
    ON progress (user_id, recorded_at DESC);
";

/// SQL to create the stories table.
pub const CREATE_STORIES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS stories (
    story_id VARCHAR(255) NOT NULL,
    role     VARCHAR(64) NOT NULL,
    title    VARCHAR(255) NOT NULL,
    segments JSONB NOT NULL,
    PRIMARY KEY (story_id, role)
);
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_are_idempotent() {
        for statement in [CREATE_PROGRESS_TABLE, CREATE_STORIES_TABLE] {
            assert!(statement.contains("IF NOT EXISTS"));
        }
    }
}
