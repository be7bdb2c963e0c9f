//! SQLite-based session storage and statistics.
//!
//! Provides persistent storage for:
//! - Completed focus sessions
//! - Session statistics (daily and all-time)
//! - Key-value store for application state (persisted timer engine,
//!   goals, focus schedules)

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::CoreError;
use crate::goals::Goal;
use crate::timer::FocusSchedule;

/// Storage keys, mirroring the keys the mobile dashboard kept in its
/// key-value store.
pub const KEY_TIMER_ENGINE: &str = "wellbeing_timer_engine";
pub const KEY_GOALS: &str = "wellbeing_goals";
pub const KEY_FOCUS_SCHEDULES: &str = "wellbeing_focus_schedules";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    pub duration_min: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Stats {
    pub total_sessions: u64,
    pub total_focus_min: u64,
    pub today_sessions: u64,
    pub today_focus_min: u64,
}

/// Today-only slice of the session statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TodayStats {
    pub today_sessions: u64,
    pub today_focus_min: u64,
}

/// SQLite database for session storage.
///
/// Stores completed focus sessions and provides statistics.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/offscreen/offscreen.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        Self::open_at(data_dir()?.join("offscreen.db"))
    }

    /// Open a database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: impl AsRef<std::path::Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sessions (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                duration_min INTEGER NOT NULL,
                started_at   TEXT NOT NULL,
                completed_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sessions_completed_at ON sessions(completed_at);",
        )?;
        Ok(())
    }

    /// Record a completed focus session.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_session(
        &self,
        duration_min: u64,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<i64, rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO sessions (duration_min, started_at, completed_at)
             VALUES (?1, ?2, ?3)",
            params![
                duration_min,
                started_at.to_rfc3339(),
                completed_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent sessions, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored timestamp does not
    /// parse as RFC 3339.
    pub fn recent_sessions(&self, limit: u32) -> Result<Vec<SessionRecord>, rusqlite::Error> {
        fn timestamp(idx: usize, s: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        idx,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })
        }

        let mut stmt = self.conn.prepare(
            "SELECT id, duration_min, started_at, completed_at
             FROM sessions ORDER BY completed_at DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok(SessionRecord {
                id: row.get(0)?,
                duration_min: row.get(1)?,
                started_at: timestamp(2, &row.get::<_, String>(2)?)?,
                completed_at: timestamp(3, &row.get::<_, String>(3)?)?,
            })
        })?;
        rows.collect()
    }

    /// Today's completed sessions and focus minutes.
    pub fn stats_today(&self) -> Result<TodayStats, rusqlite::Error> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let row = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(duration_min), 0)
             FROM sessions WHERE completed_at >= ?1",
            params![format!("{today}T00:00:00+00:00")],
            |row| Ok((row.get::<_, u64>(0)?, row.get::<_, u64>(1)?)),
        )?;
        Ok(TodayStats {
            today_sessions: row.0,
            today_focus_min: row.1,
        })
    }

    /// All-time totals alongside today's slice.
    pub fn stats_all(&self) -> Result<Stats, rusqlite::Error> {
        let all = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(duration_min), 0) FROM sessions",
            [],
            |row| Ok((row.get::<_, u64>(0)?, row.get::<_, u64>(1)?)),
        )?;
        let today = self.stats_today()?;
        Ok(Stats {
            total_sessions: all.0,
            total_focus_min: all.1,
            today_sessions: today.today_sessions,
            today_focus_min: today.today_focus_min,
        })
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a value from the kv store.
    pub fn kv_remove(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── JSON-persisted collections ───────────────────────────────────

    /// Load the stored goals, or an empty list if none were saved yet.
    ///
    /// # Errors
    /// Returns an error if the query or deserialization fails.
    pub fn goals(&self) -> Result<Vec<Goal>, CoreError> {
        match self.kv_get(KEY_GOALS)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the full goal list.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_goals(&self, goals: &[Goal]) -> Result<(), CoreError> {
        self.kv_set(KEY_GOALS, &serde_json::to_string(goals)?)?;
        Ok(())
    }

    /// Load the stored focus schedules, seeding the defaults on first use.
    ///
    /// # Errors
    /// Returns an error if the query or deserialization fails.
    pub fn focus_schedules(&self) -> Result<Vec<FocusSchedule>, CoreError> {
        match self.kv_get(KEY_FOCUS_SCHEDULES)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => {
                let defaults = crate::timer::default_schedules();
                self.save_focus_schedules(&defaults)?;
                Ok(defaults)
            }
        }
    }

    /// Persist the full focus schedule list.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_focus_schedules(&self, schedules: &[FocusSchedule]) -> Result<(), CoreError> {
        self.kv_set(KEY_FOCUS_SCHEDULES, &serde_json::to_string(schedules)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_query() {
        let db = Database::open_memory().unwrap();
        let now = Utc::now();
        db.record_session(25, now, now).unwrap();
        let stats = db.stats_all().unwrap();
        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.total_focus_min, 25);
        assert_eq!(stats.today_sessions, 1);

        let recent = db.recent_sessions(10).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].duration_min, 25);
    }

    #[test]
    fn today_stats_exclude_older_sessions() {
        let db = Database::open_memory().unwrap();
        let now = Utc::now();
        let two_days_ago = now - chrono::Duration::days(2);
        db.record_session(25, now, now).unwrap();
        db.record_session(40, two_days_ago, two_days_ago).unwrap();

        let today = db.stats_today().unwrap();
        assert_eq!(today.today_sessions, 1);
        assert_eq!(today.today_focus_min, 25);

        let all = db.stats_all().unwrap();
        assert_eq!(all.total_sessions, 2);
        assert_eq!(all.total_focus_min, 65);
        assert_eq!(all.today_sessions, 1);
        assert_eq!(all.today_focus_min, 25);
    }

    #[test]
    fn recent_sessions_surface_corrupt_timestamps() {
        let db = Database::open_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO sessions (duration_min, started_at, completed_at)
                 VALUES (25, 'not-a-timestamp', 'not-a-timestamp')",
                [],
            )
            .unwrap();

        assert!(db.recent_sessions(10).is_err());
    }

    #[test]
    fn open_at_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offscreen.db");

        let db = Database::open_at(&path).unwrap();
        db.kv_set("test", "persisted").unwrap();
        drop(db);

        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "persisted");
    }

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
        db.kv_remove("test").unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
    }

    #[test]
    fn goals_round_trip() {
        let db = Database::open_memory().unwrap();
        assert!(db.goals().unwrap().is_empty());

        let goal = Goal::new("Reduce Instagram Usage", 90, "instagram", "#E1306C").unwrap();
        db.save_goals(&[goal.clone()]).unwrap();

        let loaded = db.goals().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, goal.id);
        assert_eq!(loaded[0].target_minutes, 90);
    }

    #[test]
    fn focus_schedules_seed_defaults() {
        let db = Database::open_memory().unwrap();
        let first = db.focus_schedules().unwrap();
        assert_eq!(first.len(), 2);
        // Seeded once: the same list comes back on the next load.
        let second = db.focus_schedules().unwrap();
        assert_eq!(second[0].id, first[0].id);
    }
}
