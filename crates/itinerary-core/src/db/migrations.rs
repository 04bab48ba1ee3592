//! Database schema initialization and migrations.

use log::{debug, warn};
use rusqlite::OptionalExtension;

use super::exec;
use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

const CHECK_STOP_DAY_FK_SQL: &str =
    "SELECT COUNT(*) FROM pragma_foreign_key_list('Stop') WHERE \"table\" = 'Day'";
const SELECT_STOP_SEQUENCE_SQL: &str = "SELECT seq FROM sqlite_sequence WHERE name = 'Stop'";

// Rows whose parent no longer exists are dropped: without enforced foreign
// keys, deleting a plan or day used to leave its descendants behind. Order
// indices are renumbered to 0..N-1 per day, since older builds wrote them
// 1-based.
const REBUILD_STOP_TABLE_SQL: &str = "
    DELETE FROM Day WHERE plan_id NOT IN (SELECT plan_id FROM TravelPlan);
    CREATE TABLE Stop_rebuild (
        stop_id INTEGER PRIMARY KEY AUTOINCREMENT,
        day_id INTEGER NOT NULL,
        location_name TEXT NOT NULL,
        address TEXT,
        latitude REAL,
        longitude REAL,
        arrival_time TEXT,
        departure_time TEXT,
        notes TEXT,
        order_index INTEGER NOT NULL DEFAULT 0,
        media_urls TEXT NOT NULL DEFAULT '[]',
        FOREIGN KEY (day_id) REFERENCES Day(day_id) ON DELETE CASCADE
    );
    INSERT INTO Stop_rebuild (stop_id, day_id, location_name, address, latitude, longitude,
                              arrival_time, departure_time, notes, order_index, media_urls)
        SELECT stop_id, day_id, location_name, address, latitude, longitude,
               arrival_time, departure_time, notes,
               ROW_NUMBER() OVER (
                   PARTITION BY day_id ORDER BY COALESCE(order_index, 0), stop_id
               ) - 1,
               COALESCE(NULLIF(media_urls, ''), '[]')
        FROM Stop
        WHERE day_id IN (SELECT day_id FROM Day);
    DROP TABLE Stop;
    ALTER TABLE Stop_rebuild RENAME TO Stop;
    CREATE INDEX IF NOT EXISTS idx_stop_day ON Stop(day_id, order_index);
    DELETE FROM Review WHERE stop_id NOT IN (SELECT stop_id FROM Stop);
";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&mut self) -> Result<()> {
        // Enable foreign keys for this connection
        exec(&self.connection, "PRAGMA foreign_keys = ON")?;
        exec(&self.connection, SCHEMA_SQL)?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        debug!("itinerary schema ready");
        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&mut self) -> Result<()> {
        let has_stop_day_fk: bool = self
            .connection
            .query_row(CHECK_STOP_DAY_FK_SQL, [], |row| row.get(0))
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect Stop foreign keys")?;

        if !has_stop_day_fk {
            self.rebuild_stop_table()?;
        }

        Ok(())
    }

    /// Recreates the Stop table with its cascading foreign key to Day.
    ///
    /// SQLite cannot add a foreign key to an existing table, so the rows are
    /// copied into a fresh table. Foreign key enforcement must be off while
    /// the old table is dropped, otherwise the Review cascade would fire.
    fn rebuild_stop_table(&mut self) -> Result<()> {
        warn!("Stop table has no foreign key to Day; rebuilding it");

        exec(&self.connection, "PRAGMA foreign_keys = OFF")?;

        let rebuilt = self.rebuild_stop_table_in_transaction();

        exec(&self.connection, "PRAGMA foreign_keys = ON")?;

        rebuilt
    }

    fn rebuild_stop_table_in_transaction(&mut self) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let stops_before: i64 = tx
            .query_row("SELECT COUNT(*) FROM Stop", [], |row| row.get(0))
            .db_context("Failed to count stops")?;
        let last_stop_id: Option<i64> = tx
            .query_row(SELECT_STOP_SEQUENCE_SQL, [], |row| row.get(0))
            .optional()
            .db_context("Failed to read Stop key sequence")?;

        exec(&tx, REBUILD_STOP_TABLE_SQL)?;

        // Keep ids of deleted stops retired.
        if let Some(seq) = last_stop_id {
            let updated = tx
                .execute(
                    "UPDATE sqlite_sequence SET seq = MAX(seq, ?1) WHERE name = 'Stop'",
                    [seq],
                )
                .db_context("Failed to carry over Stop key sequence")?;
            if updated == 0 {
                tx.execute(
                    "INSERT INTO sqlite_sequence (name, seq) VALUES ('Stop', ?1)",
                    [seq],
                )
                .db_context("Failed to carry over Stop key sequence")?;
            }
        }

        let stops_after: i64 = tx
            .query_row("SELECT COUNT(*) FROM Stop", [], |row| row.get(0))
            .db_context("Failed to count stops")?;

        tx.commit().db_context("Failed to commit transaction")?;

        if stops_after < stops_before {
            warn!(
                "dropped {} orphaned stops while rebuilding the Stop table",
                stops_before - stops_after
            );
        }
        debug!("Stop table rebuilt with {stops_after} rows");
        Ok(())
    }
}
