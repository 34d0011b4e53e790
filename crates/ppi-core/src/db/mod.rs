//! SQLite persistence gateway for the normalized tables.
//!
//! Runtime defaults follow the projection-store conventions:
//! - `foreign_keys = ON` to protect the interaction → protein references
//! - `busy_timeout = 5s` to soften transient lock failures
//!
//! The gateway owns the storage file's lifecycle: the parent directory is
//! created on first open, and the file is destroyed only through
//! [`drop_database`]. Imports are full replaces — both tables are dropped
//! and recreated inside one transaction, so a failed import leaves the
//! previous snapshot intact and readable.

pub mod query;
pub mod schema;

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::{Connection, params};
use tracing::{info, instrument};

use crate::config::StoreConfig;
use crate::error::{PpiError, Result};
use crate::record::{Interaction, Protein};

/// Busy timeout applied to every store connection.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// An open handle on the storage file.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open (or create) the storage file at the configured location and
    /// apply runtime pragmas.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// database cannot be opened/configured.
    #[instrument(skip_all, fields(path = %config.db_path().display()))]
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let path = config.db_path().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        configure_connection(&conn)?;

        Ok(Self { conn, path })
    }

    /// Replace the stored snapshot with the given normalized tables.
    ///
    /// Runs as a single transaction: drop both tables, recreate the schema,
    /// repopulate. All-or-nothing — on failure the prior snapshot survives.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement in the transaction fails.
    #[instrument(skip_all, fields(proteins = proteins.len(), interactions = interactions.len()))]
    pub fn import(&mut self, proteins: &[Protein], interactions: &[Interaction]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute_batch(schema::DROP_SQL)?;
        tx.execute_batch(schema::SCHEMA_SQL)?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO protein (id, accession, name, taxid) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for p in proteins {
                stmt.execute(params![p.id, p.accession, p.name, p.taxid])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO interaction (id, protein_a_id, protein_b_id, confidence_value, \
                 pmid, interaction_type, detection_method) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for i in interactions {
                stmt.execute(params![
                    i.id,
                    i.protein_a_id,
                    i.protein_b_id,
                    i.confidence_value,
                    i.pmid,
                    i.interaction_type,
                    i.detection_method,
                ])?;
            }
        }

        tx.commit()?;
        info!("imported snapshot");
        Ok(())
    }

    /// Names of the currently materialized tables, in creation order.
    /// Empty before the first import.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog query fails.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for table in schema::TABLE_NAMES {
            if self.table_exists(table)? {
                names.push(table.to_string());
            }
        }
        Ok(names)
    }

    /// Column names of a materialized table.
    ///
    /// # Errors
    ///
    /// [`PpiError::NotFound`] when no such table is materialized.
    pub fn columns(&self, table: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_table_info(?1)")?;
        let rows = stmt.query_map(params![table], |row| row.get::<_, String>(0))?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row?);
        }

        if columns.is_empty() {
            return Err(PpiError::NotFound(format!("table '{table}'")));
        }
        Ok(columns)
    }

    /// Whether both normalized tables are present and readable.
    ///
    /// This is an explicit catalog check, not a probe-and-catch.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog query fails.
    pub fn exists(&self) -> Result<bool> {
        for table in schema::TABLE_NAMES {
            if !self.table_exists(table)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether the interaction table holds at least one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails; `Ok(false)` when the
    /// snapshot has not been imported at all.
    pub fn has_data(&self) -> Result<bool> {
        if !self.exists()? {
            return Ok(false);
        }
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM interaction", [], |row| row.get(0))?;
        Ok(count > 0)
    }

    fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![table],
            |row| row.get(0),
        )?;
        Ok(count == 1)
    }

    pub(crate) const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Path of the underlying storage file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.busy_timeout(DEFAULT_BUSY_TIMEOUT)?;
    Ok(())
}

/// Permanently delete the storage file.
///
/// # Errors
///
/// [`PpiError::NotFound`] when no storage file exists — dropping a store
/// that was never created is an error, not a no-op.
#[instrument(skip_all, fields(path = %config.db_path().display()))]
pub fn drop_database(config: &StoreConfig) -> Result<()> {
    let path = config.db_path();
    if !path.is_file() {
        return Err(PpiError::NotFound(format!(
            "storage file {}",
            path.display()
        )));
    }
    std::fs::remove_file(path)?;
    info!("dropped storage file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store, StoreConfig) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = StoreConfig::new(dir.path().join("store").join("ppi.sqlite3"));
        let store = Store::open(&config).expect("open store");
        (dir, store, config)
    }

    fn sample_tables() -> (Vec<Protein>, Vec<Interaction>) {
        let proteins = vec![
            Protein {
                id: 1,
                accession: "P1".to_string(),
                name: "ProtA".to_string(),
                taxid: "9606".to_string(),
            },
            Protein {
                id: 2,
                accession: "P2".to_string(),
                name: "ProtB".to_string(),
                taxid: "9606".to_string(),
            },
        ];
        let interactions = vec![Interaction {
            id: 1,
            protein_a_id: 1,
            protein_b_id: 2,
            confidence_value: 0.9,
            pmid: "111".to_string(),
            interaction_type: "physical".to_string(),
            detection_method: "Y2H".to_string(),
        }];
        (proteins, interactions)
    }

    #[test]
    fn open_creates_parent_directory() {
        let (_dir, store, config) = temp_store();
        assert!(config.db_path().is_file());
        assert_eq!(store.path(), config.db_path());
    }

    #[test]
    fn fresh_store_has_no_tables() {
        let (_dir, store, _config) = temp_store();
        assert!(store.table_names().expect("table names").is_empty());
        assert!(!store.exists().expect("exists check"));
        assert!(!store.has_data().expect("has_data check"));
    }

    #[test]
    fn import_materializes_both_tables() {
        let (_dir, mut store, _config) = temp_store();
        let (proteins, interactions) = sample_tables();
        store.import(&proteins, &interactions).expect("import");

        assert_eq!(
            store.table_names().expect("table names"),
            vec!["protein".to_string(), "interaction".to_string()]
        );
        assert!(store.exists().expect("exists check"));
        assert!(store.has_data().expect("has_data check"));
    }

    #[test]
    fn import_replaces_prior_snapshot() {
        let (_dir, mut store, _config) = temp_store();
        let (proteins, interactions) = sample_tables();
        store.import(&proteins, &interactions).expect("first import");
        store.import(&proteins[..1], &[]).expect("second import");

        let count: i64 = store
            .conn()
            .query_row("SELECT count(*) FROM protein", [], |row| row.get(0))
            .expect("count proteins");
        assert_eq!(count, 1);
        assert!(!store.has_data().expect("has_data check"));
    }

    #[test]
    fn columns_match_schema() {
        let (_dir, mut store, _config) = temp_store();
        let (proteins, interactions) = sample_tables();
        store.import(&proteins, &interactions).expect("import");

        assert_eq!(
            store.columns("protein").expect("protein columns"),
            vec!["id", "accession", "name", "taxid"]
        );
        assert_eq!(
            store.columns("interaction").expect("interaction columns"),
            vec![
                "id",
                "protein_a_id",
                "protein_b_id",
                "confidence_value",
                "pmid",
                "interaction_type",
                "detection_method"
            ]
        );
    }

    #[test]
    fn columns_of_unknown_table_is_not_found() {
        let (_dir, store, _config) = temp_store();
        let err = store.columns("nope").expect_err("unknown table");
        assert!(matches!(err, PpiError::NotFound(_)));
    }

    #[test]
    fn drop_database_removes_the_file() {
        let (_dir, store, config) = temp_store();
        drop(store);
        drop_database(&config).expect("drop store");
        assert!(!config.db_path().exists());
    }

    #[test]
    fn drop_database_without_file_is_not_found() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = StoreConfig::new(dir.path().join("never-created.sqlite3"));
        let err = drop_database(&config).expect_err("missing storage file");
        assert!(matches!(err, PpiError::NotFound(_)));
    }
}
