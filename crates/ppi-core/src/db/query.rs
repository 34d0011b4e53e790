//! Read-side query layer over the persisted snapshot.
//!
//! Filters are structured values compiled into a conditions vector with
//! positional parameters — filter values never get interpolated into the
//! SQL text. All functions return typed records, never raw rows, and fail
//! with [`PpiError::Query`] when no snapshot has been imported yet.

use rusqlite::params_from_iter;
use tracing::instrument;

use crate::db::Store;
use crate::error::{PpiError, Result};
use crate::record::{Interaction, Protein};

/// Filter criteria for the interaction table.
///
/// All fields are optional; set fields are combined with AND semantics.
/// `confidence_value_gte` is an inclusive lower bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionFilter {
    /// Exact publication identifier match.
    pub pmid: Option<String>,
    /// Exact detection method match.
    pub detection_method: Option<String>,
    /// Exact interaction type match.
    pub interaction_type: Option<String>,
    /// Keep rows with at least this confidence.
    pub confidence_value_gte: Option<f64>,
    /// Exclude rows where both endpoints are the same protein.
    pub disallow_self_interaction: bool,
}

impl InteractionFilter {
    /// True when no constraint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pmid.is_none()
            && self.detection_method.is_none()
            && self.interaction_type.is_none()
            && self.confidence_value_gte.is_none()
            && !self.disallow_self_interaction
    }
}

/// Interaction rows matching the filter, ordered by id.
///
/// # Errors
///
/// [`PpiError::Query`] when the store has never been imported; otherwise a
/// storage error if the query fails.
#[instrument(skip_all)]
pub fn filtered_interactions(
    store: &Store,
    filter: &InteractionFilter,
) -> Result<Vec<Interaction>> {
    ensure_imported(store)?;

    let mut conditions: Vec<String> = Vec::new();
    let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

    if let Some(ref pmid) = filter.pmid {
        param_values.push(Box::new(pmid.clone()));
        conditions.push(format!("pmid = ?{}", param_values.len()));
    }

    if let Some(ref method) = filter.detection_method {
        param_values.push(Box::new(method.clone()));
        conditions.push(format!("detection_method = ?{}", param_values.len()));
    }

    if let Some(ref itype) = filter.interaction_type {
        param_values.push(Box::new(itype.clone()));
        conditions.push(format!("interaction_type = ?{}", param_values.len()));
    }

    if let Some(threshold) = filter.confidence_value_gte {
        param_values.push(Box::new(threshold));
        conditions.push(format!("confidence_value >= ?{}", param_values.len()));
    }

    if filter.disallow_self_interaction {
        conditions.push("protein_a_id <> protein_b_id".to_string());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    let sql = format!(
        "SELECT id, protein_a_id, protein_b_id, confidence_value, \
         pmid, interaction_type, detection_method \
         FROM interaction{where_clause} ORDER BY id ASC"
    );

    let mut stmt = store.conn().prepare(&sql)?;

    let params_ref: Vec<&dyn rusqlite::types::ToSql> =
        param_values.iter().map(AsRef::as_ref).collect();

    let rows = stmt.query_map(params_from_iter(params_ref), |row| {
        Ok(Interaction {
            id: row.get(0)?,
            protein_a_id: row.get(1)?,
            protein_b_id: row.get(2)?,
            confidence_value: row.get(3)?,
            pmid: row.get(4)?,
            interaction_type: row.get(5)?,
            detection_method: row.get(6)?,
        })
    })?;

    let mut interactions = Vec::new();
    for row in rows {
        interactions.push(row?);
    }
    Ok(interactions)
}

/// The full protein registry, ordered by id.
///
/// # Errors
///
/// [`PpiError::Query`] when the store has never been imported.
pub fn all_proteins(store: &Store) -> Result<Vec<Protein>> {
    ensure_imported(store)?;

    let mut stmt = store
        .conn()
        .prepare("SELECT id, accession, name, taxid FROM protein ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Protein {
            id: row.get(0)?,
            accession: row.get(1)?,
            name: row.get(2)?,
            taxid: row.get(3)?,
        })
    })?;

    let mut proteins = Vec::new();
    for row in rows {
        proteins.push(row?);
    }
    Ok(proteins)
}

/// Interaction columns that support occurrence statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsColumn {
    Pmid,
    DetectionMethod,
    InteractionType,
    ConfidenceValue,
}

impl StatsColumn {
    const fn column_name(self) -> &'static str {
        match self {
            Self::Pmid => "pmid",
            Self::DetectionMethod => "detection_method",
            Self::InteractionType => "interaction_type",
            Self::ConfidenceValue => "confidence_value",
        }
    }
}

/// Occurrence count of one distinct value in a statistics column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Count interaction rows per distinct value of the given column,
/// most frequent first.
///
/// # Errors
///
/// [`PpiError::Query`] when the store has never been imported.
#[instrument(skip(store))]
pub fn interaction_counts_by(store: &Store, column: StatsColumn) -> Result<Vec<ValueCount>> {
    ensure_imported(store)?;

    // Column name comes from the enum above, never from user input.
    let sql = format!(
        "SELECT CAST({col} AS TEXT), count(*) FROM interaction \
         GROUP BY {col} ORDER BY count(*) DESC, CAST({col} AS TEXT) ASC",
        col = column.column_name()
    );

    let mut stmt = store.conn().prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(ValueCount {
            value: row.get(0)?,
            count: usize::try_from(row.get::<_, i64>(1)?).unwrap_or_default(),
        })
    })?;

    let mut counts = Vec::new();
    for row in rows {
        counts.push(row?);
    }
    Ok(counts)
}

fn ensure_imported(store: &Store) -> Result<()> {
    if store.exists()? {
        Ok(())
    } else {
        Err(PpiError::Query(format!(
            "no snapshot imported at {}",
            store.path().display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::record::fixtures::raw;
    use crate::{normalize, record::RawInteractionRecord};
    use tempfile::TempDir;

    fn records() -> Vec<RawInteractionRecord> {
        vec![
            raw(
                ("P1", "ProtA", "9606"),
                ("P2", "ProtB", "9606"),
                0.9,
                "111",
                "physical",
                "Y2H",
            ),
            raw(
                ("P2", "ProtB", "9606"),
                ("P3", "ProtC", "9606"),
                0.5,
                "222",
                "genetic",
                "PCA",
            ),
            // Self-interaction on P3.
            raw(
                ("P3", "ProtC", "9606"),
                ("P3", "ProtC", "9606"),
                0.7,
                "222",
                "physical",
                "Y2H",
            ),
        ]
    }

    fn imported_store() -> (TempDir, Store) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = StoreConfig::new(dir.path().join("ppi.sqlite3"));
        let mut store = Store::open(&config).expect("open store");

        let records = records();
        let proteins = normalize::build_proteins(&records);
        let interactions = normalize::build_interactions(&records, &proteins);
        store.import(&proteins, &interactions).expect("import");
        (dir, store)
    }

    #[test]
    fn no_filter_returns_everything() {
        let (_dir, store) = imported_store();
        let filter = InteractionFilter::default();
        assert!(filter.is_empty());

        let rows = filtered_interactions(&store, &filter).expect("query");
        assert_eq!(rows.len(), 3);
        // Stored in confidence-sorted id order.
        assert_eq!(rows[0].id, 1);
        assert!((rows[0].confidence_value - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn conjunction_of_filters() {
        let (_dir, store) = imported_store();
        let filter = InteractionFilter {
            pmid: Some("222".to_string()),
            interaction_type: Some("physical".to_string()),
            ..InteractionFilter::default()
        };

        let rows = filtered_interactions(&store, &filter).expect("query");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_self_interaction());
    }

    #[test]
    fn confidence_bound_is_inclusive() {
        let (_dir, store) = imported_store();
        let filter = InteractionFilter {
            confidence_value_gte: Some(0.7),
            ..InteractionFilter::default()
        };

        let rows = filtered_interactions(&store, &filter).expect("query");
        let confidences: Vec<f64> = rows.iter().map(|r| r.confidence_value).collect();
        assert_eq!(confidences.len(), 2);
        assert!(confidences.iter().all(|&c| c >= 0.7));
    }

    #[test]
    fn disallow_self_interaction_excludes_exactly_the_loop_row() {
        let (_dir, store) = imported_store();

        let all = filtered_interactions(&store, &InteractionFilter::default()).expect("query");
        let filter = InteractionFilter {
            disallow_self_interaction: true,
            ..InteractionFilter::default()
        };
        let rows = filtered_interactions(&store, &filter).expect("query");

        assert_eq!(rows.len(), all.len() - 1);
        assert!(rows.iter().all(|r| !r.is_self_interaction()));
    }

    #[test]
    fn query_before_import_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = StoreConfig::new(dir.path().join("empty.sqlite3"));
        let store = Store::open(&config).expect("open store");

        let err = filtered_interactions(&store, &InteractionFilter::default())
            .expect_err("no snapshot");
        assert!(matches!(err, PpiError::Query(_)));

        let err = all_proteins(&store).expect_err("no snapshot");
        assert!(matches!(err, PpiError::Query(_)));
    }

    #[test]
    fn all_proteins_returns_registry_in_id_order() {
        let (_dir, store) = imported_store();
        let proteins = all_proteins(&store).expect("query");
        assert_eq!(
            proteins
                .iter()
                .map(|p| (p.id, p.accession.as_str()))
                .collect::<Vec<_>>(),
            vec![(1, "P1"), (2, "P2"), (3, "P3")]
        );
    }

    #[test]
    fn stats_counts_sum_to_row_count() {
        let (_dir, store) = imported_store();
        let counts =
            interaction_counts_by(&store, StatsColumn::DetectionMethod).expect("stats");

        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 3);
        assert_eq!(counts[0].value, "Y2H");
        assert_eq!(counts[0].count, 2);
    }
}
