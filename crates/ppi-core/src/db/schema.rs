//! Canonical SQLite schema for the two normalized tables.
//!
//! Each import run recreates both tables from scratch (full replace), so
//! there is no migration ladder: the schema below is always the current one.
//!
//! - `protein` holds the deduplicated registry, id assigned in
//!   accession-sorted order.
//! - `interaction` holds one row per reported pair, foreign-keyed into
//!   `protein`; self-interactions (`protein_a_id = protein_b_id`) are legal.

/// Table names materialized by an import, in creation order.
pub const TABLE_NAMES: [&str; 2] = ["protein", "interaction"];

/// DDL applied inside the import transaction after dropping prior tables.
pub const SCHEMA_SQL: &str = r"
CREATE TABLE protein (
    id INTEGER PRIMARY KEY,
    accession TEXT NOT NULL,
    name TEXT NOT NULL,
    taxid TEXT NOT NULL
);

CREATE TABLE interaction (
    id INTEGER PRIMARY KEY,
    protein_a_id INTEGER NOT NULL REFERENCES protein(id),
    protein_b_id INTEGER NOT NULL REFERENCES protein(id),
    confidence_value REAL NOT NULL,
    pmid TEXT NOT NULL,
    interaction_type TEXT NOT NULL,
    detection_method TEXT NOT NULL
);

CREATE INDEX idx_interaction_confidence ON interaction(confidence_value);
CREATE INDEX idx_interaction_endpoints ON interaction(protein_a_id, protein_b_id);
";

/// Drops any prior snapshot. Interaction goes first because of the foreign
/// keys into protein.
pub const DROP_SQL: &str = r"
DROP TABLE IF EXISTS interaction;
DROP TABLE IF EXISTS protein;
";
