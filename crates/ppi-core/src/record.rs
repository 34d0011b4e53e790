//! Typed records for the PPI pipeline.
//!
//! The loader converts the raw TSV into [`RawInteractionRecord`] at the
//! boundary; everything downstream operates on these structs and the two
//! normalized entities, never on column-indexed rows.
//!
//! `taxid` and `pmid` are carried as text: IntAct exports put non-numeric
//! values in both columns (`-1`, `unassigned…`). `confidence_value` is the
//! only column the pipeline treats numerically.

use serde::{Deserialize, Serialize};

/// One raw row from the source TSV, both interaction partners inline.
///
/// Field names match the required source columns; extra columns in the file
/// are dropped at deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawInteractionRecord {
    pub a_uniprot_id: String,
    pub a_name: String,
    pub a_taxid: String,
    pub b_uniprot_id: String,
    pub b_name: String,
    pub b_taxid: String,
    pub confidence_value: f64,
    pub pmid: String,
    pub interaction_type: String,
    pub detection_method: String,
}

/// A normalized protein row.
///
/// `id` is assigned during normalization (1-based, accession-sorted order)
/// and is stable only within one import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Protein {
    pub id: i64,
    pub accession: String,
    pub name: String,
    pub taxid: String,
}

/// A normalized interaction row with resolved protein foreign keys.
///
/// `id` is assigned after sorting by `confidence_value` ascending. Parallel
/// interactions between the same protein pair keep separate rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub id: i64,
    pub protein_a_id: i64,
    pub protein_b_id: i64,
    pub confidence_value: f64,
    pub pmid: String,
    pub interaction_type: String,
    pub detection_method: String,
}

impl Interaction {
    /// True when both foreign keys point at the same protein.
    #[must_use]
    pub const fn is_self_interaction(&self) -> bool {
        self.protein_a_id == self.protein_b_id
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_interaction_detected() {
        let edge = Interaction {
            id: 1,
            protein_a_id: 3,
            protein_b_id: 3,
            confidence_value: 0.5,
            pmid: "111".to_string(),
            interaction_type: "physical".to_string(),
            detection_method: "Y2H".to_string(),
        };
        assert!(edge.is_self_interaction());
    }
}
