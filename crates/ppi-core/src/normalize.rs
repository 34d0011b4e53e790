//! Entity normalizer: raw interaction rows → protein registry + interaction
//! table.
//!
//! Both functions are pure: they never mutate their input and return freshly
//! allocated tables. ID assignment happens here and only here — `protein.id`
//! is the 1-based position in accession-sorted order, `interaction.id` the
//! 1-based position in confidence-sorted order. All sorts are stable, so
//! rows with an equal key keep their relative input order.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::record::{Interaction, Protein, RawInteractionRecord};

/// Derive the deduplicated protein registry from raw rows.
///
/// Partner-A triplets are taken first, then partner-B triplets, matching the
/// column order of the source. Rows are deduplicated on the exact
/// (accession, name, taxid) triplet: an accession that appears with
/// divergent metadata yields multiple registry rows sharing the accession
/// (malformed input — `build_interactions` resolves such an accession to
/// the lowest assigned id).
#[instrument(skip_all)]
#[must_use]
pub fn build_proteins(records: &[RawInteractionRecord]) -> Vec<Protein> {
    let mut rows: Vec<(&str, &str, &str)> = Vec::with_capacity(records.len() * 2);
    for r in records {
        rows.push((r.a_uniprot_id.as_str(), r.a_name.as_str(), r.a_taxid.as_str()));
    }
    for r in records {
        rows.push((r.b_uniprot_id.as_str(), r.b_name.as_str(), r.b_taxid.as_str()));
    }

    let mut seen: HashSet<(&str, &str, &str)> = HashSet::with_capacity(rows.len());
    rows.retain(|triplet| seen.insert(*triplet));

    // Stable sort: equal accessions keep concatenation order.
    rows.sort_by(|x, y| x.0.cmp(y.0));

    let proteins: Vec<Protein> = (1i64..)
        .zip(rows)
        .map(|(id, (accession, name, taxid))| Protein {
            id,
            accession: accession.to_string(),
            name: name.to_string(),
            taxid: taxid.to_string(),
        })
        .collect();

    debug!(proteins = proteins.len(), "built protein registry");
    proteins
}

/// Derive the interaction table with resolved protein foreign keys.
///
/// Accessions are resolved through the registry with inner-join semantics:
/// a row whose accession has no protein entry is dropped silently, not
/// raised. When the registry carries duplicate accessions (divergent
/// metadata), the lowest id wins.
#[instrument(skip_all)]
#[must_use]
pub fn build_interactions(
    records: &[RawInteractionRecord],
    proteins: &[Protein],
) -> Vec<Interaction> {
    let mut index: HashMap<&str, i64> = HashMap::with_capacity(proteins.len());
    for p in proteins {
        // Registry is in ascending id order, so the first insert is the
        // lowest id for that accession.
        index.entry(p.accession.as_str()).or_insert(p.id);
    }

    let mut edges: Vec<Interaction> = Vec::with_capacity(records.len());
    for r in records {
        let (Some(&protein_a_id), Some(&protein_b_id)) = (
            index.get(r.a_uniprot_id.as_str()),
            index.get(r.b_uniprot_id.as_str()),
        ) else {
            continue;
        };

        edges.push(Interaction {
            id: 0,
            protein_a_id,
            protein_b_id,
            confidence_value: r.confidence_value,
            pmid: r.pmid.clone(),
            interaction_type: r.interaction_type.clone(),
            detection_method: r.detection_method.clone(),
        });
    }

    // Stable sort: ties on confidence keep input order.
    edges.sort_by(|x, y| x.confidence_value.total_cmp(&y.confidence_value));
    for (id, edge) in (1i64..).zip(edges.iter_mut()) {
        edge.id = id;
    }

    debug!(
        interactions = edges.len(),
        dropped = records.len() - edges.len(),
        "built interaction table"
    );
    edges
}
