//! Embedded tryout catalog.
//!
//! The catalog ships inside the binary as a YAML resource parsed on first
//! access. It is process-wide read-only state: searches annotate copies of
//! these records and never mutate the shared slice.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single tryout event ("peneira") as published by a club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TryoutRecord {
    pub id: u32,
    pub clube: String,
    /// Age group (e.g. `"Sub-17"`) or `"Profissional"`.
    pub categoria: String,
    /// Event date in `DD/MM/YYYY` display form.
    pub data: String,
    pub horario: String,
    /// Venue text, e.g. `"CT Rei Pelé - Santos, SP"`.
    pub local: String,
    /// City/state text used for display, e.g. `"Santos, SP"`.
    pub endereco: String,
    pub coordinates: Coordinates,
    pub contato: String,
    pub email: String,
    pub descricao: String,
    pub requisitos: Vec<String>,
}

/// Errors produced while parsing or validating a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("catalog validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tryouts: Vec<TryoutRecord>,
}

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.yaml");

static CATALOG: LazyLock<Vec<TryoutRecord>> =
    LazyLock::new(|| load_catalog(EMBEDDED_CATALOG).expect("embedded catalog is valid"));

/// Returns the embedded tryout catalog.
///
/// Parsed and validated once; a defect in the embedded resource is a build
/// defect and panics on first access rather than surfacing as a runtime
/// error path.
#[must_use]
pub fn catalog() -> &'static [TryoutRecord] {
    &CATALOG
}

/// Parse and validate a catalog YAML document.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the document is not valid YAML for the
/// expected shape, or [`CatalogError::Validation`] if the records fail the
/// catalog invariants (non-empty, unique ids, finite coordinates).
pub fn load_catalog(yaml: &str) -> Result<Vec<TryoutRecord>, CatalogError> {
    let file: CatalogFile = serde_yaml::from_str(yaml)?;
    validate_catalog(&file.tryouts)?;
    Ok(file.tryouts)
}

fn validate_catalog(records: &[TryoutRecord]) -> Result<(), CatalogError> {
    if records.is_empty() {
        return Err(CatalogError::Validation(
            "catalog must contain at least one tryout".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for record in records {
        if record.clube.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "tryout {} has an empty club name",
                record.id
            )));
        }

        if !record.coordinates.lat.is_finite() || !record.coordinates.lng.is_finite() {
            return Err(CatalogError::Validation(format!(
                "tryout {} ({}) has non-finite coordinates",
                record.id, record.clube
            )));
        }

        if !seen_ids.insert(record.id) {
            return Err(CatalogError::Validation(format!(
                "duplicate tryout id: {}",
                record.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
