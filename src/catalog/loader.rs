//! Catalog loading and validation.
//!
//! The document is decoded in two steps: the envelope strictly, then each
//! entry individually from its raw `Value`. One malformed entry is dropped
//! with a warning instead of poisoning the whole document. The load fails
//! only on envelope problems, an unsupported version, duplicate ids, or a
//! non-empty catalog that loses every entry.

use super::entry::CatalogEntry;
use crate::core::EngineError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

const MINIMUM_VERSION: (u64, u64, u64) = (1, 0, 0);

#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    version: String,
    #[serde(default)]
    generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    source_repo: Option<String>,
    architectures: Vec<serde_json::Value>,
}

/// An entry the loader refused, with the decode error.
#[derive(Debug, Clone)]
pub struct DroppedEntry {
    pub architecture_id: Option<String>,
    pub reason: String,
}

/// What happened during a load: kept/dropped counts for the `validate`
/// command and for logging.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub dropped: Vec<DroppedEntry>,
}

/// Indexed, validated, immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub version: String,
    pub generated_at: Option<DateTime<Utc>>,
    pub source_repo: Option<String>,
    entries: Vec<CatalogEntry>,
    index: BTreeMap<String, usize>,
}

impl Catalog {
    /// Entries in their stable catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, architecture_id: &str) -> Option<&CatalogEntry> {
        self.index.get(architecture_id).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a catalog directly from entries, bypassing the document layer.
    /// Used by tests and benches; still enforces unique ids.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, EngineError> {
        let mut index = BTreeMap::new();
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.architecture_id.clone(), i).is_some() {
                return Err(EngineError::CatalogDuplicateId(entry.architecture_id.clone()));
            }
        }
        Ok(Self {
            version: "1.0.0".to_string(),
            generated_at: None,
            source_repo: None,
            entries,
            index,
        })
    }
}

fn parse_version(version: &str) -> Result<(u64, u64, u64), EngineError> {
    let mut parts = version.trim().splitn(3, '.');
    let mut next = |name: &str| -> Result<u64, EngineError> {
        parts
            .next()
            .and_then(|p| p.parse::<u64>().ok())
            .ok_or_else(|| {
                EngineError::CatalogInvalid(format!(
                    "version {version:?} is not a MAJOR.MINOR.PATCH string ({name} component)"
                ))
            })
    };
    let major = next("major")?;
    let minor = next("minor")?;
    // A two-component version like "1.0" is tolerated; patch defaults to 0.
    let patch = parts.next().map_or(Ok(0), |p| {
        p.parse::<u64>().map_err(|_| {
            EngineError::CatalogInvalid(format!("version {version:?} has a non-numeric patch component"))
        })
    })?;
    Ok((major, minor, patch))
}

fn entry_id_of(value: &serde_json::Value) -> Option<String> {
    value
        .get("architecture_id")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Load and validate a catalog document from its JSON text.
pub fn load_catalog(contents: &str) -> Result<(Catalog, LoadReport), EngineError> {
    let envelope: CatalogEnvelope = serde_json::from_str(contents)
        .map_err(|e| EngineError::CatalogInvalid(format!("catalog document does not match schema: {e}")))?;

    let version = parse_version(&envelope.version)?;
    if version < MINIMUM_VERSION {
        return Err(EngineError::CatalogVersionUnsupported {
            found: envelope.version,
            minimum: "1.0.0".to_string(),
        });
    }

    let raw_count = envelope.architectures.len();
    let mut entries = Vec::with_capacity(raw_count);
    let mut seen_ids: HashSet<String> = HashSet::with_capacity(raw_count);
    let mut report = LoadReport::default();

    for value in envelope.architectures {
        let id = entry_id_of(&value);
        match serde_json::from_value::<CatalogEntry>(value) {
            Ok(entry) => {
                if !seen_ids.insert(entry.architecture_id.clone()) {
                    return Err(EngineError::CatalogDuplicateId(entry.architecture_id));
                }
                entries.push(entry);
            }
            Err(e) => {
                warn!(
                    architecture_id = id.as_deref().unwrap_or("<missing>"),
                    "dropping catalog entry: {e}"
                );
                report.dropped.push(DroppedEntry {
                    architecture_id: id,
                    reason: e.to_string(),
                });
            }
        }
    }

    if entries.is_empty() && raw_count > 0 {
        return Err(EngineError::CatalogInvalid(format!(
            "all {raw_count} catalog entries were rejected during validation"
        )));
    }

    report.loaded = entries.len();
    let mut catalog = Catalog::from_entries(entries)?;
    catalog.version = envelope.version;
    catalog.generated_at = envelope.generated_at;
    catalog.source_repo = envelope.source_repo;
    Ok((catalog, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry_value(id: &str) -> serde_json::Value {
        json!({
            "architecture_id": id,
            "name": format!("Entry {id}"),
            "family": "paas",
            "workload_domain": "web",
            "security_level": "basic",
            "operating_model_required": "traditional_it",
            "cost_profile": "balanced",
            "complexity": "low",
            "catalog_quality": "curated"
        })
    }

    fn document(version: &str, architectures: Vec<serde_json::Value>) -> String {
        json!({
            "version": version,
            "generated_at": "2026-03-01T00:00:00Z",
            "source_repo": "example/catalog",
            "architectures": architectures,
        })
        .to_string()
    }

    #[test]
    fn loads_valid_catalog() {
        let doc = document("1.2.0", vec![entry_value("a"), entry_value("b")]);
        let (catalog, report) = load_catalog(&doc).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(report.loaded, 2);
        assert!(report.dropped.is_empty());
        assert!(catalog.get("a").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn rejects_old_version() {
        let doc = document("0.9.0", vec![entry_value("a")]);
        let err = load_catalog(&doc).unwrap_err();
        assert!(matches!(err, EngineError::CatalogVersionUnsupported { .. }));
    }

    #[test]
    fn tolerates_two_component_version() {
        let doc = document("1.0", vec![entry_value("a")]);
        assert!(load_catalog(&doc).is_ok());
    }

    #[test]
    fn rejects_garbage_version() {
        let doc = document("latest", vec![entry_value("a")]);
        assert!(matches!(load_catalog(&doc).unwrap_err(), EngineError::CatalogInvalid(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doc = document("1.0.0", vec![entry_value("a"), entry_value("a")]);
        let err = load_catalog(&doc).unwrap_err();
        assert!(matches!(err, EngineError::CatalogDuplicateId(id) if id == "a"));
    }

    #[test]
    fn drops_entry_with_unknown_enum_value() {
        let mut bad = entry_value("bad");
        bad["security_level"] = json!("quantum");
        let doc = document("1.0.0", vec![entry_value("good"), bad]);
        let (catalog, report) = load_catalog(&doc).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(report.dropped.len(), 1);
        assert_eq!(report.dropped[0].architecture_id.as_deref(), Some("bad"));
    }

    #[test]
    fn fails_when_every_entry_dropped() {
        let mut bad = entry_value("bad");
        bad["family"] = json!("spaceship");
        let doc = document("1.0.0", vec![bad]);
        assert!(matches!(load_catalog(&doc).unwrap_err(), EngineError::CatalogInvalid(_)));
    }

    #[test]
    fn empty_architecture_list_loads() {
        let doc = document("1.0.0", vec![]);
        let (catalog, _) = load_catalog(&doc).unwrap();
        assert!(catalog.is_empty());
    }
}
