use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use montre_model::{Catalog, PartOption, Pricing, Rule, Slot};

use crate::error::CatalogError;

const CATALOG_FILE: &str = "catalog.json";
const RULES_FILE: &str = "rules.json";
const PRICING_FILE: &str = "pricing.json";
const REGIONS_FILE: &str = "regions.json";

/// On-disk shape of `catalog.json`: slot name -> option list.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    slots: BTreeMap<String, Vec<PartOption>>,
}

/// One entry of the optional `regions.json` display list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub code: String,
    pub name: String,
}

/// A fully loaded configurator bundle: catalog, rules and pricing, plus the
/// optional region display list. Static for the lifetime of the engine.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub catalog: Catalog,
    pub rules: Vec<Rule>,
    pub pricing: Pricing,
    pub regions: Vec<RegionEntry>,
}

impl Bundle {
    /// Load and validate a bundle directory. Duplicate option ids and
    /// unknown slot names are fatal; `rules.json` and `regions.json` are
    /// optional and default to empty.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let catalog = load_catalog(&dir.join(CATALOG_FILE))?;
        let pricing = read_json(&dir.join(PRICING_FILE))?;
        let rules = match read_optional_json::<Vec<Rule>>(&dir.join(RULES_FILE))? {
            Some(rules) => rules,
            None => Vec::new(),
        };
        let regions = match read_optional_json::<Vec<RegionEntry>>(&dir.join(REGIONS_FILE))? {
            Some(regions) => regions,
            None => Vec::new(),
        };
        debug!(
            options = catalog.slots.values().map(Vec::len).sum::<usize>(),
            rules = rules.len(),
            regions = regions.len(),
            "loaded configurator bundle"
        );
        Ok(Self {
            catalog,
            rules,
            pricing,
            regions,
        })
    }
}

fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = read_json(path)?;
    let mut slots: BTreeMap<Slot, Vec<PartOption>> = BTreeMap::new();
    for (name, options) in file.slots {
        let slot: Slot = name.parse().map_err(|_| CatalogError::UnknownSlot {
            path: path.to_path_buf(),
            name: name.clone(),
        })?;
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for option in &options {
            if !seen.insert(option.id.as_str()) {
                return Err(CatalogError::DuplicateOption {
                    path: path.to_path_buf(),
                    slot,
                    id: option.id.clone(),
                });
            }
        }
        slots.insert(slot, options);
    }
    Ok(Catalog::new(slots).normalize())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    if !path.is_file() {
        return Err(CatalogError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::io(path, source))?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::json(path, source))
}

fn read_optional_json<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, CatalogError> {
    if !path.is_file() {
        return Ok(None);
    }
    read_json(path).map(Some)
}

/// Resolve a bundle path: a directory is used as-is, a `catalog.json` path
/// is shorthand for its parent directory.
pub fn bundle_dir(path: &Path) -> PathBuf {
    if path.is_file() {
        path.parent().unwrap_or(Path::new(".")).to_path_buf()
    } else {
        path.to_path_buf()
    }
}
