//! Material table loading and lookup.
//!
//! The table maps a material identifier to its strength limit in pascals. It is
//! built once (either from the built-in constants or from a CSV file chosen at
//! start-up) and never mutated afterwards.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{fuzzy_matches, Error, Result};

use super::constants::BUILTIN_MATERIALS;

static BUILTIN_TABLE: Lazy<MaterialTable> = Lazy::new(|| {
    let materials = BUILTIN_MATERIALS
        .iter()
        .map(|&(name, strength_pa)| {
            (
                normalize_name(name),
                Material {
                    name: name.to_string(),
                    strength_pa,
                },
            )
        })
        .collect();
    MaterialTable {
        materials,
        source: None,
    }
});

/// A single material and its strength limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Strength limit in pascals.
    pub strength_pa: f64,
}

impl Material {
    /// Validate material attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MaterialDataValidation {
                message: "material name must not be empty".to_string(),
            });
        }

        if !self.strength_pa.is_finite() || self.strength_pa <= 0.0 {
            return Err(Error::MaterialDataValidation {
                message: format!(
                    "strength_pa for material '{}' must be a finite positive number",
                    self.name
                ),
            });
        }

        Ok(())
    }
}

/// Immutable mapping from material identifier to strength limit.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    materials: HashMap<String, Material>,
    source: Option<PathBuf>,
}

impl MaterialTable {
    /// The built-in material catalog.
    pub fn builtin() -> &'static MaterialTable {
        &BUILTIN_TABLE
    }

    /// Load a material table from a CSV file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut table = Self::from_reader(file)?;
        table.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            materials = table.len(),
            "loaded material catalog"
        );
        Ok(table)
    }

    /// Load a material table from a reader (e.g., file or in-memory buffer).
    ///
    /// The CSV must contain a name column and a strength column; header
    /// spelling is matched loosely (`name`/`material`, `strength_pa`/`strength`/
    /// `strength_limit_pa`).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::MaterialDataValidation {
                message: format!("failed to read material catalog headers: {err}"),
            })?
            .clone();

        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };

        let normalized_headers: Vec<String> = headers.iter().map(&normalize).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("name", &["name", "material", "material_id", "id"]),
            (
                "strength_pa",
                &["strength_pa", "strength", "strength_limit_pa", "strength_limit"],
            ),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(i) = alts
                .iter()
                .find_map(|alt| normalized_headers.iter().position(|h| h.as_str() == *alt))
            {
                index_map.insert(*canon, i);
            }
        }

        let missing: Vec<&str> = ["name", "strength_pa"]
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();

        if !missing.is_empty() {
            return Err(Error::MaterialDataValidation {
                message: format!(
                    "material catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut materials = HashMap::new();

        // header is line 1
        for (offset, result) in csv_reader.records().enumerate() {
            let row = offset + 2;
            let record = result.map_err(|e| Error::MaterialDataValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> Option<String> {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(|s| s.to_string())
            };

            let name = get("name").unwrap_or_default();
            let strength_pa = get("strength_pa")
                .ok_or_else(|| Error::MaterialDataValidation {
                    message: format!("missing strength_pa for material '{name}' at row {row}"),
                })?
                .parse::<f64>()
                .map_err(|e| Error::MaterialDataValidation {
                    message: format!(
                        "invalid strength_pa for material '{name}' at row {row}: {e}"
                    ),
                })?;

            let material = Material { name, strength_pa };
            material.validate()?;

            let key = normalize_name(&material.name);
            if materials.contains_key(&key) {
                return Err(Error::DuplicateMaterial { name: key });
            }
            materials.insert(key, material);
        }

        if materials.is_empty() {
            return Err(Error::MaterialDataValidation {
                message: "material catalog contains no rows".to_string(),
            });
        }

        Ok(Self {
            materials,
            source: None,
        })
    }

    /// Strength limit in pascals for `material_id` (case-insensitive).
    pub fn strength_of(&self, material_id: &str) -> Result<f64> {
        self.get(material_id)
            .map(|m| m.strength_pa)
            .ok_or_else(|| Error::UnknownMaterial {
                name: material_id.to_string(),
                suggestions: self.fuzzy_matches(material_id, 3),
            })
    }

    /// Get a material by identifier (case-insensitive).
    pub fn get(&self, material_id: &str) -> Option<&Material> {
        self.materials.get(&normalize_name(material_id))
    }

    /// Whether the table knows `material_id`.
    pub fn contains(&self, material_id: &str) -> bool {
        self.get(material_id).is_some()
    }

    /// Materials whose names resemble `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(
            query,
            self.materials.values().map(|m| m.name.as_str()),
            limit,
        )
    }

    /// Get a sorted list of all material names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.materials.values().map(|m| m.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all materials sorted by name.
    pub fn materials_sorted(&self) -> Vec<&Material> {
        let mut materials: Vec<&Material> = self.materials.values().collect();
        materials.sort_by(|a, b| a.name.cmp(&b.name));
        materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Get the source path if the table was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize a material name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
