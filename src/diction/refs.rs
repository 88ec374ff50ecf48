//! Reference tables used to enrich decoded records.
//!
//! The decoder engine never reads these from a well-known location;
//! callers load (or build) a [`ReferenceTables`] value and pass it in.
//! The tables are immutable for the duration of a decode pass.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::diction::error::Result;

/// Geocoding and naming data for one institute code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstituteRecord {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// Geocoding and naming data for one country code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// An ordered abbreviation-expansion vocabulary.
///
/// Expansion is sequential substring replacement: pairs are applied in
/// insertion order, each over the result of the previous one. Order is
/// part of the vocabulary's meaning, so this is a list, not a map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary(Vec<(String, String)>);

impl Vocabulary {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Applies every substitution pair, in order, to `text`.
    pub fn expand(&self, text: &str) -> String {
        let mut expanded = text.to_string();
        for (from, to) in &self.0 {
            if expanded.contains(from.as_str()) {
                expanded = expanded.replace(from.as_str(), to);
            }
        }
        expanded
    }
}

/// Every lookup table the decoder families consume: institute and
/// country geocoding plus the three expansion vocabularies (institute
/// names, data head/unit terms, reaction-grammar terms).
///
/// All sections default to empty, so a partial JSON file (or
/// `ReferenceTables::default()`) decodes dictionaries without
/// enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    #[serde(default)]
    pub institutes: HashMap<String, InstituteRecord>,
    #[serde(default)]
    pub countries: HashMap<String, CountryRecord>,
    #[serde(default)]
    pub institute_vocab: Vocabulary,
    #[serde(default)]
    pub heads_vocab: Vocabulary,
    #[serde(default)]
    pub reaction_vocab: Vocabulary,
}

impl ReferenceTables {
    /// Load all tables from one JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not valid
    /// JSON for this shape.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let tables = serde_json::from_reader(BufReader::new(file))?;
        Ok(tables)
    }

    /// Look up an institute by its trimmed code.
    pub fn institute(&self, code: &str) -> Option<&InstituteRecord> {
        self.institutes.get(code)
    }

    /// Look up a country by its trimmed code.
    pub fn country(&self, code: &str) -> Option<&CountryRecord> {
        self.countries.get(code)
    }
}
