//! Core data structures for the parsed dictionary catalog.
//!
//! This module defines the fundamental types used throughout the library:
//! - Raw per-diction line blocks cut out of a trans file
//! - The Diction 950 directory of dictionary numbers
//! - Decoded code records and the assembled catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The Diction 950 directory: dictionary number to description and
/// activity flag, as decoded from the distinguished directory block.
pub type DictionaryDirectory = BTreeMap<u32, DirectoryEntry>;

/// Decoded codes of one sub-dictionary, keyed by X4 code.
pub type CodeMap = BTreeMap<String, CodeRecord>;

/// The raw lines of one DICTION block.
///
/// Line 0 is the DICTION marker itself; the remaining lines are the
/// block body exactly as they appear in the trans file. For Diction 950
/// the trailing ENDDICTION line is part of the body as well, since that
/// terminator also ends file-level processing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    pub number: u32,
    pub lines: Vec<String>,
}

impl RawBlock {
    /// Returns the body lines starting at `start`, counted from the
    /// first line after the DICTION marker.
    ///
    /// Several dictionaries open with a fixed-height banner (column
    /// rulers, legend text) before the first record line; `start` skips
    /// past it. Out-of-range starts yield an empty slice.
    pub fn data_lines(&self, start: usize) -> &[String] {
        let begin = (start + 1).min(self.lines.len());
        &self.lines[begin..]
    }
}

/// One entry of the Diction 950 directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub description: String,
    pub active: bool,
}

/// The decoded unit of meaning, keyed by a short X4 code.
///
/// `description` and `active` are common to every dictionary; the
/// optional fields are filled by specific decoder families and stay
/// absent (not null) everywhere else:
/// - `additional_code`: secondary classification tag (24, 25, 213, 236)
/// - `x4code3`: tertiary code (213)
/// - `unit_conversion_factor`: raw factor string (25); converting it to
///   a number is the accessor's job, not the decoder's
/// - `latitude`/`longitude`/`address`: geocoding (3)
/// - `published_country_code`/`published_country_name`: journals (5)
/// - `publisher`/`publisher_name`: reports (6)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeRecord {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x4code3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_conversion_factor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_country_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    pub active: bool,
}

impl CodeRecord {
    /// A record with the base fields set and every optional field absent.
    pub fn new(description: impl Into<String>, active: bool) -> Self {
        Self {
            description: description.into(),
            additional_code: None,
            x4code3: None,
            unit_conversion_factor: None,
            latitude: None,
            longitude: None,
            address: None,
            published_country_code: None,
            published_country_name: None,
            publisher: None,
            publisher_name: None,
            active,
        }
    }
}

/// One decoded sub-dictionary: its display name from the Diction 950
/// directory plus its code records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubDictionary {
    pub name: String,
    pub codes: CodeMap,
}

/// The final persisted artifact: the directory plus every successfully
/// decoded sub-dictionary. Downstream consumers treat it as a pure
/// lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryCatalog {
    pub definitions: DictionaryDirectory,
    pub dictionaries: BTreeMap<u32, SubDictionary>,
}
