//! Read-only filters over an assembled catalog.
//!
//! Downstream parsers of experimental-data files use these to classify
//! data-table columns by heading tag and to resolve unit conversion
//! factors. Pure lookups, no state.

use crate::diction::models::DictionaryCatalog;

const HEADINGS_DICTION: u32 = 24;
const UNITS_DICTION: u32 = 25;

/// Headings matching these substrings describe monitor/normalization
/// columns, not the measured axis itself.
const AXIS_EXCLUSIONS: &[&str] = &["-DN", "-NM"];

impl DictionaryCatalog {
    /// Active headings of Diction 24 whose tag equals `tag`, skipping
    /// codes that contain any of `exclusions`.
    pub fn heads_with_tag(&self, tag: &str, exclusions: &[&str]) -> Vec<&str> {
        let headings = match self.dictionaries.get(&HEADINGS_DICTION) {
            Some(headings) => headings,
            None => return Vec::new(),
        };
        headings
            .codes
            .iter()
            .filter(|(code, record)| {
                record.active
                    && record.additional_code.as_deref() == Some(tag)
                    && !exclusions.iter().any(|excluded| code.contains(excluded))
            })
            .map(|(code, _)| code.as_str())
            .collect()
    }

    /// Incident-energy headings (x axis).
    pub fn incident_energy_heads(&self) -> Vec<&str> {
        self.heads_with_tag("A", AXIS_EXCLUSIONS)
    }

    /// Incident-energy uncertainty headings (dx).
    pub fn incident_energy_error_heads(&self) -> Vec<&str> {
        self.heads_with_tag("B", AXIS_EXCLUSIONS)
    }

    /// Measured-value headings (y axis).
    pub fn data_heads(&self) -> Vec<&str> {
        self.heads_with_tag("DATA", AXIS_EXCLUSIONS)
    }

    /// Measured-value uncertainty headings (dy).
    pub fn data_error_heads(&self) -> Vec<&str> {
        self.heads_with_tag("DATA_E", AXIS_EXCLUSIONS)
    }

    /// Outgoing-energy headings.
    pub fn outgoing_energy_heads(&self) -> Vec<&str> {
        self.heads_with_tag("E", &[])
    }

    /// Level headings.
    pub fn level_heads(&self) -> Vec<&str> {
        self.heads_with_tag("L", &[])
    }

    /// Angle headings.
    pub fn angle_heads(&self) -> Vec<&str> {
        self.heads_with_tag("G", &[])
    }

    /// Mass headings.
    pub fn mass_heads(&self) -> Vec<&str> {
        self.heads_with_tag("J", &[])
    }

    /// Element headings.
    pub fn element_heads(&self) -> Vec<&str> {
        self.heads_with_tag("I", &[])
    }

    /// Unit conversion factor for a Diction 25 code.
    ///
    /// An empty stored factor means "no conversion" and reads as 1.0.
    /// Returns `None` for unknown codes and for factors that do not
    /// parse as a number.
    pub fn unit_factor(&self, unit: &str) -> Option<f64> {
        let units = self.dictionaries.get(&UNITS_DICTION)?;
        let record = units.codes.get(unit)?;
        let factor = record.unit_conversion_factor.as_deref().unwrap_or("");
        if factor.is_empty() {
            return Some(1.0);
        }
        factor.parse().ok()
    }

    /// The description of `code` in dictionary `number`, or `code`
    /// itself when it is not listed.
    pub fn describe<'a>(&'a self, number: u32, code: &'a str) -> &'a str {
        match self
            .dictionaries
            .get(&number)
            .and_then(|dictionary| dictionary.codes.get(code))
        {
            Some(record) => &record.description,
            None => code,
        }
    }
}
