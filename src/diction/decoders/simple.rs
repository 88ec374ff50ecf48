//! Flat single-line record families.
//!
//! These dictionaries share one layout:
//!
//! ```text
//! column   0         11                                         66  ...  79
//!          |X4 code  |description                                |       |flag
//! ```
//!
//! A record starts only on a line whose first column is non-space;
//! indented lines carry no data for these families and are dropped.
//! Institutes (3), journals (5) and reports (6) extend the layout with
//! reference-table joins.

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use crate::diction::decoders::is_noise_line;
use crate::diction::models::{CodeMap, CodeRecord, RawBlock};
use crate::diction::refs::{ReferenceTables, Vocabulary};
use crate::diction::utils;

/// Compiled pattern for a description wrapped in literal parentheses.
///
/// Anchored at the field start; the capture runs to the last closing
/// parenthesis in the field.
static PAREN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn paren_regex() -> &'static Regex {
    PAREN_PATTERN.get_or_init(|| Regex::new(r"^\((.*)\)").expect("Invalid parentheses pattern"))
}

/// Record lines of a flat block: body lines that are neither noise nor
/// indented continuations.
fn record_lines(block: &RawBlock) -> impl Iterator<Item = &String> {
    block
        .data_lines(0)
        .iter()
        .filter(|line| !is_noise_line(line) && !line.starts_with(' '))
}

fn decode_flat(block: &RawBlock, vocab: Option<&Vocabulary>) -> CodeMap {
    let mut codes = CodeMap::new();
    for line in record_lines(block) {
        let code = utils::field_rtrim(line, 0, 11).to_string();
        let mut description = utils::field_rtrim(line, 11, 66).to_string();
        if let Some(vocab) = vocab {
            description = vocab.expand(&description);
        }
        let active = utils::field(line, 79, 80) != "O";
        codes.insert(code, CodeRecord::new(description, active));
    }
    codes
}

/// Plain code/description dictionaries (1, 30, 31, 32, 34, 35, 38, 43).
pub fn decode_plain(block: &RawBlock, _tables: &ReferenceTables) -> CodeMap {
    decode_flat(block, None)
}

/// Flat dictionaries whose descriptions use the institute-name
/// abbreviation vocabulary (2, 4, 7, 8, 15-23, 33, 207, 209).
pub fn decode_expanded(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    decode_flat(block, Some(&tables.institute_vocab))
}

/// Diction 3: institutes.
///
/// A seven-character code whose columns [1:4) repeat at [4:7) is a
/// country-level entry; everything else names one institute. Country
/// entries take coordinates from the country table and are dropped when
/// the country is unknown. Institute entries take coordinates and an
/// address from the institute table; an unknown institute keeps its
/// record with those fields absent.
pub fn decode_institutes(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    let mut codes = CodeMap::new();
    for line in record_lines(block) {
        let code = utils::field_rtrim(line, 0, 11).to_string();
        let description = tables
            .institute_vocab
            .expand(utils::field_rtrim(line, 11, 66));
        let active = utils::field(line, 79, 80) != "O";
        let mut record = CodeRecord::new(description, active);

        let country_level = utils::field_rtrim(&code, 1, 4) == utils::field(&code, 4, 7);
        if country_level {
            let country_code = utils::field_rtrim(&code, 0, 4);
            match tables.country(country_code) {
                Some(country) => {
                    record.latitude = country.lat;
                    record.longitude = country.lng;
                }
                None => {
                    debug!("dropping institute code {:?}: unknown country", code);
                    continue;
                }
            }
        } else if let Some(institute) = tables.institute(&code) {
            record.latitude = institute.lat;
            record.longitude = institute.lng;
            record.address = institute.address.clone();
        }

        codes.insert(code, record);
    }
    codes
}

/// Diction 5: journals.
///
/// The description is parenthesized inside [11:66); columns [62:66)
/// carry the published-country code. Records without a parenthesized
/// description or with an unrecognized country code are omitted
/// entirely.
pub fn decode_journals(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    let mut codes = CodeMap::new();
    for line in record_lines(block) {
        let code = utils::field_rtrim(line, 0, 11).to_string();
        let raw = utils::field(line, 11, 66);
        let description = match paren_regex().captures(raw) {
            Some(captures) => captures[1].to_string(),
            None => {
                debug!("dropping journal code {:?}: unparenthesized description", code);
                continue;
            }
        };
        let description = tables.institute_vocab.expand(&description);
        let active = utils::field(line, 79, 80) != "O";

        let country_code = utils::field_trim(line, 62, 66);
        let country = match tables.country(country_code) {
            Some(country) => country,
            None => {
                debug!(
                    "dropping journal code {:?}: unknown country {:?}",
                    code, country_code
                );
                continue;
            }
        };

        let record = CodeRecord {
            published_country_code: Some(country_code.to_string()),
            published_country_name: Some(country.name.clone()),
            ..CodeRecord::new(description, active)
        };
        codes.insert(code, record);
    }
    codes
}

/// Diction 6: reports.
///
/// The tail of the description field is a fixed-width publisher code,
/// columns [59:66), resolved against the institute table. Records with
/// an unresolved publisher are omitted entirely.
pub fn decode_reports(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    let mut codes = CodeMap::new();
    for line in record_lines(block) {
        let code = utils::field_rtrim(line, 0, 11).to_string();
        let full = utils::field_rtrim(line, 11, 66);
        let cut = full.len().saturating_sub(7);
        let description = full[..cut].trim_end().to_string();
        let active = utils::field(line, 79, 80) != "O";

        let publisher = utils::field_trim(line, 59, 66);
        let institute = match tables.institute(publisher) {
            Some(institute) => institute,
            None => {
                debug!(
                    "dropping report code {:?}: unknown publisher {:?}",
                    code, publisher
                );
                continue;
            }
        };

        let record = CodeRecord {
            publisher: Some(publisher.to_string()),
            publisher_name: Some(institute.name.clone()),
            ..CodeRecord::new(description, active)
        };
        codes.insert(code, record);
    }
    codes
}
