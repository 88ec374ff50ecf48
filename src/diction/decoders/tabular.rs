//! Banner-prefixed table families: data headings (24), data units (25),
//! data libraries (144) and reaction types (213).
//!
//! Each block opens with a fixed-height banner (column rulers and
//! legend text) before the first record; the decoders start at the
//! family's known record offset. A record line begins with an
//! alphanumeric character; anything else between records is dropped.

use crate::diction::decoders::is_noise_line;
use crate::diction::models::{CodeMap, CodeRecord, RawBlock};
use crate::diction::refs::ReferenceTables;
use crate::diction::utils;

fn is_record_line(line: &str) -> bool {
    !is_noise_line(line) && utils::col(line, 0).is_ascii_alphanumeric()
}

/// Diction 24: data headings.
///
/// ```text
/// column   0         11                                       65 66 ... 79
///          |heading   |description                             |tag|      |flag
/// ```
///
/// Headings spelled `DATA*` get a forced tag: `DATA` for plain values,
/// `DATA_E` when the heading names an error column (`ERR` in the code).
pub fn decode_headings(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    let mut codes = CodeMap::new();
    for line in block.data_lines(11) {
        if !is_record_line(line) {
            continue;
        }
        let code = utils::field_rtrim(line, 0, 11).to_string();
        let description = tables.heads_vocab.expand(utils::field_rtrim(line, 11, 65));
        let mut tag = utils::field_rtrim(line, 65, 66).to_string();
        if code.starts_with("DATA") {
            tag = if code.contains("ERR") { "DATA_E" } else { "DATA" }.to_string();
        }
        let active = utils::field(line, 79, 80) != "O";
        let record = CodeRecord {
            additional_code: Some(tag),
            ..CodeRecord::new(description, active)
        };
        codes.insert(code, record);
    }
    codes
}

/// Diction 25: data units.
///
/// ```text
/// column   0         11                              44        55         66
///          |unit      |description                   |unit class|factor    |
/// ```
///
/// The conversion factor is stored as the raw trimmed string; turning
/// it into a number is the accessor's job.
pub fn decode_units(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    let mut codes = CodeMap::new();
    for line in block.data_lines(1) {
        if !is_record_line(line) {
            continue;
        }
        let code = utils::field_rtrim(line, 0, 11).to_string();
        let description = tables.heads_vocab.expand(utils::field_rtrim(line, 11, 44));
        let tag = utils::field_rtrim(line, 44, 55).to_string();
        let factor = utils::field_trim(line, 55, 66).to_string();
        let active = utils::field(line, 79, 80) != "O";
        let record = CodeRecord {
            additional_code: Some(tag),
            unit_conversion_factor: Some(factor),
            ..CodeRecord::new(description, active)
        };
        codes.insert(code, record);
    }
    codes
}

/// Diction 144: data libraries. The code field is 15 columns wide here.
pub fn decode_libraries(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    let mut codes = CodeMap::new();
    for line in block.data_lines(1) {
        if !is_record_line(line) {
            continue;
        }
        let code = utils::field_rtrim(line, 0, 15).to_string();
        let description = tables.heads_vocab.expand(utils::field_rtrim(line, 15, 66));
        let active = utils::field(line, 79, 80) != "O";
        codes.insert(code, CodeRecord::new(description, active));
    }
    codes
}

/// Diction 213: reaction types.
///
/// ```text
/// column   0         11   16  20                                66
///          |type      |tag |alt|description                     |
/// ```
pub fn decode_reaction_types(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    let mut codes = CodeMap::new();
    for line in block.data_lines(1) {
        if !is_record_line(line) {
            continue;
        }
        let code = utils::field_rtrim(line, 0, 11).to_string();
        let tag = utils::field_rtrim(line, 11, 16).to_string();
        let alt_code = utils::field_rtrim(line, 16, 20).to_string();
        let description = tables.heads_vocab.expand(utils::field_rtrim(line, 20, 66));
        let active = utils::field(line, 79, 80) != "O";
        let record = CodeRecord {
            additional_code: Some(tag),
            x4code3: Some(alt_code),
            ..CodeRecord::new(description, active)
        };
        codes.insert(code, record);
    }
    codes
}
