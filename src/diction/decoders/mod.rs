//! # Per-Diction Decoder Dispatch
//!
//! This module is the entry point for decoding one raw DICTION block.
//! It holds the registry mapping dictionary numbers to their family
//! decoders and the skip predicate shared by every family.
//!
//! # Module Organization
//! - [`simple`]: flat one-line records (institutes, journals, reports
//!   and the plain code/description dictionaries)
//! - [`tabular`]: banner-prefixed tables (data headings, units,
//!   libraries, reaction types)
//! - [`reaction`]: the multi-line reaction-grammar dictionary

use log::{debug, warn};

use crate::diction::models::{CodeMap, DictionaryDirectory, RawBlock, SubDictionary};
use crate::diction::refs::ReferenceTables;
use crate::diction::utils;

pub mod reaction;
pub mod simple;
pub mod tabular;

/// A family decoder: one raw block plus the reference tables in, the
/// decoded code records out.
///
/// Decoders are total functions. A line that fails its family's shape
/// is dropped with a debug log, never an error.
pub type DecoderFn = fn(&RawBlock, &ReferenceTables) -> CodeMap;

/// True for lines every decoder ignores: ruler/separator lines
/// (containing `==`) and blank-key continuation artifacts (11 leading
/// space columns followed by an alphabetic character).
pub fn is_noise_line(line: &str) -> bool {
    line.contains("==")
        || (utils::leading_spaces(line, 11) && utils::col(line, 11).is_ascii_alphabetic())
}

/// The decoder registered for a dictionary number, if any.
///
/// Numbers outside this registry (47, 48, 52, 227, 235 and the rest)
/// carry no information downstream consumers use, and are skipped.
pub fn decoder_for(number: u32) -> Option<DecoderFn> {
    match number {
        1 | 30 | 31 | 32 | 34 | 35 | 38 | 43 => Some(simple::decode_plain),
        2 | 4 | 7 | 8 | 15..=23 | 33 | 207 | 209 => Some(simple::decode_expanded),
        3 => Some(simple::decode_institutes),
        5 => Some(simple::decode_journals),
        6 => Some(simple::decode_reports),
        24 => Some(tabular::decode_headings),
        25 => Some(tabular::decode_units),
        144 => Some(tabular::decode_libraries),
        213 => Some(tabular::decode_reaction_types),
        236 => Some(reaction::decode_reactions),
        _ => None,
    }
}

/// Decodes one block into a named sub-dictionary.
///
/// Returns `None` when no decoder is registered for the number, or when
/// the directory does not name it; both mean "omit this sub-dictionary",
/// not an error. The display name always comes from the directory.
pub fn decode(
    number: u32,
    block: &RawBlock,
    directory: &DictionaryDirectory,
    tables: &ReferenceTables,
) -> Option<SubDictionary> {
    let decoder = match decoder_for(number) {
        Some(decoder) => decoder,
        None => {
            debug!("no decoder registered for diction {}", number);
            return None;
        }
    };
    let name = match directory.get(&number) {
        Some(entry) => entry.description.clone(),
        None => {
            warn!(
                "omitting diction {}: block present but not listed in the directory",
                number
            );
            return None;
        }
    };
    let codes = decoder(block, tables);
    Some(SubDictionary { name, codes })
}
