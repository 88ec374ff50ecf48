//! # Dictionary Number Directory (Diction 950)
//!
//! Diction 950 is the master list of dictionary numbers. Its records
//! share the flat layout of the simple families:
//!
//! ```text
//! column   0         11                                         66  ...  79
//!          |number   |description                                |       |flag
//! ```
//!
//! Every other sub-dictionary is named by looking its number up here.

use log::debug;

use crate::diction::decoders::is_noise_line;
use crate::diction::models::{DictionaryDirectory, DirectoryEntry, RawBlock};
use crate::diction::utils;

/// The distinguished directory dictionary number.
pub const DIRECTORY_NUMBER: u32 = 950;

/// Decodes the Diction 950 block into the directory.
///
/// Banner and separator lines, and any line whose key column is not a
/// number (including the retained ENDDICTION terminator), are skipped.
pub fn decode_directory(block: &RawBlock) -> DictionaryDirectory {
    let mut directory = DictionaryDirectory::new();

    for line in block.data_lines(0) {
        if is_noise_line(line) {
            continue;
        }
        let key = utils::field_trim(line, 0, 11);
        let number = match key.parse::<u32>() {
            Ok(number) => number,
            Err(_) => {
                debug!("skipping directory line with non-numeric key {:?}", key);
                continue;
            }
        };
        let description = utils::field_rtrim(line, 11, 66).to_string();
        let active = utils::field(line, 79, 80) != "O";
        directory.insert(
            number,
            DirectoryEntry {
                description,
                active,
            },
        );
    }

    directory
}
