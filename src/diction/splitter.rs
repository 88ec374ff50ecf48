//! # Raw Block Splitter
//!
//! Cuts one trans file into its per-number DICTION blocks:
//!
//! ```text
//! TRANS      9124 ...                        <- file header, discarded
//! DICTION            1          ...          <- opens block 1 (kept as line 0)
//! <body lines>
//! ENDDICTION         1                       <- closes block 1 (discarded)
//! ...
//! DICTION          950          ...
//! <body lines>
//! ENDDICTION       950                       <- closes block 950 (kept) and
//! ENDTRANS   ...                                ends file-level processing
//! ```
//!
//! Blocks keep their lines verbatim; all per-line filtering happens in
//! the decoders.

use log::{debug, trace};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::diction::directory::DIRECTORY_NUMBER;
use crate::diction::error::{DictionError, Result};
use crate::diction::models::RawBlock;

/// Compiled pattern for the start-of-block marker.
///
/// The dictionary number is the second token of the marker line,
/// separated from the literal by at least two spaces.
static MARKER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn marker_regex() -> &'static Regex {
    MARKER_PATTERN.get_or_init(|| {
        Regex::new(r"^DICTION\s{2,}(\d+)").expect("Invalid DICTION marker pattern")
    })
}

fn marker_number(line: &str) -> Result<u32> {
    let captures = marker_regex()
        .captures(line)
        .ok_or_else(|| DictionError::MalformedBlockHeader(line.to_string()))?;
    captures[1]
        .parse()
        .map_err(|_| DictionError::MalformedBlockHeader(line.to_string()))
}

/// Splits sanitized trans-file lines into one [`RawBlock`] per
/// dictionary number.
///
/// Lines outside any block (the TRANS header and footer) are discarded.
/// The ENDDICTION terminator of Diction 950 stays inside its block and
/// stops the scan, since nothing after the directory belongs to a
/// dictionary.
///
/// # Errors
/// - [`DictionError::TruncatedBlock`] if a block is still open when the
///   next DICTION marker or end-of-input arrives
/// - [`DictionError::MalformedBlockHeader`] if a marker line carries no
///   readable number
pub fn split_blocks(lines: &[String]) -> Result<BTreeMap<u32, RawBlock>> {
    let mut blocks = BTreeMap::new();
    let mut open: Option<RawBlock> = None;

    for line in lines {
        if line.starts_with("ENDDICTION") {
            match open.take() {
                Some(mut block) => {
                    let number = block.number;
                    if number == DIRECTORY_NUMBER {
                        block.lines.push(line.clone());
                        trace!("block {} closed with {} lines", number, block.lines.len());
                        blocks.insert(number, block);
                        break;
                    }
                    trace!("block {} closed with {} lines", number, block.lines.len());
                    blocks.insert(number, block);
                }
                None => debug!("ignoring stray terminator: {}", line.trim_end()),
            }
            continue;
        }

        if line.starts_with("DICTION") {
            if let Some(block) = open.take() {
                return Err(DictionError::TruncatedBlock {
                    number: block.number,
                });
            }
            let number = marker_number(line)?;
            debug!("opening DICTION block {}", number);
            open = Some(RawBlock {
                number,
                lines: vec![line.clone()],
            });
            continue;
        }

        if let Some(block) = open.as_mut() {
            block.lines.push(line.clone());
        }
    }

    if let Some(block) = open {
        return Err(DictionError::TruncatedBlock {
            number: block.number,
        });
    }

    debug!("split {} DICTION blocks", blocks.len());
    Ok(blocks)
}
