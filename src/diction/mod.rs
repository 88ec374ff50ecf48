//! Core EXFOR dictionary pipeline
//!
//! One trans file flows through the splitter, the Diction 950 directory
//! decoder and the per-diction decoder engine, and comes out as a
//! [`DictionaryCatalog`]:
//!
//! ```text
//! trans.NNNN --> split_blocks --> {number -> RawBlock}
//!                                      |
//!                 directory (950) <----+----> decoders (registry)
//!                        |                          |
//!                        +------> assemble <--------+
//!                                     |
//!                              DictionaryCatalog --> persist/accessor
//! ```

pub mod accessor;
pub mod config;
pub mod decoders;
pub mod directory;
pub mod error;
pub mod fetch;
pub mod models;
pub mod persist;
pub mod refs;
pub mod splitter;
mod utils;

use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;

use config::DictionaryConfig;
pub use error::{DictionError, Result};
use models::{DictionaryCatalog, RawBlock};
use refs::ReferenceTables;

/// Assembles a catalog from already-split blocks.
///
/// The Diction 950 block names every sub-dictionary; blocks without a
/// registered decoder or a directory entry are omitted, which is
/// expected for the unused dictionary numbers.
///
/// # Errors
/// Returns [`DictionError::MissingDirectory`] when no 950 block exists.
pub fn assemble(
    blocks: &BTreeMap<u32, RawBlock>,
    tables: &ReferenceTables,
) -> Result<DictionaryCatalog> {
    let directory_block = blocks
        .get(&directory::DIRECTORY_NUMBER)
        .ok_or(DictionError::MissingDirectory)?;
    let definitions = directory::decode_directory(directory_block);
    info!("directory lists {} dictionaries", definitions.len());

    let mut dictionaries = BTreeMap::new();
    for (&number, block) in blocks {
        if number == directory::DIRECTORY_NUMBER {
            continue;
        }
        if let Some(dictionary) = decoders::decode(number, block, &definitions, tables) {
            debug!("diction {}: {} codes", number, dictionary.codes.len());
            dictionaries.insert(number, dictionary);
        }
    }

    Ok(DictionaryCatalog {
        definitions,
        dictionaries,
    })
}

/// Parses trans-file text into a catalog, entirely in memory.
///
/// # Errors
/// Returns an error if the source is truncated, a block marker is
/// malformed, or the Diction 950 directory is missing.
pub fn parse_catalog(text: &str, tables: &ReferenceTables) -> Result<DictionaryCatalog> {
    let lines: Vec<String> = text.lines().map(utils::sanitize_line).collect();
    let blocks = splitter::split_blocks(&lines)?;
    assemble(&blocks, tables)
}

/// Converts one stored trans file and writes every artifact: per-block
/// dumps, the directory JSON, one JSON per decoded sub-dictionary and
/// the combined catalog JSON.
///
/// # Errors
/// Returns an error if the trans file cannot be read or parsed, or an
/// artifact cannot be written.
pub fn convert_trans_file(
    config: &DictionaryConfig,
    version: u32,
    tables: &ReferenceTables,
) -> Result<DictionaryCatalog> {
    let path = config.trans_file(version);
    info!("parsing dictionary trans file {}", path.display());
    // lossy read: sanitize_line spaces out whatever the replacement
    // character stands in for
    let bytes = fs::read(&path)?;
    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = text.lines().map(utils::sanitize_line).collect();
    let blocks = splitter::split_blocks(&lines)?;

    for block in blocks.values() {
        persist::write_block(config, block)?;
    }

    let catalog = assemble(&blocks, tables)?;

    persist::write_directory_json(config, &catalog.definitions)?;
    for (&number, dictionary) in &catalog.dictionaries {
        persist::write_diction_json(config, number, dictionary)?;
    }
    persist::write_catalog_json(config, version, &catalog)?;

    info!(
        "trans.{} converted: {} dictionaries decoded",
        version,
        catalog.dictionaries.len()
    );
    Ok(catalog)
}

/// Brings the local store up to the newest remote version and converts
/// it. Returns the version together with its catalog.
///
/// # Errors
/// Propagates fetch, parse and persistence errors.
pub fn update_to_latest(
    config: &DictionaryConfig,
    tables: &ReferenceTables,
) -> Result<(u32, DictionaryCatalog)> {
    let version = fetch::ensure_latest(config)?;
    let catalog = convert_trans_file(config, version, tables)?;
    Ok((version, catalog))
}
