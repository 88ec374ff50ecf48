//! Artifact persistence: raw block dumps and JSON outputs.
//!
//! Every write lands in a temporary file next to its destination and is
//! renamed into place, so a crash mid-write never leaves a torn
//! artifact behind.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::diction::config::DictionaryConfig;
use crate::diction::directory::DIRECTORY_NUMBER;
use crate::diction::error::Result;
use crate::diction::models::{DictionaryCatalog, DictionaryDirectory, RawBlock, SubDictionary};

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Writes raw bytes atomically, creating parent directories as needed.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    write_atomic(path, bytes)
}

/// Writes a value as pretty-printed JSON, atomically.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_vec_pretty(value)?;
    write_atomic(path, &body)
}

/// Dumps one raw block as `diction<number>.dat` for audit and replay.
pub fn write_block(config: &DictionaryConfig, block: &RawBlock) -> Result<PathBuf> {
    let path = config.diction_file(block.number);
    let mut body = block.lines.join("\n");
    body.push('\n');
    write_atomic(&path, body.as_bytes())?;
    Ok(path)
}

/// Writes the Diction 950 directory artifact.
pub fn write_directory_json(
    config: &DictionaryConfig,
    directory: &DictionaryDirectory,
) -> Result<PathBuf> {
    let path = config.diction_json_file(DIRECTORY_NUMBER, "");
    write_json(&path, directory)?;
    Ok(path)
}

/// Writes one sub-dictionary artifact, named by its directory entry.
pub fn write_diction_json(
    config: &DictionaryConfig,
    number: u32,
    dictionary: &SubDictionary,
) -> Result<PathBuf> {
    let path = config.diction_json_file(number, &dictionary.name);
    let document = BTreeMap::from([(number, dictionary)]);
    write_json(&path, &document)?;
    Ok(path)
}

/// Writes the assembled catalog as `trans.<version>.json`.
pub fn write_catalog_json(
    config: &DictionaryConfig,
    version: u32,
    catalog: &DictionaryCatalog,
) -> Result<PathBuf> {
    let path = config.catalog_json_file(version);
    write_json(&path, catalog)?;
    Ok(path)
}
