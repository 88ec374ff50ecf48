//! Remote version discovery and trans-file download.
//!
//! Dictionary versions are four-digit numbers embedded in file names
//! (`trans.9124`). The remote side is a plain directory listing; the
//! local side is the `trans_backup` directory of the store.

use log::{debug, info};
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::diction::config::DictionaryConfig;
use crate::diction::error::{DictionError, Result};
use crate::diction::persist;

/// Floor version for the remote listing. Anything the server offers is
/// at least this recent.
const SEED_VERSION: u32 = 9000;

/// Compiled pattern for anchor targets in the remote listing that name
/// a trans file.
static HREF_PATTERN: OnceLock<Regex> = OnceLock::new();

fn href_regex() -> &'static Regex {
    HREF_PATTERN.get_or_init(|| {
        Regex::new(r#"href="([^"]*trans[^"]*)""#).expect("Invalid href pattern")
    })
}

fn version_of(name: &str) -> Option<u32> {
    name.rsplit('.').next()?.parse().ok()
}

/// Versions present in the local backup directory.
///
/// A missing backup directory reads as "no versions", not an error.
pub fn local_versions(config: &DictionaryConfig) -> Result<Vec<u32>> {
    let dir = config.backup_dir();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut versions = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(version) = name.strip_prefix("trans.").and_then(|v| v.parse().ok()) {
            versions.push(version);
        }
    }
    debug!("{} local trans versions under {}", versions.len(), dir.display());
    Ok(versions)
}

/// Versions advertised by the remote listing, seeded with the floor
/// version.
///
/// # Errors
/// Returns an error if the listing cannot be fetched.
pub fn server_versions(config: &DictionaryConfig) -> Result<Vec<u32>> {
    let body = reqwest::blocking::get(&config.remote_url)?
        .error_for_status()?
        .text()?;
    let mut versions = vec![SEED_VERSION];
    for captures in href_regex().captures_iter(&body) {
        if let Some(version) = version_of(&captures[1]) {
            versions.push(version);
        }
    }
    debug!("{} remote trans versions at {}", versions.len(), config.remote_url);
    Ok(versions)
}

/// Downloads one trans file into the backup directory.
///
/// # Errors
/// Returns [`DictionError::DownloadFailed`] on a non-success HTTP
/// status, so a listing that advertises a missing file does not leave
/// an empty backup behind.
pub fn download_trans(config: &DictionaryConfig, version: u32) -> Result<PathBuf> {
    let url = format!("{}trans.{}", config.remote_url, version);
    info!("downloading {}", url);
    let response = reqwest::blocking::get(&url)?;
    if !response.status().is_success() {
        return Err(DictionError::DownloadFailed(response.status()));
    }
    let body = response.bytes()?;
    let path = config.trans_file(version);
    persist::write_bytes(&path, &body)?;
    Ok(path)
}

/// Makes sure the newest advertised version is present locally and
/// returns it.
///
/// # Errors
/// Returns [`DictionError::StaleRemote`] when the local backup is newer
/// than anything the server offers.
pub fn ensure_latest(config: &DictionaryConfig) -> Result<u32> {
    let local = local_versions(config)?.into_iter().max();
    let remote = server_versions(config)?
        .into_iter()
        .max()
        .unwrap_or(SEED_VERSION);

    match local {
        Some(local) if local == remote => {
            info!("local dictionary trans.{} is the latest version", local);
            Ok(local)
        }
        Some(local) if local > remote => Err(DictionError::StaleRemote { local, remote }),
        _ => {
            download_trans(config, remote)?;
            Ok(remote)
        }
    }
}

/// The newest version already present locally.
///
/// # Errors
/// Returns [`DictionError::NoVersions`] when the backup directory holds
/// no trans files.
pub fn latest_local(config: &DictionaryConfig) -> Result<u32> {
    local_versions(config)?
        .into_iter()
        .max()
        .ok_or_else(|| DictionError::NoVersions {
            dir: config.backup_dir(),
        })
}
