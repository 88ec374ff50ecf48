//! Storage layout and remote-source configuration.
//!
//! All paths the transport and persistence collaborators touch derive
//! from one root:
//!
//! ```text
//! <root>/trans_backup/trans.<version>            raw downloaded files
//! <root>/diction/diction<number>.dat             per-block dumps
//! <root>/json/dictions/Diction-<number>-<name>.json
//! <root>/json/trans.<version>.json               the assembled catalog
//! ```

use std::path::PathBuf;

/// The IAEA-NDS listing that serves `trans.*` dictionary files.
pub const DEFAULT_DICTIONARY_URL: &str = "https://nds.iaea.org/nrdc/ndsx4/trans/dicts/";

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Root directory of the local dictionary store.
    pub root: PathBuf,
    /// Base URL of the remote trans-file listing.
    pub remote_url: String,
}

impl DictionaryConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            remote_url: DEFAULT_DICTIONARY_URL.to_string(),
        }
    }

    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join("trans_backup")
    }

    pub fn trans_file(&self, version: u32) -> PathBuf {
        self.backup_dir().join(format!("trans.{}", version))
    }

    pub fn diction_dir(&self) -> PathBuf {
        self.root.join("diction")
    }

    pub fn diction_file(&self, number: u32) -> PathBuf {
        self.diction_dir().join(format!("diction{}.dat", number))
    }

    pub fn json_dir(&self) -> PathBuf {
        self.root.join("json")
    }

    pub fn dictions_json_dir(&self) -> PathBuf {
        self.json_dir().join("dictions")
    }

    /// Path of one sub-dictionary's JSON artifact. The directory's own
    /// artifact carries no name suffix.
    pub fn diction_json_file(&self, number: u32, name: &str) -> PathBuf {
        let file = if name.is_empty() {
            format!("Diction-{}.json", number)
        } else {
            format!("Diction-{}-{}.json", number, name)
        };
        self.dictions_json_dir().join(file)
    }

    pub fn catalog_json_file(&self, version: u32) -> PathBuf {
        self.json_dir().join(format!("trans.{}.json", version))
    }
}
