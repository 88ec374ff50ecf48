//! # exfor-dictionary
//!
//! A converter for EXFOR DICTION transmission files (`trans.NNNN`).
//! Splits the fixed-column source into its numbered sub-dictionaries,
//! decodes each through a per-number decoder registry, enriches a
//! subset from reference tables (institute/country geocoding,
//! abbreviation vocabularies) and assembles a queryable JSON catalog.
pub mod diction;

// Re-export the main types for convenience
pub use diction::{
    config::{DictionaryConfig, DEFAULT_DICTIONARY_URL},
    models::{
        CodeMap,
        CodeRecord,
        DictionaryCatalog,
        DictionaryDirectory,
        DirectoryEntry,
        RawBlock,
        SubDictionary,
    },
    refs::{CountryRecord, InstituteRecord, ReferenceTables, Vocabulary},
    convert_trans_file, parse_catalog, update_to_latest,
    DictionError, Result,
};
