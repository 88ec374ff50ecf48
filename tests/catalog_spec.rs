use exfor_dictionary::diction::{fetch, parse_catalog, splitter, DictionError};
use exfor_dictionary::{
    CountryRecord, DictionaryCatalog, DictionaryConfig, InstituteRecord, ReferenceTables,
    Vocabulary,
};
use std::collections::HashMap;
use std::fs;

/// (diction number, code, expected activity) for every flag-bearing
/// fixture record.
const EXPECTED_ACTIVITY: &[(u32, &str, bool)] = &[
    (1, "CS", true),
    (1, "OLD", false),
    (3, "1USAUSA", true),
    (3, "1USALAS", true),
    (24, "EN", true),
    (24, "DATA", true),
    (24, "DATA-MAX", false),
    (25, "B", true),
    (236, ",POL/DA,,VAP", true),
    (236, ",POL/DA,,D", false),
];

fn line80(fields: &[(usize, &str)]) -> String {
    let mut bytes = vec![b' '; 80];
    for (start, text) in fields {
        for (offset, byte) in text.bytes().enumerate() {
            bytes[start + offset] = byte;
        }
    }
    String::from_utf8(bytes).expect("ascii line")
}

fn diction_marker(number: u32, name: &str) -> String {
    line80(&[(0, "DICTION"), (11, &number.to_string()), (25, name)])
}

fn end_marker(number: u32) -> String {
    line80(&[(0, "ENDDICTION"), (13, &number.to_string())])
}

fn flat_record(code: &str, desc: &str, flag: &str) -> String {
    line80(&[(0, code), (11, desc), (79, flag)])
}

fn heading_record(code: &str, desc: &str, tag: &str, flag: &str) -> String {
    line80(&[(0, code), (11, desc), (65, tag), (79, flag)])
}

fn unit_record(code: &str, desc: &str, tag: &str, factor: &str) -> String {
    line80(&[(0, code), (11, desc), (44, tag), (55, factor)])
}

fn ruler() -> String {
    line80(&[(0, "==========================================================")])
}

fn sample_tables() -> ReferenceTables {
    let mut institutes = HashMap::new();
    institutes.insert(
        "1USALAS".to_string(),
        InstituteRecord {
            name: "Los Alamos National Laboratory".to_string(),
            address: Some("Los Alamos, NM 87545, USA".to_string()),
            lat: Some(35.8800),
            lng: Some(-106.3031),
        },
    );
    let mut countries = HashMap::new();
    countries.insert(
        "1USA".to_string(),
        CountryRecord {
            name: "United States of America".to_string(),
            lat: Some(39.7600),
            lng: Some(-98.5000),
        },
    );
    ReferenceTables {
        institutes,
        countries,
        institute_vocab: Vocabulary::new(vec![
            ("Univ.".to_string(), "University".to_string()),
            ("Jour.".to_string(), "Journal".to_string()),
        ]),
        heads_vocab: Vocabulary::new(vec![
            ("Inc.".to_string(), "Incident".to_string()),
            ("Eval.".to_string(), "Evaluated".to_string()),
        ]),
        reaction_vocab: Vocabulary::new(vec![
            ("Diff.".to_string(), "Differential ".to_string()),
            ("neut.".to_string(), "neutron ".to_string()),
            ("mult.".to_string(), "multiplicity ".to_string()),
        ]),
    }
}

fn sample_trans() -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(line80(&[(0, "TRANS"), (11, "9999"), (25, "DICTIONARY UPDATE")]));

    // Diction 1: plain flat family
    lines.push(diction_marker(1, "System identifiers"));
    lines.push(flat_record("CS", "Cross section data", ""));
    lines.push(ruler());
    lines.push(flat_record("OLD", "Retired entry", "O"));
    lines.push(line80(&[(11, "continuation note that flat families drop")]));
    lines.push(end_marker(1));

    // Diction 3: institutes
    lines.push(diction_marker(3, "Institutes"));
    lines.push(flat_record("1USAUSA", "(United States of America)", ""));
    lines.push(flat_record("1USALAS", "(Univ. of Testing)", ""));
    lines.push(flat_record("1USAXYZ", "(Unknown Institute)", ""));
    lines.push(flat_record("1ZZZZZZ", "(Nowhere Land)", ""));
    lines.push(end_marker(3));

    // Diction 5: journals; the published-country code sits at [62:66)
    lines.push(diction_marker(5, "Journals"));
    lines.push(line80(&[
        (0, "JTN"),
        (11, "(Jour. of Testing Nonsense)"),
        (62, "1USA"),
    ]));
    lines.push(line80(&[
        (0, "JXX"),
        (11, "(Annals of Missing Countries)"),
        (62, "9XXX"),
    ]));
    lines.push(end_marker(5));

    // Diction 6: reports; the publisher code sits at [59:66)
    lines.push(diction_marker(6, "Reports"));
    lines.push(line80(&[
        (0, "LA-"),
        (11, "(Testing Report Series)"),
        (59, "1USALAS"),
    ]));
    lines.push(line80(&[
        (0, "WHO-"),
        (11, "(Unknown Publisher Series)"),
        (59, "9ZZZWHO"),
    ]));
    lines.push(end_marker(6));

    // Diction 24: data headings, records start at body line 11
    lines.push(diction_marker(24, "Data headings"));
    lines.push(ruler());
    lines.push(heading_record("FAKEHEAD", "Lives in the banner", "A", ""));
    for _ in 0..4 {
        lines.push(line80(&[(11, "banner legend text")]));
        lines.push(ruler());
    }
    lines.push(line80(&[(0, "* free-form banner comment")]));
    lines.push(heading_record("EN", "Inc. energy", "A", ""));
    lines.push(heading_record("EN-DN", "Inc. energy, denominator", "A", ""));
    lines.push(heading_record("EN-ERR", "Inc. energy uncertainty", "B", ""));
    lines.push(ruler());
    lines.push(heading_record("DATA", "Measured value", "", ""));
    lines.push(heading_record("DATA-ERR", "Measured value uncertainty", "", ""));
    lines.push(heading_record("DATA-DN", "Denominator value", "", ""));
    lines.push(heading_record("DATA-MAX", "Upper limit", "", "O"));
    lines.push(heading_record("E", "Outgoing energy", "E", ""));
    lines.push(heading_record("E-LVL", "Level energy", "L", ""));
    lines.push(heading_record("ANG", "Angle", "G", ""));
    lines.push(heading_record("MASS", "Mass", "J", ""));
    lines.push(heading_record("ELEM", "Element", "I", ""));
    lines.push(end_marker(24));

    // Diction 25: data units, records start at body line 1
    lines.push(diction_marker(25, "Data units"));
    lines.push(unit_record("UNIT", "DESCRIPTION", "CLASS", "FACTOR"));
    lines.push(unit_record("B", "barns", "AREA", "1.0E-24"));
    lines.push(unit_record("NO-DIM", "dimensionless", "NONE", ""));
    lines.push(unit_record("WEIRD", "strange", "MISC", "N/A"));
    lines.push(end_marker(25));

    // Diction 30: plain family whose directory entry is obsolete
    lines.push(diction_marker(30, "Process codes"));
    lines.push(flat_record("SIG", "Cross section process", ""));
    lines.push(end_marker(30));

    // Diction 34: decodable shape, but absent from the directory
    lines.push(diction_marker(34, "Modifiers"));
    lines.push(flat_record("A", "Aperture", ""));
    lines.push(end_marker(34));

    // Diction 47: listed in the directory, no registered decoder
    lines.push(diction_marker(47, "Unused codes"));
    lines.push(flat_record("X", "Unused", ""));
    lines.push(end_marker(47));

    // Diction 144: data libraries, 15-column code field
    lines.push(diction_marker(144, "Data libraries"));
    lines.push(line80(&[(0, "LIBRARY"), (15, "DESCRIPTION")]));
    lines.push(line80(&[(0, "ENDF/B-VIII.0"), (15, "Eval. nuclear data file")]));
    lines.push(end_marker(144));

    // Diction 213: reaction types
    lines.push(diction_marker(213, "Reaction types"));
    lines.push(line80(&[(0, "TYPE"), (11, "TAG"), (16, "ALT"), (20, "BANNER")]));
    lines.push(line80(&[(0, "CS"), (11, "SIG"), (16, "CS"), (20, "Cross section")]));
    lines.push(end_marker(213));

    // Diction 236: reaction quantities, records start at body line 27
    lines.push(diction_marker(236, "Quantities"));
    for index in 0..27 {
        lines.push(match index % 3 {
            0 => ruler(),
            1 => line80(&[(0, ",FAKE/DA,,X"), (18, "NO"), (22, "(Lives in the banner)")]),
            _ => line80(&[(11, "banner legend text")]),
        });
    }
    // single-line record: code, tag and description on one line
    lines.push(line80(&[
        (0, ",POL/DA,,VAP"),
        (18, "NO"),
        (22, "(Vector analyzing power, iT(11))"),
    ]));
    // single-line record flagged obsolete
    lines.push(line80(&[
        (0, ",POL/DA,,D"),
        (18, "NO"),
        (22, "(Depolarization)"),
        (79, "O"),
    ]));
    // code and tag glued to a description that wraps, then a second,
    // fuller description for the same code
    lines.push(line80(&[(0, "PR,NU/DA/DE,N+*F/NFYAE(Diff.prompt neut.mult.d/dA(n+frag.spec.")]));
    lines.push(line80(&[(22, ")/dE(n))")]));
    lines.push(line80(&[(22, "(Differential prompt neutron multiplicity")]));
    lines.push(line80(&[(22, "of neutrons)")]));
    // long code alone, tag and description supplied by later lines
    lines.push(line80(&[(0, ",POL/DA/DA/DE,*,ANA")]));
    lines.push(line80(&[(18, "NO"), (22, "(Analyzing power dA1/dA2/dE f.particle")]));
    lines.push(line80(&[(22, "specified)")]));
    // unsupported continuation shape abandons the open record
    lines.push(line80(&[(0, ",EM/DA,,LEG/RS"), (18, "NO"), (22, "(Legendre coef. of rank")]));
    lines.push(line80(&[(10, "stray text in no recognized shape")]));
    lines.push(line80(&[(0, ",TTY/DA,,4PI"), (22, "(Thick target yield)")]));
    lines.push(end_marker(236));

    // Diction 950: the directory, terminator retained
    lines.push(diction_marker(950, "List of dictionaries"));
    lines.push(ruler());
    lines.push(line80(&[(11, "number and description of each dictionary")]));
    lines.push(flat_record("1", "System identifiers", ""));
    lines.push(flat_record("3", "Institutes", ""));
    lines.push(flat_record("5", "Journals", ""));
    lines.push(flat_record("6", "Reports", ""));
    lines.push(flat_record("24", "Data headings", ""));
    lines.push(flat_record("25", "Data units", ""));
    lines.push(flat_record("30", "Process codes", "O"));
    lines.push(flat_record("47", "Unused codes", ""));
    lines.push(flat_record("144", "Data libraries", ""));
    lines.push(flat_record("213", "Reaction types", ""));
    lines.push(flat_record("236", "Quantities", ""));
    lines.push(flat_record("900", "Reserved", ""));
    lines.push(flat_record("950", "List of dictionaries", ""));
    lines.push(end_marker(950));

    // nothing after the directory terminator is processed
    lines.push(line80(&[(0, "ENDTRANS"), (11, "9999")]));
    lines.push(diction_marker(13, "Ghost block after the directory"));
    lines.push(flat_record("GHOST", "Never reached", ""));

    lines.join("\n")
}

fn sample_catalog() -> DictionaryCatalog {
    parse_catalog(&sample_trans(), &sample_tables()).expect("parse sample trans")
}

#[test]
fn directory_names_every_decoded_dictionary() {
    let catalog = sample_catalog();

    let decoded: Vec<u32> = catalog.dictionaries.keys().copied().collect();
    assert_eq!(decoded, vec![1, 3, 5, 6, 24, 25, 30, 144, 213, 236]);

    assert_eq!(catalog.definitions.len(), 13);
    for (number, dictionary) in &catalog.dictionaries {
        let entry = catalog
            .definitions
            .get(number)
            .unwrap_or_else(|| panic!("diction {} missing from the directory", number));
        assert_eq!(
            dictionary.name, entry.description,
            "display name mismatch for diction {}",
            number
        );
    }

    // directory-only, unregistered and unlisted numbers are omitted
    assert!(catalog.definitions.contains_key(&900));
    assert!(!catalog.dictionaries.contains_key(&900));
    assert!(catalog.definitions.contains_key(&47));
    assert!(!catalog.dictionaries.contains_key(&47));
    assert!(!catalog.definitions.contains_key(&34));
    assert!(!catalog.dictionaries.contains_key(&34));
    assert!(!catalog.dictionaries.contains_key(&950));
    assert!(!catalog.dictionaries.contains_key(&13));

    // the directory's own activity flags survive
    assert!(!catalog.definitions[&30].active);
    assert!(catalog.definitions[&24].active);
    // the obsolete directory entry does not suppress decoding
    assert!(catalog.dictionaries[&30].codes.contains_key("SIG"));
}

#[test]
fn obsolescence_flags_map_to_activity() {
    let catalog = sample_catalog();
    for (number, code, expected) in EXPECTED_ACTIVITY {
        let record = &catalog.dictionaries[number].codes[*code];
        assert_eq!(
            record.active, *expected,
            "activity mismatch for {} in diction {}",
            code, number
        );
    }
}

#[test]
fn flat_families_keep_raw_descriptions() {
    let catalog = sample_catalog();
    let codes = &catalog.dictionaries[&1].codes;
    assert_eq!(codes.len(), 2);
    assert_eq!(codes["CS"].description, "Cross section data");
    assert_eq!(codes["OLD"].description, "Retired entry");
    assert!(codes["CS"].additional_code.is_none());
}

#[test]
fn institutes_resolve_against_both_tables() {
    let catalog = sample_catalog();
    let codes = &catalog.dictionaries[&3].codes;

    // country-level code: coordinates from the country table, no address
    let country = &codes["1USAUSA"];
    assert_eq!(country.latitude, Some(39.7600));
    assert_eq!(country.longitude, Some(-98.5000));
    assert!(country.address.is_none());

    // institute code: coordinates and address from the institute table,
    // description expanded and still parenthesized
    let institute = &codes["1USALAS"];
    assert_eq!(institute.description, "(University of Testing)");
    assert_eq!(institute.latitude, Some(35.8800));
    assert_eq!(institute.address.as_deref(), Some("Los Alamos, NM 87545, USA"));

    // unresolvable institute keeps its record with the fields absent
    let unknown = &codes["1USAXYZ"];
    assert_eq!(unknown.description, "(Unknown Institute)");
    assert!(unknown.latitude.is_none());
    assert!(unknown.longitude.is_none());
    assert!(unknown.address.is_none());

    // country-level code with an unknown country is dropped
    assert!(!codes.contains_key("1ZZZZZZ"));
    assert_eq!(codes.len(), 3);
}

#[test]
fn journals_extract_parentheses_and_require_a_country() {
    let catalog = sample_catalog();
    let codes = &catalog.dictionaries[&5].codes;

    let journal = &codes["JTN"];
    assert_eq!(journal.description, "Journal of Testing Nonsense");
    assert_eq!(journal.published_country_code.as_deref(), Some("1USA"));
    assert_eq!(
        journal.published_country_name.as_deref(),
        Some("United States of America")
    );

    assert!(!codes.contains_key("JXX"));
    assert_eq!(codes.len(), 1);
}

#[test]
fn reports_strip_the_publisher_tail() {
    let catalog = sample_catalog();
    let codes = &catalog.dictionaries[&6].codes;

    let report = &codes["LA-"];
    assert_eq!(report.description, "(Testing Report Series)");
    assert_eq!(report.publisher.as_deref(), Some("1USALAS"));
    assert_eq!(
        report.publisher_name.as_deref(),
        Some("Los Alamos National Laboratory")
    );

    assert!(!codes.contains_key("WHO-"));
    assert_eq!(codes.len(), 1);
}

#[test]
fn headings_force_data_tags_and_skip_the_banner() {
    let catalog = sample_catalog();
    let codes = &catalog.dictionaries[&24].codes;

    assert!(!codes.contains_key("FAKEHEAD"), "banner line was decoded");
    assert_eq!(codes["EN"].description, "Incident energy");
    assert_eq!(codes["EN"].additional_code.as_deref(), Some("A"));
    assert_eq!(codes["DATA"].additional_code.as_deref(), Some("DATA"));
    assert_eq!(codes["DATA-ERR"].additional_code.as_deref(), Some("DATA_E"));
    assert_eq!(codes["DATA-DN"].additional_code.as_deref(), Some("DATA"));
    assert_eq!(codes["DATA-MAX"].additional_code.as_deref(), Some("DATA"));
}

#[test]
fn units_store_the_raw_factor_string() {
    let catalog = sample_catalog();
    let codes = &catalog.dictionaries[&25].codes;

    assert!(!codes.contains_key("UNIT"), "banner line was decoded");
    assert_eq!(codes["B"].unit_conversion_factor.as_deref(), Some("1.0E-24"));
    assert_eq!(codes["B"].additional_code.as_deref(), Some("AREA"));
    assert_eq!(codes["NO-DIM"].unit_conversion_factor.as_deref(), Some(""));
    assert_eq!(codes["WEIRD"].unit_conversion_factor.as_deref(), Some("N/A"));
}

#[test]
fn libraries_and_reaction_types_decode_their_layouts() {
    let catalog = sample_catalog();

    let libraries = &catalog.dictionaries[&144].codes;
    assert!(!libraries.contains_key("LIBRARY"), "banner line was decoded");
    assert_eq!(
        libraries["ENDF/B-VIII.0"].description,
        "Evaluated nuclear data file"
    );

    let types = &catalog.dictionaries[&213].codes;
    assert!(!types.contains_key("TYPE"), "banner line was decoded");
    let record = &types["CS"];
    assert_eq!(record.additional_code.as_deref(), Some("SIG"));
    assert_eq!(record.x4code3.as_deref(), Some("CS"));
    assert_eq!(record.description, "Cross section");
}

#[test]
fn reaction_records_assemble_across_lines() {
    let catalog = sample_catalog();
    let codes = &catalog.dictionaries[&236].codes;

    assert!(!codes.contains_key(",FAKE/DA,,X"), "banner line was decoded");

    // single line closes immediately
    let single = &codes[",POL/DA,,VAP"];
    assert_eq!(single.description, "(Vector analyzing power, iT(11))");
    assert_eq!(single.additional_code.as_deref(), Some("NO"));

    // a later description for the same code replaces the earlier one;
    // fragments concatenate without a separator
    let replaced = &codes["PR,NU/DA/DE,N+*F/N"];
    assert_eq!(
        replaced.description,
        "(Differential prompt neutron multiplicityof neutrons)"
    );
    assert_eq!(replaced.additional_code.as_deref(), Some("FYAE"));

    // long code alone on its line, tag and description arriving later
    let long_form = &codes[",POL/DA/DA/DE,*,ANA"];
    assert_eq!(
        long_form.description,
        "(Analyzing power dA1/dA2/dE f.particlespecified)"
    );
    assert_eq!(long_form.additional_code.as_deref(), Some("NO"));

    // the abandoned record never surfaces
    assert!(!codes.contains_key(",EM/DA,,LEG/RS"));
    assert_eq!(codes[",TTY/DA,,4PI"].description, "(Thick target yield)");
    assert_eq!(codes.len(), 5);
}

#[test]
fn vocabulary_expansion_is_sequential_and_applied_on_finalize() {
    let vocab = Vocabulary::new(vec![
        ("A".to_string(), "B".to_string()),
        ("B".to_string(), "C".to_string()),
    ]);
    assert_eq!(vocab.expand("A"), "C");
    assert_eq!(vocab.expand("plain"), "plain");

    // the wrapped description above expanded exactly once: the expansion
    // output contains no unexpanded source abbreviations
    let catalog = sample_catalog();
    let replaced = &catalog.dictionaries[&236].codes["PR,NU/DA/DE,N+*F/N"];
    assert!(!replaced.description.contains("Diff."));
    assert!(!replaced.description.contains("neut."));
}

#[test]
fn accessor_filters_headings_by_tag() {
    let catalog = sample_catalog();

    assert_eq!(catalog.incident_energy_heads(), vec!["EN"]);
    assert_eq!(catalog.incident_energy_error_heads(), vec!["EN-ERR"]);
    assert_eq!(catalog.data_heads(), vec!["DATA"]);
    assert_eq!(catalog.data_error_heads(), vec!["DATA-ERR"]);
    assert_eq!(catalog.outgoing_energy_heads(), vec!["E"]);
    assert_eq!(catalog.level_heads(), vec!["E-LVL"]);
    assert_eq!(catalog.angle_heads(), vec!["ANG"]);
    assert_eq!(catalog.mass_heads(), vec!["MASS"]);
    assert_eq!(catalog.element_heads(), vec!["ELEM"]);
}

#[test]
fn accessor_resolves_unit_factors_and_descriptions() {
    let catalog = sample_catalog();

    assert_eq!(catalog.unit_factor("B"), Some(1.0E-24));
    assert_eq!(catalog.unit_factor("NO-DIM"), Some(1.0));
    assert_eq!(catalog.unit_factor("WEIRD"), None);
    assert_eq!(catalog.unit_factor("NOPE"), None);

    assert_eq!(catalog.describe(3, "1USALAS"), "(University of Testing)");
    assert_eq!(catalog.describe(3, "NOPE"), "NOPE");
}

#[test]
fn catalog_parses_idempotently_and_round_trips_through_json() {
    let text = sample_trans();
    let tables = sample_tables();
    let first = parse_catalog(&text, &tables).expect("first parse");
    let second = parse_catalog(&text, &tables).expect("second parse");
    assert_eq!(first, second);

    let body = serde_json::to_string_pretty(&first).expect("serialize catalog");
    let reloaded: DictionaryCatalog = serde_json::from_str(&body).expect("reload catalog");
    assert_eq!(first, reloaded);

    // absent optional fields stay absent in the artifact
    assert!(!body.contains("\"publisher\": null"));
    assert!(!body.contains("\"latitude\": null"));
}

#[test]
fn truncated_and_malformed_sources_are_fatal() {
    let tables = sample_tables();

    // a new marker while a block is open
    let mid_file = [
        diction_marker(1, "System identifiers"),
        flat_record("CS", "Cross section data", ""),
        diction_marker(3, "Institutes"),
    ]
    .join("\n");
    assert!(matches!(
        parse_catalog(&mid_file, &tables),
        Err(DictionError::TruncatedBlock { number: 1 })
    ));

    // end of input while a block is open
    let at_eof = [
        diction_marker(24, "Data headings"),
        heading_record("EN", "Inc. energy", "A", ""),
    ]
    .join("\n");
    assert!(matches!(
        parse_catalog(&at_eof, &tables),
        Err(DictionError::TruncatedBlock { number: 24 })
    ));

    // a marker line without a readable number
    let bad_marker = "DICTION new-style header".to_string();
    assert!(matches!(
        parse_catalog(&bad_marker, &tables),
        Err(DictionError::MalformedBlockHeader(_))
    ));

    // a complete file without the Diction 950 directory
    let no_directory = [
        diction_marker(1, "System identifiers"),
        flat_record("CS", "Cross section data", ""),
        end_marker(1),
    ]
    .join("\n");
    assert!(matches!(
        parse_catalog(&no_directory, &tables),
        Err(DictionError::MissingDirectory)
    ));
}

#[test]
fn splitter_keeps_the_directory_terminator_and_stops_there() {
    let lines: Vec<String> = sample_trans().lines().map(|l| l.to_string()).collect();
    let blocks = splitter::split_blocks(&lines).expect("split blocks");

    let directory = &blocks[&950];
    assert!(directory.lines[0].starts_with("DICTION"));
    assert!(directory
        .lines
        .last()
        .expect("directory block lines")
        .starts_with("ENDDICTION"));

    let plain = &blocks[&1];
    assert!(!plain.lines.iter().any(|l| l.starts_with("ENDDICTION")));

    // the ghost block after the directory terminator is never opened
    assert!(!blocks.contains_key(&13));
}

#[test]
fn conversion_writes_every_artifact() {
    let dir = tempfile::tempdir().expect("temp store");
    let config = DictionaryConfig::new(dir.path());

    fs::create_dir_all(config.backup_dir()).expect("create backup dir");
    fs::write(config.trans_file(9999), sample_trans()).expect("write trans file");

    assert_eq!(fetch::latest_local(&config).expect("latest local"), 9999);

    let tables = sample_tables();
    let catalog =
        exfor_dictionary::convert_trans_file(&config, 9999, &tables).expect("convert trans file");

    let block_dump = fs::read_to_string(config.diction_file(950)).expect("directory dump");
    assert!(block_dump.starts_with("DICTION"));
    assert!(block_dump.contains("ENDDICTION"));

    assert!(config.diction_json_file(950, "").is_file());
    assert!(config
        .diction_json_file(24, &catalog.dictionaries[&24].name)
        .is_file());

    let body = fs::read_to_string(config.catalog_json_file(9999)).expect("catalog artifact");
    let reloaded: DictionaryCatalog = serde_json::from_str(&body).expect("reload artifact");
    assert_eq!(catalog, reloaded);
}

#[test]
fn missing_backup_directory_reports_no_versions() {
    let dir = tempfile::tempdir().expect("temp store");
    let config = DictionaryConfig::new(dir.path());
    assert!(matches!(
        fetch::latest_local(&config),
        Err(DictionError::NoVersions { .. })
    ));
}
