use exfor_dictionary::diction::{config::DictionaryConfig, fetch};
use exfor_dictionary::{convert_trans_file, ReferenceTables};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <storage-root> [--update] [--tables <tables.json>]",
            args[0]
        );
        eprintln!("  <storage-root>        directory holding trans_backup/, diction/, json/");
        eprintln!("  --update              fetch the newest trans file from the IAEA-NDS listing");
        eprintln!("  --tables <file>       reference tables (institutes, countries, vocabularies)");
        std::process::exit(1);
    }

    let root = &args[1];
    let update = args.iter().any(|arg| arg == "--update");

    let mut tables = ReferenceTables::default();
    // Parse --tables argument
    if let Some(tables_idx) = args.iter().position(|arg| arg == "--tables") {
        match args.get(tables_idx + 1) {
            Some(path) => match ReferenceTables::from_json_file(path) {
                Ok(loaded) => tables = loaded,
                Err(e) => {
                    eprintln!("ERROR: Failed to load reference tables from {}", path);
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            },
            None => {
                eprintln!("ERROR: --tables flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    let config = DictionaryConfig::new(root);

    println!("Dictionary store: {}", config.root.display());
    if update {
        println!("Checking {} for the latest trans file.", config.remote_url);
    }
    println!("{}", "=".repeat(60));

    let version = if update {
        fetch::ensure_latest(&config)
    } else {
        fetch::latest_local(&config)
    };
    let version = match version {
        Ok(version) => version,
        Err(e) => {
            eprintln!("\nERROR: No trans file to convert");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    match convert_trans_file(&config, version, &tables) {
        Ok(catalog) => {
            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Conversion completed.");
            println!("{}", "=".repeat(60));

            println!("\nDictionary Information:");
            println!("  Version: trans.{}", version);
            println!("  Directory entries: {}", catalog.definitions.len());
            println!("  Decoded dictionaries: {}", catalog.dictionaries.len());
            println!("  Catalog: {}", config.catalog_json_file(version).display());

            println!("\nDecoded Sub-Dictionaries:");
            for (number, dictionary) in &catalog.dictionaries {
                println!(
                    "  {:>4}  {:<45} {:>6} codes",
                    number,
                    dictionary.name,
                    dictionary.codes.len()
                );
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to convert trans.{}", version);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
