//! Command-line interface for vuamc
//! This binary converts a TEI-encoded metaphor corpus into a flat per-token CSV table.
//!
//! Usage:
//!   vuamc convert `<path>` [--output `<csv>`] [flags]  - Convert a corpus document
//!   vuamc checksum `<path>`                          - Print digests of a file

use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};

use vuamc::vuamc::{
    file_checksums, load_corpus, parse_corpus, write_csv, write_manifest, ParseOptions,
    RunManifest,
};

fn main() {
    let matches = Command::new("vuamc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting TEI metaphor corpora into flat token tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a corpus document into a per-token CSV table")
                .arg(
                    Arg::new("input")
                        .help("Path to the corpus: an .xml file, a .zip archive, or a directory")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output CSV path (defaults to a .csv next to the input)"),
                )
                .arg(
                    Arg::new("keep-punctuation")
                        .long("keep-punctuation")
                        .action(ArgAction::SetTrue)
                        .help("Keep tokens with the punctuation POS tag"),
                )
                .arg(
                    Arg::new("keep-truncated")
                        .long("keep-truncated")
                        .action(ArgAction::SetTrue)
                        .help("Keep tokens carrying truncation annotations"),
                )
                .arg(
                    Arg::new("no-news-of-fix")
                        .long("no-news-of-fix")
                        .action(ArgAction::SetTrue)
                        .help("Skip the News-register 'of' correction"),
                )
                .arg(
                    Arg::new("manifest")
                        .long("manifest")
                        .action(ArgAction::SetTrue)
                        .help("Write a JSON manifest with row count and checksums next to the output"),
                ),
        )
        .subcommand(
            Command::new("checksum")
                .about("Print md5/sha256 digests of a file")
                .arg(Arg::new("path").help("File to digest").required(true).index(1)),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let input = convert_matches.get_one::<String>("input").unwrap();
            let output = convert_matches.get_one::<String>("output");
            let options = ParseOptions {
                exclude_punctuation: !convert_matches.get_flag("keep-punctuation"),
                exclude_truncation: !convert_matches.get_flag("keep-truncated"),
                apply_news_of_correction: !convert_matches.get_flag("no-news-of-fix"),
            };
            handle_convert_command(
                input,
                output.map(String::as_str),
                options,
                convert_matches.get_flag("manifest"),
            );
        }
        Some(("checksum", checksum_matches)) => {
            let path = checksum_matches.get_one::<String>("path").unwrap();
            handle_checksum_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, options: ParseOptions, manifest: bool) {
    let input_path = PathBuf::from(input);
    let output_path = match output {
        Some(path) => PathBuf::from(path),
        None => default_output_path(&input_path),
    };

    let xml = load_corpus(&input_path).unwrap_or_else(|e| {
        eprintln!("Error loading corpus: {}", e);
        std::process::exit(1);
    });
    let rows = parse_corpus(&xml, &options).unwrap_or_else(|e| {
        eprintln!("Error parsing corpus: {}", e);
        std::process::exit(1);
    });
    write_csv(&rows, &output_path).unwrap_or_else(|e| {
        eprintln!("Error writing table: {}", e);
        std::process::exit(1);
    });
    let sums = file_checksums(&output_path).unwrap_or_else(|e| {
        eprintln!("Error computing checksums: {}", e);
        std::process::exit(1);
    });

    println!("Wrote: {}", output_path.display());
    println!("Rows: {}", rows.len());
    println!("md5: {}", sums.md5);
    println!("sha256: {}", sums.sha256);

    if manifest {
        let manifest_path = output_path.with_extension("manifest.json");
        let manifest = RunManifest {
            output: output_path.display().to_string(),
            rows: rows.len(),
            md5: sums.md5,
            sha256: sums.sha256,
        };
        write_manifest(&manifest, &manifest_path).unwrap_or_else(|e| {
            eprintln!("Error writing manifest: {}", e);
            std::process::exit(1);
        });
        println!("Manifest: {}", manifest_path.display());
    }
}

/// Handle the checksum command
fn handle_checksum_command(path: &str) {
    let sums = file_checksums(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("Error computing checksums: {}", e);
        std::process::exit(1);
    });
    println!("md5: {}", sums.md5);
    println!("sha256: {}", sums.sha256);
}

fn default_output_path(input: &Path) -> PathBuf {
    if input.is_dir() {
        input.join("corpus.csv")
    } else {
        input.with_extension("csv")
    }
}
