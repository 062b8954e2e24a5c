// Command line front end: scan an ID card photo or parse OCR text

use clap::{Parser, Subcommand};
use idscan::{
    models::{OcrConfig, RecordField, ValidationIssueType},
    utils::IdCardError,
    Extraction, IdCardExtractor,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "idscan", version, about = "Extract identity card fields from OCR text")]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Override a field after extraction, e.g. --set name="Abebe Kebede"
    #[arg(long = "set", value_name = "FIELD=VALUE", global = true)]
    edits: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run OCR on a card photo and extract its fields
    Scan {
        image: PathBuf,
        /// Tesseract language code
        #[arg(long)]
        lang: Option<String>,
        /// Directory with Tesseract traineddata files
        #[arg(long)]
        tessdata: Option<PathBuf>,
        /// Skip grayscale/contrast preprocessing
        #[arg(long)]
        no_preprocess: bool,
    },
    /// Extract fields from OCR text in a file, or stdin when no file is given
    Parse { file: Option<PathBuf> },
}

fn parse_edit(edit: &str) -> Result<(RecordField, String), IdCardError> {
    let (key, value) = edit
        .split_once('=')
        .ok_or_else(|| IdCardError::InvalidEdit(format!("Expected FIELD=VALUE, got: {}", edit)))?;
    let field = RecordField::from_key(key)
        .ok_or_else(|| IdCardError::InvalidEdit(format!("Unknown field: {}", key)))?;
    Ok((field, value.to_string()))
}

fn print_report(extraction: &Extraction) {
    println!("\n===============================================");
    println!("        ID CARD EXTRACTION REPORT");
    println!("===============================================\n");

    println!("EXTRACTED DATA:");
    for field in RecordField::ALL {
        println!("  {:<14} {}", format!("{}:", field.label()), extraction.record.get(field));
    }

    if !extraction.validation.issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &extraction.validation.issues {
            println!(
                "  - [{}] {}",
                match issue.issue_type {
                    ValidationIssueType::Missing => "MISSING",
                    ValidationIssueType::Malformed => "MALFORMED",
                },
                issue.message
            );
        }
    }

    println!(
        "\nExtraction result: {}",
        if extraction.validation.is_valid { "COMPLETE" } else { "INCOMPLETE" }
    );
}

fn run(cli: Cli) -> Result<(), IdCardError> {
    let mut extraction = match cli.command {
        Command::Scan {
            image,
            lang,
            tessdata,
            no_preprocess,
        } => {
            let mut config = OcrConfig::from_env();
            if let Some(lang) = lang {
                config.language = lang;
            }
            if tessdata.is_some() {
                config.tessdata_dir = tessdata;
            }
            config.preprocess = !no_preprocess;

            IdCardExtractor::with_config(config).scan_image(&image)?
        }
        Command::Parse { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            IdCardExtractor::new().scan_text(&text)
        }
    };

    for edit in &cli.edits {
        let (field, value) = parse_edit(edit)?;
        extraction.apply_edit(field, value);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&extraction)?);
    } else {
        print_report(&extraction);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
