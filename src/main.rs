//! Registrar CLI
//!
//! Usage:
//!   registrar [OPTIONS] [SUBJECT_FILE]
//!
//! Options:
//!   -i, --institution <CODE>     Institution code (e.g. harvard)
//!   -t, --document-type <CODE>   Document type code (e.g. bonafide)
//!   --final                      Compose the Final artifact instead of a Draft
//!   -f, --format <FORMAT>        Markup format: html or text
//!   -o, --output-dir <DIR>       Write the Final artifact under its generated name
//!   --validate                   Only report validation errors
//!   --list                       Show the catalog
//!   --sample <N>                 Print sample subject data as TOML
//!   -h, --help                   Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use registrar::error::{describe_catalog_error, describe_config_error};
use registrar::{
    validate, ComposeConfig, ComposeError, Composer, MarkupFormat, Mode, RenderRequest,
    SubjectRecord, TemplateRegistry,
};

#[derive(Parser)]
#[command(name = "registrar")]
#[command(about = "Compose institutional certificates and letters from student data")]
struct Cli {
    /// Subject data file in TOML (reads from stdin if not provided)
    subject: Option<PathBuf>,

    /// Institution code
    #[arg(short, long, default_value = "")]
    institution: String,

    /// Document type code
    #[arg(short = 't', long, default_value = "")]
    document_type: String,

    /// Compose the Final artifact (requires valid data)
    #[arg(long = "final")]
    final_mode: bool,

    /// Markup format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<MarkupFormat>,

    /// Print the rendered document as JSON
    #[arg(long, conflicts_with = "output_dir")]
    json: bool,

    /// Extra catalog file (TOML) layered over the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the Final artifact into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Only validate the subject data
    #[arg(long)]
    validate: bool,

    /// Show institutions, document types and form options
    #[arg(long)]
    list: bool,

    /// Print sample subject data (1-based index)
    #[arg(long)]
    sample: Option<usize>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = load_registry(cli.catalog.as_deref()).unwrap_or_else(|msg| fail(&msg));
    let mut config = load_config(cli.config.as_deref()).unwrap_or_else(|msg| fail(&msg));
    if let Some(format) = cli.format {
        config.markup.format = format;
    }

    if cli.list {
        print_catalog(&registry);
        return;
    }

    if let Some(n) = cli.sample {
        let Some(sample) = n.checked_sub(1).and_then(|i| registry.samples().get(i)) else {
            fail(&format!(
                "no sample {} (catalog has {})",
                n,
                registry.samples().len()
            ));
        };
        match toml::to_string(sample) {
            Ok(s) => print!("{}", s),
            Err(e) => fail(&format!("failed to serialize sample: {}", e)),
        }
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.subject.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let subject = read_subject(cli.subject.as_deref()).unwrap_or_else(|msg| fail(&msg));

    if cli.validate {
        let mut messages: Vec<String> = Vec::new();
        if !cli.institution.is_empty() && registry.lookup_institution(&cli.institution).is_none() {
            messages.push(format!("Invalid university code: {}", cli.institution));
        }
        if !cli.document_type.is_empty()
            && registry.lookup_document_type(&cli.document_type).is_none()
        {
            messages.push(format!("Invalid document type: {}", cli.document_type));
        }
        messages.extend(
            validate(&subject, &cli.institution, &cli.document_type)
                .iter()
                .map(|e| e.to_string()),
        );
        if messages.is_empty() {
            println!("valid");
            return;
        }
        for m in &messages {
            println!("{}", m);
        }
        std::process::exit(1);
    }

    let mode = if cli.final_mode { Mode::Final } else { Mode::Draft };
    let request = RenderRequest::new(cli.institution, cli.document_type, subject).with_mode(mode);
    let composer = Composer::new(&registry).with_config(config);

    let rendered = match composer.compose(&request) {
        Ok(r) => r,
        Err(ComposeError::ValidationFailed(errors)) => {
            eprintln!("Error: cannot compose final document");
            for e in &errors {
                eprintln!("  - {}", e);
            }
            std::process::exit(1);
        }
        Err(e) => fail(&e.to_string()),
    };

    if cli.json {
        match serde_json::to_string_pretty(&rendered) {
            Ok(s) => println!("{}", s),
            Err(e) => fail(&format!("failed to serialize document: {}", e)),
        }
        return;
    }

    match (&cli.output_dir, &rendered.artifact_name) {
        (Some(dir), Some(name)) => {
            let path = dir.join(name);
            if let Err(e) = fs::create_dir_all(dir).and_then(|_| fs::write(&path, &rendered.markup)) {
                fail(&format!("Error writing '{}': {}", path.display(), e));
            }
            println!("{}", path.display());
        }
        _ => println!("{}", rendered.markup),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_registry(extra: Option<&Path>) -> Result<TemplateRegistry, String> {
    let mut registry = TemplateRegistry::builtin().map_err(|e| e.to_string())?;
    if let Some(path) = extra {
        let source = fs::read_to_string(path)
            .map_err(|e| format!("Error reading catalog '{}': {}", path.display(), e))?;
        let overlay = TemplateRegistry::from_str(&source)
            .map_err(|e| describe_catalog_error(&e, &source, &path.display().to_string()))?;
        registry.merge(overlay);
    }
    Ok(registry)
}

fn load_config(path: Option<&Path>) -> Result<ComposeConfig, String> {
    let Some(path) = path else {
        return Ok(ComposeConfig::default());
    };
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error reading config '{}': {}", path.display(), e))?;
    ComposeConfig::from_str(&source)
        .map_err(|e| describe_config_error(&e, &source, &path.display().to_string()))
}

fn read_subject(path: Option<&Path>) -> Result<SubjectRecord, String> {
    let (source, name) = match path {
        Some(path) => (
            fs::read_to_string(path)
                .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?,
            path.display().to_string(),
        ),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading from stdin: {}", e))?;
            (buffer, "<stdin>".to_string())
        }
    };
    SubjectRecord::from_toml(&source)
        .map_err(|e| registrar::error::format_toml_error(&e, &source, &name))
}

fn print_catalog(registry: &TemplateRegistry) {
    println!("INSTITUTIONS");
    for inst in registry.institutions() {
        println!(
            "  {:<10} {} ({}, {}, {})",
            inst.code, inst.display_name, inst.postal_address, inst.phone_number, inst.website_domain
        );
    }
    println!();
    println!("DOCUMENT TYPES");
    for doc in registry.document_types() {
        println!("  {:<14} {} - {}", doc.code, doc.label(), doc.description());
    }
    let reference = registry.reference();
    println!();
    println!("COURSES");
    for c in &reference.courses {
        println!("  {}", c);
    }
    println!();
    println!("DEPARTMENTS");
    for d in &reference.departments {
        println!("  {}", d);
    }
    println!();
    println!("YEARS OF STUDY");
    for y in &reference.year_options {
        println!("  {}", y);
    }
}

fn print_intro() {
    println!(
        r#"Registrar - compose institutional certificates and letters

USAGE:
    registrar [OPTIONS] [SUBJECT_FILE]
    cat subject.toml | registrar -i harvard -t bonafide

OPTIONS:
    -i, --institution    Institution code
    -t, --document-type  Document type code
    --final              Compose the Final artifact (validates first)
    -f, --format         html (default) or text
    -o, --output-dir     Write the Final artifact under its generated name
    --validate           Only report validation errors
    --list               Show institutions, document types and form options
    --sample <N>         Print sample subject data as TOML
    -h, --help           Print help

QUICK START:
    registrar --sample 1 > subject.toml
    registrar -i harvard -t bonafide --final -f text subject.toml

Missing fields show as [PLACEHOLDER] labels in Draft output."#
    );
}
