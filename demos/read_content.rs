use clap::Parser;
use std::{collections::BTreeMap, path::PathBuf, time::Instant};
use tracing_subscriber::EnvFilter;
use yaml_metadata_reader::prelude::*;

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("{} does not exist", path.display()));
    }

    Ok(path)
}

#[derive(Parser, Debug)]
struct Args {
    /// Markdown file or content directory
    #[arg(long, value_parser = parse_path)]
    path: PathBuf,

    /// YAML settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Also print rendered bodies
    #[arg(long)]
    content: bool,
}

fn print_document(path: &std::path::Path, document: &Document, with_content: bool) {
    let metadata: BTreeMap<_, _> = document.metadata().iter().collect();

    println!("== {}", path.display());
    match serde_yml::to_string(&metadata) {
        Ok(yaml) => print!("{yaml}"),
        Err(error) => eprintln!("Can't print metadata: {error}"),
    }

    if with_content {
        println!("{}", document.content());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::from_file(path).unwrap(),
        None => Settings::default(),
    };

    let mut readers = Readers::new();
    register(&mut readers, &settings);

    let start = Instant::now();

    if args.path.is_file() {
        match readers.read_file(&args.path) {
            Ok(document) => print_document(&args.path, &document, args.content),
            Err(error) => eprintln!("{}: {error}", args.path.display()),
        }
        return;
    }

    let results = read_dir(&readers, &args.path).unwrap();
    let mut failed = 0;

    for (path, document) in &results {
        match document {
            Ok(document) => print_document(path, document, args.content),
            Err(error) => {
                failed += 1;
                eprintln!("{}: {error}", path.display());
            }
        }
    }

    println!(
        "Read {} documents ({failed} failed) in {:.2?}",
        results.len(),
        start.elapsed()
    );
}
