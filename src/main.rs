//! schemadoc — generate Markdown reference documentation from annotated
//! configuration schema declarations.
//!
//! Consumes declaration units (classes with fields, supertypes, annotations,
//! and doc comments) pre-parsed into JSON by the upstream source parser, and
//! emits one cross-linked Markdown page per documentable declaration plus a
//! dead-link report:
//!
//! - `schemadoc -o docs/schema declarations/*.json`

mod alias;
mod applicable;
mod index;
mod loader;
mod model;
mod page;
mod typelink;
mod writer;

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "schemadoc",
    about = "Generate Markdown documentation from configuration schema declarations"
)]
struct Cli {
    /// Input declaration files (glob patterns supported)
    #[arg(required = true)]
    files: Vec<String>,

    /// Output directory
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Fail the run when any cross-reference points at a page that was never emitted
    #[arg(long)]
    strict_links: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("Scanning declarations...");

    let input_files = loader::expand_globs(&cli.files)?;
    let mut units = Vec::new();
    for path in &input_files {
        units.extend(loader::load_units(path)?);
    }

    let index = index::DeclarationIndex::from_units(units);
    let aliases = alias::AliasTable::build(&index)?;
    let hierarchy = index::HierarchyIndex::build(&index, &aliases);

    let pages: Vec<page::GeneratedPage> = index
        .iter()
        .filter_map(|unit| page::assemble(unit, &index, &hierarchy, &aliases))
        .collect();

    println!("Done. Generated {} files", pages.len());

    writer::write_pages(&pages, &cli.output)?;

    let dead = writer::report_dead_links(&pages);
    if cli.strict_links && dead > 0 {
        bail!("{} dead links", dead);
    }
    Ok(())
}
