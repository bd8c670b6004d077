//! Page persistence and dead-link reporting.

use crate::page::GeneratedPage;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Write every page to `<display-name>.md` under `out_dir`, overwriting any
/// existing file of the same name. The directory is created if absent.
pub fn write_pages(pages: &[GeneratedPage], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;
    for page in pages {
        let path = out_dir.join(format!("{}.md", page.key));
        fs::write(&path, &page.body)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Report every link whose target page was never emitted: one warning per
/// (page, target) pair on stderr. Returns the dead-link count; reporting is
/// diagnostic only and the caller decides whether it fails the run.
pub fn report_dead_links(pages: &[GeneratedPage]) -> usize {
    let emitted: HashSet<&str> = pages.iter().map(|p| p.key.as_str()).collect();
    let mut count = 0;
    for page in pages {
        for target in &page.links {
            if !emitted.contains(target.as_str()) {
                eprintln!("warning: dead link to \"{}\" in file \"{}\"", target, page.key);
                count += 1;
            }
        }
    }
    count
}
