use crate::models::Comment;
use crate::parser;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

/// Scan a directory tree for TODO comments in files with the given
/// extension.
///
/// Comments are collected in traversal order, then line order within
/// each file; that order is the session's base ordering. Any filesystem
/// failure during the scan is fatal: the interactive session only starts
/// over a complete collection.
pub fn scan_directory(path: &Path, extension: &str) -> Result<Vec<Comment>> {
    let extension = extension.trim_start_matches('.');
    let mut comments = Vec::new();

    let mut walker = WalkBuilder::new(path);
    walker.standard_filters(true); // Respect .gitignore

    for result in walker.build() {
        let entry = result.context("failed to enumerate source files")?;

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        scan_file(entry.path(), &mut comments)
            .with_context(|| format!("failed to scan {}", entry.path().display()))?;
    }

    Ok(comments)
}

/// Scan a single file, appending one comment per line that carries a
/// non-quoted TODO marker.
fn scan_file(path: &Path, comments: &mut Vec<Comment>) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    for line in content.lines() {
        if let Some(raw) = parser::extract_comment(line) {
            comments.push(parser::parse_comment(raw, &file_name)?);
        }
    }

    Ok(())
}
