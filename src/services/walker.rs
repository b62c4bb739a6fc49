use crate::domain::models::{ActionStatus, FileAction, SortReport};
use crate::services::sorter::{self, SortOptions};
use std::fs::DirEntry;
use std::path::Path;

/// Recursively walks `dir`, handing every `.pdf` file to the sorter. An
/// unlistable directory counts as one error; traversal continues with its
/// siblings.
pub fn process_directory(dir: &Path, opts: &SortOptions, report: &mut SortReport) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            record_walk_error(report, dir, &format!("failed to list directory: {}", err));
            return;
        }
    };

    // Snapshot before processing so folders created by moves below this
    // directory are never re-discovered mid-iteration.
    let mut children: Vec<DirEntry> = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => children.push(entry),
            Err(err) => {
                record_walk_error(report, dir, &format!("failed to read entry: {}", err));
            }
        }
    }

    for entry in children {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                record_walk_error(report, &path, &format!("failed to stat entry: {}", err));
                continue;
            }
        };

        if file_type.is_dir() {
            let name = entry.file_name();
            if looks_like_sorted_dir(&name.to_string_lossy()) {
                report.skipped_dirs.push(path.display().to_string());
                continue;
            }
            process_directory(&path, opts, report);
        } else if file_type.is_file() && has_pdf_extension(&path) {
            sorter::process_pdf_file(&path, opts, report);
        }
    }
}

fn record_walk_error(report: &mut SortReport, path: &Path, detail: &str) {
    report.stats.errors += 1;
    report.actions.push(FileAction {
        file: path.display().to_string(),
        status: ActionStatus::Error,
        destination: None,
        detail: Some(detail.to_string()),
    });
}

pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Heuristic for folders an earlier run has produced: a leading letter,
/// then only letters/digits/space/hyphen/underscore, name length strictly
/// between 2 and 30. The boundary conditions are load-bearing for re-run
/// behavior and must not drift.
pub fn looks_like_sorted_dir(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_') {
        return false;
    }
    let len = name.chars().count();
    len > 2 && len < 30
}
