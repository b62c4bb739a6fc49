use crate::domain::models::{ActionStatus, FileAction, SortReport};
use crate::services::{metadata, mover, naming, walker};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum SortError {
    #[error("source directory does not exist: {0}")]
    SourceMissing(String),
}

pub struct SortOptions {
    pub source: PathBuf,
    pub target: PathBuf,
    pub dry_run: bool,
}

/// One full sort pass. Only a missing source directory is fatal; everything
/// below it is recovered per file or per directory.
pub fn run(opts: &SortOptions) -> anyhow::Result<SortReport> {
    if !opts.source.is_dir() {
        return Err(SortError::SourceMissing(opts.source.display().to_string()).into());
    }
    let mut report = SortReport::new(&opts.source, &opts.target, opts.dry_run);
    walker::process_directory(&opts.source, opts, &mut report);
    Ok(report)
}

pub fn process_pdf_file(pdf: &Path, opts: &SortOptions, report: &mut SortReport) {
    report.stats.processed += 1;
    let file = pdf.display().to_string();

    let sidecar = pdf.with_extension("json");
    if !sidecar.exists() {
        report.stats.skipped += 1;
        report.actions.push(FileAction {
            file,
            status: ActionStatus::Skipped,
            destination: None,
            detail: Some("no metadata file".to_string()),
        });
        return;
    }

    let record = match metadata::load_record(&sidecar) {
        Ok(record) => record,
        Err(err) => {
            report.stats.errors += 1;
            report.actions.push(FileAction {
                file,
                status: ActionStatus::Error,
                destination: None,
                detail: Some(format!("invalid metadata: {}", err)),
            });
            return;
        }
    };

    let brand = naming::sanitize_folder_name(record.brand.as_deref().unwrap_or(""));
    let model = naming::sanitize_folder_name(record.model.as_deref().unwrap_or(""));
    if brand.is_empty() {
        report.stats.skipped += 1;
        report.actions.push(FileAction {
            file,
            status: ActionStatus::Skipped,
            destination: None,
            detail: Some("no brand in metadata".to_string()),
        });
        return;
    }

    let folder = naming::derive_folder_name(&brand, &model, &record);
    let target_dir = opts.target.join(&folder);

    if opts.dry_run {
        report.actions.push(FileAction {
            file,
            status: ActionStatus::WouldMove,
            destination: Some(target_dir.display().to_string()),
            detail: None,
        });
        return;
    }

    match mover::move_pair(pdf, &sidecar, &target_dir) {
        Ok(_) => {
            report.stats.moved += 1;
            report.actions.push(FileAction {
                file,
                status: ActionStatus::Moved,
                destination: Some(target_dir.display().to_string()),
                detail: None,
            });
        }
        Err(err) => {
            report.stats.errors += 1;
            report.actions.push(FileAction {
                file,
                status: ActionStatus::Error,
                destination: Some(target_dir.display().to_string()),
                detail: Some(format!("move failed: {}", err)),
            });
        }
    }
}
