use crate::cli::{Cli, Commands};
use crate::domain::models::{DemoCase, JsonOut, MetadataRecord, SortReport};
use crate::services::output::print_out;
use crate::services::sorter::{self, SortOptions};
use crate::services::{naming, storage};
use std::path::{Path, PathBuf};

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Sort {
            source,
            target,
            dry_run,
        } => {
            let config = storage::load_config()?;
            let target = resolve_target(source, target.as_deref(), &config.general.default_target);
            let opts = SortOptions {
                source: source.clone(),
                target,
                dry_run: *dry_run,
            };
            let report = sorter::run(&opts)?;
            storage::audit(
                "sort",
                serde_json::json!({
                    "source": report.source,
                    "target": report.target,
                    "dry_run": report.dry_run,
                    "stats": report.stats
                }),
            );
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                print_report_rows(&report);
            }
        }
        Commands::Demo => {
            let cases = demo_cases();
            print_out(cli.json, &cases, |c| {
                format!("{}\t{}", c.filename, c.folder)
            })?;
        }
    }

    Ok(())
}

fn resolve_target(source: &Path, target: Option<&Path>, default_target: &Option<String>) -> PathBuf {
    if let Some(target) = target {
        return target.to_path_buf();
    }
    if let Some(configured) = default_target {
        return PathBuf::from(configured);
    }
    source.to_path_buf()
}

fn print_report_rows(report: &SortReport) {
    for dir in &report.skipped_dirs {
        println!("skip-dir\t{}", dir);
    }
    for action in &report.actions {
        let trailer = action
            .destination
            .as_deref()
            .or(action.detail.as_deref())
            .unwrap_or("");
        println!("{}\t{}\t{}", action.status.as_str(), action.file, trailer);
    }
    println!("processed: {}", report.stats.processed);
    println!("moved: {}", report.stats.moved);
    println!("skipped: {}", report.stats.skipped);
    println!("errors: {}", report.stats.errors);
    if report.dry_run {
        println!("dry run: no files were moved");
    }
}

fn demo_cases() -> Vec<DemoCase> {
    let samples = [
        (
            "Honda_CBR600RR_Service.pdf",
            MetadataRecord {
                brand: Some("Honda".to_string()),
                model: Some("CBR600RR".to_string()),
                year_range: Some("2003-2006".to_string()),
                manual_type: Some("workshop manual".to_string()),
                ..MetadataRecord::default()
            },
        ),
        (
            "Yamaha_R1_Owner.pdf",
            MetadataRecord {
                brand: Some("Yamaha".to_string()),
                model: Some("YZF-R1".to_string()),
                year: Some(2009),
                manual_type: Some("owner manual".to_string()),
                ..MetadataRecord::default()
            },
        ),
        (
            "Kawasaki_Parts.pdf",
            MetadataRecord {
                brand: Some("Kawasaki".to_string()),
                model: Some("Ninja 250".to_string()),
                manual_type: Some("parts catalog".to_string()),
                ..MetadataRecord::default()
            },
        ),
    ];

    samples
        .into_iter()
        .map(|(filename, record)| {
            let brand = naming::sanitize_folder_name(record.brand.as_deref().unwrap_or(""));
            let model = naming::sanitize_folder_name(record.model.as_deref().unwrap_or(""));
            let folder = naming::derive_folder_name(&brand, &model, &record);
            DemoCase {
                filename: filename.to_string(),
                metadata: record,
                folder,
            }
        })
        .collect()
}
