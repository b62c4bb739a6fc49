use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Sidecar metadata document next to a PDF manual. Only the fields that
/// drive folder naming are recognized. A non-string value in a string field
/// reads as absent, so a sloppy sidecar skips the file instead of failing
/// the run.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct MetadataRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient_year")]
    pub year: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub year_range: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub manual_type: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Moved,
    WouldMove,
    Skipped,
    Error,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moved => "moved",
            Self::WouldMove => "would_move",
            Self::Skipped => "skipped",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct FileAction {
    pub file: String,
    pub status: ActionStatus,
    pub destination: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Serialize, Default, Clone)]
pub struct RunStats {
    pub processed: usize,
    pub moved: usize,
    pub skipped: usize,
    pub errors: usize,
}

#[derive(Debug, Serialize)]
pub struct SortReport {
    pub source: String,
    pub target: String,
    pub dry_run: bool,
    pub actions: Vec<FileAction>,
    pub skipped_dirs: Vec<String>,
    pub stats: RunStats,
}

impl SortReport {
    pub fn new(source: &Path, target: &Path, dry_run: bool) -> Self {
        Self {
            source: source.display().to_string(),
            target: target.display().to_string(),
            dry_run,
            actions: Vec::new(),
            skipped_dirs: Vec::new(),
            stats: RunStats::default(),
        }
    }
}

#[derive(Serialize)]
pub struct DemoCase {
    pub filename: String,
    pub metadata: MetadataRecord,
    pub folder: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigGeneral {
    #[serde(default)]
    pub default_target: Option<String>,
}
