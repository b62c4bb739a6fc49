use crate::domain::models::JsonOut;
use crate::services::sorter::SortError;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Top-level failure: error envelope on stdout in JSON mode, a plain line
/// on stderr otherwise.
pub fn print_failure(json: bool, err: &anyhow::Error) {
    if json {
        let envelope = serde_json::json!({
            "ok": false,
            "error": { "code": error_code(err), "message": err.to_string() }
        });
        match serde_json::to_string_pretty(&envelope) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<SortError>() {
        Some(SortError::SourceMissing(_)) => "SOURCE_MISSING",
        None => "RUNTIME_ERROR",
    }
}
