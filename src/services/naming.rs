use crate::domain::models::MetadataRecord;

const INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const MAX_SEGMENT_CHARS: usize = 50;
const MAX_TYPE_CHARS: usize = 20;

/// Reduces an arbitrary string to a path segment safe on common operating
/// systems: reserved characters and whitespace runs become single
/// underscores, underscores never lead, trail, or repeat, output is capped
/// at 50 characters. Idempotent.
pub fn sanitize_folder_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_underscore = false;
    for c in raw.trim().chars() {
        let mapped = if INVALID_CHARS.contains(&c) || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if mapped == '_' {
            if last_was_underscore {
                continue;
            }
            last_was_underscore = true;
        } else {
            last_was_underscore = false;
        }
        out.push(mapped);
    }
    let capped: String = out.trim_matches('_').chars().take(MAX_SEGMENT_CHARS).collect();
    capped.trim_end_matches('_').to_string()
}

/// Segment order is fixed: brand, model, yearRange-or-year, manual type.
/// A present non-empty `yearRange` always wins over `year`. A `manualType`
/// of exactly "other", or one of 20+ characters, is never appended.
pub fn derive_folder_name(brand: &str, model: &str, record: &MetadataRecord) -> String {
    let mut name = String::from(brand);
    if !model.is_empty() {
        name.push('_');
        name.push_str(model);
    }

    match record.year_range.as_deref() {
        Some(range) if !range.is_empty() => {
            let range = sanitize_folder_name(range);
            if !range.is_empty() {
                name.push('_');
                name.push_str(&range);
            }
        }
        _ => {
            if let Some(year) = record.year {
                name.push('_');
                name.push_str(&year.to_string());
            }
        }
    }

    if let Some(manual_type) = record.manual_type.as_deref() {
        if manual_type != "other" && manual_type.chars().count() < MAX_TYPE_CHARS {
            let manual_type = sanitize_folder_name(manual_type);
            if !manual_type.is_empty() {
                name.push('_');
                name.push_str(&manual_type);
            }
        }
    }

    name
}
