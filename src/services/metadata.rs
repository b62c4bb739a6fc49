use crate::domain::models::MetadataRecord;
use std::path::Path;

pub fn load_record(path: &Path) -> anyhow::Result<MetadataRecord> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::load_record;
    use tempfile::TempDir;

    fn write_and_load(body: &str) -> anyhow::Result<crate::domain::models::MetadataRecord> {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("manual.json");
        std::fs::write(&path, body).expect("write sidecar");
        load_record(&path)
    }

    #[test]
    fn recognized_fields_parse_and_unknown_fields_are_ignored() {
        let record = write_and_load(
            r#"{
                "title": "Honda CBR600RR Service Manual",
                "brand": "Honda",
                "model": "CBR600RR",
                "yearRange": "2003-2006",
                "manualType": "workshop manual",
                "tags": ["service", "moto"],
                "language": "en"
            }"#,
        )
        .expect("valid record");
        assert_eq!(record.brand.as_deref(), Some("Honda"));
        assert_eq!(record.model.as_deref(), Some("CBR600RR"));
        assert_eq!(record.year_range.as_deref(), Some("2003-2006"));
        assert_eq!(record.manual_type.as_deref(), Some("workshop manual"));
        assert_eq!(record.year, None);
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let record = write_and_load(r#"{"brand": "Kawasaki", "year": null, "yearRange": null}"#)
            .expect("valid record");
        assert_eq!(record.brand.as_deref(), Some("Kawasaki"));
        assert_eq!(record.year, None);
        assert_eq!(record.year_range, None);
        assert_eq!(record.model, None);
    }

    #[test]
    fn non_string_brand_is_absent_not_a_parse_error() {
        let record = write_and_load(r#"{"brand": 42, "model": ["Ninja"]}"#).expect("valid record");
        assert_eq!(record.brand, None);
        assert_eq!(record.model, None);
    }

    #[test]
    fn integer_year_parses() {
        let record = write_and_load(r#"{"brand": "Yamaha", "year": 2009}"#).expect("valid record");
        assert_eq!(record.year, Some(2009));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(write_and_load("{not json").is_err());
    }
}
