use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Outcome;

/// Write outcomes to `path` as a pretty-printed JSON array.
///
/// The file is replaced if it already exists.
pub fn write_json<P: AsRef<Path>>(path: P, outcomes: &[Outcome]) -> Result<()> {
    let json = serde_json::to_string_pretty(outcomes)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::error::UrlSweepError;
    use crate::core::types::Target;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn sample() -> Vec<Outcome> {
        let a = Target::normalize("https://a.com").unwrap();
        let b = Target::normalize("https://b.com").unwrap();
        vec![
            Outcome::responded(&a, 200, 15, 512, Some(false)),
            Outcome::unreachable(&b, "connection refused".to_string()),
        ]
    }

    #[test]
    fn test_write_json__reads_back_identical() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("results.json");
        let outcomes = sample();

        write_json(&path, &outcomes)?;

        let parsed: Vec<Outcome> = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(parsed, outcomes);
        Ok(())
    }

    #[test]
    fn test_write_json__field_names_and_omissions() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("results.json");

        write_json(&path, &sample())?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0]["url"], "https://a.com");
        assert_eq!(records[0]["status_code"], 200);
        assert_eq!(records[0]["ok"], true);
        assert_eq!(records[0]["ttfb_ms"], 15);
        assert_eq!(records[0]["size_bytes"], 512);
        assert_eq!(records[0]["contains"], false);
        assert!(records[0].get("error").is_none());

        assert_eq!(records[1]["status_code"], 0);
        assert_eq!(records[1]["error"], "connection refused");
        assert!(records[1].get("contains").is_none());
        Ok(())
    }

    #[test]
    fn test_write_json__empty_list() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("empty.json");

        write_json(&path, &[])?;

        assert_eq!(fs::read_to_string(&path)?.trim(), "[]");
        Ok(())
    }

    #[test]
    fn test_write_json__overwrites_existing_file() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("results.json");
        fs::write(&path, "stale content that is much longer than an empty array")?;

        write_json(&path, &[])?;

        assert_eq!(fs::read_to_string(&path)?.trim(), "[]");
        Ok(())
    }

    #[test]
    fn test_write_json__missing_directory_is_io_error() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("missing").join("results.json");

        let result = write_json(&path, &sample());

        assert!(matches!(result, Err(UrlSweepError::Io(_))));
        Ok(())
    }
}
