//! Export serialization: company records to downloadable JSON or CSV
//!
//! Both exporters are pure byte producers: they return an [`ExportArtifact`]
//! holding the encoded bytes, a timestamped suggested filename, and a content
//! type. Actually persisting the artifact is a separate, injectable step
//! ([`ExportArtifact::save_to`]) so serialization stays unit-testable.
//!
//! CSV output matches the lookup service's own export format: a header of
//! the eight fixed column names, then one row per record with every value
//! double-quoted. Embedded double quotes in field values are not escaped;
//! this mirrors the format consumers of these files already parse.

use crate::error::Result;
use crate::types::CompanyRecord;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Content type of JSON exports
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type of CSV exports
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

/// A downloadable export: encoded bytes plus a suggested filename
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested filename, embedding the export timestamp
    pub filename: String,
    /// MIME content type of the bytes
    pub content_type: &'static str,
    /// UTF-8 encoded payload
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the artifact into `dir` under its suggested filename
    ///
    /// Returns the full path of the written file. Overwrites an existing
    /// file of the same name.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        tracing::debug!(path = %path.display(), bytes = self.bytes.len(), "export saved");
        Ok(path)
    }
}

/// Serialize records as pretty-printed JSON
///
/// Byte-for-byte deterministic for a given record list: fields serialize in
/// declaration order and absent fields appear as explicit nulls, so decoding
/// the output reproduces the input exactly.
pub fn to_json(records: &[CompanyRecord]) -> Result<ExportArtifact> {
    json_artifact(records, Utc::now())
}

/// Serialize records as CSV
///
/// Emits the eight fixed column names as an unquoted header row, then one
/// row per record with every value wrapped in double quotes. Rows are joined
/// by `\n` with no trailing newline. Missing fields emit the
/// "Not specified" placeholder rather than an empty cell.
#[must_use]
pub fn to_csv(records: &[CompanyRecord]) -> ExportArtifact {
    csv_artifact(records, Utc::now())
}

fn json_artifact(records: &[CompanyRecord], at: DateTime<Utc>) -> Result<ExportArtifact> {
    let bytes = serde_json::to_vec_pretty(records)?;
    Ok(ExportArtifact {
        filename: format!("companies_{}.json", at.timestamp_millis()),
        content_type: JSON_CONTENT_TYPE,
        bytes,
    })
}

fn csv_artifact(records: &[CompanyRecord], at: DateTime<Utc>) -> ExportArtifact {
    let header = CompanyRecord::FIELD_NAMES.join(",");
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header);
    for record in records {
        let row: Vec<String> = record
            .field_values()
            .iter()
            .map(|value| format!("\"{}\"", value))
            .collect();
        lines.push(row.join(","));
    }

    ExportArtifact {
        filename: format!("companies_{}.csv", at.timestamp_millis()),
        content_type: CSV_CONTENT_TYPE,
        bytes: lines.join("\n").into_bytes(),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn full_record() -> CompanyRecord {
        CompanyRecord {
            name: Some("ACME COMERCIO LTDA".to_string()),
            cnpj: "11222333000181".to_string(),
            legal_nature: Some("206-2 - Sociedade Empresária Limitada".to_string()),
            status: Some("ATIVA".to_string()),
            size: Some("ME".to_string()),
            mei: Some("Não".to_string()),
            phone: Some("(11) 4002-8922".to_string()),
            email: Some("contato@acme.com.br".to_string()),
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn json_export_of_empty_list_is_the_empty_array_literal() {
        let artifact = json_artifact(&[], fixed_time()).unwrap();
        assert_eq!(artifact.bytes, b"[]");
    }

    #[test]
    fn json_export_round_trips_records_exactly() {
        let records = vec![
            full_record(),
            CompanyRecord {
                cnpj: "13037746000111".to_string(),
                ..CompanyRecord::default()
            },
        ];
        let artifact = to_json(&records).unwrap();
        let decoded: Vec<CompanyRecord> = serde_json::from_slice(&artifact.bytes).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn json_export_is_pretty_printed_and_deterministic() {
        let records = vec![full_record()];
        let a = json_artifact(&records, fixed_time()).unwrap();
        let b = json_artifact(&records, fixed_time()).unwrap();
        assert_eq!(a, b);

        let text = String::from_utf8(a.bytes).unwrap();
        assert!(text.contains('\n'), "pretty output spans multiple lines");
        assert!(text.contains("\"NOME API DE PUXADA\": \"ACME COMERCIO LTDA\""));
    }

    #[test]
    fn json_filename_embeds_millisecond_timestamp() {
        let artifact = json_artifact(&[], fixed_time()).unwrap();
        assert_eq!(
            artifact.filename,
            format!("companies_{}.json", fixed_time().timestamp_millis())
        );
        assert_eq!(artifact.content_type, JSON_CONTENT_TYPE);
    }

    #[test]
    fn csv_export_emits_fixed_header_and_quoted_rows() {
        let artifact = csv_artifact(&[full_record()], fixed_time());
        let text = String::from_utf8(artifact.bytes).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines.len(), 2, "header plus one row, no trailing newline");
        assert_eq!(
            lines[0],
            "NOME API DE PUXADA,CNPJ,NATUREZA,SITUACAO,PORTE,MEI,TEL,EMAIL"
        );
        assert_eq!(
            lines[1],
            "\"ACME COMERCIO LTDA\",\"11222333000181\",\
             \"206-2 - Sociedade Empresária Limitada\",\"ATIVA\",\"ME\",\"Não\",\
             \"(11) 4002-8922\",\"contato@acme.com.br\""
        );
    }

    #[test]
    fn csv_export_fills_missing_fields_with_placeholder() {
        let record = CompanyRecord {
            cnpj: "13037746000111".to_string(),
            status: Some("ATIVA".to_string()),
            ..CompanyRecord::default()
        };
        let artifact = csv_artifact(&[record], fixed_time());
        let text = String::from_utf8(artifact.bytes).unwrap();
        let row = text.split('\n').nth(1).unwrap();

        assert_eq!(
            row,
            "\"Not specified\",\"13037746000111\",\"Not specified\",\"ATIVA\",\
             \"Not specified\",\"Not specified\",\"Not specified\",\"Not specified\""
        );
    }

    #[test]
    fn csv_export_of_empty_list_is_just_the_header() {
        let artifact = csv_artifact(&[], fixed_time());
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert_eq!(
            text,
            "NOME API DE PUXADA,CNPJ,NATUREZA,SITUACAO,PORTE,MEI,TEL,EMAIL"
        );
        assert_eq!(artifact.content_type, CSV_CONTENT_TYPE);
        assert!(artifact.filename.ends_with(".csv"));
    }

    #[test]
    fn csv_export_does_not_escape_embedded_quotes() {
        // Format compatibility: a quote inside a value passes through as-is.
        let record = CompanyRecord {
            name: Some("ACME \"HOLDING\" LTDA".to_string()),
            cnpj: "11222333000181".to_string(),
            ..CompanyRecord::default()
        };
        let artifact = csv_artifact(&[record], fixed_time());
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.contains("\"ACME \"HOLDING\" LTDA\""));
    }

    #[test]
    fn save_to_writes_bytes_under_suggested_filename() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = csv_artifact(&[full_record()], fixed_time());

        let path = artifact.save_to(dir.path()).unwrap();

        assert_eq!(path, dir.path().join(&artifact.filename));
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
    }

    #[test]
    fn save_to_fails_on_missing_directory() {
        let artifact = csv_artifact(&[], fixed_time());
        let err = artifact
            .save_to(Path::new("/nonexistent/dir/for/export"))
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
