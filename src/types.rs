//! Core types: the company record and the wire shapes of the lookup service

use serde::{Deserialize, Serialize};

/// Placeholder rendered for a missing or empty record field
pub const NOT_SPECIFIED: &str = "Not specified";

/// A company registry record as returned by the lookup service
///
/// The wire format is a flat JSON object with fixed upper-case Portuguese
/// field names; the serde renames below pin them so field order and naming
/// stay deterministic across exports. Every field except the CNPJ itself is
/// optional — the scrape backend fills in whatever the registry exposes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company display name
    #[serde(rename = "NOME API DE PUXADA")]
    pub name: Option<String>,

    /// 14-digit tax identifier, the lookup key
    #[serde(rename = "CNPJ")]
    pub cnpj: String,

    /// Legal-nature code and description
    #[serde(rename = "NATUREZA")]
    pub legal_nature: Option<String>,

    /// Registration status text (e.g. "ATIVA")
    #[serde(rename = "SITUACAO")]
    pub status: Option<String>,

    /// Size classification (e.g. "ME", "EPP")
    #[serde(rename = "PORTE")]
    pub size: Option<String>,

    /// Micro-entrepreneur (MEI) flag
    #[serde(rename = "MEI")]
    pub mei: Option<String>,

    /// Contact phone number
    #[serde(rename = "TEL")]
    pub phone: Option<String>,

    /// Contact email address
    #[serde(rename = "EMAIL")]
    pub email: Option<String>,
}

impl CompanyRecord {
    /// Column names of the CSV export, in wire order
    pub const FIELD_NAMES: [&'static str; 8] = [
        "NOME API DE PUXADA",
        "CNPJ",
        "NATUREZA",
        "SITUACAO",
        "PORTE",
        "MEI",
        "TEL",
        "EMAIL",
    ];

    /// Field values in wire order, with absent fields rendered as the
    /// [`NOT_SPECIFIED`] placeholder
    #[must_use]
    pub fn field_values(&self) -> [&str; 8] {
        [
            or_placeholder(self.name.as_deref()),
            &self.cnpj,
            or_placeholder(self.legal_nature.as_deref()),
            or_placeholder(self.status.as_deref()),
            or_placeholder(self.size.as_deref()),
            or_placeholder(self.mei.as_deref()),
            or_placeholder(self.phone.as_deref()),
            or_placeholder(self.email.as_deref()),
        ]
    }

    /// Display name, falling back to the placeholder
    #[must_use]
    pub fn display_name(&self) -> &str {
        or_placeholder(self.name.as_deref())
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}

/// Request body for `POST /scrape`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeRequest {
    /// CNPJs to look up, already normalized and validated by the caller
    pub cnpjs: Vec<String>,
}

/// Error body returned by the service on non-2xx responses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure reason
    pub error: String,
}
