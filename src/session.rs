//! Per-screen search session state
//!
//! A [`SearchSession`] is the single state container behind one search
//! screen: the current result view, the error banner text, and the
//! in-flight flag that keeps a form from double-submitting. Every new
//! search replaces the whole view rather than patching it, so stale
//! partial state cannot survive across searches — single and batch
//! results are mutually exclusive by construction.
//!
//! All precondition checks (identifier shape, batch bounds) happen here,
//! before the client is touched, and every failure is converted to a
//! user-presentable message. Nothing escapes the session as a raw error.

use crate::client::LookupClient;
use crate::cnpj;
use crate::error::{Error, Result};
use crate::types::CompanyRecord;

/// Message shown when a batch search matches nothing
const NO_BATCH_MATCHES: &str = "No companies found for the provided CNPJs";

/// What the search screen is currently showing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionView {
    /// No search performed yet, or state cleared
    Idle,
    /// Single search hit
    Single(CompanyRecord),
    /// Batch search results, ready for export
    Batch(Vec<CompanyRecord>),
    /// Error banner with a user-presentable message
    Failed(String),
}

/// State container for one search screen
#[derive(Debug)]
pub struct SearchSession {
    view: SessionView,
    in_flight: bool,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Create an idle session
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: SessionView::Idle,
            in_flight: false,
        }
    }

    /// The current view
    #[must_use]
    pub fn view(&self) -> &SessionView {
        &self.view
    }

    /// Whether a lookup request is currently outstanding
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Records of the current batch view, if any
    #[must_use]
    pub fn batch_results(&self) -> Option<&[CompanyRecord]> {
        match &self.view {
            SessionView::Batch(records) => Some(records),
            _ => None,
        }
    }

    /// Run a single-CNPJ search and replace the session state with its outcome
    ///
    /// The raw input is normalized and shape-checked before any network
    /// call; invalid input becomes an error banner immediately. A submission
    /// while a previous request is still outstanding is ignored.
    pub async fn search_single(&mut self, client: &LookupClient, raw: &str) -> &SessionView {
        if self.in_flight {
            tracing::warn!("lookup already in flight, ignoring submission");
            return &self.view;
        }

        let digits = cnpj::normalize(raw);
        if !cnpj::is_valid(&digits) {
            self.view = SessionView::Failed(Error::InvalidIdentifier(raw.to_string()).to_string());
            return &self.view;
        }

        self.view = SessionView::Idle;
        self.in_flight = true;
        let outcome = client.lookup_one(&digits).await;
        self.in_flight = false;

        self.view = match outcome {
            Ok(record) => {
                tracing::debug!(cnpj = %digits, name = %record.display_name(), "company found");
                SessionView::Single(record)
            }
            Err(err) => SessionView::Failed(err.to_string()),
        };
        &self.view
    }

    /// Run a batch search from multi-line input and replace the session state
    ///
    /// Each line is normalized independently; blank lines are dropped. The
    /// batch is rejected before any network call when it is empty, exceeds
    /// the configured maximum, or contains invalid identifiers (the banner
    /// names the offending entries). Zero matches is reported as a banner,
    /// not an empty batch view.
    pub async fn search_batch(&mut self, client: &LookupClient, raw: &str) -> &SessionView {
        if self.in_flight {
            tracing::warn!("lookup already in flight, ignoring submission");
            return &self.view;
        }

        let cnpjs = match parse_batch_input(raw, client.config().max_batch_size) {
            Ok(cnpjs) => cnpjs,
            Err(err) => {
                self.view = SessionView::Failed(err.to_string());
                return &self.view;
            }
        };

        self.view = SessionView::Idle;
        self.in_flight = true;
        let outcome = client.lookup_many(&cnpjs).await;
        self.in_flight = false;

        self.view = match outcome {
            Ok(records) if records.is_empty() => {
                tracing::debug!(searched = cnpjs.len(), "batch search matched nothing");
                SessionView::Failed(NO_BATCH_MATCHES.to_string())
            }
            Ok(records) => {
                tracing::debug!(
                    searched = cnpjs.len(),
                    found = records.len(),
                    "batch search completed"
                );
                SessionView::Batch(records)
            }
            Err(err) => SessionView::Failed(err.to_string()),
        };
        &self.view
    }
}

/// Parse multi-line batch input into a validated identifier list
///
/// Lines are trimmed and normalized to digits; blank lines are skipped.
/// Fails when no identifiers remain, the count exceeds `max`, or any entry
/// is not a 14-digit identifier (all offenders are listed in the error).
pub fn parse_batch_input(raw: &str, max: usize) -> Result<Vec<String>> {
    let cnpjs: Vec<String> = raw
        .lines()
        .map(|line| cnpj::normalize(line.trim()))
        .filter(|digits| !digits.is_empty())
        .collect();

    if cnpjs.is_empty() {
        return Err(Error::EmptyBatch);
    }
    if cnpjs.len() > max {
        return Err(Error::BatchTooLarge {
            count: cnpjs.len(),
            max,
        });
    }

    let invalid: Vec<&str> = cnpjs
        .iter()
        .filter(|digits| !cnpj::is_valid(digits))
        .map(String::as_str)
        .collect();
    if !invalid.is_empty() {
        return Err(Error::InvalidIdentifier(invalid.join(", ")));
    }

    Ok(cnpjs)
}
