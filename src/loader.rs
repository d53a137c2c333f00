// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data loader: one-shot retrieval of the record set.
//!
//! The payload comes from a local file or an `http(s)://` URL. It must
//! decode to a JSON array; each element becomes a [`Record`] via
//! [`Record::from_value`], so individual entries never fail.
//!
//! [`spawn_load`] runs the retrieval on a background thread and hands back a
//! [`PendingLoad`] that yields its outcome exactly once. There is no retry,
//! no cancellation and no timeout beyond the transport's own.

use crate::types::Record;
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;
use std::path::PathBuf;
use std::thread;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Location used when neither the config file nor the CLI names one.
pub const DEFAULT_DATA_LOCATION: &str = "./data/manuals.json";

/// Fixed message shown in place of the results when loading fails.
pub const LOAD_ERROR_MESSAGE: &str =
    "manuals.json の読み込みに失敗しました。パスまたはJSON構造を確認してください。";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is a JSON {found}, expected an array")]
    NotArray { found: &'static str },
    #[error("loader thread ended without a result")]
    Interrupted,
}

/// Where the raw payload comes from.
pub trait DataSource: Send {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Fetch the raw payload bytes.
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn transport(&self, source: reqwest::Error) -> LoadError {
        LoadError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}

impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|err| self.transport(err))?;
        let response = client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .map_err(|err| self.transport(err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().map_err(|err| self.transport(err))?;
        Ok(body.to_vec())
    }
}

/// Pick a source for `location`: URLs go over HTTP, anything else is a path.
pub fn source_for(location: &str) -> Box<dyn DataSource> {
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Decode raw payload bytes into records.
///
/// Bytes are decoded as UTF-8 with BOM sniffing; malformed sequences are
/// replaced rather than rejected.
pub fn parse_payload(bytes: &[u8]) -> Result<Vec<Record>, LoadError> {
    let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if had_errors {
        warn!(encoding = encoding.name(), "payload contained undecodable bytes");
    }
    let value: Value = serde_json::from_str(&text)?;
    match value {
        Value::Array(items) => Ok(items.iter().map(Record::from_value).collect()),
        other => Err(LoadError::NotArray {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fetch and decode synchronously.
pub fn load(source: &dyn DataSource) -> Result<Vec<Record>, LoadError> {
    let location = source.describe();
    debug!(%location, "fetching catalog");
    let records = parse_payload(&source.fetch()?)?;
    info!(%location, records = records.len(), "catalog loaded");
    Ok(records)
}

/// Start the one-shot load on a background thread.
pub fn spawn_load(source: Box<dyn DataSource>) -> PendingLoad {
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        let outcome = load(source.as_ref());
        // The receiver may already be gone if the UI quit first.
        let _ = tx.send(outcome);
    });
    PendingLoad { rx: Some(rx) }
}

/// Handle on an in-flight load. Yields its outcome exactly once.
#[derive(Debug)]
pub struct PendingLoad {
    rx: Option<Receiver<Result<Vec<Record>, LoadError>>>,
}

impl PendingLoad {
    /// Take the outcome if it has arrived. Returns `Some` at most once.
    pub fn try_take(&mut self) -> Option<Result<Vec<Record>, LoadError>> {
        let rx = self.rx.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LoadError::Interrupted),
        };
        self.rx = None;
        Some(outcome)
    }

    /// Block until the outcome arrives.
    pub fn wait(mut self) -> Result<Vec<Record>, LoadError> {
        match self.rx.take() {
            Some(rx) => rx.recv().unwrap_or(Err(LoadError::Interrupted)),
            None => Err(LoadError::Interrupted),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.rx.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_payload_decodes() {
        let records = parse_payload(br#"[{"brand":"Acme"},{"brand":"Zed"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].brand.as_deref(), Some("Zed"));
    }

    #[test]
    fn bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(br#"[{"brand":"Acme"}]"#);
        assert_eq!(parse_payload(&bytes).unwrap().len(), 1);
    }

    #[test]
    fn object_payload_is_rejected() {
        let err = parse_payload(br#"{"brand":"Acme"}"#).unwrap_err();
        assert!(matches!(err, LoadError::NotArray { found: "object" }));
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(matches!(parse_payload(b"[{"), Err(LoadError::Json(_))));
    }

    #[test]
    fn malformed_elements_degrade() {
        let records = parse_payload(br#"[1, "x", {"brand": ["no"]}]"#).unwrap();
        assert_eq!(records, vec![Record::default(); 3]);
    }

    #[test]
    fn urls_route_to_http() {
        assert_eq!(source_for("https://example.com/m.json").describe(), "https://example.com/m.json");
        assert_eq!(source_for("data/m.json").describe(), "data/m.json");
    }

    #[test]
    fn waited_handle_reports_missing_file() {
        let pending = spawn_load(Box::new(FileSource::new("/nonexistent/manuals.json")));
        assert!(matches!(pending.wait(), Err(LoadError::Io { .. })));
    }
}
