//! JSON decoding for response bodies.
//!
//! RAWG mostly serves well-formed JSON. The lenient decoder parses JSON5
//! instead, which covers the relaxed syntax older proxies and hand-edited
//! fixtures produce: comments, trailing commas, single-quoted strings,
//! and unquoted keys. A byte-order mark and the `)]}'` anti-hijacking
//! prefix are stripped first.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Maximum number of body characters kept in a [`DecodeError`].
const MAX_SNIPPET: usize = 2000;

const NON_EXECUTE_PREFIX: &str = ")]}'";

/// Turns a response body into a payload.
pub type Decoder<T> = fn(&[u8]) -> Result<T, DecodeError>;

/// The parser failure behind a [`DecodeError`].
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Json5(#[from] json5::Error),
}

/// A 2xx body that could not be decoded into the declared payload type.
#[derive(Error, Debug)]
#[error("Failed to decode {type_name}: {source}")]
pub struct DecodeError {
    type_name: &'static str,
    body: String,
    #[source]
    source: ParseError,
}

impl DecodeError {
    fn new<T>(body: &[u8], source: impl Into<ParseError>) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            body: truncate_body(&String::from_utf8_lossy(body)),
            source: source.into(),
        }
    }

    /// The payload type decoding targeted.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The start of the offending body.
    pub fn body_snippet(&self) -> &str {
        &self.body
    }

    pub fn parse_error(&self) -> &ParseError {
        &self.source
    }
}

/// How response bodies are parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonMode {
    /// Accept JSON5 (see module docs).
    #[default]
    Lenient,
    /// Accept only RFC 8259 JSON.
    Strict,
}

impl JsonMode {
    pub fn decoder<T: DeserializeOwned>(self) -> Decoder<T> {
        match self {
            JsonMode::Lenient => decode_lenient::<T>,
            JsonMode::Strict => decode_strict::<T>,
        }
    }
}

pub fn decode_strict<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|e| DecodeError::new::<T>(body, e))
}

pub fn decode_lenient<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    let text = String::from_utf8_lossy(body);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    let text = text.strip_prefix(NON_EXECUTE_PREFIX).unwrap_or(text);
    json5::from_str(text).map_err(|e| DecodeError::new::<T>(body, e))
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_SNIPPET) {
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
        None => body.to_string(),
    }
}
