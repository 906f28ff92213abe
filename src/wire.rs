//! Compact JSON wire format for error stacks
//!
//! Marshaling exposes the most recent entry at the top level and the
//! ordered ancestors under `parent_errors`. Unmarshaling is total and
//! lossy: only the status code and message survive the round trip.

use serde::{Deserialize, Serialize};

use crate::{Cause, Entry, ErrorStack};

/// One serialized entry, as it appears inside `parent_errors`
#[derive(Debug, Serialize, Deserialize)]
struct WireEntry {
    id: u32,
    code: i64,
    #[serde(rename = "error")]
    message: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Top-level payload: the last entry flattened, ancestors nested
#[derive(Debug, Serialize, Deserialize)]
struct WirePayload {
    // wider than a valid status so any integer the peer sends still
    // parses; unrecognized values fall through to `internal`
    #[serde(default)]
    code: i64,
    #[serde(rename = "error", default)]
    message: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(rename = "parent_errors", default, skip_serializing_if = "Vec::is_empty")]
    parents: Vec<WireEntry>,
}

impl From<&Entry> for WireEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.sequence(),
            code: i64::from(entry.status_code().as_u16()),
            message: entry.message().to_owned(),
            kind: entry.kind().as_str().to_owned(),
        }
    }
}

impl ErrorStack {
    /// Serialize to the wire format
    ///
    /// An empty stack serializes to an empty string; that state never
    /// arises through the public constructors
    pub fn to_json(&self) -> serde_json::Result<String> {
        let Some((last, parents)) = self.entries.split_last() else {
            return Ok(String::new());
        };
        serde_json::to_string(&WirePayload {
            code: i64::from(last.status_code().as_u16()),
            message: last.message().to_owned(),
            kind: last.kind().as_str().to_owned(),
            parents: parents.iter().map(WireEntry::from).collect(),
        })
    }

    /// Reconstruct a stack from wire data
    ///
    /// Total and deliberately lossy: the payload's `code` maps back to a
    /// constructor through a fixed table (unrecognized codes become
    /// [`internal`](Self::internal)) and its `error` field becomes the
    /// single entry's message. `parent_errors` and the `type` field are
    /// discarded, so a multi-entry chain never survives the round trip.
    /// Input that does not parse as the wire shape degrades to an
    /// `internal` stack carrying the raw input text.
    #[must_use]
    pub fn from_json(data: &str) -> Self {
        let payload: WirePayload = match serde_json::from_str(data) {
            Ok(payload) => payload,
            Err(parse_err) => {
                tracing::debug!(error = %parse_err, "malformed error payload, degrading to internal");
                return Self::internal(data);
            }
        };
        let mut stack = match payload.code {
            403 => Self::forbidden(Cause::Empty),
            401 => Self::unauthorized(Cause::Empty),
            404 => Self::not_found(Cause::Empty),
            422 => Self::validation(Cause::Empty, &[]),
            409 => Self::duplicated(Cause::Empty),
            400 => Self::assertion(Cause::Empty),
            405 => Self::method_not_allowed(Cause::Empty),
            _ => Self::internal(Cause::Empty),
        };
        if let Some(entry) = stack.entries.first_mut() {
            entry.message = payload.message;
        }
        stack
    }
}
