use std::fmt;

use http::StatusCode;

use crate::Kind;

/// Normalized cause of a new stack entry
///
/// Constructors accept anything convertible into this. A `Stack` cause is
/// extended in place; everything else starts a fresh one-entry stack.
#[derive(Debug)]
pub enum Cause {
    /// Extend an existing stack instead of starting a new one
    Stack(ErrorStack),
    /// Plain message text
    Text(String),
    /// No usable textual representation; the message is empty
    Empty,
}

impl Cause {
    /// Cause from any concrete error's textual representation
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::Text(err.to_string())
    }

    /// Message for the entry about to be pushed, with the optional
    /// bracketed resource prefix (`[a][b] text`)
    fn message(&self, resources: &[&str]) -> String {
        let text = match self {
            Self::Stack(stack) => stack.to_string(),
            Self::Text(text) => text.clone(),
            Self::Empty => String::new(),
        };
        if resources.is_empty() {
            return text;
        }
        let mut prefix = String::new();
        for resource in resources {
            prefix.push('[');
            prefix.push_str(resource);
            prefix.push(']');
        }
        format!("{prefix} {text}")
    }
}

impl From<ErrorStack> for Cause {
    fn from(stack: ErrorStack) -> Self {
        Self::Stack(stack)
    }
}

impl From<String> for Cause {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Cause {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<anyhow::Error> for Cause {
    fn from(err: anyhow::Error) -> Self {
        Self::Text(err.to_string())
    }
}

/// One classified error occurrence in a stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) sequence: u32,
    pub(crate) message: String,
    pub(crate) kind: Kind,
    pub(crate) status: StatusCode,
}

impl Entry {
    /// Position in the chain, 0 for the root cause
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Human-readable message, including any resource prefix
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Classification tag
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// HTTP status recorded for this entry
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status
    }
}

/// Ordered, append-only chain of classified errors, oldest first
///
/// Every public constructor yields a non-empty stack; the empty state only
/// exists through [`Default`] and is treated as an internal fallback.
/// Wrapping consumes the stack by value and hands the same stack back with
/// one more entry, so a chain belongs to one logical call flow at a time.
/// Sharing one across threads requires external synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStack {
    pub(crate) entries: Vec<Entry>,
}

impl ErrorStack {
    /// Unclassified internal failure, status 500
    ///
    /// The catch-all constructor; deserialization of unrecognized payloads
    /// falls back to it
    pub fn internal(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Internal, StatusCode::INTERNAL_SERVER_ERROR, &[])
    }

    /// Storage layer failure, status 500
    pub fn database(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Database, StatusCode::INTERNAL_SERVER_ERROR, &[])
    }

    /// Access denied for an authenticated caller, status 403
    pub fn forbidden(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Forbidden, StatusCode::FORBIDDEN, &[])
    }

    /// Missing or invalid credentials, status 401
    pub fn unauthorized(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Unauthorized, StatusCode::UNAUTHORIZED, &[])
    }

    /// Requested record does not exist, status 404
    pub fn not_found(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::NotFound, StatusCode::NOT_FOUND, &[])
    }

    /// Record creation failed, status 500
    ///
    /// `resources` names the affected resources and renders as a bracketed
    /// message prefix, e.g. `[user] insert failed`
    pub fn create(cause: impl Into<Cause>, resources: &[&str]) -> Self {
        Self::wrap(cause.into(), Kind::Create, StatusCode::INTERNAL_SERVER_ERROR, resources)
    }

    /// Record update failed, status 500
    pub fn update(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Update, StatusCode::INTERNAL_SERVER_ERROR, &[])
    }

    /// Record deletion failed, status 500
    pub fn delete(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Delete, StatusCode::INTERNAL_SERVER_ERROR, &[])
    }

    /// Input failed semantic validation, status 422
    ///
    /// `resources` renders as a bracketed message prefix, e.g.
    /// `[user] bad field`
    pub fn validation(cause: impl Into<Cause>, resources: &[&str]) -> Self {
        Self::wrap(cause.into(), Kind::Validation, StatusCode::UNPROCESSABLE_ENTITY, resources)
    }

    /// Record already exists, status 409
    pub fn duplicated(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Duplicated, StatusCode::CONFLICT, &[])
    }

    /// Structural precondition violated, status 400
    pub fn assertion(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Assertion, StatusCode::BAD_REQUEST, &[])
    }

    /// HTTP method not allowed, status 405
    ///
    /// Shares [`Kind::Assertion`] with [`assertion`](Self::assertion) while
    /// carrying a different status, so kind checks cannot distinguish the
    /// two. Kept as observed upstream behavior
    pub fn method_not_allowed(cause: impl Into<Cause>) -> Self {
        Self::wrap(cause.into(), Kind::Assertion, StatusCode::METHOD_NOT_ALLOWED, &[])
    }

    fn wrap(cause: Cause, kind: Kind, status: StatusCode, resources: &[&str]) -> Self {
        let message = cause.message(resources);
        let mut stack = match cause {
            Cause::Stack(stack) => stack,
            Cause::Text(_) | Cause::Empty => Self::default(),
        };
        let sequence = stack.entries.last().map_or(0, |last| last.sequence + 1);
        stack.entries.push(Entry { sequence, message, kind, status });
        stack
    }

    /// HTTP status of the most recent entry
    ///
    /// An empty stack reports 500, matching the transport layer's
    /// default-on-empty policy
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.entries.last().map_or(StatusCode::INTERNAL_SERVER_ERROR, Entry::status_code)
    }

    /// All entries, root cause first
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no entries
    ///
    /// Only the internal fallback state is empty; public constructors
    /// always produce at least one entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classification of the most recent entry
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        self.entries.last().map(Entry::kind)
    }

    /// Classification of the root cause
    #[must_use]
    pub fn root_kind(&self) -> Option<Kind> {
        self.entries.first().map(Entry::kind)
    }
}

impl fmt::Display for ErrorStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entries.last() {
            Some(entry) => f.write_str(&entry.message),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ErrorStack {}

/// Whether `err` is a non-empty [`ErrorStack`] whose most recent entry has
/// the given kind
///
/// Comparison is by tag, never by message text. Any other error type yields
/// `false`
#[must_use]
pub fn is_kind(err: &(dyn std::error::Error + 'static), kind: Kind) -> bool {
    err.downcast_ref::<ErrorStack>().is_some_and(|stack| stack.kind() == Some(kind))
}

/// Same check as [`is_kind`], against the root (oldest) entry
#[must_use]
pub fn is_root_of_kind(err: &(dyn std::error::Error + 'static), kind: Kind) -> bool {
    err.downcast_ref::<ErrorStack>().is_some_and(|stack| stack.root_kind() == Some(kind))
}
