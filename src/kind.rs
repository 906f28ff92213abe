use http::StatusCode;

/// Classification tag attached to each stack entry
///
/// Kinds form a closed set and compare by tag, never by their textual
/// name. The `Display` form is the wire name carried by the payload's
/// `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum Kind {
    /// Unclassified failure, the default classification
    #[strum(serialize = "Internal")]
    Internal,
    /// Storage layer failure
    #[strum(serialize = "Database")]
    Database,
    /// Caller is authenticated but not allowed to act
    #[strum(serialize = "Forbidden")]
    Forbidden,
    /// Caller lacks valid credentials
    #[strum(serialize = "Unauthorized")]
    Unauthorized,
    /// Requested record does not exist
    #[strum(serialize = "Record not found")]
    NotFound,
    /// Record already exists
    #[strum(serialize = "Duplicated record")]
    Duplicated,
    /// Record creation failed
    #[strum(serialize = "Cannot create record")]
    Create,
    /// Record update failed
    #[strum(serialize = "Cannot update record")]
    Update,
    /// Record deletion failed
    #[strum(serialize = "Cannot delete record")]
    Delete,
    /// Input failed semantic validation
    #[strum(serialize = "Validation")]
    Validation,
    /// Request violated a structural precondition
    ///
    /// Also the tag behind [`ErrorStack::method_not_allowed`], which keeps
    /// this kind but carries status 405 instead of 400. Kind comparison
    /// cannot tell the two apart.
    ///
    /// [`ErrorStack::method_not_allowed`]: crate::ErrorStack::method_not_allowed
    #[strum(serialize = "Assertion")]
    Assertion,
}

impl Kind {
    /// HTTP status conventionally mapped to this kind
    ///
    /// This is the constructor default; an entry's own status is
    /// authoritative (`method_not_allowed` entries are `Assertion` with
    /// status 405).
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::Internal | Self::Database | Self::Create | Self::Update | Self::Delete => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Duplicated => StatusCode::CONFLICT,
            Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Assertion => StatusCode::BAD_REQUEST,
        }
    }

    /// Wire name of this kind
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::error::Error for Kind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_is_exhaustive() {
        let expected = [
            (Kind::Internal, 500),
            (Kind::Database, 500),
            (Kind::Forbidden, 403),
            (Kind::Unauthorized, 401),
            (Kind::NotFound, 404),
            (Kind::Duplicated, 409),
            (Kind::Create, 500),
            (Kind::Update, 500),
            (Kind::Delete, 500),
            (Kind::Validation, 422),
            (Kind::Assertion, 400),
        ];
        for (kind, status) in expected {
            assert_eq!(kind.status_code().as_u16(), status, "{kind:?}");
        }
    }

    #[test]
    fn wire_names_match_display() {
        assert_eq!(Kind::NotFound.as_str(), "Record not found");
        assert_eq!(Kind::Duplicated.as_str(), "Duplicated record");
        assert_eq!(Kind::Create.as_str(), "Cannot create record");
        assert_eq!(Kind::Internal.to_string(), "Internal");
        assert_eq!(Kind::Assertion.to_string(), "Assertion");
    }

    #[test]
    fn kinds_compare_by_tag() {
        assert_eq!(Kind::Validation, Kind::Validation);
        assert_ne!(Kind::Validation, Kind::Assertion);
    }
}
