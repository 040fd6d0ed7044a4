use cahier_client::{ApiError, ApiErrorKind};

/// Follow-up advice printed under an error of this kind.
#[must_use]
pub const fn for_kind(kind: ApiErrorKind) -> Option<&'static str> {
    match kind {
        ApiErrorKind::Unauthorized => Some("not signed in or session expired; run `cahier auth login`"),
        ApiErrorKind::Forbidden => Some("this account's role cannot perform that action"),
        ApiErrorKind::Transport => {
            Some("backend unreachable; check --base-url or CAHIER_API__BASE_URL")
        }
        ApiErrorKind::RoleMismatch => Some("pass the --role the account actually has"),
        _ => None,
    }
}

/// Hint for the first [`ApiError`] in an error chain.
#[must_use]
pub fn for_error(error: &anyhow::Error) -> Option<&'static str> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ApiError>())
        .and_then(|api| for_kind(api.kind()))
}
