//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod finanz_repo;
pub mod hund_repo;
pub mod kalender_repo;
pub mod kommunikation_repo;
pub mod kunde_repo;
pub mod kurs_repo;
pub mod refresh_token_repo;
pub mod user_repo;

pub use finanz_repo::FinanzRepo;
pub use hund_repo::HundRepo;
pub use kalender_repo::KalenderRepo;
pub use kommunikation_repo::KommunikationRepo;
pub use kunde_repo::KundeRepo;
pub use kurs_repo::KursRepo;
pub use refresh_token_repo::RefreshTokenRepo;
pub use user_repo::UserRepo;

/// Wrap a free-text search term for use with `ILIKE`.
pub(crate) fn like_pattern(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{s}%"))
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn blank_search_is_no_filter() {
        assert_eq!(like_pattern(None), None);
        assert_eq!(like_pattern(Some("   ")), None);
    }

    #[test]
    fn search_is_trimmed_and_wrapped() {
        assert_eq!(like_pattern(Some(" Muster ")), Some("%Muster%".to_string()));
    }
}
