//! Domain validation rules shared by the REST and GraphQL surfaces.
//!
//! The `validate_*` functions plug into `#[validate(custom(function = ...))]`
//! on the DTOs; the `ensure_*` helpers cover cross-field rules that need
//! both values (possibly merged with the stored row) at once.

use std::borrow::Cow;

use validator::ValidationError;

use crate::error::CoreError;
use crate::types::{Date, Timestamp};

/// Ledger entry types. Mirrors the `finanzen.typ` CHECK constraint.
pub const FINANZ_TYPEN: [&str; 2] = ["einnahme", "ausgabe"];
pub const FINANZ_EINNAHME: &str = "einnahme";
pub const FINANZ_AUSGABE: &str = "ausgabe";

/// Message channels. Mirrors the `kommunikation.kanal` CHECK constraint.
pub const KANAELE: [&str; 6] = ["email", "sms", "telefon", "whatsapp", "brief", "sonstiges"];

/// Message directions. Mirrors the `kommunikation.richtung` CHECK constraint.
pub const RICHTUNGEN: [&str; 2] = ["eingehend", "ausgehend"];

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        let mut err = ValidationError::new(code);
        err.message = Some(Cow::Owned(format!(
            "must be one of: {}",
            allowed.join(", ")
        )));
        Err(err)
    }
}

pub fn validate_finanz_typ(value: &str) -> Result<(), ValidationError> {
    one_of(value, &FINANZ_TYPEN, "finanz_typ")
}

pub fn validate_kanal(value: &str) -> Result<(), ValidationError> {
    one_of(value, &KANAELE, "kanal")
}

pub fn validate_richtung(value: &str) -> Result<(), ValidationError> {
    one_of(value, &RICHTUNGEN, "richtung")
}

/// Reject a time range whose end precedes its start.
pub fn ensure_time_range(
    start: Timestamp,
    end: Timestamp,
    code: &'static str,
) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::Validation {
            code,
            details: Some(serde_json::json!({ "endAt": "must not be before startAt" })),
        });
    }
    Ok(())
}

/// Reject a date range whose end precedes its start. Open ranges pass.
pub fn ensure_date_range(
    start: Option<Date>,
    end: Option<Date>,
    code: &'static str,
) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(CoreError::Validation {
                code,
                details: Some(serde_json::json!({ "endDatum": "must not be before startDatum" })),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, NaiveDate, Utc};

    use super::*;

    #[test]
    fn finanz_typ_accepts_known_values() {
        assert!(validate_finanz_typ("einnahme").is_ok());
        assert!(validate_finanz_typ("ausgabe").is_ok());
    }

    #[test]
    fn finanz_typ_rejects_unknown_value() {
        let err = validate_finanz_typ("spende").unwrap_err();
        assert_eq!(err.code, "finanz_typ");
        assert!(err.message.unwrap().contains("einnahme"));
    }

    #[test]
    fn kanal_and_richtung_are_checked() {
        assert!(validate_kanal("whatsapp").is_ok());
        assert!(validate_kanal("fax").is_err());
        assert!(validate_richtung("ausgehend").is_ok());
        assert!(validate_richtung("seitwaerts").is_err());
    }

    #[test]
    fn time_range_rejects_end_before_start() {
        let start = Utc::now();
        let end = start - Duration::minutes(30);
        assert_matches!(
            ensure_time_range(start, end, "ERR_KALENDER_INVALID_PAYLOAD"),
            Err(CoreError::Validation { code: "ERR_KALENDER_INVALID_PAYLOAD", .. })
        );
    }

    #[test]
    fn time_range_allows_zero_length() {
        let now = Utc::now();
        assert!(ensure_time_range(now, now, "X").is_ok());
    }

    #[test]
    fn date_range_ignores_open_ends() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(ensure_date_range(Some(d), None, "X").is_ok());
        assert!(ensure_date_range(None, Some(d), "X").is_ok());
        assert!(ensure_date_range(Some(d), d.pred_opt(), "X").is_err());
    }
}
