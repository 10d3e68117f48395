//! Stable error codes returned in the `message` field of error bodies.
//!
//! Clients match on these strings, so existing values must never change.
//! Every domain resource gets one [`EntityCodes`] set; the numbered
//! `_001` codes identify the repository operation that failed.

/// The error codes belonging to one domain resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCodes {
    /// Human-readable entity name used in log lines.
    pub entity: &'static str,
    pub invalid_payload: &'static str,
    pub not_found: &'static str,
    pub create: &'static str,
    pub list: &'static str,
    pub read: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

macro_rules! entity_codes {
    ($name:ident, $entity:literal, $prefix:literal) => {
        pub const $name: EntityCodes = EntityCodes {
            entity: $entity,
            invalid_payload: concat!("ERR_", $prefix, "_INVALID_PAYLOAD"),
            not_found: concat!("ERR_", $prefix, "_NOT_FOUND"),
            create: concat!("ERR_", $prefix, "_CREATE_001"),
            list: concat!("ERR_", $prefix, "_LIST_001"),
            read: concat!("ERR_", $prefix, "_READ_001"),
            update: concat!("ERR_", $prefix, "_UPDATE_001"),
            delete: concat!("ERR_", $prefix, "_DELETE_001"),
        };
    };
}

entity_codes!(KUNDEN, "Kunde", "KUNDEN");
entity_codes!(HUNDE, "Hund", "HUNDE");
entity_codes!(KURSE, "Kurs", "KURSE");
entity_codes!(FINANZEN, "Finanz", "FINANZEN");
entity_codes!(KALENDER, "KalenderEvent", "KALENDER");
entity_codes!(KOMMUNIKATION, "Nachricht", "KOMMUNIKATION");

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

pub const AUTH_INVALID_PAYLOAD: &str = "ERR_AUTH_INVALID_PAYLOAD";
pub const AUTH_EMAIL_TAKEN: &str = "ERR_AUTH_EMAIL_TAKEN";
pub const AUTH_INVALID_CREDENTIALS: &str = "ERR_AUTH_INVALID_CREDENTIALS";
pub const AUTH_MISSING_TOKEN: &str = "ERR_AUTH_MISSING_TOKEN";
pub const AUTH_INVALID_TOKEN: &str = "ERR_AUTH_INVALID_TOKEN";
pub const AUTH_USER_NOT_FOUND: &str = "ERR_AUTH_USER_NOT_FOUND";
pub const AUTH_REFRESH_MISSING: &str = "ERR_AUTH_REFRESH_MISSING";
pub const AUTH_REFRESH_INVALID: &str = "ERR_AUTH_REFRESH_INVALID";
pub const AUTH_REFRESH_REVOKED: &str = "ERR_AUTH_REFRESH_REVOKED";
pub const AUTH_REFRESH_EXPIRED: &str = "ERR_AUTH_REFRESH_EXPIRED";
pub const AUTH_REGISTER_001: &str = "ERR_AUTH_REGISTER_001";
pub const AUTH_LOGIN_001: &str = "ERR_AUTH_LOGIN_001";
pub const AUTH_REFRESH_001: &str = "ERR_AUTH_REFRESH_001";
pub const AUTH_TOKEN_001: &str = "ERR_AUTH_TOKEN_001";

// ---------------------------------------------------------------------------
// Cross-cutting
// ---------------------------------------------------------------------------

pub const RATE_LIMITED: &str = "ERR_RATE_LIMITED";
pub const INVALID_REQUEST: &str = "ERR_INVALID_REQUEST";
pub const NOT_READY: &str = "ERR_NOT_READY";
pub const DASHBOARD_001: &str = "ERR_DASHBOARD_001";
pub const INTERNAL: &str = "ERR_INTERNAL";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_codes_follow_naming_scheme() {
        assert_eq!(KUNDEN.create, "ERR_KUNDEN_CREATE_001");
        assert_eq!(KALENDER.invalid_payload, "ERR_KALENDER_INVALID_PAYLOAD");
        assert_eq!(HUNDE.not_found, "ERR_HUNDE_NOT_FOUND");
        assert_eq!(FINANZEN.delete, "ERR_FINANZEN_DELETE_001");
    }

    #[test]
    fn entity_codes_are_distinct_across_entities() {
        let all = [KUNDEN, HUNDE, KURSE, FINANZEN, KALENDER, KOMMUNIKATION];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.create, b.create);
                assert_ne!(a.invalid_payload, b.invalid_payload);
            }
        }
    }
}
