//! Refresh-token cookie formatting and parsing.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Name of the cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "dogule_refresh";
/// The cookie is only ever sent to the refresh endpoint.
pub const REFRESH_COOKIE_PATH: &str = "/auth/refresh";

/// `Set-Cookie` value that stores `token` for `max_age_secs` seconds.
pub fn refresh_cookie(token: &str, max_age_secs: i64) -> String {
    format!(
        "{REFRESH_COOKIE}={token}; Path={REFRESH_COOKIE_PATH}; HttpOnly; Secure; SameSite=Strict; Max-Age={max_age_secs}"
    )
}

/// `Set-Cookie` value that makes the browser drop the refresh cookie.
pub fn clear_refresh_cookie() -> String {
    format!(
        "{REFRESH_COOKIE}=; Path={REFRESH_COOKIE_PATH}; HttpOnly; Secure; SameSite=Strict; Max-Age=0"
    )
}

/// Find the value of cookie `name` in the request's `Cookie` headers.
///
/// Empty values count as absent.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn refresh_cookie_carries_all_attributes() {
        let cookie = refresh_cookie("abc", 604_800);
        assert!(cookie.starts_with("dogule_refresh=abc;"));
        assert!(cookie.contains("Path=/auth/refresh"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.ends_with("Max-Age=604800"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_refresh_cookie();
        assert!(cookie.starts_with("dogule_refresh=;"));
        assert!(cookie.ends_with("Max-Age=0"));
    }

    #[test]
    fn read_cookie_finds_value_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; dogule_refresh=t0k3n; lang=de"),
        );
        assert_eq!(
            read_cookie(&headers, REFRESH_COOKIE).as_deref(),
            Some("t0k3n")
        );
    }

    #[test]
    fn read_cookie_checks_every_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("dogule_refresh=second"));
        assert_eq!(
            read_cookie(&headers, REFRESH_COOKIE).as_deref(),
            Some("second")
        );
    }

    #[test]
    fn read_cookie_treats_missing_and_empty_alike() {
        let mut headers = HeaderMap::new();
        assert_eq!(read_cookie(&headers, REFRESH_COOKIE), None);

        headers.insert(COOKIE, HeaderValue::from_static("dogule_refresh="));
        assert_eq!(read_cookie(&headers, REFRESH_COOKIE), None);
    }
}
