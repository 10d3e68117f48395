//! Per-client fixed-window limiting for the `/auth` and `/graphql` groups.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;

/// Key used when the socket peer is not known.
const UNKNOWN_CLIENT: &str = "unknown";

/// Identify the client by its socket peer.
///
/// `X-Forwarded-For` is only consulted when the peer is one of
/// `trusted_proxies`. The client is then the right-most hop that is not
/// itself a trusted proxy.
pub fn client_key(request: &Request, trusted_proxies: &[IpAddr]) -> String {
    let Some(peer) = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
    else {
        return UNKNOWN_CLIENT.to_string();
    };

    if trusted_proxies.contains(&peer) {
        if let Some(client) = forwarded_client(request.headers(), trusted_proxies) {
            return client.to_string();
        }
    }

    peer.to_string()
}

fn forwarded_client(headers: &HeaderMap, trusted_proxies: &[IpAddr]) -> Option<IpAddr> {
    let header = headers.get("x-forwarded-for")?.to_str().ok()?;
    for hop in header.rsplit(',').map(str::trim).filter(|h| !h.is_empty()) {
        let ip: IpAddr = hop.parse().ok()?;
        if !trusted_proxies.contains(&ip) {
            return Some(ip);
        }
    }
    None
}

pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = client_key(&request, &state.config.rate_limit.trusted_proxies);
    if let Err(err) = state.limiter.check(&key) {
        tracing::debug!(client = %key, path = %request.uri().path(), "Rate limit exceeded");
        return Err(err.into());
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    const PROXY: [u8; 4] = [10, 0, 0, 1];

    fn request_from(peer: [u8; 4], forwarded: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/auth/login");
        if let Some(forwarded) = forwarded {
            builder = builder.header("x-forwarded-for", forwarded);
        }
        let mut request = builder.body(Body::empty()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from((peer, 5000))));
        request
    }

    fn trusted() -> Vec<IpAddr> {
        vec![IpAddr::from(PROXY)]
    }

    #[test]
    fn forwarded_for_is_ignored_from_untrusted_peer() {
        let request = request_from([192, 168, 1, 20], Some("203.0.113.7"));
        assert_eq!(client_key(&request, &trusted()), "192.168.1.20");
        assert_eq!(client_key(&request, &[]), "192.168.1.20");
    }

    #[test]
    fn trusted_proxy_yields_right_most_untrusted_hop() {
        let request = request_from(PROXY, Some("198.51.100.9, 203.0.113.7, 10.0.0.1"));
        assert_eq!(client_key(&request, &trusted()), "203.0.113.7");
    }

    #[test]
    fn trusted_proxy_without_usable_header_falls_back_to_peer() {
        let request = request_from(PROXY, None);
        assert_eq!(client_key(&request, &trusted()), "10.0.0.1");

        let request = request_from(PROXY, Some("not-an-ip"));
        assert_eq!(client_key(&request, &trusted()), "10.0.0.1");
    }

    #[test]
    fn unknown_without_peer() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(client_key(&request, &trusted()), UNKNOWN_CLIENT);
    }
}
