/// Host-based request rewriting
///
/// A request for `/` on `<name>.<domain>` is served by `/album/<name>`. The
/// rewrite happens before route matching and is invisible to the browser.
use crate::config::SiteSettings;
use axum::http::{header, uri::PathAndQuery, Request, Uri};
use std::collections::HashSet;
use std::net::IpAddr;

/// Path prefix of the album page route
pub const ALBUM_ROUTE_PREFIX: &str = "/album/";

/// Labels that always mean "the main site"
const ALWAYS_RESERVED: [&str; 2] = ["www", "localhost"];

/// Outcome of inspecting one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRoute {
    /// Serve the request as-is
    PassThrough,
    /// Serve the album page for this name
    Album(String),
}

#[derive(Debug, Clone)]
pub struct HostRouter {
    reserved: HashSet<String>,
}

impl HostRouter {
    /// Reserve `www`, `localhost`, the apex domain's first label, and `extra`
    pub fn new(apex_domain: &str, extra: &[String]) -> Self {
        let mut reserved: HashSet<String> =
            ALWAYS_RESERVED.iter().map(|s| s.to_string()).collect();

        if let Some(label) = normalize_host(apex_domain)
            .split('.')
            .next()
            .filter(|l| !l.is_empty())
        {
            reserved.insert(label.to_string());
        }

        reserved.extend(
            extra
                .iter()
                .map(|l| l.trim().to_ascii_lowercase())
                .filter(|l| !l.is_empty()),
        );

        Self { reserved }
    }

    pub fn from_site(site: &SiteSettings) -> Self {
        Self::new(&site.domain, &site.reserved_labels)
    }

    pub fn is_reserved(&self, label: &str) -> bool {
        self.reserved.contains(label)
    }

    /// Decide how to serve `path` on `host`
    pub fn route(&self, host: &str, path: &str) -> HostRoute {
        let host = normalize_host(host);

        if host.parse::<IpAddr>().is_ok() {
            return HostRoute::PassThrough;
        }

        let Some((label, _rest)) = host.split_once('.') else {
            return HostRoute::PassThrough;
        };

        if label.is_empty() || self.is_reserved(label) || path != "/" {
            return HostRoute::PassThrough;
        }

        HostRoute::Album(label.to_string())
    }

    /// Rewrite the request URI in place when its host names an album
    pub fn rewrite<B>(&self, mut request: Request<B>) -> Request<B> {
        let Some(host) = request_host(&request) else {
            return request;
        };

        let HostRoute::Album(name) = self.route(&host, request.uri().path()) else {
            return request;
        };

        let target = match request.uri().query() {
            Some(query) => format!("{}{}?{}", ALBUM_ROUTE_PREFIX, name, query),
            None => format!("{}{}", ALBUM_ROUTE_PREFIX, name),
        };

        let Ok(path_and_query) = target.parse::<PathAndQuery>() else {
            tracing::debug!(host = %host, "Host label is not a valid path segment");
            return request;
        };

        let mut parts = request.uri().clone().into_parts();
        parts.path_and_query = Some(path_and_query);

        match Uri::from_parts(parts) {
            Ok(uri) => {
                tracing::debug!(host = %host, to = %uri, "Rewriting album host request");
                *request.uri_mut() = uri;
            }
            Err(e) => tracing::debug!(host = %host, error = %e, "Could not rewrite URI"),
        }

        request
    }
}

/// `Host` header, falling back to the URI authority
fn request_host<B>(request: &Request<B>) -> Option<String> {
    request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .or_else(|| request.uri().host().map(str::to_string))
}

/// Lowercase, drop the port and any trailing dot
fn normalize_host(host: &str) -> String {
    let host = host.trim();

    let without_port = if let Some(rest) = host.strip_prefix('[') {
        // [v6]:port
        rest.split(']').next().unwrap_or(rest)
    } else {
        match host.rsplit_once(':') {
            Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
            _ => host,
        }
    };

    without_port.trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn router() -> HostRouter {
        HostRouter::new("example.com", &[])
    }

    fn album(name: &str) -> HostRoute {
        HostRoute::Album(name.to_string())
    }

    #[test]
    fn www_root_passes_through() {
        assert_eq!(router().route("www.example.com", "/"), HostRoute::PassThrough);
    }

    #[test]
    fn album_host_root_is_rewritten() {
        assert_eq!(
            router().route("daft-punk.example.com", "/"),
            album("daft-punk")
        );
    }

    #[test]
    fn album_host_other_paths_pass_through() {
        let router = router();
        assert_eq!(
            router.route("daft-punk.example.com", "/favicon.ico"),
            HostRoute::PassThrough
        );
        assert_eq!(
            router.route("daft-punk.example.com", "/api/health"),
            HostRoute::PassThrough
        );
    }

    #[test]
    fn single_label_hosts_pass_through() {
        assert_eq!(router().route("localhost:8080", "/"), HostRoute::PassThrough);
        assert_eq!(router().route("intranet", "/"), HostRoute::PassThrough);
    }

    #[test]
    fn apex_label_is_reserved() {
        assert_eq!(router().route("example.com", "/"), HostRoute::PassThrough);
        assert_eq!(router().route("localhost.example.com", "/"), HostRoute::PassThrough);
    }

    #[test]
    fn configured_labels_are_reserved() {
        let router = HostRouter::new("example.com", &["App".to_string(), " ".to_string()]);
        assert!(router.is_reserved("app"));
        assert!(!router.is_reserved(""));
        assert_eq!(router.route("app.example.com", "/"), HostRoute::PassThrough);
        assert_eq!(router.route("air.example.com", "/"), album("air"));
    }

    #[test]
    fn host_is_normalized() {
        let router = router();
        assert_eq!(router.route("Daft-Punk.Example.COM:443", "/"), album("daft-punk"));
        assert_eq!(router.route("air.example.com.", "/"), album("air"));
    }

    #[test]
    fn ip_literals_pass_through() {
        let router = router();
        assert_eq!(router.route("127.0.0.1:8080", "/"), HostRoute::PassThrough);
        assert_eq!(router.route("[::1]:8080", "/"), HostRoute::PassThrough);
        assert_eq!(router.route("10.0.0.7", "/"), HostRoute::PassThrough);
    }

    #[test]
    fn rewrite_changes_path_and_keeps_query() {
        let request = Request::builder()
            .uri("/?ref=share")
            .header(header::HOST, "daft-punk.example.com")
            .body(Body::empty())
            .unwrap();

        let rewritten = router().rewrite(request);
        assert_eq!(rewritten.uri().path(), "/album/daft-punk");
        assert_eq!(rewritten.uri().query(), Some("ref=share"));
        assert_eq!(
            rewritten.headers().get(header::HOST).unwrap(),
            "daft-punk.example.com"
        );
    }

    #[test]
    fn rewrite_leaves_main_site_alone() {
        let request = Request::builder()
            .uri("/")
            .header(header::HOST, "www.example.com")
            .body(Body::empty())
            .unwrap();

        assert_eq!(router().rewrite(request).uri().path(), "/");
    }

    #[test]
    fn rewrite_uses_uri_authority_without_host_header() {
        let request = Request::builder()
            .uri("http://air.example.com/")
            .body(Body::empty())
            .unwrap();

        assert_eq!(router().rewrite(request).uri().path(), "/album/air");
    }
}
