//! Network probes.
//!
//! Both probes are trapped checks: the report only needs a boolean per
//! line, so every failure mode (DNS, TLS, timeout, non-2xx) collapses to
//! `false`. Richer diagnostics are out of scope.

use std::net::ToSocketAddrs;

/// Probe a URL with a blocking HTTPS GET.
///
/// `skip_certificate_verification` disables TLS chain validation. Corporate
/// proxies re-sign intercepted traffic, so the VPN probe sets it. Non-2xx
/// responses count as unreachable.
pub fn is_reachable(url: &str, skip_certificate_verification: bool) -> bool {
    let reachable = fetch(url, skip_certificate_verification).is_ok();
    tracing::debug!("GET {} -> reachable: {}", url, reachable);
    reachable
}

fn fetch(url: &str, skip_certificate_verification: bool) -> anyhow::Result<()> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("preflight")
        .danger_accept_invalid_certs(skip_certificate_verification)
        .build()?;

    client.get(url).send()?.error_for_status()?;
    Ok(())
}

/// Decide whether there is internet access by resolving a well-known
/// public hostname. A single transient DNS failure reads as no
/// connectivity; there is no retry.
pub fn has_internet_access(host: &str) -> bool {
    let reachable = resolves(host, &dns_lookup);
    tracing::debug!("resolve {} -> {}", host, reachable);
    reachable
}

fn dns_lookup(host: &str) -> std::io::Result<bool> {
    Ok((host, 443u16).to_socket_addrs()?.next().is_some())
}

/// Resolution with an injected lookup function, for tests.
pub(crate) fn resolves<F>(host: &str, lookup: &F) -> bool
where
    F: Fn(&str) -> std::io::Result<bool>,
{
    lookup(host).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn reachable_on_2xx() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/healthz");
            then.status(200);
        });

        assert!(is_reachable(&server.url("/healthz"), false));
    }

    #[test]
    fn non_2xx_is_unreachable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/healthz");
            then.status(500);
        });

        assert!(!is_reachable(&server.url("/healthz"), false));
    }

    #[test]
    fn unresolvable_url_is_unreachable_without_panicking() {
        assert!(!is_reachable("https://invalid.invalid", true));
    }

    #[test]
    fn resolves_true_when_lookup_succeeds() {
        assert!(resolves("example.com", &|_| Ok(true)));
    }

    #[test]
    fn resolves_false_when_lookup_fails() {
        let failing = |_: &str| -> std::io::Result<bool> {
            Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "no resolver",
            ))
        };
        assert!(!resolves("example.com", &failing));
    }

    #[test]
    fn resolves_false_when_lookup_returns_no_addresses() {
        assert!(!resolves("example.com", &|_| Ok(false)));
    }
}
