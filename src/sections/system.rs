//! System section: who and what this machine is, and what it can reach.

use crate::config::ReportContext;
use crate::error::Result;
use crate::probes::net;
use crate::report::Reporter;
use crate::shell;

/// Run the System section checks.
///
/// Every check here is trapped or infallible; this body never aborts the
/// report.
pub fn run(ctx: &ReportContext, out: &mut Reporter) -> Result<()> {
    // Intercepting proxies re-sign TLS on the corporate network, so the
    // VPN probe skips certificate verification.
    let vpn = net::is_reachable(&ctx.config.vpn_probe_url, true);

    out.value("Username", &ctx.env.username);
    out.value("Platform", std::env::consts::OS);
    out.value("CPU cores", cpu_cores());
    out.value(
        "Internet access",
        net::has_internet_access(&ctx.config.dns_probe_host),
    );
    out.value("VPN access", vpn);
    out.value("Docker", shell::check("docker version"));

    Ok(())
}

pub(crate) fn cpu_cores() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
