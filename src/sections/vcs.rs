//! Version-Control section: branch, divergence, last commit, tree state.

use crate::config::ReportContext;
use crate::error::Result;
use crate::report::{CheckLine, Reporter};
use crate::shell;

/// Run the Version-Control section checks.
///
/// All git queries are untrapped; running outside a repository, or against
/// a missing reference branch, aborts the section.
pub fn run(ctx: &ReportContext, out: &mut Reporter) -> Result<()> {
    let root = &ctx.project_root;

    // The divergence check needs the branch name, so this check comes first.
    let branch = shell::run_in("git rev-parse --abbrev-ref HEAD", root)?;
    out.value("Branch", &branch);

    let reference = &ctx.config.reference_branch;
    let log = shell::run_in(&format!("git log --oneline {reference}..{branch}"), root)?;
    let divergence = divergence_count(&log);
    out.value(&format!("Commits ahead of {reference}"), divergence);
    for line in divergence_findings(divergence, ctx.config.divergence_threshold, reference) {
        out.render(&line);
    }

    out.value("Last commit", shell::run_in("git log -1 --pretty=%B", root)?);

    let status = shell::run_in("git status --porcelain", root)?;
    out.value("Clean working tree", is_clean(&status));

    Ok(())
}

/// Commits on the current branch that the reference branch lacks, counted
/// from `git log --oneline` output.
pub fn divergence_count(log_output: &str) -> usize {
    log_output.lines().filter(|l| !l.trim().is_empty()).count()
}

/// Warning line when divergence strictly exceeds the threshold.
pub fn divergence_findings(
    count: usize,
    threshold: usize,
    reference: &str,
) -> Vec<CheckLine> {
    if count <= threshold {
        return Vec::new();
    }
    vec![CheckLine::warn(format!(
        "Branch is {count} commits ahead of {reference}, consider a rebase"
    ))]
}

/// Empty porcelain status means no pending changes.
pub fn is_clean(porcelain_status: &str) -> bool {
    porcelain_status.trim().is_empty()
}
