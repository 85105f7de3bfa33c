//! Section bodies, in report order: System, Runtime, Version-Control.
//!
//! Each body is a flat sequence of independent observations. The only
//! intra-section ordering dependency is in the Version-Control section,
//! where the divergence check needs the branch name first.

pub mod runtime;
pub mod system;
pub mod vcs;
