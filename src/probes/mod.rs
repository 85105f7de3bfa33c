//! Network and filesystem observation primitives.

pub mod fs;
pub mod net;
