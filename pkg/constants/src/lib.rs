//! Centralized constants for the meshlens project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod cluster;
pub mod mesh;
pub mod metrics;
pub mod paths;
