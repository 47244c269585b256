//! Raw cluster-state and mesh-config objects as delivered by the upstream
//! clients, plus config file loading and name validation.
//!
//! Objects follow the orchestrator's JSON shape (`metadata`, `spec`,
//! `status`, camelCase keys). Every field is defaulted so partially
//! populated objects still decode.

pub mod bundle;
pub mod config;
pub mod deployment;
pub mod endpoint;
pub mod hpa;
pub mod mesh;
pub mod meta;
pub mod service;
pub mod validate;
