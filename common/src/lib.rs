//! # Reconview Common
//!
//! Shared vocabulary for every reconview crate.
//!
//! * **[`models`]**: The request-scoped projections of recon artifacts (hosts, findings, ports).
//! * **[`layout`]**: Where each artifact lives inside a scan directory.
//! * **[`config`]**: Runtime settings assembled by the CLI.
//! * **[`error`]**: The error taxonomy shared by the ingestion layer and its consumers.
//!
//! Nothing in here touches the filesystem beyond path arithmetic.

pub mod config;
pub mod error;
pub mod layout;
pub mod models;
