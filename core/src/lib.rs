//! # Reconview Core
//!
//! The ingestion layer: turns the heterogeneous files a recon pipeline leaves behind into
//! uniform, queryable records.
//!
//! * **[`ingest`]**: One parser per on-disk format, plus the [`ingest::tolerant`] combinator
//!   that turns any read or parse failure into an empty result.
//! * **[`catalog`]**: Lists the scans available under the recon root.
//! * **[`repository`]**: The outbound port the application reads scans through, and its
//!   filesystem adapter.
//! * **[`service`]**: The use cases exposed to the CLI and the HTTP API.
//!
//! Nothing is cached. Every query re-reads the files it needs.

pub mod catalog;
pub mod ingest;
pub mod repository;
pub mod service;
