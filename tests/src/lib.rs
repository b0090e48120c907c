//! End-to-end tests for the ingestion layer over a generated recon tree.

#[cfg(test)]
mod ingestion;
#[cfg(test)]
mod utils;
