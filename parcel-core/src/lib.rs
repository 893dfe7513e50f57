#![warn(missing_docs)]
//! Core types and logic for requesting a parcel label for a single sales order.
//!
//! A run reads the order's line items, reduces them to one set of package
//! measurements, asks the carrier marketplace for a label, downloads the
//! label document, recovers the carrier's tracking number from it and writes
//! the result back to the order. The adapters for the database and the HTTP
//! API live in their own crates and plug in through [`ports`].

/// Domain models for a label run.
///
/// These are plain data structures: the raw order rows handed over by the
/// order source, the typed line items derived from them, the aggregated
/// shipment, the outbound request payload and the artifacts of a run.
pub mod models;

/// Interface traits for the label pipeline.
///
/// These are the "ports" of the hexagonal layout. The pipeline only talks to
/// the order database, the result sink and the carrier API through them, so
/// the adapters can be swapped (and faked in tests) freely.
pub mod ports;

pub mod aggregate;
pub mod extract;
pub mod naming;
pub mod navigate;
pub mod sign;

mod error;
pub use error::{ApiError, DownloadError, Error, ParseError, ValidationError};

mod job;
pub use job::{LabelJob, RunReport, RunRequest};

/// The only carrier this pipeline requests labels from.
pub const CARRIER: &str = "GLS";

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
