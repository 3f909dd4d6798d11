//! Networking and platform-capability adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! `answer` talks to the question-answering endpoint, `geolocation` wraps the
//! browser location API, and `types` defines the wire schema and errors.
//! Browser calls are compiled only with the `csr` feature; the traits let
//! tests substitute deterministic stubs.

pub mod answer;
pub mod geolocation;
pub mod types;
