//! Scroll Certify - decides whether a scroll passes certification.
//!
//! Rules run in a fixed order and every rule leaves a [`Finding`] behind,
//! so the report explains itself:
//!
//! 1. Structural check of untyped input (short-circuits on failure)
//! 2. Required metadata, in the order of [`REQUIRED_METADATA_KEYS`]
//! 3. Empty metadata
//! 4. Empty step list (warning only)
//! 5. Per step, in document order: blessing logged, ethical note present
//! 6. Final `CERTIFICATION_PASSED` or `CERTIFICATION_FAILED`
//!
//! Every finding is also recorded on the caller's [`AuditSink`], between a
//! `Starting scroll certification...` event and a closing summary event.
//!
//! # Usage
//!
//! ```rust
//! use scroll_audit::MemorySink;
//! use scroll_types::{CeremonyStep, ScrollDocument};
//!
//! let doc = ScrollDocument::new(
//!     [
//!         ("Scroll ID", "GEM-001"),
//!         ("Version", "1.0"),
//!         ("Date of Sanctification", "Cycle 1"),
//!         ("Ethical Covenant", "peace"),
//!     ]
//!     .into_iter()
//!     .collect(),
//!     vec![CeremonyStep::new("Step 1", "Intro").with_ethical_note("fine")],
//! );
//!
//! let mut sink = MemorySink::new();
//! let report = scroll_certify::certify(&doc, &mut sink);
//! assert!(report.certified);
//! assert_eq!(sink.len(), report.findings.len() + 2);
//! assert_eq!(sink.events().last().unwrap(), "Scroll certification successful.");
//! ```
//!
//! [`Finding`]: scroll_types::Finding
//! [`REQUIRED_METADATA_KEYS`]: scroll_types::REQUIRED_METADATA_KEYS
//! [`AuditSink`]: scroll_audit::AuditSink

#![deny(unsafe_code)]

mod error;
mod request;
mod validator;

pub use error::StructuralError;
pub use request::{certify_request, certify_value, document_from_value};
pub use validator::certify;
