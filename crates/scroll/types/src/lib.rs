//! Scroll Types - the shared model of a scroll certificate.
//!
//! A scroll is a metadata block plus an ordered list of ceremony steps.
//! The parser produces a [`ScrollDocument`]; the validator consumes it and
//! yields a [`CertificationReport`] made of ordered [`Finding`]s.

#![deny(unsafe_code)]

mod document;
mod finding;
mod report;

pub use document::{CeremonyStep, Metadata, ScrollDocument, REQUIRED_METADATA_KEYS};
pub use finding::{Finding, FindingCategory};
pub use report::{CertificationReport, CertificationResponse};
