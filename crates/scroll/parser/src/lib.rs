//! Scroll Parser - recovers a [`ScrollDocument`] from loosely formatted text.
//!
//! # Document format
//!
//! ```text
//! # ✨ Scroll Sanctified
//!
//! ## Metadata
//! Scroll ID: GEM-001
//! Version: 1.0
//! Date of Sanctification: Epoch of Harmony, Cycle 1
//! Ethical Covenant: universal love, justice, and shared prosperity
//!
//! ## Ceremony Steps
//! ### Step 1: The Invocation of Genesis
//! Detail: Recite Genesis 17:20,
//! acknowledging the blessing of abundant provision.
//! Covenantal Blessing: May our endeavors be fruitful.
//! Ethical Alignment Note: Respects diverse lineages.
//! ```
//!
//! Parsing is lenient: lines that match nothing are ignored, repeated
//! metadata keys keep the last value, and only an unreadable source is an
//! error.
//!
//! # Usage
//!
//! ```rust
//! let doc = scroll_parser::parse_str(
//!     "## Metadata\nScroll ID: GEM-001\n## Ceremony Steps\n### Step 1: Intro\nDetail: hello\n",
//! );
//! assert_eq!(doc.metadata.get("Scroll ID"), Some("GEM-001"));
//! assert_eq!(doc.ceremony_steps[0].title, "Intro");
//! ```

#![deny(unsafe_code)]

mod classify;
mod error;
mod parser;

pub use classify::{classify, FieldKind, LineClass, Section};
pub use error::{ParseResult, ScrollParseError};
pub use parser::{parse_file, parse_str, try_parse_file, ScrollParser};
pub use scroll_types::ScrollDocument;
