// crates/marker_splicer/src/lib.rs

//! Marker-bounded text splicing.
//!
//! A splice cuts the region between a start marker and an end marker out of a
//! document and places a literal insertion at an "early" offset ahead of it:
//!
//! ```text
//! doc[..early] + insertion + doc[early..start] + doc[end..]
//! ```

pub mod error;
pub mod processor;
pub mod splicer;
pub mod utils;

pub use error::{MarkerRole, Result, SpliceError};
pub use splicer::{splice, EndBoundary, MarkerPolicy, Splice, SpliceOffsets, SplicePlan};
pub use utils::marker_utils::{find_marker, MarkerOffset};
