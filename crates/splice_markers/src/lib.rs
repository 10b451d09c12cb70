// crates/splice_markers/src/lib.rs

//! Marker and insertion constants shared by the splice tool-chain.

/// Opens the region that gets moved out of the parent file.
pub const MOVE_START_MARKER: &str = "/////// MOVE START";

/// Closes the moved region. The splice resumes *at* this marker unless the
/// plan asks for it to be dropped as well.
pub const MOVE_END_MARKER: &str = "/////// MOVE END";

/// Declarations inserted into the parent once the region lives in `chunk.rs`.
pub const CHUNK_MODULE_DECLARATIONS: &str = "mod chunk;\npub use chunk::*;\n";
