// src/utils/marker_utils.rs

/// Where a marker sits in a document.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MarkerOffset {
    /// Byte offset of the first occurrence.
    Found(usize),
    Absent,
}

impl MarkerOffset {
    /// Returns the offset if the marker was found.
    pub fn found(self) -> Option<usize> {
        match self {
            MarkerOffset::Found(offset) => Some(offset),
            MarkerOffset::Absent => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, MarkerOffset::Found(_))
    }

    /// Resolves the offset, falling back to the "not found" sentinel.
    ///
    /// The sentinel is what a `-1` search result turns into when it is used
    /// as a slice index: the start of the document's last character, or `0`
    /// for an empty document.
    pub fn or_sentinel(self, doc: &str) -> usize {
        match self {
            MarkerOffset::Found(offset) => offset,
            MarkerOffset::Absent => sentinel_offset(doc),
        }
    }
}

/// Returns the byte offset of the first occurrence of `marker` in `doc`.
pub fn find_marker(doc: &str, marker: &str) -> MarkerOffset {
    match doc.find(marker) {
        Some(offset) => MarkerOffset::Found(offset),
        None => MarkerOffset::Absent,
    }
}

/// Offset an absent marker resolves to under the sentinel policy.
pub fn sentinel_offset(doc: &str) -> usize {
    doc.char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

/// Slices `doc[from..to]`, yielding an empty string for an inverted range.
///
/// Both offsets must lie on char boundaries; offsets past the end are clamped.
pub fn slice_clamped(doc: &str, from: usize, to: usize) -> &str {
    let to = to.min(doc.len());
    if from >= to {
        return "";
    }
    &doc[from..to]
}
