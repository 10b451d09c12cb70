// crates/marker_splicer/src/splicer.rs

use tracing::{debug, warn};

use crate::error::{MarkerRole, Result, SpliceError};
use crate::utils::marker_utils::{find_marker, slice_clamped, MarkerOffset};

/// Where the kept tail of the document resumes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum EndBoundary {
    /// The tail starts at the end marker, so the marker survives the splice.
    #[default]
    KeepEndMarker,
    /// The tail starts right after the end marker.
    DropEndMarker,
}

/// What to do when a marker cannot be found.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MarkerPolicy {
    /// Refuse to splice.
    #[default]
    Strict,
    /// Substitute the "not found" sentinel offset and clamp every slice.
    /// Produces a malformed but deterministic document.
    Sentinel,
}

/// Everything needed to splice one document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplicePlan<'a> {
    pub start_marker: &'a str,
    pub end_marker: &'a str,
    /// Marks the insertion point. `None` inserts at the top of the document.
    pub early_marker: Option<&'a str>,
    /// Literal text placed at the insertion point.
    pub insertion: &'a str,
    pub end_boundary: EndBoundary,
    pub policy: MarkerPolicy,
}

impl<'a> SplicePlan<'a> {
    /// A plan that removes `start_marker..end_marker` and inserts nothing.
    pub fn new(start_marker: &'a str, end_marker: &'a str) -> Self {
        Self {
            start_marker,
            end_marker,
            early_marker: None,
            insertion: "",
            end_boundary: EndBoundary::default(),
            policy: MarkerPolicy::default(),
        }
    }

    pub fn with_early_marker(mut self, early_marker: &'a str) -> Self {
        self.early_marker = Some(early_marker);
        self
    }

    pub fn with_insertion(mut self, insertion: &'a str) -> Self {
        self.insertion = insertion;
        self
    }

    pub fn with_end_boundary(mut self, end_boundary: EndBoundary) -> Self {
        self.end_boundary = end_boundary;
        self
    }

    pub fn with_policy(mut self, policy: MarkerPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Resolved byte offsets of a splice.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SpliceOffsets {
    /// Insertion point.
    pub early: usize,
    /// First byte of the excised region.
    pub start: usize,
    /// First byte of the kept tail.
    pub resume: usize,
}

/// Outcome of a splice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Splice {
    /// The rewritten document.
    pub output: String,
    /// The region cut out of the document, `doc[start..resume]`.
    pub excised: String,
    pub offsets: SpliceOffsets,
}

/// Splices `doc` according to `plan`.
///
/// The output is `doc[..early] + insertion + doc[early..start] + doc[resume..]`,
/// where `resume` is the end marker offset (or the byte after the end marker
/// with [`EndBoundary::DropEndMarker`]).
pub fn splice(doc: &str, plan: &SplicePlan<'_>) -> Result<Splice> {
    let offsets = match plan.policy {
        MarkerPolicy::Strict => resolve_strict(doc, plan)?,
        MarkerPolicy::Sentinel => resolve_with_sentinel(doc, plan),
    };
    debug!(
        early = offsets.early,
        start = offsets.start,
        resume = offsets.resume,
        doc_len = doc.len(),
        "resolved splice offsets"
    );

    let head = slice_clamped(doc, 0, offsets.early);
    let center = slice_clamped(doc, offsets.early, offsets.start);
    let tail = slice_clamped(doc, offsets.resume, doc.len());

    let mut output =
        String::with_capacity(head.len() + plan.insertion.len() + center.len() + tail.len());
    output.push_str(head);
    output.push_str(plan.insertion);
    output.push_str(center);
    output.push_str(tail);

    Ok(Splice {
        output,
        excised: slice_clamped(doc, offsets.start, offsets.resume).to_string(),
        offsets,
    })
}

fn locate(doc: &str, marker: &str, role: MarkerRole) -> Result<usize> {
    find_marker(doc, marker)
        .found()
        .ok_or_else(|| SpliceError::marker_not_found(role, marker))
}

fn resume_offset(end: usize, plan: &SplicePlan<'_>) -> usize {
    match plan.end_boundary {
        EndBoundary::KeepEndMarker => end,
        EndBoundary::DropEndMarker => end + plan.end_marker.len(),
    }
}

fn resolve_strict(doc: &str, plan: &SplicePlan<'_>) -> Result<SpliceOffsets> {
    let start = locate(doc, plan.start_marker, MarkerRole::Start)?;
    let end = locate(doc, plan.end_marker, MarkerRole::End)?;
    let early = match plan.early_marker {
        Some(marker) => locate(doc, marker, MarkerRole::Early)?,
        None => 0,
    };

    if end < start {
        return Err(SpliceError::EndBeforeStart { start, end });
    }
    if early > start {
        return Err(SpliceError::EarlyAfterStart { early, start });
    }

    Ok(SpliceOffsets {
        early,
        start,
        resume: resume_offset(end, plan),
    })
}

fn resolve_with_sentinel(doc: &str, plan: &SplicePlan<'_>) -> SpliceOffsets {
    let lookup = |marker: &str, role: MarkerRole| {
        let offset = find_marker(doc, marker);
        if !offset.is_found() {
            warn!(%role, marker, "marker not found; substituting sentinel offset");
        }
        offset
    };

    let start = lookup(plan.start_marker, MarkerRole::Start).or_sentinel(doc);
    // A sentinel end offset is used as is; only a real marker can be skipped.
    let resume = match lookup(plan.end_marker, MarkerRole::End) {
        MarkerOffset::Found(end) => resume_offset(end, plan),
        MarkerOffset::Absent => MarkerOffset::Absent.or_sentinel(doc),
    };
    let early = plan
        .early_marker
        .map(|marker| lookup(marker, MarkerRole::Early).or_sentinel(doc))
        .unwrap_or(0);

    SpliceOffsets {
        early,
        start,
        resume,
    }
}
