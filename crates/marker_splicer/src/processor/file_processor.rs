// crates/marker_splicer/src/processor/file_processor.rs

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Result, SpliceError};
use crate::splicer::{splice, Splice, SplicePlan};

/// Trait that abstracts splicing a file on disk.
pub trait FileSplicer {
    /// Splices the document at `source` and delivers the result for `target`.
    fn splice_file(&self, source: &Path, target: &Path, plan: &SplicePlan<'_>) -> Result<Splice>;
}

/// Reads the source, splices it and overwrites the target without asking.
/// `target` may be the source itself.
pub struct DefaultFileSplicer;

impl FileSplicer for DefaultFileSplicer {
    fn splice_file(&self, source: &Path, target: &Path, plan: &SplicePlan<'_>) -> Result<Splice> {
        let spliced = read_and_splice(source, plan)?;
        fs::write(target, &spliced.output).map_err(|err| SpliceError::Write {
            path: target.to_path_buf(),
            source: err,
        })?;
        info!(
            path = %target.display(),
            bytes = spliced.output.len(),
            "wrote spliced document"
        );
        Ok(spliced)
    }
}

/// Splices without touching the target, for inspecting the result first.
pub struct PreviewSplicer;

impl FileSplicer for PreviewSplicer {
    fn splice_file(&self, source: &Path, target: &Path, plan: &SplicePlan<'_>) -> Result<Splice> {
        let spliced = read_and_splice(source, plan)?;
        info!(path = %target.display(), "preview only; target left untouched");
        Ok(spliced)
    }
}

fn read_and_splice(source: &Path, plan: &SplicePlan<'_>) -> Result<Splice> {
    let doc = fs::read_to_string(source).map_err(|err| SpliceError::Read {
        path: source.to_path_buf(),
        source: err,
    })?;
    info!(source = %source.display(), bytes = doc.len(), "read document");
    splice(&doc, plan)
}

/// Public API function to splice a file using a provided `FileSplicer` implementation.
pub fn splice_file_with_splicer<S: AsRef<Path>, T: AsRef<Path>>(
    splicer: &dyn FileSplicer,
    source: S,
    target: T,
    plan: &SplicePlan<'_>,
) -> Result<Splice> {
    splicer.splice_file(source.as_ref(), target.as_ref(), plan)
}
