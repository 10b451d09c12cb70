// crates/run_splice/src/lib.rs

use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};

use marker_splicer::processor::{
    splice_file_with_splicer, DefaultFileSplicer, FileSplicer, PreviewSplicer,
};
use marker_splicer::Splice;

pub mod config;
pub mod logging;

pub use config::AppConfig;

/// Runs one recipe end to end: read, splice, write the target and, if asked,
/// relocate the excised region. A dry run writes nothing.
pub fn run(config: &AppConfig) -> Result<Splice> {
    debug!(?config, "runtime configuration");

    let splicer: &dyn FileSplicer = if config.dry_run {
        &PreviewSplicer
    } else {
        &DefaultFileSplicer
    };
    let spliced = splice_file_with_splicer(splicer, &config.source, &config.target, &config.plan())
        .with_context(|| {
            format!(
                "Failed to apply recipe '{}' to {}",
                config.recipe.name,
                config.source.display()
            )
        })?;

    if let Some(excised_target) = &config.excised_target {
        if config.dry_run {
            info!(path = %excised_target.display(), "dry run; excised region not written");
        } else {
            fs::write(excised_target, &spliced.excised).with_context(|| {
                format!(
                    "Failed to write excised region to {}",
                    excised_target.display()
                )
            })?;
            info!(
                path = %excised_target.display(),
                bytes = spliced.excised.len(),
                "relocated excised region"
            );
        }
    }

    Ok(spliced)
}
