// crates/run_splice/src/config.rs

use anyhow::{anyhow, Result};
use std::path::PathBuf;

use marker_splicer::{MarkerPolicy, SplicePlan};
use splice_recipes::{find_recipe, recipe_names, Recipe};

/// Runtime configuration composed from the chosen recipe and the CLI flags.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub recipe: &'static Recipe,
    pub source: PathBuf,
    pub target: PathBuf,
    /// Where the excised region is relocated to, if anywhere.
    pub excised_target: Option<PathBuf>,
    pub policy: MarkerPolicy,
    pub dry_run: bool,
    pub verbose: bool,
}

impl AppConfig {
    pub fn for_recipe(recipe: &'static Recipe) -> Self {
        Self {
            recipe,
            source: PathBuf::from(recipe.source),
            target: PathBuf::from(recipe.target),
            excised_target: None,
            policy: recipe.policy,
            dry_run: false,
            verbose: false,
        }
    }

    /// Resolves a built-in recipe by name.
    pub fn from_recipe_name(name: &str) -> Result<Self> {
        let recipe = find_recipe(name).ok_or_else(|| {
            anyhow!(
                "Unknown recipe '{}' (known recipes: {})",
                name,
                recipe_names().join(", ")
            )
        })?;
        Ok(Self::for_recipe(recipe))
    }

    /// Falls back to the sentinel offset instead of failing on absent markers.
    pub fn allow_missing_markers(mut self, allow: bool) -> Self {
        if allow {
            self.policy = MarkerPolicy::Sentinel;
        }
        self
    }

    pub fn with_excised_target(mut self, path: Option<PathBuf>) -> Self {
        self.excised_target = path;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn plan(&self) -> SplicePlan<'static> {
        self.recipe.plan().with_policy(self.policy)
    }
}
