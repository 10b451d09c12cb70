// crates/splice_recipes/src/lib.rs

use marker_splicer::{EndBoundary, MarkerPolicy, SplicePlan};
use splice_markers::{CHUNK_MODULE_DECLARATIONS, MOVE_END_MARKER, MOVE_START_MARKER};

/// A named, hard-coded splice: which file to read, which file to write and
/// how to cut it. Paths are relative to the working directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Recipe {
    pub name: &'static str,
    pub description: &'static str,
    pub source: &'static str,
    pub target: &'static str,
    pub start_marker: &'static str,
    pub end_marker: &'static str,
    pub early_marker: Option<&'static str>,
    pub insertion: &'static str,
    pub end_boundary: EndBoundary,
    pub policy: MarkerPolicy,
}

impl Recipe {
    /// The splice plan described by this recipe.
    pub fn plan(&self) -> SplicePlan<'static> {
        let plan = SplicePlan::new(self.start_marker, self.end_marker)
            .with_insertion(self.insertion)
            .with_end_boundary(self.end_boundary)
            .with_policy(self.policy);
        match self.early_marker {
            Some(marker) => plan.with_early_marker(marker),
            None => plan,
        }
    }
}

/// Moves the chunk types out of `chunked_mesh.rs` and declares the new
/// `chunk` module at the top of what is left.
pub const CHUNK_MODULE: Recipe = Recipe {
    name: "chunk-module",
    description: "cut the MOVE START..MOVE END region out of chunked_mesh.rs and declare `mod chunk`",
    source: "all-is-cubes/src/chunked_mesh.rs",
    target: "out.rs",
    start_marker: MOVE_START_MARKER,
    end_marker: MOVE_END_MARKER,
    early_marker: None,
    insertion: CHUNK_MODULE_DECLARATIONS,
    end_boundary: EndBoundary::KeepEndMarker,
    policy: MarkerPolicy::Strict,
};

pub const DEFAULT_RECIPE: &str = CHUNK_MODULE.name;

pub const BUILTIN_RECIPES: &[Recipe] = &[CHUNK_MODULE];

/// Looks up a built-in recipe by name.
pub fn find_recipe(name: &str) -> Option<&'static Recipe> {
    BUILTIN_RECIPES.iter().find(|recipe| recipe.name == name)
}

/// Names of every built-in recipe, in registry order.
pub fn recipe_names() -> Vec<&'static str> {
    BUILTIN_RECIPES.iter().map(|recipe| recipe.name).collect()
}
