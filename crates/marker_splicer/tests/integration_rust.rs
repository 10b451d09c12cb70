// crates/marker_splicer/tests/integration_rust.rs

use std::fs;
use std::path::PathBuf;
use marker_splicer::processor::{splice_file_with_splicer, DefaultFileSplicer};
use marker_splicer::{splice, MarkerPolicy, SpliceError, SplicePlan};
use splice_markers::{CHUNK_MODULE_DECLARATIONS, MOVE_END_MARKER, MOVE_START_MARKER};

const CHUNKED_MESH: &str = r#"#[derive(Debug, Eq, PartialEq)]
pub struct ChunkMesh<const CHUNK_SIZE: usize> {
    position: [(); CHUNK_SIZE],
}

/////// MOVE START

impl<const CHUNK_SIZE: usize> ChunkMesh<CHUNK_SIZE> {}

/// What might be dirty about a single chunk.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
struct ChunkTodo {}

/////// MOVE END
"#;

/// Helper function to create a temporary Rust file with the given content.
/// Returns the full path to the temporary file.
fn create_temp_file_with_content(content: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let file_name = format!("temp_splice_{}.rs", rand::random::<u32>());
    path.push(file_name);
    fs::write(&path, content).expect("Failed to write temporary file");
    path
}

fn chunk_plan() -> SplicePlan<'static> {
    SplicePlan::new(MOVE_START_MARKER, MOVE_END_MARKER).with_insertion(CHUNK_MODULE_DECLARATIONS)
}

#[test]
fn test_chunk_module_extraction() {
    let result = splice(CHUNKED_MESH, &chunk_plan()).expect("splice should succeed");

    let expected = r#"mod chunk;
pub use chunk::*;
#[derive(Debug, Eq, PartialEq)]
pub struct ChunkMesh<const CHUNK_SIZE: usize> {
    position: [(); CHUNK_SIZE],
}

/////// MOVE END
"#;
    assert_eq!(result.output, expected);
    assert!(result.excised.starts_with(MOVE_START_MARKER));
    assert!(result.excised.contains("struct ChunkTodo {}"));
    assert!(!result.output.contains("ChunkTodo"));
}

#[test]
fn test_chunk_module_extraction_via_files() {
    let source = create_temp_file_with_content(CHUNKED_MESH);
    let target = create_temp_file_with_content("");

    let result = splice_file_with_splicer(&DefaultFileSplicer, &source, &target, &chunk_plan())
        .expect("file splice should succeed");
    let written = fs::read_to_string(&target).expect("Failed to read target");
    assert_eq!(written, result.output);
    assert!(written.starts_with(CHUNK_MODULE_DECLARATIONS));

    // The source is left as it was.
    assert_eq!(fs::read_to_string(&source).unwrap(), CHUNKED_MESH);

    fs::remove_file(&source).expect("Failed to remove temporary file");
    fs::remove_file(&target).expect("Failed to remove temporary file");
}

#[test]
fn test_early_marker_after_imports() {
    let content = "use std::fmt::Debug;\n\npub struct Keep;\n/////// MOVE START\nstruct Moved;\n/////// MOVE END\n";
    let plan = chunk_plan().with_early_marker("\npub struct Keep;");
    let result = splice(content, &plan).unwrap();
    assert_eq!(
        result.output,
        "use std::fmt::Debug;\nmod chunk;\npub use chunk::*;\n\npub struct Keep;\n/////// MOVE END\n"
    );
}

#[test]
fn test_markers_removed_leave_chunk_untouched_in_strict_mode() {
    let content = "pub struct ChunkMesh;\n";
    let err = splice(content, &chunk_plan()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "start marker '/////// MOVE START' not found in document"
    );
}

#[test]
fn test_sentinel_mode_reproduces_malformed_output() {
    // Without markers both offsets fall on the final newline: nothing is cut,
    // the declarations are still prepended.
    let content = "pub struct ChunkMesh;\n";
    let plan = chunk_plan().with_policy(MarkerPolicy::Sentinel);
    let result = splice(content, &plan).unwrap();
    assert_eq!(
        result.output,
        "mod chunk;\npub use chunk::*;\npub struct ChunkMesh;\n"
    );
    assert_eq!(result.excised, "");

    // Only the end marker present: the cut runs from the last character up to
    // the end marker, which is an inverted range, so the tail is duplicated.
    let content = "a\n/////// MOVE END\nb\n";
    let result = splice(content, &plan).unwrap();
    assert_eq!(
        result.output,
        "mod chunk;\npub use chunk::*;\na\n/////// MOVE END\nb/////// MOVE END\nb\n"
    );
}

#[test]
fn test_file_not_found() {
    let path = PathBuf::from("non_existent_file.rs");
    let target = std::env::temp_dir().join(format!("unused_{}.rs", rand::random::<u32>()));
    let result = splice_file_with_splicer(&DefaultFileSplicer, &path, &target, &chunk_plan());
    assert!(matches!(result, Err(SpliceError::Read { .. })));
}
