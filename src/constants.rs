/// Subdirectory whose presence marks a directory as the project root.
pub const MARKER_DIR: &str = "src";

/// Number of parent directories probed above each origin.
pub const ANCESTOR_DEPTH: usize = 3;
