//! Project root lookup for test tooling.
//!
//! The root is the first directory holding a marker subdirectory (`src` by
//! default), searched in the working directory and its first three parents,
//! then in the executable's directory and its first three parents. When
//! nothing matches, the working directory is used.
//!

pub mod constants;
pub mod environment;
pub mod locator;
pub mod paths;
pub mod report;

pub use environment::{Environment, ProcessEnvironment, WithWorkingDir};
pub use locator::{Candidate, Locator, Lookup, Origin, find_project_root};
pub use report::Report;
