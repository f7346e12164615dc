use anyhow::{Result, bail};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::{ANCESTOR_DEPTH, MARKER_DIR};
use crate::environment::{Environment, ProcessEnvironment};
use crate::paths::absolutize;

/// Which probe chain a candidate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    WorkingDir,
    ModuleDir,
}

/// A directory that gets probed for the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub origin: Origin,
    /// 0 for the origin itself, then 1 per parent.
    pub level: usize,
}

/// Outcome of a fail-open lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Always absolute.
    pub root: PathBuf,
    /// `None` when nothing matched and `root` is the working-directory fallback.
    pub matched: Option<Candidate>,
}

impl Lookup {
    pub fn is_fallback(&self) -> bool {
        self.matched.is_none()
    }
}

/// Probes the working directory, then the executing module's directory, each
/// followed by a bounded number of parents. The first candidate holding the
/// marker directory wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    marker: String,
    depth: usize,
}

impl Default for Locator {
    fn default() -> Self {
        Self::new()
    }
}

impl Locator {
    pub fn new() -> Self {
        Self {
            marker: MARKER_DIR.to_string(),
            depth: ANCESTOR_DEPTH,
        }
    }

    /// Set the marker directory name
    pub fn marker<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.marker = name.into();
        self
    }

    /// Set how many parents are probed above each origin
    pub fn depth(&mut self, depth: usize) -> &mut Self {
        self.depth = depth;
        self
    }

    pub fn marker_name(&self) -> &str {
        &self.marker
    }

    pub fn ancestor_depth(&self) -> usize {
        self.depth
    }

    /// The ordered probe plan: working-directory chain, then module chain.
    ///
    /// Chains stop early at the filesystem root instead of probing it again.
    pub fn candidates<E: Environment>(&self, env: &E) -> Result<Vec<Candidate>> {
        Ok(self.plan(env)?.1)
    }

    /// Strict lookup: `None` when no candidate holds the marker.
    pub fn find<E: Environment>(&self, env: &E) -> Result<Option<Candidate>> {
        Ok(self.search(env)?.1)
    }

    /// Fail-open lookup: falls back to the absolute working directory.
    pub fn locate<E: Environment>(&self, env: &E) -> Result<Lookup> {
        let (working_dir, matched) = self.search(env)?;

        let root = match &matched {
            Some(candidate) => candidate.path.clone(),
            None => {
                warn!(
                    marker = %self.marker,
                    fallback = %working_dir.display(),
                    "no marker directory found, using working directory"
                );
                working_dir
            }
        };

        Ok(Lookup { root, matched })
    }

    // Reads the working directory once; `locate` falls back to this same path.
    fn plan<E: Environment>(&self, env: &E) -> Result<(PathBuf, Vec<Candidate>)> {
        let working_dir = absolutize(&env.current_dir()?)?;

        let module_dir = match env.module_dir() {
            Some(dir) => match absolutize(&dir) {
                Ok(dir) => Some(dir),
                Err(e) => {
                    warn!("skipping module directory probes: {e:#}");
                    None
                }
            },
            None => None,
        };

        let mut candidates: Vec<Candidate> =
            chain(&working_dir, Origin::WorkingDir, self.depth).collect();
        if let Some(dir) = &module_dir {
            candidates.extend(chain(dir, Origin::ModuleDir, self.depth));
        }

        Ok((working_dir, candidates))
    }

    fn search<E: Environment>(&self, env: &E) -> Result<(PathBuf, Option<Candidate>)> {
        self.validate_marker()?;

        let (working_dir, candidates) = self.plan(env)?;
        let found = candidates
            .into_iter()
            .find(|candidate| self.probe(env, candidate));

        if let Some(candidate) = &found {
            info!(
                root = %candidate.path.display(),
                origin = ?candidate.origin,
                level = candidate.level,
                "found project root"
            );
        }

        Ok((working_dir, found))
    }

    fn probe<E: Environment>(&self, env: &E, candidate: &Candidate) -> bool {
        let hit = env.is_dir(&candidate.path.join(&self.marker));
        debug!(
            candidate = %candidate.path.display(),
            origin = ?candidate.origin,
            level = candidate.level,
            hit,
            "probed for marker"
        );
        hit
    }

    fn validate_marker(&self) -> Result<()> {
        let mut components = Path::new(&self.marker).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => bail!(
                "🛑 Invalid marker directory name '{}'\n\
                 → The marker must be a single directory name such as \"{}\".",
                self.marker,
                MARKER_DIR
            ),
        }
    }
}

fn chain(start: &Path, origin: Origin, depth: usize) -> impl Iterator<Item = Candidate> + '_ {
    start
        .ancestors()
        .take(depth.saturating_add(1))
        .enumerate()
        .map(move |(level, path)| Candidate {
            path: path.to_path_buf(),
            origin,
            level,
        })
}

/// Locate the project root from the running process.
///
/// Returns the first of the working directory, its three parents, the
/// executable's directory and its three parents that contains `src/`.
/// Falls back to the absolute working directory when none does; callers
/// cannot tell the two cases apart. Use [`Locator::find`] for that.
pub fn find_project_root() -> Result<PathBuf> {
    Ok(Locator::default().locate(&ProcessEnvironment)?.root)
}
