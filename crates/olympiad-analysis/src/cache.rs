//! Memoized loading of results tables
//!
//! Loading and normalizing a table is the only step worth caching: the table
//! never changes in place, and every aggregate is a pure function of it.
//! [`GameTableCache`] keeps loaded tables keyed by path and reuses an entry as
//! long as the file's contents hash to the same xxh3 digest.
//!
//! The cache is an explicit value owned by the caller; dropping it or calling
//! [`GameTableCache::clear`] forgets every table.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use xxhash_rust::xxh3::xxh3_64;

use crate::{
    game::GameRecord,
    load::{self, LoadError},
};

#[derive(Debug)]
struct CachedTable {
    digest: u64,
    games: Arc<[GameRecord]>,
}

/// Loaded results tables, keyed by canonical path.
#[derive(Debug, Default)]
pub struct GameTableCache {
    tables: HashMap<PathBuf, CachedTable>,
}

impl GameTableCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the games of the table at `path`, loading it if needed.
    ///
    /// The file is read on every call. A cached table is reused while the
    /// contents digest is unchanged, so rewrites are picked up even when they
    /// keep the length and modification time. Otherwise the contents are
    /// parsed again and replace the entry. A failed load leaves no entry behind.
    pub fn load<P>(&mut self, path: P) -> Result<Arc<[GameRecord]>, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = canonical_path(path.as_ref())?;
        let contents = fs::read(&path).map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;
        let digest = xxh3_64(&contents);

        if let Some(cached) = self.tables.get(&path) {
            if cached.digest == digest {
                tracing::debug!(path = %path.display(), "results table cache hit");
                return Ok(Arc::clone(&cached.games));
            }
            tracing::debug!(path = %path.display(), "results table changed on disk");
        }

        self.tables.remove(&path);
        let games = Arc::<[GameRecord]>::from(load::read_games(contents.as_slice())?);
        tracing::info!(path = %path.display(), games = games.len(), "loaded results table");
        self.tables.insert(
            path,
            CachedTable {
                digest,
                games: Arc::clone(&games),
            },
        );
        Ok(games)
    }

    /// Forgets the table loaded from `path`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn invalidate<P>(&mut self, path: P) -> bool
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_owned());
        let removed = self.tables.remove(&key).is_some();
        if removed {
            tracing::debug!(path = %key.display(), "results table invalidated");
        }
        removed
    }

    /// Forgets every loaded table.
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

fn canonical_path(path: &Path) -> Result<PathBuf, LoadError> {
    fs::canonicalize(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })
}
