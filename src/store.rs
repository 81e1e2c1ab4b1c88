//! File-backed movie collection.
//!
//! The whole collection lives in memory behind one async mutex and is written
//! back to the backing file, in full, after every successful mutation. The lock
//! is held for the complete locate -> mutate -> persist sequence, so readers
//! never see a half-applied change and writes hit the disk in call order.

use crate::error::{Result, StoreError};
use crate::movie::Movie;
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct MovieStore {
    inner: Arc<Mutex<Vec<Movie>>>,
    path: Arc<PathBuf>,
}

impl MovieStore {
    /// Loads the collection from `path`.
    ///
    /// A missing, unreadable or malformed file yields an empty collection;
    /// the problem is logged and startup carries on.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let movies = load_movies(&path).await;
        let store = Self {
            inner: Arc::new(Mutex::new(movies)),
            path: Arc::new(path),
        };
        info!("Loaded {} movies from {}", store.len().await, store.path().display());
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the collection in insertion order.
    pub async fn list(&self) -> Vec<Movie> {
        self.inner.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn get(&self, id: i64) -> Result<Movie> {
        let movies = self.inner.lock().await;
        movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// Appends `draft` under a fresh id (`max(id) + 1`, or 1 when empty).
    /// Any id carried by the draft is ignored.
    pub async fn create(&self, draft: Movie) -> Result<Movie> {
        let mut movies = self.inner.lock().await;
        let movie = draft.with_id(next_id(&movies)?);
        movies.push(movie.clone());
        self.persist(&movies).await;
        debug!("Created movie {}", movie.id);
        Ok(movie)
    }

    /// Replaces every field of movie `id` with `draft`, keeping `id`.
    pub async fn update(&self, id: i64, draft: Movie) -> Result<Movie> {
        let mut movies = self.inner.lock().await;
        let slot = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound { id })?;
        *slot = draft.with_id(id);
        let movie = slot.clone();
        self.persist(&movies).await;
        debug!("Updated movie {}", id);
        Ok(movie)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut movies = self.inner.lock().await;
        let index = movies
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound { id })?;
        movies.remove(index);
        self.persist(&movies).await;
        debug!("Deleted movie {}", id);
        Ok(())
    }

    /// Writes the full collection to the backing file.
    pub async fn save(&self) -> Result<()> {
        let movies = self.inner.lock().await;
        write_movies(&self.path, &movies).await
    }

    // The in-memory change stands even when the write fails; the next
    // successful mutation rewrites the whole file anyway.
    async fn persist(&self, movies: &[Movie]) {
        if let Err(e) = write_movies(&self.path, movies).await {
            error!("Failed to persist movies to {}: {}", self.path.display(), e);
        }
    }
}

fn next_id(movies: &[Movie]) -> Result<i64> {
    movies
        .iter()
        .map(|m| m.id)
        .fold(0, i64::max)
        .checked_add(1)
        .ok_or(StoreError::IdSpaceExhausted)
}

async fn load_movies(path: &Path) -> Vec<Movie> {
    let data = match tokio::fs::read(path).await {
        Ok(data) => data,
        Err(e) => {
            warn!(
                "Could not read {} ({}), starting with no movies",
                path.display(),
                e
            );
            return Vec::new();
        }
    };

    // A bare `null` document counts as an empty collection.
    match serde_json::from_slice::<Option<Vec<Movie>>>(&data) {
        Ok(movies) => {
            let movies = movies.unwrap_or_default();
            warn_on_duplicate_ids(&movies);
            movies
        }
        Err(e) => {
            warn!(
                "{} is not a valid movie list ({}), starting with no movies",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

fn warn_on_duplicate_ids(movies: &[Movie]) {
    let mut seen = HashSet::with_capacity(movies.len());
    for movie in movies {
        if !seen.insert(movie.id) {
            warn!(
                "Duplicate movie id {} in backing file; lookups will hit the first one",
                movie.id
            );
        }
    }
}

async fn write_movies(path: &Path, movies: &[Movie]) -> Result<()> {
    let data = serde_json::to_vec_pretty(movies)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, &data).await?;
    tokio::fs::rename(&tmp, path).await?;
    debug!("Wrote {} movies to {}", movies.len(), path.display());
    Ok(())
}
