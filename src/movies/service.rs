use super::model::{CreateMovieRequest, Movie, UpdateMovieRequest};
use crate::di::{Container, Injectable};
use crate::error::{MoviesError, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Collaborator the movies controller delegates every request to.
///
/// Identifiers arrive exactly as they appeared in the request path; how they
/// are interpreted is up to the implementation.
#[async_trait]
pub trait MovieService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Movie>>;

    /// Fails with [`MoviesError::NotFound`] when `id` is unknown.
    async fn get_one(&self, id: &str) -> Result<Movie>;

    async fn create(&self, payload: CreateMovieRequest) -> Result<Movie>;

    /// Removes the movie and returns it.
    async fn delete_one(&self, id: &str) -> Result<Movie>;

    async fn update(&self, id: &str, payload: UpdateMovieRequest) -> Result<Movie>;
}

#[derive(Debug)]
struct Store {
    movies: Vec<Movie>,
    next_id: u64,
}

impl Store {
    /// Surrounding whitespace is ignored, so `" 1"` finds movie 1.
    fn position(&self, id: &str) -> Result<usize> {
        id.trim()
            .parse::<u64>()
            .ok()
            .and_then(|id| self.movies.iter().position(|m| m.id == id))
            .ok_or_else(|| MoviesError::not_found(id))
    }
}

/// Process-local movie collection, kept in insertion order.
///
/// Ids start at 1 and are never handed out twice, even after a delete.
#[derive(Debug)]
pub struct InMemoryMovieService {
    store: RwLock<Store>,
}

impl InMemoryMovieService {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                movies: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryMovieService {
    fn default() -> Self {
        Self::new()
    }
}

impl Injectable for InMemoryMovieService {
    fn inject(_container: &Container) -> Result<Self> {
        Ok(Self::new())
    }
}

#[async_trait]
impl MovieService for InMemoryMovieService {
    async fn get_all(&self) -> Result<Vec<Movie>> {
        Ok(self.store.read().await.movies.clone())
    }

    async fn get_one(&self, id: &str) -> Result<Movie> {
        let store = self.store.read().await;
        let index = store.position(id)?;
        Ok(store.movies[index].clone())
    }

    async fn create(&self, payload: CreateMovieRequest) -> Result<Movie> {
        let mut store = self.store.write().await;
        let movie = Movie::new(store.next_id, payload);
        store.next_id += 1;
        store.movies.push(movie.clone());

        tracing::info!(id = movie.id, title = %movie.title, "movie created");
        Ok(movie)
    }

    async fn delete_one(&self, id: &str) -> Result<Movie> {
        let mut store = self.store.write().await;
        let index = store.position(id)?;
        let movie = store.movies.remove(index);

        tracing::info!(id = movie.id, "movie deleted");
        Ok(movie)
    }

    async fn update(&self, id: &str, payload: UpdateMovieRequest) -> Result<Movie> {
        let mut store = self.store.write().await;
        let index = store.position(id)?;
        let movie = &mut store.movies[index];
        movie.apply(payload);

        tracing::info!(id = movie.id, "movie updated");
        Ok(movie.clone())
    }
}
