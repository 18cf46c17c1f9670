//! The `/movies` resource: model, collaborator interface and controller.

pub mod controller;
pub mod model;
pub mod service;

pub use controller::MoviesController;
pub use model::{CreateMovieRequest, Movie, UpdateMovieRequest};
pub use service::{InMemoryMovieService, MovieService};

use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;
use std::sync::Arc;

/// Registers the movies providers.
///
/// A `dyn MovieService` provided before registration wins over the in-memory
/// default, which is how callers plug in their own collaborator.
pub struct MoviesModule;

impl Module for MoviesModule {
    fn register(container: &mut Container) -> Result<()> {
        if !container.contains::<dyn MovieService>() {
            let service = InMemoryMovieService::inject(container)?;
            container.register(service);
            container.bind::<dyn MovieService, InMemoryMovieService, _>(|s| {
                s as Arc<dyn MovieService>
            })?;
        }

        let controller = MoviesController::inject(container)?;
        container.register(controller);
        tracing::debug!(providers = container.len(), "MoviesModule registered");
        Ok(())
    }
}
