//! # Movies
//!
//! An HTTP resource service for a `movies` collection.
//!
//! The [`MoviesController`](movies::MoviesController) binds five routes under
//! `/movies` and delegates each one to an injected
//! [`MovieService`](movies::MovieService), forwarding path ids and typed bodies
//! verbatim and returning the service's result unchanged.
//!
//! | Method | Path           | Delegates to            |
//! |--------|----------------|-------------------------|
//! | GET    | `/movies`      | `MovieService::get_all`    |
//! | GET    | `/movies/{id}` | `MovieService::get_one`    |
//! | POST   | `/movies`      | `MovieService::create`     |
//! | DELETE | `/movies/{id}` | `MovieService::delete_one` |
//! | PATCH  | `/movies/{id}` | `MovieService::update`     |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use movies::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> movies::Result<()> {
//!     // Provide your own `Arc<dyn MovieService>` first to replace the in-memory default.
//!     let app = Application::builder()
//!         .config(ServerConfig::from_env()?)
//!         .module::<MoviesModule>()?
//!         .build()?;
//!
//!     app.serve().await
//! }
//! ```

pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod lifecycle;
pub mod module;
pub mod movies;

pub use common::ApiResponse;
pub use di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
pub use error::{MoviesError, Result};
pub use module::Module;

pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use movies::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::{ApiResponse, StatusCode};
    pub use crate::config::{ConfigService, ServerConfig};
    pub use crate::di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
    pub use crate::error::{MoviesError, Result};
    pub use crate::lifecycle::{AppState, Application, ApplicationBuilder, shutdown_signal};
    pub use crate::module::Module;
    pub use crate::movies::{
        CreateMovieRequest, InMemoryMovieService, Movie, MovieService, MoviesController,
        MoviesModule, UpdateMovieRequest,
    };
    pub use async_trait::async_trait;
    pub use axum::{Json, Router, extract::Path};
    pub use std::sync::Arc;
}
