use crate::di::Container;
use crate::error::Result;
use std::sync::Arc;

/// Builder for constructing a dependency injection container
///
/// # Example
/// ```
/// use movies::di::ContainerBuilder;
/// use movies::movies::{InMemoryMovieService, MovieService};
/// use std::sync::Arc;
///
/// let container = ContainerBuilder::new()
///     .register(InMemoryMovieService::new())
///     .bind::<dyn MovieService, InMemoryMovieService, _>(|s| s as Arc<dyn MovieService>)
///     .unwrap()
///     .build();
/// assert!(container.contains::<dyn MovieService>());
/// ```
#[derive(Default)]
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Register an already shared instance, e.g. an `Arc<dyn Trait>`
    pub fn provide<T: ?Sized + 'static + Send + Sync>(mut self, instance: Arc<T>) -> Self {
        self.container.provide(instance);
        self
    }

    /// Bind a trait to a previously registered implementation
    pub fn bind<Trait, Impl, F>(mut self, cast: F) -> Result<Self>
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: FnOnce(Arc<Impl>) -> Arc<Trait>,
    {
        self.container.bind::<Trait, Impl, F>(cast)?;
        Ok(self)
    }

    pub fn build(self) -> Container {
        self.container
    }
}
