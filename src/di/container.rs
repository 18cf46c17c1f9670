use crate::error::{MoviesError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// A provider as stored in the container: an `Arc<T>` erased behind `Any`.
///
/// Holding the `Arc<T>` (rather than `T` itself) lets unsized providers such as
/// `dyn MovieService` live next to concrete ones.
type Provider = Arc<dyn Any + Send + Sync>;

/// Thread-safe dependency injection container.
#[derive(Clone, Default)]
pub struct Container {
    providers: DashMap<TypeId, Provider>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concrete provider, taking ownership of it.
    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.provide(Arc::new(instance))
    }

    /// Register an already shared provider. `T` may be a trait object.
    pub fn provide<T: ?Sized + 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        tracing::debug!(provider = std::any::type_name::<T>(), "registering provider");
        self.providers.insert(TypeId::of::<T>(), Arc::new(instance));
        self
    }

    /// Expose the registered `Impl` as `Arc<Trait>`.
    ///
    /// `Impl` must already be registered; the cast is evaluated once, so the
    /// trait binding shares the very same instance.
    pub fn bind<Trait, Impl, F>(&mut self, cast: F) -> Result<&mut Self>
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: FnOnce(Arc<Impl>) -> Arc<Trait>,
    {
        let concrete = self.resolve::<Impl>()?;
        Ok(self.provide::<Trait>(cast(concrete)))
    }

    pub fn resolve<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let entry = self
            .providers
            .get(&TypeId::of::<T>())
            .ok_or_else(|| MoviesError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })?;

        let shared = entry
            .value()
            .clone()
            .downcast::<Arc<T>>()
            .map_err(|_| MoviesError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })?;
        Ok(shared.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.providers.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
