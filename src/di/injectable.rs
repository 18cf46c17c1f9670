use crate::di::Container;
use crate::error::Result;

/// Types that can build themselves from the providers in a [`Container`].
///
/// # Example
/// ```
/// use movies::di::{Container, Injectable};
/// use movies::movies::MoviesController;
///
/// // Fails until a `dyn MovieService` has been provided.
/// assert!(MoviesController::inject(&Container::new()).is_err());
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
