use crate::di::Container;
use crate::error::Result;

/// A unit of registration: the providers and controllers of one feature.
///
/// # Example
/// ```
/// use movies::di::Container;
/// use movies::module::Module;
/// use movies::movies::{MoviesController, MoviesModule};
///
/// let mut container = Container::new();
/// MoviesModule::register(&mut container).unwrap();
/// assert!(container.contains::<MoviesController>());
/// ```
pub trait Module {
    /// Register all providers and controllers in this module
    fn register(container: &mut Container) -> Result<()>;
}
