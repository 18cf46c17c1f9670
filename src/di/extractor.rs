use crate::di::Container;
use crate::error::MoviesError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Axum extractor resolving a provider from the router state's container.
///
/// `T` may be a trait object, so `Inject<dyn MovieService>` works as well.
///
/// # Example
/// ```
/// use axum::Json;
/// use movies::di::Inject;
/// use movies::movies::{Movie, MovieService};
///
/// async fn list(Inject(service): Inject<dyn MovieService>) -> movies::Result<Json<Vec<Movie>>> {
///     Ok(Json(service.get_all().await?))
/// }
/// ```
pub struct Inject<T: ?Sized>(pub Arc<T>);

/// Router state that owns the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: ?Sized + 'static + Send + Sync,
{
    type Rejection = MoviesError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        state.get_container().resolve::<T>().map(Inject)
    }
}

impl<T: ?Sized> std::ops::Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: ?Sized> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::{InMemoryMovieService, MovieService};
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[derive(Clone)]
    struct TestState {
        container: Arc<Container>,
    }

    impl HasContainer for TestState {
        fn get_container(&self) -> &Container {
            &self.container
        }
    }

    async fn count(Inject(service): Inject<dyn MovieService>) -> String {
        service.get_all().await.map(|m| m.len()).unwrap_or_default().to_string()
    }

    fn app(container: Container) -> Router {
        Router::new().route("/count", get(count)).with_state(TestState {
            container: Arc::new(container),
        })
    }

    fn request() -> Request<Body> {
        Request::builder().uri("/count").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_inject_resolves_trait_object() {
        let mut container = Container::new();
        container.provide::<dyn MovieService>(Arc::new(InMemoryMovieService::new()));

        let response = app(container).oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_inject_missing_provider_is_server_error() {
        let response = app(Container::new()).oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
