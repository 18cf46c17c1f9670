use super::shutdown_signal;
use crate::config::ServerConfig;
use crate::di::{Container, HasContainer};
use crate::error::{MoviesError, Result};
use crate::module::Module;
use crate::movies::MoviesController;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Router state; gives handlers and extractors access to the container.
#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// A configured service, ready to be routed or served.
///
/// # Example
///
/// ```rust,no_run
/// use movies::lifecycle::Application;
/// use movies::movies::MoviesModule;
///
/// # async fn run() -> movies::Result<()> {
/// let app = Application::builder()
///     .module::<MoviesModule>()?
///     .build()?;
/// app.serve().await
/// # }
/// ```
pub struct Application {
    container: Arc<Container>,
    config: ServerConfig,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Assemble the HTTP router from the registered controllers.
    pub fn router(&self) -> Result<Router> {
        let movies = self.container.resolve::<MoviesController>()?;
        let state = AppState {
            container: Arc::clone(&self.container),
        };

        Ok(Router::new()
            .nest(
                MoviesController::base_path(),
                MoviesController::router(movies),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state))
    }

    /// Bind the configured address and serve until a shutdown signal arrives.
    pub async fn serve(self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        Ok(TcpListener::bind(self.config.addr()).await?)
    }

    /// Serve on `listener` until `shutdown` completes, then drain in-flight requests.
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router()?;
        tracing::info!("Server running on http://{}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Initiating graceful shutdown...");
            })
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Builder for [`Application`].
#[derive(Default)]
pub struct ApplicationBuilder {
    container: Option<Container>,
    config: ServerConfig,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-populated container instead of an empty one.
    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a module's providers into the container.
    pub fn module<M: Module>(mut self) -> Result<Self> {
        let container = self.container.get_or_insert_with(Container::new);
        M::register(container).map_err(|e| MoviesError::ModuleRegistrationFailed {
            message: format!("{}: {}", std::any::type_name::<M>(), e),
        })?;
        Ok(self)
    }

    pub fn build(self) -> Result<Application> {
        let container = self.container.ok_or_else(|| MoviesError::ModuleRegistrationFailed {
            message: "no container or module was provided".to_string(),
        })?;

        Ok(Application {
            container: Arc::new(container),
            config: self.config,
        })
    }
}
