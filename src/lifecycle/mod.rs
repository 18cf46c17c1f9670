//! Application bootstrap and shutdown.
//!
//! ```text
//! 1. Configuration loading
//!    ↓
//! 2. DI container creation + module registration
//!    ↓
//! 3. Router assembly (controllers nested under their base paths)
//!    ↓
//! 4. Server start
//!    ↓
//! [Running...]
//!    ↓
//! 5. Shutdown signal (SIGTERM/SIGINT) → in-flight requests drain
//! ```

mod application;
mod shutdown;

pub use application::{AppState, Application, ApplicationBuilder};
pub use shutdown::shutdown_signal;
