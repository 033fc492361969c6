//! Library half of the `guide` binary: configuration, logging, session
//! scripts, lead sinks and the text renderer.

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod render;
pub mod session;
pub mod sinks;

pub use app::{SessionOutcome, SessionRunner};
pub use config::AppConfig;
pub use session::SessionScript;
