pub mod bundle;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod layouts;
pub mod loader;
pub mod model;
pub mod render;
pub mod state;
// cmd and reports are binary modules (see main.rs).

pub use error::{LoadError, LoadErrorKind, LoadResult};
