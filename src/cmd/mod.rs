use clavier::config::BundleParams;
use clavier::error::LoadError;
use clavier::state::KeyboardState;
use thiserror::Error;
use tracing::info;

pub mod init;
pub mod render;
pub mod setup;
pub mod simulate;
pub mod validate;

#[derive(Error, Debug)]
pub enum CmdError {
    #[error("keyboard unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{0}")]
    Usage(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CmdResult = Result<(), CmdError>;

/// Loads the keyboard the way the extension does: one background load,
/// published back on this thread.
pub fn load_keyboard(params: &BundleParams) -> Result<KeyboardState, CmdError> {
    let bundle = params.to_bundle();
    info!("🚀 Starting keyboard from bundle '{}'", bundle.root().display());

    let mut state = KeyboardState::new();
    state.request_load(&bundle, &params.resource);
    state.wait();

    if let Some(e) = state.error() {
        return Err(CmdError::Unavailable(e.to_string()));
    }
    Ok(state)
}
