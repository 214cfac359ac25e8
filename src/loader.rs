use crate::bundle::{ResourceBundle, ASSET_EXTENSION};
use crate::error::{LoadError, LoadResult};
use crate::model::KeyboardCollection;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, info, warn};

/// Decodes and validates a keyboard asset.
pub fn decode(bytes: &[u8]) -> LoadResult<KeyboardCollection> {
    let collection: KeyboardCollection = serde_json::from_slice(bytes)?;
    collection.validate()?;
    Ok(collection)
}

/// Reads `<resource_name>.json` from the bundle and decodes it.
pub fn load(bundle: &ResourceBundle, resource_name: &str) -> LoadResult<KeyboardCollection> {
    info!("📂 Loading keyboard asset '{}'", resource_name);
    let bytes = bundle.read(resource_name, ASSET_EXTENSION)?;

    match decode(&bytes) {
        Ok(collection) => {
            info!(
                "✅ Loaded {} layout(s) from '{}'",
                collection.len(),
                resource_name
            );
            Ok(collection)
        }
        Err(e) => {
            warn!("❌ Keyboard asset '{}' rejected: {}", resource_name, e);
            Err(e)
        }
    }
}

/// Result of a load running on the background pool.
#[derive(Debug)]
pub struct PendingLoad {
    rx: oneshot::Receiver<LoadResult<KeyboardCollection>>,
}

fn worker_lost() -> LoadError {
    LoadError::Io(std::io::Error::other(
        "layout loader stopped before publishing a result",
    ))
}

impl PendingLoad {
    /// Non-blocking. `None` while the load is still in flight.
    pub fn try_take(&mut self) -> Option<LoadResult<KeyboardCollection>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(worker_lost())),
        }
    }

    /// Blocks the calling thread until the load finishes.
    pub fn wait(self) -> LoadResult<KeyboardCollection> {
        self.rx.blocking_recv().unwrap_or_else(|_| Err(worker_lost()))
    }
}

/// Starts one read-and-decode on the rayon pool. The caller keeps the
/// returned handle on the thread that owns the keyboard state.
pub fn spawn_load(bundle: ResourceBundle, resource_name: impl Into<String>) -> PendingLoad {
    let resource_name = resource_name.into();
    let (tx, rx) = oneshot::channel();

    rayon::spawn(move || {
        let result = load(&bundle, &resource_name);
        if tx.send(result).is_err() {
            debug!("Load of '{}' finished after its receiver was dropped", resource_name);
        }
    });

    PendingLoad { rx }
}
