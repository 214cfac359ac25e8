//! State owned by one keyboard instance.
//!
//! The phase only moves forward: `Idle -> Loading -> Ready | Unavailable`.
//! A failed load is terminal for the instance; the front end shows
//! "keyboard unavailable" instead of the keys.

use crate::bundle::ResourceBundle;
use crate::dispatch::{self, DispatchOutcome, LayoutNavigator, TextDocumentProxy, TransitionDirection};
use crate::error::{LoadError, LoadResult};
use crate::loader::{self, PendingLoad};
use crate::model::{KeyAction, KeyboardCollection, KeyboardLayout};
use tracing::{debug, error, info};

#[derive(Debug)]
pub enum Phase {
    Idle,
    Loading(PendingLoad),
    Ready {
        collection: KeyboardCollection,
        nav: LayoutNavigator,
    },
    Unavailable(LoadError),
}

#[derive(Debug)]
pub struct KeyboardState {
    phase: Phase,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Starts the background load. Only the first call does anything.
    pub fn request_load(&mut self, bundle: &ResourceBundle, resource_name: &str) -> bool {
        if !matches!(self.phase, Phase::Idle) {
            debug!("Load already requested, ignoring");
            return false;
        }
        self.phase = Phase::Loading(loader::spawn_load(bundle.clone(), resource_name));
        true
    }

    /// Publishes a finished background load. Returns `true` on the call that
    /// moved the state out of `Loading`.
    pub fn poll(&mut self) -> bool {
        let result = match &mut self.phase {
            Phase::Loading(pending) => pending.try_take(),
            _ => None,
        };
        match result {
            Some(result) => self.publish(result),
            None => false,
        }
    }

    /// Blocks until an in-flight load publishes.
    pub fn wait(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Loading(pending) => {
                // Phase is Idle while blocked; `publish` accepts from there.
                let result = pending.wait();
                self.publish(result)
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Publishes a load result obtained elsewhere. Ignored once the state
    /// is `Ready` or `Unavailable`.
    pub fn install(&mut self, result: LoadResult<KeyboardCollection>) -> bool {
        self.publish(result)
    }

    fn publish(&mut self, result: LoadResult<KeyboardCollection>) -> bool {
        if !matches!(self.phase, Phase::Idle | Phase::Loading(_)) {
            debug!("Keyboard already published, dropping late result");
            return false;
        }

        self.phase = match result.and_then(|c| c.validate().map(|_| c)) {
            Ok(collection) => {
                info!("⌨️  Keyboard ready with {} layout(s)", collection.len());
                let nav = LayoutNavigator::new(collection.len());
                Phase::Ready { collection, nav }
            }
            Err(e) => {
                error!("Keyboard unavailable ({}): {}", e.kind(), e);
                Phase::Unavailable(e)
            }
        };
        true
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.phase {
            Phase::Unavailable(e) => Some(e),
            _ => None,
        }
    }

    pub fn collection(&self) -> Option<&KeyboardCollection> {
        match &self.phase {
            Phase::Ready { collection, .. } => Some(collection),
            _ => None,
        }
    }

    pub fn navigator(&self) -> Option<&LayoutNavigator> {
        match &self.phase {
            Phase::Ready { nav, .. } => Some(nav),
            _ => None,
        }
    }

    pub fn active_layout(&self) -> Option<&KeyboardLayout> {
        match &self.phase {
            Phase::Ready { collection, nav } => collection.layout(nav.index),
            _ => None,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.navigator().map(|n| n.index)
    }

    pub fn layout_count(&self) -> usize {
        self.navigator().map_or(0, |n| n.count)
    }

    pub fn direction(&self) -> Option<TransitionDirection> {
        self.navigator().and_then(|n| n.direction)
    }

    /// One-line description for status bars and logs.
    pub fn status_line(&self) -> String {
        match &self.phase {
            Phase::Idle => "keyboard idle".to_string(),
            Phase::Loading(_) => "keyboard loading".to_string(),
            Phase::Ready { nav, .. } => format!("layout {} of {}", nav.index + 1, nav.count),
            Phase::Unavailable(e) => format!("keyboard unavailable: {}", e),
        }
    }

    /// Runs a key's action. `None` unless the keyboard is ready.
    pub fn dispatch<P: TextDocumentProxy + ?Sized>(
        &mut self,
        action: &KeyAction,
        proxy: &mut P,
    ) -> Option<DispatchOutcome> {
        match &mut self.phase {
            Phase::Ready { nav, .. } => {
                let outcome = dispatch::handle(action, proxy, nav);
                if let DispatchOutcome::Switched { from, to, direction } = outcome {
                    debug!("Layout {} -> {} ({})", from, to, direction);
                }
                Some(outcome)
            }
            _ => None,
        }
    }
}
