use std::process::{Command, Stdio};
use tracing::{info, warn};

pub const KEYBOARD_NAME: &str = "Clavier";

/// Onboarding steps shown by the host application.
pub const ACTIVATION_STEPS: &[&str] = &[
    "Open the system Settings (use --open to launch them).",
    "Go to General > Keyboard > Keyboards.",
    "Tap 'Add New Keyboard...' and select Clavier from the list.",
    "Tap Clavier in your keyboard list and enable 'Allow Full Access'.",
];

/// Opens the system settings. Fire and forget: the return value only says
/// whether the request could be issued.
pub trait SettingsLauncher {
    fn open_settings(&self) -> bool;
}

/// Launches settings by spawning an external program.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLauncher {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl SettingsLauncher for CommandLauncher {
    fn open_settings(&self) -> bool {
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(_) => {
                info!("⚙️  Requested settings via '{}'", self.program);
                true
            }
            Err(e) => {
                warn!("Could not launch settings with '{}': {}", self.program, e);
                false
            }
        }
    }
}

/// Whether `identifier` is among the host's active input modes.
pub fn is_keyboard_enabled<S: AsRef<str>>(active: &[S], identifier: &str) -> bool {
    active.iter().any(|a| a.as_ref().trim() == identifier)
}
