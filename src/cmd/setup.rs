use super::CmdResult;
use clap::Args;
use clavier::host::{self, CommandLauncher, SettingsLauncher, ACTIVATION_STEPS, KEYBOARD_NAME};

#[derive(Args, Debug, Clone)]
pub struct SetupArgs {
    /// Launch the settings program after printing the steps
    #[arg(long, default_value_t = false)]
    pub open: bool,

    #[arg(long, default_value = "xdg-open")]
    pub settings_program: String,

    #[arg(long, default_value = "settings://")]
    pub settings_target: String,

    /// Comma separated identifiers of the currently active keyboards
    #[arg(long)]
    pub enabled: Option<String>,

    #[arg(long, default_value = "clavier.extension")]
    pub identifier: String,
}

pub fn run(args: SetupArgs) -> CmdResult {
    println!("\nHow to enable '{}'", KEYBOARD_NAME);
    for (i, step) in ACTIVATION_STEPS.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if let Some(list) = &args.enabled {
        let active: Vec<&str> = list.split(',').collect();
        if host::is_keyboard_enabled(&active, &args.identifier) {
            println!("\n✅ {} is enabled", args.identifier);
        } else {
            println!("\n⚠️  {} is not enabled yet", args.identifier);
        }
    }

    if args.open {
        let launcher = CommandLauncher::new(args.settings_program, vec![args.settings_target]);
        if !launcher.open_settings() {
            println!("⚠️  Could not open settings; open them manually.");
        }
    }
    Ok(())
}
