use super::{load_keyboard, CmdResult};
use crate::reports;
use clap::Args;
use clavier::config::BundleParams;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub bundle: BundleParams,

    /// Also print each layout's key grid
    #[arg(long, default_value_t = false)]
    pub grid: bool,
}

pub fn run(args: ValidateArgs) -> CmdResult {
    let state = load_keyboard(&args.bundle)?;

    if let Some(collection) = state.collection() {
        println!("\n🔎 === KEYBOARD ASSET '{}' === 🔎", args.bundle.resource);
        reports::print_collection_summary(collection);

        if args.grid {
            for (i, layout) in collection.keyboards.iter().enumerate() {
                reports::print_layout_grid(i, layout);
            }
        }
        println!("✅ {} layout(s) OK", collection.len());
    }
    Ok(())
}
