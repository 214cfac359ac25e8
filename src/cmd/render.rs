use super::{load_keyboard, CmdError, CmdResult};
use crate::reports;
use clap::Args;
use clavier::config::Config;
use clavier::render::{self, LayoutMetrics};

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,

    /// Layout index to render; all layouts when omitted
    #[arg(short, long)]
    pub layout: Option<usize>,
}

pub fn run(args: RenderArgs) -> CmdResult {
    let state = load_keyboard(&args.config.bundle)?;
    let bundle = args.config.bundle.to_bundle();
    let metrics = LayoutMetrics::from(&args.config.render);

    let Some(collection) = state.collection() else {
        return Ok(());
    };

    let indices: Vec<usize> = match args.layout {
        Some(i) if i < collection.len() => vec![i],
        Some(i) => {
            return Err(CmdError::Usage(format!(
                "layout {} out of range (asset has {})",
                i,
                collection.len()
            )))
        }
        None => (0..collection.len()).collect(),
    };

    for i in indices {
        if let Some(layout) = collection.layout(i) {
            let rendered = render::compute(layout, &metrics, Some(&bundle));
            reports::print_key_frames(i, &rendered);
        }
    }
    Ok(())
}
