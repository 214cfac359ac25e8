use super::{load_keyboard, CmdError, CmdResult};
use crate::reports;
use clap::Args;
use clavier::config::BundleParams;
use clavier::dispatch::{TextBuffer, TextDocumentProxy};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub bundle: BundleParams,

    /// Taps as row:column pairs on the layout active at tap time, e.g. "0:0,3:1"
    #[arg(long)]
    pub taps: String,

    /// Text already in the field before the first tap
    #[arg(long, default_value = "")]
    pub initial: String,
}

pub fn parse_taps(list: &str) -> Result<Vec<(usize, usize)>, CmdError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let (r, c) = s
                .split_once(':')
                .ok_or_else(|| CmdError::Usage(format!("tap '{}' is not row:column", s)))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<usize>()
                    .map_err(|_| CmdError::Usage(format!("invalid number in tap '{}'", s)))
            };
            Ok((parse(r)?, parse(c)?))
        })
        .collect()
}

pub fn run(args: SimulateArgs) -> CmdResult {
    let taps = parse_taps(&args.taps)?;
    let mut state = load_keyboard(&args.bundle)?;

    let mut field = TextBuffer::new();
    if !args.initial.is_empty() {
        field.insert_text(&args.initial);
    }

    for (row, column) in taps {
        let key = state
            .active_layout()
            .and_then(|l| l.key(row, column))
            .cloned()
            .ok_or_else(|| {
                CmdError::Usage(format!(
                    "no key at {}:{} on layout {}",
                    row,
                    column,
                    state.active_index().unwrap_or(0)
                ))
            })?;

        debug!("Tap {}:{} ({})", row, column, key.action.tag());
        if let Some(outcome) = state.dispatch(&key.action, &mut field) {
            println!(
                "tap {}:{} {:<12} -> {}",
                row,
                column,
                key.visual.label(),
                reports::describe_outcome(&outcome)
            );
        }
    }

    println!("text: {:?}", field.as_str());
    println!("{}", state.status_line());
    Ok(())
}
