use super::{CmdError, CmdResult};
use clap::Args;
use clavier::layouts::{self, KnownLayout};
use clavier::loader;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Comma separated layout names, in switching order
    #[arg(long, default_value = "azerty,digits")]
    pub layouts: String,

    #[arg(short, long, default_value = "resources/keyboards.json")]
    pub out: PathBuf,

    /// Overwrite an existing file
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

pub fn parse_layouts(list: &str) -> Result<Vec<KnownLayout>, CmdError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            KnownLayout::from_str(s)
                .map_err(|_| CmdError::Usage(format!("unknown layout '{}'", s)))
        })
        .collect()
}

pub fn run(args: InitArgs) -> CmdResult {
    let chosen = parse_layouts(&args.layouts)?;
    let collection = layouts::collection_of(&chosen);
    let json = serde_json::to_string_pretty(&collection)?;

    // Whatever we write must load back.
    loader::decode(json.as_bytes())?;

    if args.out.exists() && !args.force {
        return Err(CmdError::Usage(format!(
            "{} already exists (use --force to overwrite)",
            args.out.display()
        )));
    }
    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.out, json)?;

    info!("💾 Wrote {} layout(s) to {}", chosen.len(), args.out.display());
    println!("✅ Wrote {}", args.out.display());
    Ok(())
}
