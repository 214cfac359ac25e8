use crate::bundle::{ResourceBundle, DEFAULT_RESOURCE};
use crate::render::LayoutMetrics;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub bundle: BundleParams,
    #[command(flatten)]
    pub render: RenderParams,
}

#[derive(Args, Debug, Clone)]
pub struct BundleParams {
    /// Directory holding the keyboard asset and its SVG glyphs
    #[arg(long, default_value = "resources")]
    pub bundle: String,
    /// Asset name, without the .json extension
    #[arg(long, default_value = DEFAULT_RESOURCE)]
    pub resource: String,
}

#[derive(Args, Debug, Clone)]
pub struct RenderParams {
    #[arg(long, default_value_t = 375.0)]
    pub width: f64,
    #[arg(long, default_value_t = 16.0)]
    pub padding: f64,
    #[arg(long, default_value_t = 4.0)]
    pub key_spacing: f64,
    #[arg(long, default_value_t = 8.0)]
    pub row_spacing: f64,
    #[arg(long, default_value_t = 45.0)]
    pub key_height: f64,
}

impl Default for BundleParams {
    fn default() -> Self {
        Self {
            bundle: "resources".to_string(),
            resource: DEFAULT_RESOURCE.to_string(),
        }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        let m = LayoutMetrics::default();
        Self {
            width: m.width,
            padding: m.padding,
            key_spacing: m.key_spacing,
            row_spacing: m.row_spacing,
            key_height: m.key_height,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundle: BundleParams::default(),
            render: RenderParams::default(),
        }
    }
}

impl BundleParams {
    pub fn to_bundle(&self) -> ResourceBundle {
        ResourceBundle::new(&self.bundle)
    }
}

impl From<&RenderParams> for LayoutMetrics {
    fn from(p: &RenderParams) -> Self {
        Self {
            width: p.width,
            padding: p.padding,
            key_spacing: p.key_spacing,
            row_spacing: p.row_spacing,
            key_height: p.key_height,
        }
    }
}
