use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trisect", version, about = "TRISECT CLI")]
pub struct CliArgs {
    /// Input image file (PNG with alpha channel)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for the section images (defaults to the input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Row-color discontinuity threshold (sum of absolute per-channel differences)
    #[arg(long, default_value_t = 50.0)]
    pub threshold: f64,

    /// Maximum dividing-line thickness in rows
    #[arg(long, default_value_t = 8)]
    pub max_line_thickness: u32,

    /// Skip writing the intermediate alpha-cropped image
    #[arg(long, default_value_t = false)]
    pub no_working_image: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
