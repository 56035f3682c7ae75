use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "img2ico",
    about = "Crop an image to a centered square and save it as an .ico icon"
)]
pub struct Cli {
    /// Source image (png, jpeg, bmp, webp, ...)
    pub input: PathBuf,

    /// Output file, including the .ico extension [default: <input stem>.ico]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Trim the square to a rounded rectangle before encoding
    #[arg(long)]
    pub round: bool,

    /// Ratio of side length to corner radius [default: 5]
    #[arg(
        long,
        allow_negative_numbers = true,
        long_help = "\
Ratio of side length to corner radius [default: 5].
Larger values give smaller corners; 2 gives a full circle."
    )]
    pub round_rate: Option<i64>,

    /// Keep hard corner edges instead of smoothing the mask
    #[arg(long)]
    pub no_smooth: bool,

    /// Fail on images larger than 256x256 instead of shrinking them
    #[arg(long)]
    pub no_downscale: bool,

    /// TOML file with default settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}
