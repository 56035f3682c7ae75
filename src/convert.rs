use anyhow::{Context, Result};
use colored::Colorize;
use image::GenericImageView;

use crate::cli::Cli;
use crate::config::{Config, Options};
use crate::icon;
use crate::preprocess::preprocess;

pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let options = Options::resolve(cli, &config);
    let output = icon::output_path(&cli.input, cli.output.as_deref());

    let mut img = preprocess(&cli.input, &options)
        .with_context(|| format!("Failed to process {}", cli.input.display()))?;
    let (w, h) = img.dimensions();

    if options.downscale {
        if let Some(fitted) = icon::fit_to_icon(&img) {
            let (fw, fh) = fitted.dimensions();
            println!(
                "{} {}x{} exceeds the ICO limit, shrinking to {}x{}",
                "!".yellow(),
                w,
                h,
                fw,
                fh
            );
            img = fitted;
        }
    }

    let bytes = icon::encode_ico(&img)
        .with_context(|| format!("Failed to encode {}", output.display()))?;
    icon::write_icon(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let (w, h) = img.dimensions();
    let shape = if options.round { ", rounded" } else { "" };
    println!(
        "{} Wrote {} ({}x{}{})",
        "✓".green(),
        output.display(),
        w,
        h,
        shape
    );
    Ok(())
}
