use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use photogate_core::io::image_io::load_pixel_buffer;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let buffer = load_pixel_buffer(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", buffer.width(), buffer.height());
    println!("Layout:      {}", buffer.layout());
    println!("Channels:    {}", buffer.channels());
    println!("Sample type: {}", buffer.samples().type_name());

    Ok(())
}
