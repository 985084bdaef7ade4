//! Manual smoke-test binary: resizes a raw BGRA file (or a synthesized
//! checkerboard, with no input given) and writes the raw BGRA result.
//!
//! Not part of the library's public surface; this is the "host" stand-in
//! used to exercise `resize()` by hand.

use anyhow::{bail, Context, Result};
use clap::Parser;
use fastscale::{resize, Bitmap8, Bitmap8Mut, FilterKind, NoopProfiler, Rect, ResizeOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resample-demo", about = "Resize a raw BGRA buffer with fastscale")]
struct Cli {
    /// Raw BGRA8 input file; omit to synthesize an 8x8 checkerboard.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Source width in pixels, required when --input is given.
    #[arg(long)]
    src_width: Option<u32>,
    /// Source height in pixels, required when --input is given.
    #[arg(long)]
    src_height: Option<u32>,

    #[arg(long, default_value_t = 256)]
    width: u32,
    #[arg(long, default_value_t = 256)]
    height: u32,

    #[arg(long, value_enum)]
    filter: Option<FilterKind>,
    #[arg(long, default_value_t = 1.0)]
    blur: f64,
    #[arg(long, default_value_t = false)]
    use_halving: bool,
    #[arg(long, default_value_t = 0.0)]
    post_sharpen_percent: f64,

    /// Where to write the raw BGRA8 output.
    #[arg(long, default_value = "out.bgra")]
    output: PathBuf,
}

fn synthesize_checkerboard(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for y in 0..height {
        for x in 0..width {
            let on = (x + y) % 2 == 0;
            let v = if on { 255 } else { 0 };
            let idx = (y as usize * width as usize + x as usize) * 4;
            data[idx..idx + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    data
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (src_data, src_width, src_height) = match &cli.input {
        Some(path) => {
            let width = cli
                .src_width
                .context("--src-width is required when --input is given")?;
            let height = cli
                .src_height
                .context("--src-height is required when --input is given")?;
            let data = std::fs::read(path)
                .with_context(|| format!("reading input file {}", path.display()))?;
            let expected = width as usize * height as usize * 4;
            if data.len() != expected {
                bail!(
                    "input file is {} bytes, expected {width}x{height}x4 = {expected}",
                    data.len()
                );
            }
            (data, width, height)
        }
        None => {
            let (w, h) = (8, 8);
            (synthesize_checkerboard(w, h), w, h)
        }
    };

    let src = Bitmap8::new(&src_data, src_width, src_height, src_width as usize * 4, 4, true)
        .context("building source bitmap")?;

    let options = ResizeOptions {
        filter: cli.filter.unwrap_or(FilterKind::RobidouxDefault),
        blur: cli.blur,
        use_halving: cli.use_halving,
        post_sharpen_percent: cli.post_sharpen_percent,
        ..ResizeOptions::default()
    };

    let mut dst_data = vec![0u8; cli.width as usize * cli.height as usize * 4];
    let dst = Bitmap8Mut::new(&mut dst_data, cli.width, cli.height, cli.width as usize * 4, 4, true)
        .context("building destination bitmap")?;

    let mut profiler = NoopProfiler;
    resize(
        src,
        Rect::new(0, 0, src_width, src_height),
        dst,
        Rect::new(0, 0, cli.width, cli.height),
        &options,
        &mut profiler,
    )
    .context("resize failed")?;

    std::fs::write(&cli.output, &dst_data)
        .with_context(|| format!("writing output file {}", cli.output.display()))?;
    println!(
        "wrote {}x{} BGRA8 to {}",
        cli.width,
        cli.height,
        cli.output.display()
    );
    Ok(())
}
