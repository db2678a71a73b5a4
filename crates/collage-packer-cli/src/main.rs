use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use collage_packer_core::{InputImage, pack_images, pack_layout, to_json};
use globset::{Glob, GlobSetBuilder};
use image::{DynamicImage, ImageReader};
use tracing::{error, info};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "collage-packer",
    about = "Pack images into a compact collage",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack images into a collage PNG
    Pack(PackArgs),
    /// Layout-only export (no PNG): compute placements and export JSON
    Layout(PackArgs),
    /// Simple timing bench (packs once, prints time + occupancy)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Input file or directory
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Collage base name (files will be name.png/.json)
    #[arg(short, long, default_value = "collage", help_heading = "Input/Output")]
    name: String,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,
    /// Also write the layout JSON next to the PNG
    #[arg(long, default_value_t = false, help_heading = "Export")]
    layout_json: bool,
    /// Dry run: compute layout and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Input directory
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args, false),
        Commands::Layout(args) => run_pack(args, true),
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_pack(cli: &PackArgs, layout_only: bool) -> anyhow::Result<()> {
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create out_dir {}", cli.out_dir.display()))?;

    let paths = gather_paths(&cli.input, &cli.include, &cli.exclude)?;
    let inputs = load_images(&paths)?;
    info!(count = inputs.len(), "loaded input images");

    // layout-only branch
    if layout_only {
        let items: Vec<(String, u32, u32)> = inputs
            .iter()
            .map(|inp| {
                let rgba = inp.image.to_rgba8();
                let (w, h) = rgba.dimensions();
                (inp.key.clone(), w, h)
            })
            .collect();
        let collage = pack_layout(items)?;
        let json_path = cli.out_dir.join(format!("{}.json", cli.name));
        let json = serde_json::to_string_pretty(&to_json(&collage))?;
        fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
        info!(
            ?json_path,
            frames = collage.frames.len(),
            "layout written (layout-only)"
        );
        return Ok(());
    }

    let out = pack_images(inputs)?;

    let stats = out.stats();
    info!(
        frames = stats.num_frames,
        width = stats.width,
        height = stats.height,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "stats"
    );

    if !cli.dry_run {
        let png_path = cli.out_dir.join(format!("{}.png", cli.name));
        out.rgba
            .save(&png_path)
            .with_context(|| format!("write {}", png_path.display()))?;
        info!(?png_path, "collage written");

        if cli.layout_json {
            let json_path = cli.out_dir.join(format!("{}.json", cli.name));
            let json = serde_json::to_string_pretty(&to_json(&out.collage))?;
            fs::write(&json_path, json)
                .with_context(|| format!("write {}", json_path.display()))?;
            info!(
                ?json_path,
                frames = out.collage.frames.len(),
                "layout written"
            );
        }
    }

    Ok(())
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    // Minimal bench: pack once and print time + occupancy
    let paths = gather_paths(&b.input, &[], &[])?;
    let inputs = load_images(&paths)?;
    let start = Instant::now();
    let out = pack_images(inputs)?;
    let dur = start.elapsed();
    let stats = out.stats();
    println!(
        "frames={} canvas={}x{} occupancy={:.2}% time={}",
        stats.num_frames,
        stats.width,
        stats.height,
        stats.occupancy * 100.0,
        fmt_dur(dur)
    );
    Ok(())
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn gather_paths(
    path: &Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    // Build glob matchers
    let mut inc_set = None;
    if !include.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in include {
            b.add(Glob::new(pat)?);
        }
        inc_set = Some(b.build()?);
    }
    let mut exc_set = None;
    if !exclude.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in exclude {
            b.add(Glob::new(pat)?);
        }
        exc_set = Some(b.build()?);
    }
    let mut list: Vec<PathBuf> = Vec::new();
    if path.is_file() {
        if !should_skip(path, inc_set.as_ref(), exc_set.as_ref()) && is_image(path) {
            list.push(path.to_path_buf());
        }
    } else {
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && !should_skip(p, inc_set.as_ref(), exc_set.as_ref()) && is_image(p) {
                list.push(p.to_path_buf());
            }
        }
    }
    Ok(list)
}

fn should_skip(
    p: &Path,
    include: Option<&globset::GlobSet>,
    exclude: Option<&globset::GlobSet>,
) -> bool {
    let s = p.to_string_lossy().replace('\\', "/");
    if let Some(ex) = exclude {
        if ex.is_match(&s) {
            return true;
        }
    }
    if let Some(inc) = include {
        if !inc.is_match(&s) {
            return true;
        }
    }
    false
}

fn is_image(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "bmp" | "tga" | "gif")
    )
}

fn load_images(paths: &[PathBuf]) -> anyhow::Result<Vec<InputImage>> {
    let mut list = Vec::with_capacity(paths.len());
    for p in paths {
        match load_image(p) {
            Ok(img) => {
                let key = p.to_string_lossy().replace('\\', "/");
                list.push(InputImage { key, image: img });
            }
            Err(e) => {
                error!(?p, error = %e, "skip image");
            }
        }
    }
    Ok(list)
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
