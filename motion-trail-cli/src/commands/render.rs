//! `render` command: simulate motion and save the trail's final frame.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use motion_trail::{
    Color, PixmapSurface, RecordingSurface, Trail, TrailOverrides, TrailPoint,
};

use super::common::PathShape;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Output image (format from extension, e.g. .png)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Path the object follows
    #[arg(long, value_enum, default_value_t = PathShape::Circle)]
    pub path: PathShape,

    /// Number of simulated frames
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Simulated time per frame in milliseconds
    #[arg(long, default_value_t = 16.0)]
    pub frame_ms: f64,

    /// Trail config file (INI with a [trail] section)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override max_points
    #[arg(long)]
    pub max_points: Option<f64>,

    /// Override min_time_between_points (ms)
    #[arg(long)]
    pub min_interval: Option<f64>,

    /// Override line color (0xRRGGBB, #RRGGBB, or decimal)
    #[arg(long)]
    pub color: Option<Color>,

    /// Opaque background color; transparent if omitted
    #[arg(long)]
    pub background: Option<Color>,

    /// Write the recorded samples as JSON to this file
    #[arg(long)]
    pub points_json: Option<PathBuf>,

    /// Print the draw commands of the final frame
    #[arg(long)]
    pub commands: bool,
}

impl RenderArgs {
    /// Flags given on the command line, layered over the config file.
    fn overrides(&self) -> Result<TrailOverrides, CliError> {
        let from_file = match &self.config {
            Some(path) => TrailOverrides::load(path)?,
            None => TrailOverrides::default(),
        };

        let from_flags = TrailOverrides {
            max_points: self.max_points,
            min_time_between_points: self.min_interval,
            color: self.color,
            ..Default::default()
        };

        Ok(from_file.merge(from_flags))
    }
}

pub fn run(args: RenderArgs) -> Result<(), CliError> {
    if !(args.frame_ms.is_finite() && args.frame_ms > 0.0) {
        return Err(CliError::Usage(format!(
            "--frame-ms must be a positive number, got {}",
            args.frame_ms
        )));
    }

    let mut surface = PixmapSurface::new(args.width, args.height)?;
    if let Some(bg) = args.background {
        surface = surface.with_background(bg);
    }

    let mut trail = Trail::with_overrides(surface, &args.overrides()?);
    let (w, h) = (args.width as f64, args.height as f64);

    let mut recorded = 0;
    for frame in 0..args.frames {
        let t = frame as f64 * args.frame_ms;
        let (x, y) = args.path.position(t, w, h);
        if trail.update(x, y, t)? {
            recorded += 1;
        }
    }

    tracing::info!(
        frames = args.frames,
        recorded,
        points = trail.len(),
        segments = trail.segments_drawn(),
        "Simulation finished"
    );

    if args.commands {
        let mut replay = RecordingSurface::new();
        trail.render_to(&mut replay);
        for command in replay.commands() {
            println!("{}", command);
        }
    }

    if let Some(path) = &args.points_json {
        let points: Vec<TrailPoint> = trail.points().copied().collect();
        fs::write(path, serde_json::to_string_pretty(&points)?)?;
    }

    trail.surface().save(&args.output)?;
    println!(
        "Wrote {} ({} points, {} segments, state {})",
        args.output.display(),
        trail.len(),
        trail.segments_drawn(),
        trail.state()
    );

    trail.destroy();
    Ok(())
}
