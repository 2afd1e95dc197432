use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

mod config;
mod coverage;
mod domain;
mod geometry;
mod patterns;
mod planner;
mod yardfile;

use config::{FileConfig, defaults};
use coverage::MowerProfile;
use domain::{PatternSettings, PatternType};
use planner::generate_pattern;
use yardfile::{load_yard, save_path};

/// Plan a mowing coverage path for an operator-drawn yard boundary
///
/// Examples:
///   # Plan a parallel sweep with default mower settings
///   mowplan garden.json
///
///   # Spiral pattern with a 25cm deck and no overlap
///   mowplan garden.json -p spiral -s 0.25 --overlap 0
///
///   # Angled stripes, write the waypoints for the dashboard
///   mowplan garden.json -p parallel -a 45 -o path.json
///
///   # Use a config file for the mower profile
///   mowplan garden.json --config mower.toml
#[derive(Parser, Debug)]
#[command(name = "mowplan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Yard file: JSON with a boundary, optional noGoZones and home
    yard: PathBuf,

    /// Path to config file (optional, auto-searches mowplan.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Coverage pattern: parallel, spiral, zigzag, checkerboard, diamond,
    /// waves, or concentric (unrecognized names plan as parallel)
    #[arg(short = 'p', long, default_value = defaults::PATTERN)]
    pattern: String,

    /// Line spacing in meters (the cutting width)
    #[arg(short = 's', long, default_value = "0.3")]
    spacing: f64,

    /// Sweep angle in degrees
    #[arg(short = 'a', long, default_value = "0", value_parser = clap::value_parser!(u16).range(0..=359))]
    angle: u16,

    /// Overlap fraction between adjacent lines, 0.0 up to (not including) 1.0
    #[arg(long, default_value = "0.1")]
    overlap: f64,

    /// Mowing speed in meters per second
    #[arg(long, default_value = "0.5")]
    speed: f64,

    /// Battery drain in percent per hour of mowing
    #[arg(long, default_value = "20.0")]
    battery_rate: f64,

    /// Write the generated waypoints and metrics to this JSON file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };
    let file_config = file_config.unwrap_or_default();

    // CLI flags win over the config file; config file wins over defaults
    let pattern = if args.pattern != defaults::PATTERN {
        args.pattern.clone()
    } else {
        file_config.pattern.clone()
    };
    let spacing = if (args.spacing - defaults::SPACING_M).abs() > 1e-9 {
        args.spacing
    } else {
        file_config.spacing
    };
    let angle = if args.angle != defaults::ANGLE_DEG {
        args.angle
    } else {
        file_config.angle
    };
    let overlap = if (args.overlap - defaults::OVERLAP).abs() > 1e-9 {
        args.overlap
    } else {
        file_config.overlap
    };
    let speed = if (args.speed - defaults::SPEED_M_S).abs() > 1e-9 {
        args.speed
    } else {
        file_config.speed
    };
    let battery_rate = if (args.battery_rate - defaults::BATTERY_PCT_PER_HOUR).abs() > 1e-9 {
        args.battery_rate
    } else {
        file_config.battery_rate
    };
    let output = args.output.clone().or(file_config.output);
    let verbose = args.verbose || file_config.verbose;

    // Phrased so NaN fails each check too (clap's f64 parser accepts "NaN")
    if !(spacing > 0.0) {
        bail!("--spacing must be positive (got {})", spacing);
    }
    if !(0.0..1.0).contains(&overlap) {
        bail!("--overlap must be in [0.0, 1.0) (got {})", overlap);
    }
    if !(speed > 0.0) {
        bail!("--speed must be positive (got {})", speed);
    }

    println!("mowplan - Coverage Path Planner");
    println!("===============================");
    println!();

    let pattern_type = PatternType::from_name(&pattern);
    let settings = PatternSettings::new(pattern_type, spacing, angle, overlap);
    let profile = MowerProfile {
        speed_m_s: speed,
        battery_pct_per_hour: battery_rate,
    };

    if verbose {
        println!("Configuration:");
        println!("  Yard file: {}", args.yard.display());
        println!("  Pattern: {} (requested: {})", pattern_type.name(), pattern);
        println!("  Spacing: {}m", spacing);
        println!("  Angle: {}°", angle);
        println!("  Overlap: {}", overlap);
        println!(
            "  Effective pitch: {:.3}m",
            settings.effective_pitch()
        );
        println!("  Speed: {}m/s", speed);
        println!("  Battery rate: {}%/h", battery_rate);
        if let Some(ref out) = output {
            println!("  Output: {}", out.display());
        }
        println!();
    }

    let yard = load_yard(&args.yard).context("Failed to load yard file")?;

    println!(
        "Loaded yard: {} boundary vertices, {} no-go zone(s){}",
        yard.boundary.vertex_count(),
        yard.no_go_zones.len(),
        if yard.home.is_some() {
            ", home set"
        } else {
            ""
        }
    );
    if verbose && let Some(extent) = geometry::bounding_extent(&yard.boundary.vertices) {
        println!(
            "  Extent: {:.1}m x {:.1}m around ({:.6}, {:.6})",
            extent.width_m, extent.height_m, extent.center.latitude, extent.center.longitude
        );
    }

    let path = generate_pattern(&yard.boundary, &yard.no_go_zones, &settings, &profile)
        .context("Failed to generate coverage path")?;

    println!();
    if path.waypoints.is_empty() {
        println!("Nothing to mow: the boundary encloses no area.");
        return Ok(());
    }

    println!("Pattern: {}", pattern_type.name());
    println!("  Area:            {:.1} m²", path.area_m2);
    println!("  Path length:     {:.1} m", path.path_length_m);
    println!("  Waypoints:       {}", path.waypoints.len());
    println!("  Coverage:        {:.1}%", path.coverage_fraction * 100.0);
    println!(
        "  Estimated time:  {}",
        format_duration(path.estimated_time_s)
    );
    println!(
        "  Battery usage:   {:.1}%",
        path.estimated_battery_percent
    );
    println!("  Efficiency:      {:.2} m²/m", path.efficiency);

    if let Some(ref out) = output {
        save_path(out, &path).context("Failed to write path file")?;
        println!();
        println!("Waypoints written to {}", out.display());
    }

    Ok(())
}

fn format_duration(seconds: f64) -> String {
    let total = seconds.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
