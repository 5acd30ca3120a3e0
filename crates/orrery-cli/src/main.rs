use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hifitime::{Duration, Epoch};
use orrery_core::angles::deg_to_rad;
use orrery_core::constants::{AU_KM, DAYS_PER_YEAR};
use orrery_sim::{
    centuries_since_epoch, compute_state_at, j2000, orbital_period_days, solve_kepler_detailed,
    Catalog, SolverConfig,
};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Keplerian planet positions from J2000 orbital elements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show heliocentric ecliptic positions of every catalog body
    Positions {
        /// Epoch (ISO format, "now", or "+Ny"/"-Ny" from J2000)
        #[arg(short, long, default_value = "now", allow_hyphen_values = true)]
        epoch: String,
        /// JSON catalog (defaults to the built-in planet table)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// Print kilometers instead of AU
        #[arg(long, default_value = "false")]
        km: bool,
        /// Emit JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Orbital period from the semi-major axis (Kepler's third law)
    Period {
        /// Semi-major axis (AU)
        #[arg(short, long)]
        a: f64,
    },

    /// Solve Kepler's equation and show solver diagnostics
    Solve {
        /// Mean anomaly (degrees)
        #[arg(short, long, allow_hyphen_values = true)]
        mean_anomaly: f64,
        /// Eccentricity
        #[arg(short, long)]
        eccentricity: f64,
        #[arg(long, default_value = "1e-6")]
        tolerance: f64,
        #[arg(long, default_value = "30")]
        max_iterations: u32,
    },

    /// Print a body's position over a time range
    Track {
        /// Body name from the catalog
        #[arg(short, long)]
        body: String,
        /// Start epoch
        #[arg(long, default_value = "+0y", allow_hyphen_values = true)]
        start: String,
        /// End epoch
        #[arg(long, default_value = "+1y", allow_hyphen_values = true)]
        end: String,
        /// Step size (e.g., "30d", "1y")
        #[arg(long, default_value = "30d")]
        step: String,
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Julian centuries since J2000 for an epoch
    Centuries {
        #[arg(short, long, default_value = "now", allow_hyphen_values = true)]
        epoch: String,
    },

    /// Write the built-in planet table as a JSON catalog
    DumpCatalog {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Positions { epoch, catalog, km, json } => {
            let epoch = parse_relative_epoch(&epoch, j2000())?;
            let catalog = load_catalog(catalog)?;
            let snap = catalog.snapshot(epoch);

            if json {
                println!("{}", serde_json::to_string_pretty(&snap.bodies)?);
                return Ok(());
            }

            let (scale, unit) = if km { (AU_KM, "km") } else { (1.0, "AU") };

            println!("Keplerian positions at {} (T = {:.8} centuries):", epoch, snap.centuries);
            println!("{:<12} {:>15} {:>15} {:>15} {:>14} {:>10} {:>9}",
                "Body", format!("X ({})", unit), format!("Y ({})", unit), format!("Z ({})", unit),
                format!("Dist ({})", unit), "Lon (°)", "Lat (°)");

            for body in &snap.bodies {
                let pos = body.state.position;
                let ecl = pos.to_ecliptic();
                let flag = if body.state.degraded { "  (fail-safe)" } else { "" };
                println!("{:<12} {:>15.6} {:>15.6} {:>15.6} {:>14.6} {:>10.4} {:>9.4}{}",
                    body.name, pos.x * scale, pos.y * scale, pos.z * scale,
                    pos.magnitude() * scale, ecl.longitude_deg, ecl.latitude_deg, flag);
            }
        }

        Commands::Period { a } => {
            let days = orbital_period_days(a);
            println!("a = {} AU: period {:.3} days ({:.4} years)", a, days, days / DAYS_PER_YEAR);
        }

        Commands::Solve { mean_anomaly, eccentricity, tolerance, max_iterations } => {
            let config = SolverConfig { tolerance, max_iterations };
            let sol = solve_kepler_detailed(deg_to_rad(mean_anomaly), eccentricity, &config);

            println!("M = {}°, e = {}", mean_anomaly, eccentricity);
            println!("E          = {:.12} rad ({:.9}°)", sol.eccentric_anomaly, sol.eccentric_anomaly.to_degrees());
            println!("iterations = {}", sol.iterations);
            println!("residual   = {:.3e}", sol.residual);
            println!("converged  = {}", sol.converged);
        }

        Commands::Track { body, start, end, step, catalog } => {
            let catalog = load_catalog(catalog)?;
            let target = catalog.get(&body)?;

            let start_epoch = parse_relative_epoch(&start, j2000())?;
            let end_epoch = parse_relative_epoch(&end, j2000())?;
            let step_dur = parse_duration(&step)?;
            if step_dur <= Duration::ZERO {
                bail!("step must be positive, got {}", step);
            }

            println!("{} from {} to {} every {}", target.name, start_epoch, end_epoch, step);
            println!("{:<32} {:>12} {:>12} {:>12} {:>12} {:>12}",
                "Epoch", "X (AU)", "Y (AU)", "Z (AU)", "Dist (AU)", "Speed (AU/d)");

            let mut epoch = start_epoch;
            while epoch <= end_epoch {
                let state = compute_state_at(&target.elements, centuries_since_epoch(epoch), &catalog.solver);
                let pos = state.position;
                println!("{:<32} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.8}",
                    epoch.to_string(), pos.x, pos.y, pos.z, pos.magnitude(), state.velocity.magnitude());
                epoch = epoch + step_dur;
            }
        }

        Commands::Centuries { epoch } => {
            let epoch = parse_relative_epoch(&epoch, j2000())?;
            println!("{}: T = {:.10} Julian centuries since J2000", epoch, centuries_since_epoch(epoch));
        }

        Commands::DumpCatalog { output } => {
            let json = Catalog::planets().to_json_pretty()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    let catalog = match path {
        Some(p) => Catalog::load(p)?,
        None => Catalog::planets(),
    };
    tracing::debug!("Using catalog with {} bodies, solver {:?}", catalog.len(), catalog.solver);
    Ok(catalog)
}

/// Parse "now", an offset like "-100y" / "+2.5y" from `reference`, or an ISO epoch
fn parse_relative_epoch(s: &str, reference: Epoch) -> Result<Epoch> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("now") {
        Ok(Epoch::now()?)
    } else if s.ends_with('y') && (s.starts_with('+') || s.starts_with('-')) {
        let years: f64 = s.trim_end_matches('y').parse()?;
        Ok(reference + Duration::from_days(years * DAYS_PER_YEAR))
    } else {
        Ok(Epoch::from_str(s)?)
    }
}

/// Parse duration like "30d", "1y", or plain seconds
fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    if s.ends_with('d') {
        let days: f64 = s.trim_end_matches('d').parse()?;
        Ok(Duration::from_days(days))
    } else if s.ends_with('y') {
        let years: f64 = s.trim_end_matches('y').parse()?;
        Ok(Duration::from_days(years * DAYS_PER_YEAR))
    } else {
        Ok(Duration::from_seconds(s.parse()?))
    }
}
