use clap::{Parser, Subcommand, ValueEnum};
use hs_app::{
    AppResult, ExportFormat, FrontExport, StudyRuntime, compile_study, list_fans, load_study,
    run_optimization, run_reference, skip_label,
};
use hs_core::units::to_m3ph;
use hs_optim::DesignPoint;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(about = "Fan-cooled heat sink model and design sweep", long_about = None)]
struct Cli {
    /// Log debug detail (skipped pairs, solver clamps)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a study file
    Validate {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
    },
    /// List the fans of a study
    Fans {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
    },
    /// Evaluate the study's reference geometry
    Evaluate {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
        /// Only this fan (defaults to every fan)
        #[arg(long)]
        fan: Option<String>,
    },
    /// Sweep the design grid and print the Pareto front
    Optimize {
        /// Path to the study YAML/JSON file
        study_path: PathBuf,
        /// Write the front to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output file format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => ExportFormat::Json,
            Format::Csv => ExportFormat::Csv,
        }
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { study_path } => cmd_validate(&study_path),
        Commands::Fans { study_path } => cmd_fans(&study_path),
        Commands::Evaluate { study_path, fan } => cmd_evaluate(&study_path, fan.as_deref()),
        Commands::Optimize {
            study_path,
            output,
            format,
        } => cmd_optimize(&study_path, output.as_deref(), format.into()),
    }
}

fn cmd_validate(study_path: &Path) -> AppResult<()> {
    println!("Validating study: {}", study_path.display());
    let runtime = load_runtime(study_path)?;
    println!("✓ Study is valid");
    println!(
        "  {} fans, {} candidate geometries",
        runtime.catalog.len(),
        runtime.space.len()
    );
    Ok(())
}

fn cmd_fans(study_path: &Path) -> AppResult<()> {
    let runtime = load_runtime(study_path)?;
    println!("Fans in study:");
    for fan in list_fans(&runtime) {
        let frame = match fan.frame_mm {
            Some((side, depth)) => format!("{side:.0}x{depth:.0} mm"),
            None => "no frame".to_string(),
        };
        println!(
            "  {} - shutoff {:.1} Pa, free air {:.1} m³/h, {} samples, {}",
            fan.name, fan.shutoff_pa, fan.free_air_m3h, fan.samples, frame
        );
    }
    Ok(())
}

fn load_runtime(study_path: &Path) -> AppResult<StudyRuntime> {
    info!(study = %study_path.display(), "loading study");
    let runtime = compile_study(&load_study(study_path)?)?;
    info!(
        name = %runtime.name,
        fans = runtime.catalog.len(),
        geometries = runtime.space.len(),
        "study compiled"
    );
    Ok(runtime)
}

fn cmd_evaluate(study_path: &Path, fan: Option<&str>) -> AppResult<()> {
    let runtime = load_runtime(study_path)?;
    for eval in run_reference(&runtime, fan)? {
        match &eval.outcome {
            Ok(point) => print_point(point),
            Err(e) => {
                warn!(fan = %eval.fan, error = %e, "reference geometry has no design point");
                println!("{}: no design point ({e})", eval.fan)
            }
        }
    }
    Ok(())
}

fn print_point(point: &DesignPoint) {
    let g = &point.geometry;
    let op = &point.operating_point;
    let th = &point.thermal;
    println!("{}:", point.fan.name());
    println!(
        "  geometry      {} channels, t={:.2} mm, c={:.1} mm, s={:.2} mm",
        g.channel_count(),
        g.fin_thickness().value * 1e3,
        g.fin_height().value * 1e3,
        g.fin_spacing().value * 1e3
    );
    println!(
        "  operating     {:.2} m³/h at {:.2} Pa ({} iterations{})",
        to_m3ph(op.flow),
        op.pressure.value,
        op.iterations,
        if op.clamped { ", clamped" } else { "" }
    );
    println!(
        "  flow          Re={:.0} ({:?}), Nu={:.2}, h={:.1} W/m²K, fin eff={:.3}",
        th.reynolds, th.regime, th.nusselt, th.heat_transfer_coefficient, th.fin_efficiency
    );
    println!(
        "  resistance    conv {:.4} + air {:.4} + cond {:.4} + spread {:.4} = {:.4} K/W",
        th.convective, th.air_heating, th.conductive, th.spreading, th.total
    );
    println!("  volume        {:.3} cm³", point.volume.value * 1e6);
}

fn cmd_optimize(study_path: &Path, output: Option<&Path>, format: ExportFormat) -> AppResult<()> {
    let runtime = load_runtime(study_path)?;
    let start = Instant::now();
    let result = run_optimization(&runtime)?;
    let elapsed = start.elapsed();

    let report = &result.report;
    info!(elapsed_s = elapsed.as_secs_f64(), "sweep wall time");
    println!(
        "✓ Evaluated {}/{} pairs in {:.2} s",
        report.evaluated,
        report.total_pairs,
        elapsed.as_secs_f64()
    );
    for (reason, count) in report.skip_counts() {
        println!("  skipped {:>6} {}", count, skip_label(reason));
    }

    println!("Pareto front ({} designs):", result.front.len());
    println!(
        "  {:>10}  {:>8}  {:>3}  {:>6}  {:>6}  {:>8}  fan",
        "vol cm³", "R K/W", "n", "t mm", "c mm", "m³/h"
    );
    for p in &result.front {
        println!(
            "  {:>10.3}  {:>8.4}  {:>3}  {:>6.2}  {:>6.1}  {:>8.2}  {}",
            p.volume.value * 1e6,
            p.thermal.total,
            p.geometry.channel_count(),
            p.geometry.fin_thickness().value * 1e3,
            p.geometry.fin_height().value * 1e3,
            to_m3ph(p.operating_point.flow),
            p.fan.name()
        );
    }

    if let Some(path) = output {
        FrontExport::new(&runtime.name, &result).write(path, format)?;
        info!(path = %path.display(), "front written");
        println!("✓ Front written to {}", path.display());
    }
    Ok(())
}
