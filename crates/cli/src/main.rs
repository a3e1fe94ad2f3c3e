#![deny(unsafe_code)]
//! Batch driver for the iron-filings simulation.
//!
//! Subcommands:
//! - `render` — run a fresh simulation N frames, write a PNG of the trails
//! - `replay <seed.json>` — render a saved run description
//! - `params` — print the parameter schema
//!
//! Library diagnostics go through `log`; set `RUST_LOG=debug` to see them.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use iron_filings_core::{Seed, SimParams};
use iron_filings_render::{render_run, snapshot, TrailCanvas};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "iron-filings", about = "Iron filings around wandering magnets")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulation for N frames and write a PNG of the trails.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 600)]
        steps: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Simulation parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Also write the run description here, for `replay`.
        #[arg(long)]
        save_seed: Option<PathBuf>,
    },
    /// Render a run described by a seed JSON file.
    Replay {
        /// Path to a seed file written by `render --save-seed`.
        seed_file: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Print every simulation parameter with its default and range.
    Params,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Params => {
            let schema = SimParams::param_schema();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&schema)?);
            } else if let Some(entries) = schema.as_object() {
                for (name, entry) in entries {
                    println!(
                        "{name:<18} default {:<10} {}",
                        entry["default"].to_string(),
                        entry["description"].as_str().unwrap_or_default()
                    );
                }
            }
        }
        Command::Render {
            width,
            height,
            steps,
            seed,
            params,
            output,
            save_seed,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let run_seed = Seed {
                width: width as f64,
                height: height as f64,
                params,
                seed,
                steps,
            };
            if let Some(path) = save_seed {
                let text = serde_json::to_string_pretty(&run_seed)?;
                std::fs::write(&path, text)
                    .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            }
            render_seed(&run_seed, &output, cli.json)?;
        }
        Command::Replay { seed_file, output } => {
            let text = std::fs::read_to_string(&seed_file)
                .map_err(|e| CliError::Io(format!("{}: {e}", seed_file.display())))?;
            let run_seed: Seed = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid seed file: {e}")))?;
            render_seed(&run_seed, &output, cli.json)?;
        }
    }

    Ok(())
}

fn render_seed(run_seed: &Seed, output: &Path, json: bool) -> Result<(), CliError> {
    let mut sim = run_seed.instantiate()?;
    let width = run_seed.width.ceil() as usize;
    let height = run_seed.height.ceil() as usize;
    let mut canvas = TrailCanvas::new(width, height, iron_filings_render::canvas::BACKGROUND)?;

    render_run(&mut sim, &mut canvas, run_seed.steps);
    snapshot::write_png(&canvas, output)?;

    let stats = sim.last_step();
    if json {
        let info = serde_json::json!({
            "width": run_seed.width,
            "height": run_seed.height,
            "steps": run_seed.steps,
            "seed": run_seed.seed,
            "magnets": sim.magnet_count(),
            "particles": sim.particle_count(),
            "last_frame": stats.frame,
            "boundary_resets": stats.boundary_resets,
            "stirred_resets": stats.stirred_resets,
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} particles ({}x{}, {} frames, seed {}) -> {}",
            sim.particle_count(),
            run_seed.width,
            run_seed.height,
            run_seed.steps,
            run_seed.seed,
            output.display()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_defaults_write_output_png() {
        let cli = Cli::try_parse_from(["iron-filings", "render"]).unwrap();
        match cli.command {
            Command::Render {
                width,
                height,
                steps,
                seed,
                output,
                ..
            } => {
                assert_eq!((width, height, steps, seed), (800, 600, 600, 42));
                assert_eq!(output, PathBuf::from("output.png"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn replay_defaults_write_output_png() {
        let cli = Cli::try_parse_from(["iron-filings", "replay", "run.json"]).unwrap();
        match cli.command {
            Command::Replay { seed_file, output } => {
                assert_eq!(seed_file, PathBuf::from("run.json"));
                assert_eq!(output, PathBuf::from("output.png"));
            }
            _ => panic!("expected replay"),
        }
    }

    #[test]
    fn render_seed_writes_png_with_logger_installed() {
        let _ = env_logger::builder()
            .is_test(true)
            .parse_filters("debug")
            .try_init();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("run.png");
        let mut run_seed = Seed::new(64.0, 48.0, 7);
        run_seed.params = json!({"particle_count": 20});
        run_seed.steps = 3;
        render_seed(&run_seed, &out, false).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn oversized_canvas_exits_with_sim_code() {
        let mut run_seed = Seed::new(1e9, 1e9, 7);
        run_seed.params = json!({"particle_count": 1});
        let dir = tempfile::tempdir().unwrap();
        let err = render_seed(&run_seed, &dir.path().join("big.png"), false).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }
}
