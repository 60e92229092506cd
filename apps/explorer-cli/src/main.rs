use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use explorer_input::{Action, InputState};
use explorer_kernel::{Session, ViewerConfig};
use explorer_render::{DebugTextRenderer, FramePlan, Renderer};
use glam::{Vec2, Vec3};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "explorer-cli", about = "Headless tools for the Mini 3D Explorer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, bindings and default scene summary
    Info,
    /// Drive the frame controller with scripted input and print the last frame
    Simulate(SimulateArgs),
    /// Load and validate a YAML config file
    CheckConfig {
        /// Path to the config file
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct SimulateArgs {
    /// Number of frames to run
    #[arg(short, long, default_value = "60")]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value = "0.016")]
    dt: f32,

    /// Actions held for the whole run, comma-separated (e.g. move-forward,sprint)
    #[arg(long, value_delimiter = ',', value_parser = parse_action)]
    hold: Vec<Action>,

    /// Horizontal cursor motion per frame, in pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    mouse_dx: f32,

    /// Vertical cursor motion per frame, in pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    mouse_dy: f32,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,
}

fn parse_action(name: &str) -> Result<Action, String> {
    Action::from_name(name).ok_or_else(|| {
        let known: Vec<_> = Action::ALL.iter().map(|a| a.name()).collect();
        format!("unknown action '{name}' (expected one of: {})", known.join(", "))
    })
}

/// Final state of a scripted run.
#[derive(Debug, Serialize)]
struct SimulationReport {
    frames: u32,
    elapsed: f32,
    position: Vec3,
    yaw: f32,
    pitch: f32,
    light_on: bool,
    /// Indices of colliders whose padded footprint still contains the camera.
    touching: Vec<usize>,
    plan: FramePlan,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ViewerConfig::default()),
    }
}

fn simulate(config: &ViewerConfig, args: &SimulateArgs) -> anyhow::Result<SimulationReport> {
    let mut session = Session::new(config).context("building scene")?;
    let mut input = InputState::new();
    for action in &args.hold {
        input.press(*action);
    }

    let mouse = Vec2::new(args.mouse_dx, args.mouse_dy);
    for frame in 0..args.frames {
        let events = session
            .controller
            .update(&mut session.context, &input, args.dt);
        if let Some(mode) = events.look_mode {
            tracing::info!(frame, ?mode, "look mode changed");
        }
        input.end_frame();
        input.move_cursor(mouse);
    }

    let elapsed = args.frames as f32 * args.dt;
    let ctx = &session.context;
    let camera = &ctx.camera;
    Ok(SimulationReport {
        frames: args.frames,
        elapsed,
        position: camera.position,
        yaw: camera.yaw(),
        pitch: camera.pitch(),
        light_on: ctx.light_on,
        touching: session
            .controller
            .world()
            .overlapping(camera.position)
            .collect(),
        plan: FramePlan::build(&session.scene, camera, ctx.light_on, elapsed),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            let session = Session::new(&ViewerConfig::default())?;
            println!("explorer-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "scene: {} objects, {} colliders, spawn=({:.1}, {:.1}, {:.1})",
                session.scene.objects.len(),
                session.scene.colliders.len(),
                session.scene.spawn.x,
                session.scene.spawn.y,
                session.scene.spawn.z
            );
            for (i, collider) in session.scene.colliders.iter().enumerate() {
                let (min, max) = (collider.min(), collider.max());
                println!(
                    "  collider[{i}]: x {:.1}..{:.1}  z {:.1}..{:.1}",
                    min.x, max.x, min.z, max.z
                );
            }
            let actions: Vec<_> = Action::ALL.iter().map(|a| a.name()).collect();
            println!("actions: {}", actions.join(", "));
        }
        Commands::Simulate(args) => {
            let config = load_config(args.config.as_ref())?;
            tracing::info!(frames = args.frames, dt = args.dt, hold = ?args.hold, "simulating");
            let report = simulate(&config, &args)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "After {} frames ({:.2}s): yaw={:.1} pitch={:.1}",
                    report.frames, report.elapsed, report.yaw, report.pitch
                );
                if !report.touching.is_empty() {
                    println!("Touching colliders: {:?}", report.touching);
                }
                print!("{}", DebugTextRenderer::new().render(&report.plan));
            }
        }
        Commands::CheckConfig { path } => {
            let config = load_config(Some(&path))?;
            println!("{}: ok", path.display());
            println!(
                "  window {}x{}, speed {:.2} (sprint x{:.2}), radius {:.2}, eye height {:.2}",
                config.window.width,
                config.window.height,
                config.controller.base_speed,
                config.controller.sprint_multiplier,
                config.controller.camera_radius,
                config.controller.eye_height
            );
            match &config.colliders {
                Some(colliders) => println!("  {} custom colliders", colliders.len()),
                None => println!("  default colliders"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(frames: u32, hold: &[Action]) -> SimulateArgs {
        SimulateArgs {
            frames,
            dt: 0.016,
            hold: hold.to_vec(),
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            config: None,
            json: false,
        }
    }

    #[test]
    fn cli_parses_hold_list() {
        let cli = Cli::try_parse_from([
            "explorer-cli",
            "simulate",
            "--frames",
            "10",
            "--hold",
            "move-forward,sprint",
            "--mouse-dx",
            "-4",
        ])
        .unwrap();
        let Commands::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.frames, 10);
        assert_eq!(args.hold, [Action::MoveForward, Action::Sprint]);
        assert_eq!(args.mouse_dx, -4.0);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result = Cli::try_parse_from(["explorer-cli", "simulate", "--hold", "jump"]);
        assert!(result.is_err());
    }

    #[test]
    fn idle_run_stays_at_spawn() {
        let report = simulate(&ViewerConfig::default(), &args(30, &[])).unwrap();
        assert_eq!(report.position, Vec3::new(0.0, 1.2, 4.0));
        assert!(report.light_on);
        assert_eq!(report.plan.draws.len(), 3);
    }

    #[test]
    fn forward_walk_stops_at_back_wall() {
        let report = simulate(&ViewerConfig::default(), &args(600, &[Action::MoveForward])).unwrap();
        assert!((report.position.z - -4.2).abs() < 1e-4);
        assert_eq!(report.position.y, 1.2);
        assert!(report.touching.contains(&4));
    }

    #[test]
    fn held_light_toggle_fires_once() {
        let report = simulate(&ViewerConfig::default(), &args(20, &[Action::ToggleLight])).unwrap();
        assert!(!report.light_on);
        assert!(!report.plan.uniforms.light.enabled);
    }

    #[test]
    fn mouse_motion_turns_camera() {
        let mut a = args(11, &[]);
        a.mouse_dx = 10.0;
        let report = simulate(&ViewerConfig::default(), &a).unwrap();
        // First frame arms the baseline; ten frames of 10px at 0.1 deg/px.
        assert!((report.yaw - (-90.0 + 10.0)).abs() < 1e-3);
        assert_eq!(report.pitch, 0.0);
    }
}
