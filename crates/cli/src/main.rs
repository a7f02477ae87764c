use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dyngeo::config::SandboxCfg;
use dyngeo::sandbox::Sandbox;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod script;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless driver for the geometry sandbox (JSON frames for a renderer)")]
struct Cmd {
    /// JSON config file; missing fields use defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate one frame and print it as pretty JSON
    Frame {
        /// Rotation angle in degrees (overrides the config)
        #[arg(long)]
        angle: Option<f64>,
        /// Emit the three circumcircles
        #[arg(long)]
        circumcircles: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay a pointer script, one JSON line per "frame" entry
    Replay {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print version and the effective configuration
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let cfg = load_cfg(cmd.config.as_deref())?;
    match cmd.action {
        Action::Frame {
            angle,
            circumcircles,
            out,
        } => frame(cfg, angle, circumcircles, out),
        Action::Replay { script, out } => replay(cfg, script, out),
        Action::Report => report(cfg),
    }
}

fn load_cfg(path: Option<&Path>) -> Result<SandboxCfg> {
    let Some(path) = path else {
        return Ok(SandboxCfg::default());
    };
    let raw = std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: SandboxCfg = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(config = %path.display(), free_points = cfg.free_points.len(), "config loaded");
    Ok(cfg)
}

/// Output sink: the given file (parent dirs created) or stdout.
fn open_out(out: Option<&Path>) -> Result<Box<dyn Write>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

fn frame(
    mut cfg: SandboxCfg,
    angle: Option<f64>,
    circumcircles: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    if let Some(deg) = angle {
        cfg.rotation_deg = deg;
    }
    cfg.show_circumcircles |= circumcircles;
    tracing::info!(
        angle = cfg.rotation_deg,
        circumcircles = cfg.show_circumcircles,
        "frame"
    );
    let mut sandbox = Sandbox::new(cfg)?;
    let frame = sandbox.frame();
    for omitted in &frame.construction.omitted {
        tracing::warn!(element = omitted.element(), "{omitted}");
    }
    let mut w = open_out(out.as_deref())?;
    serde_json::to_writer_pretty(&mut w, &frame)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

fn replay(cfg: SandboxCfg, script_path: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let script = script::load(&script_path)?;
    tracing::info!(
        script = %script_path.display(),
        entries = script.events.len(),
        "replay"
    );
    let mut sandbox = Sandbox::new(cfg)?;
    let mut w = open_out(out.as_deref())?;
    let frames = script::replay(&mut sandbox, &script, &mut w)?;
    w.flush()?;
    tracing::info!(frames, "replay done");
    Ok(())
}

fn report(cfg: SandboxCfg) -> Result<()> {
    let obj = serde_json::json!({
        "version": dyngeo::VERSION,
        "config": cfg,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
