use anyhow::{Context, Result};
use dyngeo::interaction::PointerEvent;
use dyngeo::sandbox::Sandbox;
use dyngeo::Pt2;
use serde::Deserialize;
use std::io::Write;
use std::path::Path;

/// One entry of a pointer script.
///
/// JSON shapes: `{"move": [x, y]}`, `{"down": [x, y]}`, `{"up": [x, y]}`,
/// `{"circumcircles": true}`, `"frame"`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    Move(Pt2),
    Down(Pt2),
    Up(Pt2),
    Circumcircles(bool),
    Frame,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Script {
    pub events: Vec<Entry>,
}

pub fn load(path: &Path) -> Result<Script> {
    let raw = std::fs::read(path).with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing script {}", path.display()))
}

/// Feed the script through the sandbox; writes one JSON line per `"frame"` entry.
pub fn replay<W: Write>(sandbox: &mut Sandbox, script: &Script, out: &mut W) -> Result<usize> {
    let mut frames = 0usize;
    for entry in &script.events {
        match *entry {
            Entry::Move(p) => sandbox.handle(PointerEvent::Move(p)),
            Entry::Down(p) => sandbox.handle(PointerEvent::Down(p)),
            Entry::Up(p) => sandbox.handle(PointerEvent::Up(p)),
            Entry::Circumcircles(on) => sandbox.set_show_circumcircles(on),
            Entry::Frame => {
                let frame = sandbox.frame();
                if !frame.construction.omitted.is_empty() {
                    tracing::info!(
                        frame = frame.index,
                        omitted = frame.construction.omitted.len(),
                        "degenerate elements skipped"
                    );
                }
                serde_json::to_writer(&mut *out, &frame)?;
                out.write_all(b"\n")?;
                frames += 1;
            }
        }
    }
    Ok(frames)
}
