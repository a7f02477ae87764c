//! Scripted drag of vertex A, printing where F ends up each frame.
//!
//! Usage:
//!   cargo run -p dyngeo --example drag_session
//!
//! A is dragged straight through B (a degenerate frame for circumcircle ABR)
//! and out the other side; omitted elements are listed per frame.

use dyngeo::prelude::*;

fn main() {
    let mut cfg = SandboxCfg::default();
    cfg.show_circumcircles = true;
    let mut sb = Sandbox::new(cfg).expect("default config is valid");

    let grab = Pt2::new(200.0, 150.0);
    sb.handle(PointerEvent::Move(grab));
    sb.frame();
    sb.handle(PointerEvent::Down(grab));

    for k in 0..=4 {
        let target = Pt2::new(200.0 - 25.0 * k as f64, 150.0 + 50.0 * k as f64);
        sb.handle(PointerEvent::Move(target));
        let frame = sb.frame();
        let f = frame
            .construction
            .point("F")
            .map(|p| format!("({:.3}, {:.3})", p.position.x, p.position.y))
            .unwrap_or_else(|| "-".to_string());
        let omitted: Vec<&str> = frame.construction.omitted.iter().map(|e| e.element()).collect();
        println!(
            "frame={} A=({:.1}, {:.1}) F={f} omitted={omitted:?}",
            frame.index, target.x, target.y
        );
    }
    sb.handle(PointerEvent::Up(Pt2::new(100.0, 350.0)));
    println!("focus after release: {:?}", sb.frame().focus);
}
