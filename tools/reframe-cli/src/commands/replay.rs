//! Print replay transform instructions for an exported session.

use std::path::PathBuf;

use reframe_preview_engine::replay::simulate_replay;
use reframe_session_model::parse_samples;

pub fn run(path: PathBuf, fps: f64) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)?;
    let samples =
        parse_samples(&content).map_err(|e| anyhow::anyhow!("Failed to parse session: {e}"))?;

    let frames = simulate_replay(&samples, fps);
    if frames.is_empty() {
        println!("Nothing to replay: session is empty.");
        return Ok(());
    }

    println!(
        "Replaying {} samples as {} frames at {fps} fps:",
        samples.len(),
        frames.len()
    );
    for frame in frames {
        println!("  {:8.3}s  {}", frame.time_secs, frame.css_transform());
    }

    Ok(())
}
