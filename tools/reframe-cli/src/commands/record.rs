//! Record a scripted synthetic session.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reframe_common::AppConfig;
use reframe_crop_engine::{EditSession, SessionOptions};
use reframe_session_model::{AspectRatio, DisplayBounds, Point};

use crate::synthetic::{SyntheticFrames, SyntheticPlayback};

pub async fn run(
    output: PathBuf,
    ratio: String,
    width: f64,
    height: f64,
    duration: f64,
    interval_ms: u64,
    rate: f64,
) -> anyhow::Result<()> {
    let ratio: AspectRatio = ratio.parse()?;
    let bounds = DisplayBounds::new(width, height);
    if bounds.is_degenerate() {
        anyhow::bail!("display bounds {width}x{height} are not usable");
    }

    let config = AppConfig::load();
    let mut options = SessionOptions::from(&config);
    options.sample_interval = Duration::from_millis(interval_ms.max(1));

    let playback = Arc::new(SyntheticPlayback::new(rate));
    let frames = Arc::new(SyntheticFrames::new(bounds));
    let mut session = EditSession::new(playback, frames, ratio, options);

    session.activate_cropper(bounds)?;
    session.play();
    session.start_recording()?;

    // Sweep the cropper from its centered start to the right edge over
    // the recording span, pausing between pointer updates like a real
    // drag would.
    let rect = session.cropper().rect();
    let grip = Point::new(
        rect.position.x + rect.dimensions.width / 2.0,
        rect.dimensions.height / 2.0,
    );
    session.begin_drag(grip)?;

    let steps = 20u32;
    let pause = Duration::from_secs_f64((duration.max(0.1)) / steps as f64);
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let pointer = Point::new(grip.x + t * bounds.width, grip.y);
        session.update_drag(pointer)?;
        tokio::time::sleep(pause).await;
    }
    session.end_drag();

    session.stop_recording()?;

    let json = session.export_samples()?;
    std::fs::write(&output, &json)?;
    println!(
        "Wrote {} samples to {}",
        session.sample_count(),
        output.display()
    );
    Ok(())
}
