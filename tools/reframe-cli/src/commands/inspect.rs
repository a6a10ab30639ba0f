//! Summarize an exported session document.

use std::path::PathBuf;

use reframe_session_model::parse_samples;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)?;
    let samples =
        parse_samples(&content).map_err(|e| anyhow::anyhow!("Failed to parse session: {e}"))?;

    println!("Session: {}", path.display());
    println!("  Samples: {}", samples.len());

    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        println!("  (empty session)");
        return Ok(());
    };

    println!(
        "  Video time span: {:.3}s .. {:.3}s ({:.3}s recorded)",
        first.time_stamp,
        last.time_stamp,
        last.time_stamp - first.time_stamp
    );

    let mut min_x = f64::MAX;
    let mut max_right = f64::MIN;
    let mut min_w = f64::MAX;
    let mut max_w = f64::MIN;
    for sample in &samples {
        let [x, _, w, _] = sample.coordinates;
        min_x = min_x.min(x);
        max_right = max_right.max(x + w);
        min_w = min_w.min(w);
        max_w = max_w.max(w);
    }
    println!("  Horizontal sweep: {min_x:.2}% .. {max_right:.2}%");
    println!("  Crop width: {min_w:.2}% .. {max_w:.2}%");

    let mut rates: Vec<f64> = samples.iter().map(|s| s.playback_rate).collect();
    rates.sort_by(|a, b| a.total_cmp(b));
    rates.dedup();
    let rates: Vec<String> = rates.iter().map(|r| format!("{r}x")).collect();
    println!("  Playback rates: {}", rates.join(", "));

    let volumes: Vec<f64> = samples.iter().map(|s| s.volume).collect();
    let mean_volume = volumes.iter().sum::<f64>() / volumes.len() as f64;
    println!("  Mean volume: {mean_volume:.2}");

    Ok(())
}
