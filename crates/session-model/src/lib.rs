//! Reframe Session Model
//!
//! Defines the core data contracts for a cropping session:
//! - **Aspect:** Integer `W:H` aspect ratios and the preset selector list
//! - **Geometry:** Display bounds, the cropper rectangle, and the pure
//!   compute/clamp operations that keep it inside the video
//! - **Playback:** Read-side playback state and the media control trait
//! - **Samples:** Normalized, timestamped crop samples and their JSON form
//!
//! Rectangle coordinates are display pixels relative to the video's
//! top-left corner; recorded samples normalize them to `[0, 100]` percent
//! of the display bounds so a session survives relayout.

pub mod aspect;
pub mod geometry;
pub mod playback;
pub mod sample;

pub use aspect::*;
pub use geometry::*;
pub use playback::*;
pub use sample::*;
