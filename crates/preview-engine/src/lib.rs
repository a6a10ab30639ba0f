//! Reframe Preview Engine
//!
//! Projects the live crop region into a preview surface sized to the
//! selected aspect ratio, frame by frame.
//!
//! # Data flow
//!
//! ```text
//! FrameSource ──┐
//!               ├── project_frame (crop + scale) ──▶ Surface
//! CropSnapshot ─┘            ▲
//!                            │
//!                      PreviewLoop (per-frame tick, cancellable)
//! ```
//!
//! [`replay`] is the inverse direction: it turns an already-recorded
//! sample sequence back into per-frame transform instructions so a client
//! can play a session back without any frame source at all.

pub mod driver;
pub mod project;
pub mod replay;
pub mod source;
pub mod surface;

pub use driver::*;
pub use project::*;
pub use source::*;
pub use surface::*;
