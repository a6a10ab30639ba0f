//! Reframe Crop Engine
//!
//! Owns the cropper rectangle across its lifecycle:
//!
//! ```text
//! Inactive ──activate──▶ Active/Idle ──begin_drag──▶ Active/Dragging
//!     ▲                      │  ▲                        │
//!     └────deactivate────────┘  └──end_drag / recompute──┘
//! ```
//!
//! [`cropper`] is the pure state machine; [`session`] wires it to the
//! playback provider, the preview loop, and the recorder, publishing each
//! recomputed rectangle as one atomic snapshot.

pub mod cropper;
pub mod session;

pub use cropper::*;
pub use session::*;
