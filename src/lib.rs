//! Free-hand signature capture over an owned raster surface.
//!
//! Pointer/touch events become straight round-capped segments on a pixel buffer; each
//! completed gesture is exported as a PNG [`Artifact`] to an [`ArtifactSink`], and a clear
//! exports `None`. The surface follows its container's width at a fixed height and is
//! reallocated (emptied) on every resize.

pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod lifecycle;
pub mod pad;
pub mod render;
pub mod types;

pub use config::PadConfig;
pub use error::{Error, Result};
pub use export::{Artifact, ArtifactSink};
pub use input::{PointerButton, PointerEvent};
pub use lifecycle::{ContainerMetrics, ViewportEvents};
pub use pad::{InputEvent, SignaturePad};
pub use types::{FrameBuffer, Point, SurfaceRect};
