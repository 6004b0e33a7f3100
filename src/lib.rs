//! Tickframe renders countdown timer video frames as PNG sequences.
//!
//! A fixed catalog of visual styles (digital digit displays and circular
//! "time timer" dials) maps a `(remaining seconds, total duration)` pair to a
//! raster frame. The sequencer walks a countdown second by second, renders
//! one frame per distinct timer value, and replicates it across sub-second
//! slots so playback at the target frame rate runs in real time. Video
//! assembly is external:
//!
//! ```text
//! ffmpeg -framerate 30 -i output/modern/frame_%08d.png \
//!     -c:v libx264 -pix_fmt yuv420p -crf 18 countdown_modern.mp4
//! ```
//!
//! Rendering is deterministic: the same style and instant always produce
//! byte-identical pixels, and frames share no mutable state.
#![forbid(unsafe_code)]

mod foundation;
pub mod render;
pub mod sequence;
pub mod style;
pub mod text;

pub use crate::foundation::core::{Canvas, CountdownInstant, display_time, format_time};
pub use crate::foundation::error::{TickframeError, TickframeResult};

pub use crate::render::{
    FrameRgba, Rasterizer, render_circle_frame, render_digital_frame, render_frame,
};
pub use crate::sequence::{
    GenerateOpts, PREVIEW_REMAINING_SECONDS, PREVIEW_TOTAL_SECONDS, Progress, SequenceSummary,
    generate, preview,
};
pub use crate::style::catalog::{StyleCatalog, StyleRef};
pub use crate::style::circle::{CircleStyle, TickMarks};
pub use crate::style::color::Color;
pub use crate::style::digital::{Border, DigitalStyle};
pub use crate::text::font::{Family, FontLibrary};
