//! Frame compositors and the raster plumbing under them.

pub mod circle;
pub(crate) mod compose;
pub mod digital;
pub mod frame;
pub(crate) mod glow;
pub mod painter;
pub(crate) mod shapes;

pub use circle::render_circle_frame;
pub use digital::render_digital_frame;
pub use frame::FrameRgba;
pub use painter::Rasterizer;

use crate::foundation::core::CountdownInstant;
use crate::foundation::error::TickframeResult;
use crate::style::catalog::StyleRef;
use crate::text::font::FontLibrary;

/// Render one frame for either family. This is the single "style to frame"
/// capability the sequencer dispatches through.
pub fn render_frame(
    style: StyleRef<'_>,
    instant: CountdownInstant,
    fonts: &mut FontLibrary,
    raster: &mut Rasterizer,
) -> TickframeResult<FrameRgba> {
    match style {
        StyleRef::Digital(s) => render_digital_frame(s, instant, fonts, raster),
        StyleRef::Circle(s) => render_circle_frame(s, instant, fonts, raster),
    }
}
