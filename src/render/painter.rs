//! Thin wrapper over `vello_cpu` for single-pass raster work.
//!
//! Each frame is built from a small number of passes; every pass draws into a
//! fresh transparent surface and reads back premultiplied RGBA8 bytes, which
//! the compositors then stack with [`crate::render::compose`]. The
//! `RenderContext` is reused across passes of the same size.

use std::collections::HashMap;
use std::sync::Arc;

use kurbo::{PathEl, Point, Shape};

use crate::foundation::core::Canvas;
use crate::foundation::error::{TickframeError, TickframeResult};
use crate::style::color::Color;
use crate::text::font::{Family, FontLibrary};
use crate::text::segment;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    top: [u8; 4],
    bottom: [u8; 4],
    w: u32,
    h: u32,
}

/// Reusable raster state: one `vello_cpu` context plus paint caches.
pub struct Rasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            ctx: None,
            gradient_cache: HashMap::new(),
        }
    }

    /// Run one draw pass over a fresh transparent surface of `canvas` size
    /// and read back the premultiplied RGBA8 bytes.
    pub(crate) fn render_pass(
        &mut self,
        canvas: Canvas,
        f: impl FnOnce(&mut Rasterizer, &mut vello_cpu::RenderContext) -> TickframeResult<()>,
    ) -> TickframeResult<Vec<u8>> {
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| TickframeError::render("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| TickframeError::render("canvas height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();

        let out = f(self, &mut ctx).map(|()| {
            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            pixmap.data_as_u8_slice().to_vec()
        });
        self.ctx = Some(ctx);
        out
    }

    /// Vertical two-stop gradient as an image paint. Scanline `y` is the
    /// straight-RGBA lerp of the stops at `y / height`. Cached per
    /// (colors, size).
    pub(crate) fn gradient_image(
        &mut self,
        top: Color,
        bottom: Color,
        w: u32,
        h: u32,
    ) -> TickframeResult<vello_cpu::Image> {
        let key = GradientKey {
            top: [top.r, top.g, top.b, top.a],
            bottom: [bottom.r, bottom.g, bottom.b, bottom.a],
            w,
            h,
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }

        let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
        for y in 0..h {
            let ratio = f64::from(y) / f64::from(h.max(1));
            let px = top.lerp(bottom, ratio).to_premul_rgba8();
            let row = (y as usize) * (w as usize) * 4;
            for x in 0..w as usize {
                bytes[row + x * 4..row + x * 4 + 4].copy_from_slice(&px);
            }
        }

        let img = image_from_premul_bytes(&bytes, w, h)?;
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }
}

pub(crate) fn fill_canvas(ctx: &mut vello_cpu::RenderContext, canvas: Canvas, color: Color) {
    ctx.set_paint(color.to_peniko());
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    ));
}

pub(crate) fn fill_canvas_with_image(
    ctx: &mut vello_cpu::RenderContext,
    canvas: Canvas,
    image: vello_cpu::Image,
) {
    ctx.set_paint(image);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    ));
}

pub(crate) fn fill_shape<S: Shape>(ctx: &mut vello_cpu::RenderContext, shape: &S, color: Color) {
    ctx.set_paint(color.to_peniko());
    ctx.fill_path(&shape_to_cpu(shape));
}

pub(crate) fn stroke_shape<S: Shape>(
    ctx: &mut vello_cpu::RenderContext,
    shape: &S,
    width: f64,
    color: Color,
) {
    ctx.set_paint(color.to_peniko());
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
    ctx.stroke_path(&shape_to_cpu(shape));
}

/// Draw `text` with its layout box's top-left corner at `origin`.
///
/// Uses the resolved platform face for `family` when there is one, otherwise
/// the built-in segment font, so this always draws something for the
/// countdown character set.
pub(crate) fn draw_text_at(
    ctx: &mut vello_cpu::RenderContext,
    fonts: &mut FontLibrary,
    family: Family,
    text: &str,
    px: f32,
    color: Color,
    origin: Point,
) {
    match fonts.shape(family, text, px) {
        Some(shaped) => {
            ctx.set_paint(color.to_peniko());
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
            for line in shaped.layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&shaped.font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        }
        None => {
            let path = segment::text_path(text, f64::from(px), origin);
            fill_shape(ctx, &path, color);
        }
    }
}

// vello_cpu bundles its own kurbo, so geometry crosses the paint boundary by
// re-pushing path elements.
fn shape_to_cpu<S: Shape>(shape: &S) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> TickframeResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| TickframeError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| TickframeError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(TickframeError::render("pixmap byte len mismatch"));
    }

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Canvas = Canvas {
        width: 8,
        height: 8,
    };

    #[test]
    fn solid_pass_reads_back_opaque_premul_pixels() {
        let mut raster = Rasterizer::new();
        let bytes = raster
            .render_pass(CANVAS, |_, ctx| {
                fill_canvas(ctx, CANVAS, Color::rgb8(10, 20, 30));
                Ok(())
            })
            .unwrap();
        assert_eq!(bytes.len(), 8 * 8 * 4);
        assert_eq!(&bytes[0..4], &[10, 20, 30, 255]);
        assert_eq!(&bytes[bytes.len() - 4..], &[10, 20, 30, 255]);
    }

    #[test]
    fn empty_pass_is_fully_transparent() {
        let mut raster = Rasterizer::new();
        let bytes = raster.render_pass(CANVAS, |_, _| Ok(())).unwrap();
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn gradient_rows_run_top_to_bottom() {
        let mut raster = Rasterizer::new();
        let img = raster
            .gradient_image(Color::rgb8(0, 0, 0), Color::rgb8(255, 255, 255), 4, 4)
            .unwrap();
        let vello_cpu::ImageSource::Pixmap(pm) = &img.image else {
            panic!("expected pixmap image source");
        };
        let bytes = pm.data_as_u8_slice();
        // Row 0 is the top stop; row 3 has lerped three quarters of the way.
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[3 * 4 * 4..3 * 4 * 4 + 4], &[191, 191, 191, 255]);

        // Cache hit returns the same pixmap.
        let again = raster
            .gradient_image(Color::rgb8(0, 0, 0), Color::rgb8(255, 255, 255), 4, 4)
            .unwrap();
        let vello_cpu::ImageSource::Pixmap(b) = &again.image else {
            panic!("expected pixmap image source");
        };
        assert!(Arc::ptr_eq(pm, b));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let mut raster = Rasterizer::new();
        let huge = Canvas {
            width: 70_000,
            height: 8,
        };
        assert!(raster.render_pass(huge, |_, _| Ok(())).is_err());
    }
}
