//! Digital-digits frame compositor.

use kurbo::{Circle, Point, Rect, RoundedRect};

use crate::foundation::core::{CountdownInstant, format_time};
use crate::foundation::error::TickframeResult;
use crate::render::frame::FrameRgba;
use crate::render::painter::{self, Rasterizer};
use crate::render::{compose, glow, shapes};
use crate::style::digital::DigitalStyle;
use crate::text::font::{Family, FontLibrary};

// Fixed layout metrics, in pixels at style resolution.
const PANEL_PAD_X: f64 = 60.0;
const PANEL_PAD_Y: f64 = 40.0;
const PANEL_RADIUS: f64 = 30.0;
const RING_MARGIN: f64 = 60.0;
const RING_STROKE: f64 = 8.0;
const RING_TRACK_ALPHA: u8 = 60;
const LABEL_GAP: f64 = 30.0;
const LABEL_FONT_DIV: f32 = 6.0;
const BAR_HEIGHT: f64 = 6.0;
const BAR_BOTTOM_OFFSET: f64 = 40.0;
const BAR_SIDE_MARGIN: f64 = 80.0;
const BAR_TRACK_ALPHA: u8 = 40;
const GLOW_LAYERS: u32 = 4;

/// Render one digital frame. Pure given the inputs: identical calls produce
/// byte-identical frames.
pub fn render_digital_frame(
    style: &DigitalStyle,
    instant: CountdownInstant,
    fonts: &mut FontLibrary,
    raster: &mut Rasterizer,
) -> TickframeResult<FrameRgba> {
    let canvas = style.canvas;
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let center = Point::new(w / 2.0, h / 2.0);

    let (hh, mm, ss) = format_time(instant.remaining);
    let text = format!("{hh}{sep}{mm}{sep}{ss}", sep = style.separator);
    let progress = instant.elapsed_ratio();

    let (text_w, text_h) = fonts.measure(Family::Digits, &text, style.font_px);
    let text_origin = Point::new(center.x - text_w / 2.0, center.y - text_h / 2.0);

    // Backdrop: background, border, digit panel, progress ring.
    let mut base = raster.render_pass(canvas, |r, ctx| {
        match style.gradient {
            Some((top, bottom)) => {
                let img = r.gradient_image(top, bottom, canvas.width, canvas.height)?;
                painter::fill_canvas_with_image(ctx, canvas, img);
            }
            None => painter::fill_canvas(ctx, canvas, style.bg),
        }

        if let Some(border) = style.border {
            let inset = border.width / 2.0;
            let rect = Rect::new(inset, inset, w - inset, h - inset);
            painter::stroke_shape(ctx, &rect, border.width, border.color);
        }

        if let Some(panel) = style.panel {
            let rr = RoundedRect::new(
                center.x - text_w / 2.0 - PANEL_PAD_X,
                center.y - text_h / 2.0 - PANEL_PAD_Y,
                center.x + text_w / 2.0 + PANEL_PAD_X,
                center.y + text_h / 2.0 + PANEL_PAD_Y,
                PANEL_RADIUS,
            );
            painter::fill_shape(ctx, &rr, panel);
        }

        if let Some(ring) = style.progress_ring {
            let radius = canvas.half_min_dim() - RING_MARGIN;
            if radius > 0.0 {
                let track = Circle::new(center, radius);
                painter::stroke_shape(ctx, &track, RING_STROKE, ring.with_alpha(RING_TRACK_ALPHA));
                if progress > 0.0 {
                    let arc = shapes::dial_arc(center, radius, progress * 360.0);
                    painter::stroke_shape(ctx, &arc, RING_STROKE * 2.0, ring);
                }
            }
        }

        Ok(())
    })?;

    if style.glow {
        let layer = raster.render_pass(canvas, |_, ctx| {
            painter::draw_text_at(
                ctx,
                fonts,
                Family::Digits,
                &text,
                style.font_px,
                style.text_color,
                text_origin,
            );
            Ok(())
        })?;
        let radius = GLOW_LAYERS * 2;
        let blurred = glow::blur_premul_rgba8(
            &layer,
            canvas.width,
            canvas.height,
            radius,
            radius as f32 / 2.0,
        )?;
        compose::over_in_place(&mut base, &blurred, 0.9)?;
    }

    // Foreground: digits, captions, progress bar.
    let overlay = raster.render_pass(canvas, |_, ctx| {
        painter::draw_text_at(
            ctx,
            fonts,
            Family::Digits,
            &text,
            style.font_px,
            style.text_color,
            text_origin,
        );

        if let Some(label_color) = style.labels {
            let label_px = style.font_px / LABEL_FONT_DIV;
            let label_y = center.y + text_h / 2.0 + LABEL_GAP;

            // Caption centers come from the measured widths of each digit
            // group, not from even spacing, so proportional separators stay
            // aligned.
            let (hh_w, _) = fonts.measure(Family::Digits, &hh, style.font_px);
            let (sep_w, _) = fonts.measure(Family::Digits, style.separator, style.font_px);
            let (mm_w, _) = fonts.measure(Family::Digits, &mm, style.font_px);
            let (ss_w, _) = fonts.measure(Family::Digits, &ss, style.font_px);

            let start_x = center.x - text_w / 2.0;
            let groups = [
                (start_x + hh_w / 2.0, "HOURS"),
                (start_x + hh_w + sep_w + mm_w / 2.0, "MINUTES"),
                (start_x + hh_w + sep_w + mm_w + sep_w + ss_w / 2.0, "SECONDS"),
            ];
            for (group_cx, label) in groups {
                let (lw, _) = fonts.measure(Family::Label, label, label_px);
                painter::draw_text_at(
                    ctx,
                    fonts,
                    Family::Label,
                    label,
                    label_px,
                    label_color,
                    Point::new(group_cx - lw / 2.0, label_y),
                );
            }
        }

        if let Some(bar) = style.progress_bar {
            let bar_w = w - BAR_SIDE_MARGIN * 2.0;
            let y0 = h - BAR_BOTTOM_OFFSET;
            let track = Rect::new(BAR_SIDE_MARGIN, y0, BAR_SIDE_MARGIN + bar_w, y0 + BAR_HEIGHT);
            painter::fill_shape(ctx, &track, bar.with_alpha(BAR_TRACK_ALPHA));

            let fill_w = bar_w * progress;
            if fill_w > 0.0 {
                let fill =
                    Rect::new(BAR_SIDE_MARGIN, y0, BAR_SIDE_MARGIN + fill_w, y0 + BAR_HEIGHT);
                painter::fill_shape(ctx, &fill, bar);
            }
        }

        Ok(())
    })?;
    compose::over_in_place(&mut base, &overlay, 1.0)?;

    FrameRgba::from_parts(canvas, base)
}
