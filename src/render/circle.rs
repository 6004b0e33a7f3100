//! Circular "time timer" frame compositor.

use kurbo::{Circle, Point};

use crate::foundation::core::{CountdownInstant, display_time};
use crate::foundation::error::TickframeResult;
use crate::render::frame::FrameRgba;
use crate::render::painter::{self, Rasterizer};
use crate::render::{compose, glow, shapes};
use crate::style::circle::CircleStyle;
use crate::text::font::{Family, FontLibrary};

const DIAL_MARGIN: f64 = 80.0;
const TICK_MAJOR_STROKE: f64 = 3.0;
const TICK_MINOR_STROKE: f64 = 1.0;
const HOUR_NUMBER_INSET: f64 = 30.0;
const HOUR_LABEL_DIV: f32 = 3.0;
const CENTER_DOT_RADIUS: f64 = 8.0;
const GLOW_LAYERS: u32 = 3;

/// Render one circular frame. Pure given the inputs: identical calls produce
/// byte-identical frames.
pub fn render_circle_frame(
    style: &CircleStyle,
    instant: CountdownInstant,
    fonts: &mut FontLibrary,
    raster: &mut Rasterizer,
) -> TickframeResult<FrameRgba> {
    let canvas = style.canvas;
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let center = Point::new(w / 2.0, h / 2.0);
    let radius = canvas.half_min_dim() - DIAL_MARGIN;
    if radius <= 0.0 {
        return Err(crate::foundation::error::TickframeError::validation(
            "canvas too small for the dial margin",
        ));
    }

    let remaining = instant.remaining_ratio();
    // The center readout always uses colons, whatever the digital family's
    // separators look like.
    let text = display_time(instant.remaining, ":");

    let mut base = raster.render_pass(canvas, |r, ctx| {
        match style.gradient {
            Some((top, bottom)) => {
                let img = r.gradient_image(top, bottom, canvas.width, canvas.height)?;
                painter::fill_canvas_with_image(ctx, canvas, img);
            }
            None => painter::fill_canvas(ctx, canvas, style.bg),
        }
        Ok(())
    })?;

    // The wedge gets its own transparent layer so its translucency composites
    // against the finished background exactly once.
    if remaining > 0.0 {
        let wedge_path = shapes::pie_wedge(center, radius, remaining * 360.0);
        let wedge_color = style.wedge.with_alpha(style.wedge_alpha);
        let layer = raster.render_pass(canvas, |_, ctx| {
            painter::fill_shape(ctx, &wedge_path, wedge_color);
            Ok(())
        })?;
        compose::over_in_place(&mut base, &layer, 1.0)?;
    }

    // Dial furniture: ring, ticks, hour numbers, center dot.
    let overlay = raster.render_pass(canvas, |_, ctx| {
        painter::stroke_shape(
            ctx,
            &Circle::new(center, radius),
            style.ring_width,
            style.ring_color,
        );

        if let Some(ticks) = style.ticks {
            for i in 0..60u32 {
                let is_major = i % 5 == 0;
                let len = if is_major {
                    ticks.major_len
                } else {
                    ticks.minor_len
                };
                if len <= 0.0 {
                    continue;
                }
                let deg = f64::from(i) * 6.0;
                let outer = shapes::dial_point(center, radius - style.ring_width, deg);
                let inner = shapes::dial_point(center, radius - style.ring_width - len, deg);
                let stroke = if is_major {
                    TICK_MAJOR_STROKE
                } else {
                    TICK_MINOR_STROKE
                };
                painter::fill_shape(ctx, &shapes::thick_line(inner, outer, stroke), ticks.color);
            }
        }

        if let Some(color) = style.hour_numbers {
            let tick_reach = style
                .ticks
                .map(|t| t.major_len.max(t.minor_len))
                .unwrap_or(0.0);
            let num_px = style.font_px / HOUR_LABEL_DIV;
            let num_r = radius - style.ring_width - tick_reach - HOUR_NUMBER_INSET;
            for i in 0..12u32 {
                let label = (i * 2).to_string();
                let p = shapes::dial_point(center, num_r, f64::from(i) * 30.0);
                let (lw, lh) = fonts.measure(Family::Label, &label, num_px);
                painter::draw_text_at(
                    ctx,
                    fonts,
                    Family::Label,
                    &label,
                    num_px,
                    color,
                    Point::new(p.x - lw / 2.0, p.y - lh / 2.0),
                );
            }
        }

        if let Some(dot) = style.center_dot {
            painter::fill_shape(ctx, &Circle::new(center, CENTER_DOT_RADIUS), dot);
        }

        Ok(())
    })?;
    compose::over_in_place(&mut base, &overlay, 1.0)?;

    let (text_w, text_h) = fonts.measure(Family::Digits, &text, style.font_px);
    let text_origin = Point::new(center.x - text_w / 2.0, center.y - text_h / 2.0);

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
        let blur_radius = GLOW_LAYERS * 2;
        let blurred = glow::blur_premul_rgba8(
            &layer,
            canvas.width,
            canvas.height,
            blur_radius,
            blur_radius as f32 / 2.0,
        )?;
        compose::over_in_place(&mut base, &blurred, 0.9)?;
    }

    let text_layer = raster.render_pass(canvas, |_, ctx| {
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
    compose::over_in_place(&mut base, &text_layer, 1.0)?;

    FrameRgba::from_parts(canvas, base)
}
