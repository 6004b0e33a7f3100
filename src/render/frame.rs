use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{TickframeError, TickframeResult};

/// A rendered frame as premultiplied RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    pub(crate) fn from_parts(canvas: Canvas, data: Vec<u8>) -> TickframeResult<Self> {
        let expected = (canvas.width as usize)
            .saturating_mul(canvas.height as usize)
            .saturating_mul(4);
        if data.len() != expected {
            return Err(TickframeError::render("frame byte length mismatch"));
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    /// Flatten to opaque RGB8. Compositors always lay everything over an
    /// opaque background fill, so this is an unpremultiply plus alpha drop.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((self.width as usize) * (self.height as usize) * 3);
        for px in self.data.chunks_exact(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                out.extend_from_slice(&[0, 0, 0]);
                continue;
            }
            let unpremul = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
            out.push(unpremul(px[0]));
            out.push(unpremul(px[1]));
            out.push(unpremul(px[2]));
        }
        out
    }

    /// Encode the flattened frame as a PNG. Sub-second duplicates reuse these
    /// bytes so copies of the same second are identical on disk.
    pub fn encode_png(&self) -> TickframeResult<Vec<u8>> {
        let rgb = self.to_rgb8();
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(
                &rgb,
                self.width,
                self.height,
                image::ExtendedColorType::Rgb8,
            )
            .context("encode frame png")?;
        Ok(out)
    }
}
