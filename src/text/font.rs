//! Font resolution and shaping.
//!
//! Fonts are resolved once per library instance by probing an ordered list of
//! well-known platform font files, one list per family. Probing is best
//! effort: unreadable or unparsable candidates are skipped. When nothing
//! usable is found the library degrades to the built-in segment font instead
//! of failing, so rendering never aborts on font resolution.

use std::borrow::Cow;
use std::path::Path;

use crate::text::segment;

/// The two type roles a frame can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Monospace-leaning bold face for the timer digits.
    Digits,
    /// Sans face for captions and hour numbers.
    Label,
}

const DIGITS_FONT_CANDIDATES: &[&str] = &[
    // macOS
    "/System/Library/Fonts/SFMono-Bold.otf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Courier.dfont",
    "/Library/Fonts/SF-Mono-Bold.otf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Bold.ttf",
    "/usr/share/fonts/truetype/ubuntu/UbuntuMono-Bold.ttf",
    // Windows
    "C:/Windows/Fonts/consola.ttf",
    "C:/Windows/Fonts/cour.ttf",
];

const LABEL_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFMono-Regular.otf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "C:/Windows/Fonts/arial.ttf",
];

/// A shaped run of text ready for glyph rendering.
pub(crate) struct ShapedText {
    pub(crate) layout: parley::Layout<()>,
    pub(crate) font: vello_cpu::peniko::FontData,
}

struct LoadedFace {
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

/// Resolved faces plus the Parley contexts used to shape with them.
pub struct FontLibrary {
    digits: Option<LoadedFace>,
    label: Option<LoadedFace>,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::resolve()
    }
}

impl FontLibrary {
    /// Probe the platform candidate lists. Never fails; families that cannot
    /// be resolved fall back to the built-in segment font.
    pub fn resolve() -> Self {
        let mut lib = Self {
            digits: None,
            label: None,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        };
        lib.digits = lib.load_first(DIGITS_FONT_CANDIDATES);
        lib.label = lib.load_first(LABEL_FONT_CANDIDATES);
        if lib.digits.is_none() {
            tracing::warn!("no digits font found on this system; using the built-in segment font");
        }
        if lib.label.is_none() {
            tracing::warn!("no label font found on this system; using the built-in segment font");
        }
        lib
    }

    #[cfg(test)]
    pub(crate) fn without_system_fonts() -> Self {
        Self {
            digits: None,
            label: None,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    fn load_first(&mut self, candidates: &[&str]) -> Option<LoadedFace> {
        for &path in candidates {
            let p = Path::new(path);
            if !p.is_file() {
                continue;
            }
            let Ok(bytes) = std::fs::read(p) else {
                continue;
            };
            if let Some(face) = self.register(bytes) {
                tracing::debug!(path, family = %face.family_name, "resolved font");
                return Some(face);
            }
        }
        None
    }

    fn register(&mut self, bytes: Vec<u8>) -> Option<LoadedFace> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id)?;
        let family_name = self.font_ctx.collection.family_name(family_id)?.to_string();
        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Some(LoadedFace { family_name, font })
    }

    /// Shape `text` with the resolved face for `family`, or `None` when that
    /// family is running on the segment-font fallback.
    pub(crate) fn shape(&mut self, family: Family, text: &str, px: f32) -> Option<ShapedText> {
        let (family_name, font) = {
            let face = match family {
                Family::Digits => self.digits.as_ref()?,
                Family::Label => self.label.as_ref()?,
            };
            (face.family_name.clone(), face.font.clone())
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(px));
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        Some(ShapedText { layout, font })
    }

    /// Width and height of `text` at `px`, whichever face ends up drawing it.
    pub fn measure(&mut self, family: Family, text: &str, px: f32) -> (f64, f64) {
        match self.shape(family, text, px) {
            Some(shaped) => (
                f64::from(shaped.layout.width()),
                f64::from(shaped.layout.height()),
            ),
            None => segment::measure(text, f64::from(px)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_never_panics_and_measures_positive() {
        let mut lib = FontLibrary::resolve();
        let (w, h) = lib.measure(Family::Digits, "12:34:56", 100.0);
        assert!(w > 0.0 && h > 0.0);
        let (w, h) = lib.measure(Family::Label, "HOURS", 20.0);
        assert!(w > 0.0 && h > 0.0);
    }

    #[test]
    fn fallback_measures_through_the_segment_font() {
        let mut lib = FontLibrary::without_system_fonts();
        assert!(lib.shape(Family::Digits, "00:00:00", 100.0).is_none());
        let (w, h) = lib.measure(Family::Digits, "00:00:00", 100.0);
        let (sw, sh) = crate::text::segment::measure("00:00:00", 100.0);
        assert_eq!((w, h), (sw, sh));
    }

    #[test]
    fn longer_text_measures_wider() {
        let mut lib = FontLibrary::resolve();
        let (short, _) = lib.measure(Family::Digits, "00", 100.0);
        let (long, _) = lib.measure(Family::Digits, "00:00", 100.0);
        assert!(long > short);
    }
}
