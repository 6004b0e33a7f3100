use crate::foundation::core::Canvas;
use crate::style::color::Color;

/// Border drawn just inside the canvas edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f64,
}

/// Visual configuration for a digital-digits countdown style.
///
/// Optional decorations are modeled as `Option<Color>` rather than paired
/// flag+color fields: `Some` is both the switch and the paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DigitalStyle {
    pub name: &'static str,
    pub description: &'static str,
    pub canvas: Canvas,
    pub bg: Color,
    /// Two-stop vertical gradient (top, bottom) replacing the solid fill.
    pub gradient: Option<(Color, Color)>,
    pub text_color: Color,
    pub font_px: f32,
    /// Drawn between the HH/MM/SS groups, spaces included.
    pub separator: &'static str,
    /// HOURS/MINUTES/SECONDS captions under the digit groups.
    pub labels: Option<Color>,
    pub border: Option<Border>,
    /// Rounded panel behind the digits.
    pub panel: Option<Color>,
    pub glow: bool,
    /// Linear progress bar near the bottom edge.
    pub progress_bar: Option<Color>,
    /// Circular progress ring behind the digits.
    pub progress_ring: Option<Color>,
}

const HD: Canvas = Canvas {
    width: 1920,
    height: 1080,
};

/// The built-in digital style table. Order here is presentation order for
/// `--list-styles`; the catalog re-keys by name.
pub(crate) const DIGITAL_STYLES: &[DigitalStyle] = &[
    DigitalStyle {
        name: "modern",
        description: "Clean modern look with dark background and cyan text",
        canvas: HD,
        bg: Color::rgb8(10, 10, 10),
        gradient: None,
        text_color: Color::rgb8(0, 229, 255),
        font_px: 280.0,
        separator: ":",
        labels: Some(Color::rgb8(85, 85, 85)),
        border: None,
        panel: Some(Color::rgb8(26, 26, 46)),
        glow: false,
        progress_bar: Some(Color::rgb8(0, 229, 255)),
        progress_ring: None,
    },
    DigitalStyle {
        name: "classic",
        description: "Traditional white on black with serif-style digits",
        canvas: HD,
        bg: Color::rgb8(0, 0, 0),
        gradient: None,
        text_color: Color::rgb8(255, 255, 255),
        font_px: 300.0,
        separator: ":",
        labels: None,
        border: Some(Border {
            color: Color::rgb8(255, 255, 255),
            width: 4.0,
        }),
        panel: None,
        glow: false,
        progress_bar: None,
        progress_ring: None,
    },
    DigitalStyle {
        name: "neon",
        description: "Neon glow effect on dark purple background",
        canvas: HD,
        bg: Color::rgb8(13, 2, 33),
        gradient: None,
        text_color: Color::rgb8(255, 42, 252),
        font_px: 220.0,
        separator: " : ",
        labels: None,
        border: None,
        panel: None,
        glow: true,
        progress_bar: None,
        progress_ring: None,
    },
    DigitalStyle {
        name: "minimal",
        description: "Minimal white background with thin gray text",
        canvas: HD,
        bg: Color::rgb8(255, 255, 255),
        gradient: None,
        text_color: Color::rgb8(51, 51, 51),
        font_px: 260.0,
        separator: ":",
        labels: Some(Color::rgb8(170, 170, 170)),
        border: None,
        panel: None,
        glow: false,
        progress_bar: None,
        progress_ring: None,
    },
    DigitalStyle {
        name: "retro",
        description: "Retro LED display with amber digits on dark background",
        canvas: HD,
        bg: Color::rgb8(26, 16, 0),
        gradient: None,
        text_color: Color::rgb8(255, 140, 0),
        font_px: 300.0,
        separator: ":",
        labels: None,
        border: Some(Border {
            color: Color::rgb8(51, 34, 0),
            width: 8.0,
        }),
        panel: Some(Color::rgb8(15, 10, 0)),
        glow: true,
        progress_bar: None,
        progress_ring: None,
    },
    DigitalStyle {
        name: "gradient",
        description: "Vibrant gradient background with white text",
        canvas: HD,
        bg: Color::rgb8(0, 0, 0),
        gradient: Some((Color::rgb8(102, 126, 234), Color::rgb8(118, 75, 162))),
        text_color: Color::rgb8(255, 255, 255),
        font_px: 280.0,
        separator: ":",
        labels: Some(Color::rgb8(221, 221, 221)),
        border: None,
        panel: None,
        glow: false,
        progress_bar: Some(Color::rgb8(255, 255, 255)),
        progress_ring: None,
    },
    DigitalStyle {
        name: "terminal",
        description: "Hacker-style green on black terminal look",
        canvas: HD,
        bg: Color::rgb8(12, 12, 12),
        gradient: None,
        text_color: Color::rgb8(0, 255, 65),
        font_px: 260.0,
        separator: ":",
        labels: Some(Color::rgb8(0, 107, 26)),
        border: Some(Border {
            color: Color::rgb8(0, 255, 65),
            width: 2.0,
        }),
        panel: None,
        glow: true,
        progress_bar: None,
        progress_ring: None,
    },
    DigitalStyle {
        name: "cinematic",
        description: "Cinematic widescreen with gold text on dark gradient",
        canvas: HD,
        bg: Color::rgb8(0, 0, 0),
        gradient: Some((Color::rgb8(26, 26, 26), Color::rgb8(0, 0, 0))),
        text_color: Color::rgb8(212, 175, 55),
        font_px: 220.0,
        separator: " : ",
        labels: None,
        border: None,
        panel: None,
        glow: true,
        progress_bar: None,
        progress_ring: None,
    },
    DigitalStyle {
        name: "sport",
        description: "Sporty bold red countdown with progress bar",
        canvas: HD,
        bg: Color::rgb8(17, 17, 17),
        gradient: None,
        text_color: Color::rgb8(255, 23, 68),
        font_px: 300.0,
        separator: ":",
        labels: Some(Color::rgb8(102, 102, 102)),
        border: None,
        panel: Some(Color::rgb8(28, 28, 28)),
        glow: false,
        progress_bar: Some(Color::rgb8(255, 23, 68)),
        progress_ring: None,
    },
    DigitalStyle {
        name: "elegant",
        description: "Elegant cream background with dark brown text and circle progress",
        canvas: HD,
        bg: Color::rgb8(245, 240, 232),
        gradient: None,
        text_color: Color::rgb8(62, 39, 35),
        font_px: 180.0,
        separator: "  :  ",
        labels: Some(Color::rgb8(141, 110, 99)),
        border: None,
        panel: None,
        glow: false,
        progress_bar: None,
        progress_ring: Some(Color::rgb8(141, 110, 99)),
    },
];
