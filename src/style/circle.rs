use crate::foundation::core::Canvas;
use crate::style::color::Color;

/// Tick marks around the dial. A zero length suppresses that tick class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMarks {
    pub color: Color,
    pub major_len: f64,
    pub minor_len: f64,
}

/// Visual configuration for a circular "time timer" countdown style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle {
    pub name: &'static str,
    pub description: &'static str,
    pub canvas: Canvas,
    pub bg: Color,
    pub gradient: Option<(Color, Color)>,
    pub text_color: Color,
    pub font_px: f32,
    /// Pie wedge fill; `wedge_alpha` is applied at composite time.
    pub wedge: Color,
    pub wedge_alpha: u8,
    pub ring_color: Color,
    pub ring_width: f64,
    pub ticks: Option<TickMarks>,
    /// Even hour labels (0, 2, .., 22) around the dial.
    pub hour_numbers: Option<Color>,
    pub center_dot: Option<Color>,
    pub glow: bool,
}

const SQUARE: Canvas = Canvas {
    width: 1080,
    height: 1080,
};

pub(crate) const CIRCLE_STYLES: &[CircleStyle] = &[
    CircleStyle {
        name: "circle-modern",
        description: "Modern dark circle timer with cyan wedge",
        canvas: SQUARE,
        bg: Color::rgb8(10, 10, 10),
        gradient: None,
        text_color: Color::rgb8(0, 229, 255),
        font_px: 90.0,
        wedge: Color::rgb8(0, 229, 255),
        wedge_alpha: 180,
        ring_color: Color::rgb8(0, 229, 255),
        ring_width: 6.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(0, 229, 255),
            major_len: 25.0,
            minor_len: 12.0,
        }),
        hour_numbers: None,
        center_dot: Some(Color::rgb8(0, 229, 255)),
        glow: false,
    },
    CircleStyle {
        name: "circle-classic",
        description: "Classic Time Timer style with red wedge on white",
        canvas: SQUARE,
        bg: Color::rgb8(255, 255, 255),
        gradient: None,
        text_color: Color::rgb8(51, 51, 51),
        font_px: 80.0,
        wedge: Color::rgb8(229, 57, 53),
        wedge_alpha: 200,
        ring_color: Color::rgb8(51, 51, 51),
        ring_width: 5.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(51, 51, 51),
            major_len: 30.0,
            minor_len: 15.0,
        }),
        hour_numbers: Some(Color::rgb8(102, 102, 102)),
        center_dot: Some(Color::rgb8(51, 51, 51)),
        glow: false,
    },
    CircleStyle {
        name: "circle-neon",
        description: "Neon glowing circle timer on dark purple",
        canvas: SQUARE,
        bg: Color::rgb8(13, 2, 33),
        gradient: None,
        text_color: Color::rgb8(255, 42, 252),
        font_px: 90.0,
        wedge: Color::rgb8(255, 42, 252),
        wedge_alpha: 150,
        ring_color: Color::rgb8(255, 42, 252),
        ring_width: 4.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(255, 42, 252),
            major_len: 20.0,
            minor_len: 10.0,
        }),
        hour_numbers: None,
        center_dot: None,
        glow: true,
    },
    CircleStyle {
        name: "circle-minimal",
        description: "Minimal circle timer with thin ring on white",
        canvas: SQUARE,
        bg: Color::rgb8(255, 255, 255),
        gradient: None,
        text_color: Color::rgb8(51, 51, 51),
        font_px: 80.0,
        wedge: Color::rgb8(144, 202, 249),
        wedge_alpha: 140,
        ring_color: Color::rgb8(204, 204, 204),
        ring_width: 2.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(204, 204, 204),
            major_len: 15.0,
            minor_len: 0.0,
        }),
        hour_numbers: None,
        center_dot: None,
        glow: false,
    },
    CircleStyle {
        name: "circle-retro",
        description: "Retro amber circle timer with LED look",
        canvas: SQUARE,
        bg: Color::rgb8(26, 16, 0),
        gradient: None,
        text_color: Color::rgb8(255, 140, 0),
        font_px: 90.0,
        wedge: Color::rgb8(255, 140, 0),
        wedge_alpha: 160,
        ring_color: Color::rgb8(255, 140, 0),
        ring_width: 5.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(255, 140, 0),
            major_len: 25.0,
            minor_len: 12.0,
        }),
        hour_numbers: None,
        center_dot: Some(Color::rgb8(255, 140, 0)),
        glow: true,
    },
    CircleStyle {
        name: "circle-gradient",
        description: "Circle timer on vibrant purple gradient",
        canvas: SQUARE,
        bg: Color::rgb8(0, 0, 0),
        gradient: Some((Color::rgb8(102, 126, 234), Color::rgb8(118, 75, 162))),
        text_color: Color::rgb8(255, 255, 255),
        font_px: 80.0,
        wedge: Color::rgb8(255, 255, 255),
        wedge_alpha: 120,
        ring_color: Color::rgb8(255, 255, 255),
        ring_width: 4.0,
        ticks: Some(TickMarks {
            color: Color::rgba8(255, 255, 255, 204),
            major_len: 20.0,
            minor_len: 10.0,
        }),
        hour_numbers: None,
        center_dot: Some(Color::rgb8(255, 255, 255)),
        glow: false,
    },
    CircleStyle {
        name: "circle-terminal",
        description: "Terminal green circle timer on black",
        canvas: SQUARE,
        bg: Color::rgb8(12, 12, 12),
        gradient: None,
        text_color: Color::rgb8(0, 255, 65),
        font_px: 80.0,
        wedge: Color::rgb8(0, 255, 65),
        wedge_alpha: 130,
        ring_color: Color::rgb8(0, 255, 65),
        ring_width: 3.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(0, 255, 65),
            major_len: 20.0,
            minor_len: 10.0,
        }),
        hour_numbers: None,
        center_dot: None,
        glow: true,
    },
    CircleStyle {
        name: "circle-cinematic",
        description: "Cinematic gold circle timer on dark gradient",
        canvas: SQUARE,
        bg: Color::rgb8(0, 0, 0),
        gradient: Some((Color::rgb8(26, 26, 26), Color::rgb8(0, 0, 0))),
        text_color: Color::rgb8(212, 175, 55),
        font_px: 90.0,
        wedge: Color::rgb8(212, 175, 55),
        wedge_alpha: 160,
        ring_color: Color::rgb8(212, 175, 55),
        ring_width: 5.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(212, 175, 55),
            major_len: 25.0,
            minor_len: 12.0,
        }),
        hour_numbers: Some(Color::rgb8(138, 122, 42)),
        center_dot: Some(Color::rgb8(212, 175, 55)),
        glow: true,
    },
    CircleStyle {
        name: "circle-sport",
        description: "Sporty red circle timer with bold digits",
        canvas: SQUARE,
        bg: Color::rgb8(17, 17, 17),
        gradient: None,
        text_color: Color::rgb8(255, 23, 68),
        font_px: 100.0,
        wedge: Color::rgb8(255, 23, 68),
        wedge_alpha: 180,
        ring_color: Color::rgb8(255, 23, 68),
        ring_width: 6.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(255, 23, 68),
            major_len: 30.0,
            minor_len: 15.0,
        }),
        hour_numbers: None,
        center_dot: Some(Color::rgb8(255, 23, 68)),
        glow: false,
    },
    CircleStyle {
        name: "circle-elegant",
        description: "Elegant cream circle timer with brown wedge",
        canvas: SQUARE,
        bg: Color::rgb8(245, 240, 232),
        gradient: None,
        text_color: Color::rgb8(62, 39, 35),
        font_px: 80.0,
        wedge: Color::rgb8(141, 110, 99),
        wedge_alpha: 150,
        ring_color: Color::rgb8(62, 39, 35),
        ring_width: 3.0,
        ticks: Some(TickMarks {
            color: Color::rgb8(141, 110, 99),
            major_len: 25.0,
            minor_len: 12.0,
        }),
        hour_numbers: Some(Color::rgb8(141, 110, 99)),
        center_dot: Some(Color::rgb8(62, 39, 35)),
        glow: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_ten_unique_names() {
        assert_eq!(CIRCLE_STYLES.len(), 10);
        let mut names: Vec<_> = CIRCLE_STYLES.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn ring_widths_leave_room_for_ticks() {
        for s in CIRCLE_STYLES {
            assert!(s.ring_width > 0.0, "{}", s.name);
            if let Some(t) = s.ticks {
                assert!(t.major_len >= t.minor_len, "{}", s.name);
            }
        }
    }
}
