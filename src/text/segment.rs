//! Built-in vector fallback font.
//!
//! A segment-stroke face covering exactly the characters a countdown frame
//! can contain: digits, the colon separator, space, and the uppercase letters
//! of the HOURS/MINUTES/SECONDS captions. Glyphs are defined as line segments
//! on a unit cell (x and y in `[0, 1]`, y down) and rendered as filled quads,
//! so text output never depends on any font file being present.

use kurbo::{BezPath, Point};

use crate::render::shapes::thick_line;

type Seg = ((f64, f64), (f64, f64));

// The classic seven segments on the unit cell.
const SEG_A: Seg = ((0.0, 0.0), (1.0, 0.0));
const SEG_B: Seg = ((1.0, 0.0), (1.0, 0.5));
const SEG_C: Seg = ((1.0, 0.5), (1.0, 1.0));
const SEG_D: Seg = ((0.0, 1.0), (1.0, 1.0));
const SEG_E: Seg = ((0.0, 0.5), (0.0, 1.0));
const SEG_F: Seg = ((0.0, 0.0), (0.0, 0.5));
const SEG_G: Seg = ((0.0, 0.5), (1.0, 0.5));

const DIGIT_0: &[Seg] = &[SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F];
const DIGIT_1: &[Seg] = &[SEG_B, SEG_C];
const DIGIT_2: &[Seg] = &[SEG_A, SEG_B, SEG_G, SEG_E, SEG_D];
const DIGIT_3: &[Seg] = &[SEG_A, SEG_B, SEG_G, SEG_C, SEG_D];
const DIGIT_4: &[Seg] = &[SEG_F, SEG_G, SEG_B, SEG_C];
const DIGIT_5: &[Seg] = &[SEG_A, SEG_F, SEG_G, SEG_C, SEG_D];
const DIGIT_6: &[Seg] = &[SEG_A, SEG_F, SEG_G, SEG_E, SEG_D, SEG_C];
const DIGIT_7: &[Seg] = &[SEG_A, SEG_B, SEG_C];
const DIGIT_8: &[Seg] = &[SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G];
const DIGIT_9: &[Seg] = &[SEG_A, SEG_B, SEG_C, SEG_D, SEG_F, SEG_G];

const COLON: &[Seg] = &[
    ((0.5, 0.25), (0.5, 0.32)),
    ((0.5, 0.68), (0.5, 0.75)),
];

const LETTER_C: &[Seg] = &[SEG_A, SEG_F, SEG_E, SEG_D];
const LETTER_D: &[Seg] = &[
    SEG_F,
    SEG_E,
    ((0.0, 0.0), (0.8, 0.0)),
    ((0.8, 0.0), (1.0, 0.2)),
    ((1.0, 0.2), (1.0, 0.8)),
    ((1.0, 0.8), (0.8, 1.0)),
    ((0.0, 1.0), (0.8, 1.0)),
];
const LETTER_E: &[Seg] = &[SEG_A, SEG_F, SEG_E, SEG_G, SEG_D];
const LETTER_H: &[Seg] = &[SEG_F, SEG_E, SEG_B, SEG_C, SEG_G];
const LETTER_I: &[Seg] = &[SEG_A, SEG_D, ((0.5, 0.0), (0.5, 1.0))];
const LETTER_M: &[Seg] = &[
    SEG_F,
    SEG_E,
    SEG_B,
    SEG_C,
    ((0.0, 0.0), (0.5, 0.45)),
    ((1.0, 0.0), (0.5, 0.45)),
];
const LETTER_N: &[Seg] = &[SEG_F, SEG_E, SEG_B, SEG_C, ((0.0, 0.0), (1.0, 1.0))];
const LETTER_O: &[Seg] = DIGIT_0;
const LETTER_R: &[Seg] = &[SEG_F, SEG_E, SEG_A, SEG_B, SEG_G, ((0.4, 0.5), (1.0, 1.0))];
const LETTER_S: &[Seg] = DIGIT_5;
const LETTER_T: &[Seg] = &[SEG_A, ((0.5, 0.0), (0.5, 1.0))];
const LETTER_U: &[Seg] = &[SEG_F, SEG_E, SEG_D, SEG_C, SEG_B];

/// Glyph cell height as a fraction of the nominal font size.
const CAP_RATIO: f64 = 0.72;
/// Glyph width as a fraction of cell height.
const WIDTH_RATIO: f64 = 0.52;
/// Monospace advance as a fraction of cell height.
const ADVANCE_RATIO: f64 = 0.78;
/// Stroke thickness as a fraction of cell height.
const STROKE_RATIO: f64 = 0.11;

fn glyph(c: char) -> Option<&'static [Seg]> {
    Some(match c {
        '0' => DIGIT_0,
        '1' => DIGIT_1,
        '2' => DIGIT_2,
        '3' => DIGIT_3,
        '4' => DIGIT_4,
        '5' => DIGIT_5,
        '6' => DIGIT_6,
        '7' => DIGIT_7,
        '8' => DIGIT_8,
        '9' => DIGIT_9,
        ':' => COLON,
        'C' => LETTER_C,
        'D' => LETTER_D,
        'E' => LETTER_E,
        'H' => LETTER_H,
        'I' => LETTER_I,
        'M' => LETTER_M,
        'N' => LETTER_N,
        'O' => LETTER_O,
        'R' => LETTER_R,
        'S' => LETTER_S,
        'T' => LETTER_T,
        'U' => LETTER_U,
        _ => return None,
    })
}

/// Width and height of `text` at nominal size `px`.
pub(crate) fn measure(text: &str, px: f64) -> (f64, f64) {
    let cell_h = px * CAP_RATIO;
    let n = text.chars().count() as f64;
    (n * cell_h * ADVANCE_RATIO, cell_h)
}

/// Build the filled path for `text` at nominal size `px`, with the glyph box
/// top-left at `origin`. Characters outside the glyph set (including space)
/// consume their advance without drawing.
pub(crate) fn text_path(text: &str, px: f64, origin: Point) -> BezPath {
    let cell_h = px * CAP_RATIO;
    let glyph_w = cell_h * WIDTH_RATIO;
    let advance = cell_h * ADVANCE_RATIO;
    let stroke = (cell_h * STROKE_RATIO).max(1.0);
    let pad = (advance - glyph_w) / 2.0;

    let mut path = BezPath::new();
    for (i, c) in text.chars().enumerate() {
        let Some(segs) = glyph(c) else {
            continue;
        };
        let gx = origin.x + i as f64 * advance + pad;
        for &((x0, y0), (x1, y1)) in segs {
            let a = Point::new(gx + x0 * glyph_w, origin.y + y0 * cell_h);
            let b = Point::new(gx + x1 * glyph_w, origin.y + y1 * cell_h);
            let quad = thick_line(a, b, stroke);
            for el in quad.elements() {
                path.push(*el);
            }
        }
    }
    path
}
