use crate::foundation::error::{TickframeError, TickframeResult};

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> TickframeResult<Self> {
        if width == 0 || height == 0 {
            return Err(TickframeError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Half the shorter side, the radius base for centered circular elements.
    pub fn half_min_dim(self) -> f64 {
        f64::from(self.width.min(self.height)) / 2.0
    }
}

/// A single point on the countdown: seconds left and the span being counted.
///
/// Frames are pure functions of this pair plus a style; nothing persists
/// between renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownInstant {
    pub remaining: u64,
    pub total: u64,
}

impl CountdownInstant {
    pub fn new(remaining: u64, total: u64) -> Self {
        Self { remaining, total }
    }

    /// Fraction elapsed in `[0, 1]`. A zero-length countdown counts as fully
    /// elapsed rather than dividing by zero.
    pub fn elapsed_ratio(self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (1.0 - self.remaining as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// Fraction remaining in `[0, 1]`. Zero-length countdowns have nothing
    /// left.
    pub fn remaining_ratio(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.remaining as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}

/// Split a seconds count into zero-padded `(HH, MM, SS)` display strings.
///
/// Hours widen past two digits rather than truncate; minutes and seconds are
/// always exactly two.
pub fn format_time(total_seconds: u64) -> (String, String, String) {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    (format!("{h:02}"), format!("{m:02}"), format!("{s:02}"))
}

/// `HH:MM:SS` with a caller-chosen separator.
pub fn display_time(total_seconds: u64, separator: &str) -> String {
    let (h, m, s) = format_time(total_seconds);
    format!("{h}{separator}{m}{separator}{s}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_reference_values() {
        assert_eq!(
            format_time(0),
            ("00".to_string(), "00".to_string(), "00".to_string())
        );
        assert_eq!(
            format_time(86400),
            ("24".to_string(), "00".to_string(), "00".to_string())
        );
        assert_eq!(
            format_time(45296),
            ("12".to_string(), "34".to_string(), "56".to_string())
        );
    }

    #[test]
    fn format_time_hours_widen_past_two_digits() {
        let (h, m, s) = format_time(100 * 3600 + 59);
        assert_eq!(h, "100");
        assert_eq!(m, "00");
        assert_eq!(s, "59");
    }

    #[test]
    fn display_time_uses_separator() {
        assert_eq!(display_time(45296, " : "), "12 : 34 : 56");
    }

    #[test]
    fn elapsed_ratio_endpoints_and_monotonicity() {
        let total = 100;
        assert_eq!(CountdownInstant::new(total, total).elapsed_ratio(), 0.0);
        assert_eq!(CountdownInstant::new(0, total).elapsed_ratio(), 1.0);

        let mut prev = -1.0;
        for remaining in (0..=total).rev() {
            let r = CountdownInstant::new(remaining, total).elapsed_ratio();
            assert!(r > prev);
            prev = r;
        }
    }

    #[test]
    fn zero_total_is_fully_elapsed() {
        let i = CountdownInstant::new(0, 0);
        assert_eq!(i.elapsed_ratio(), 1.0);
        assert_eq!(i.remaining_ratio(), 0.0);
    }

    #[test]
    fn canvas_rejects_zero_dims() {
        assert!(Canvas::new(0, 10).is_err());
        assert!(Canvas::new(10, 0).is_err());
        assert_eq!(Canvas::new(1920, 1080).unwrap().half_min_dim(), 540.0);
    }
}
