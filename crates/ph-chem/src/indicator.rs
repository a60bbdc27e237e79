//! Universal-indicator strip colours.

/// Strip colour for each integer pH from 0 to 14.
pub const PH_STRIP_COLORS: [&str; 15] = [
    "#8B0000", "#B22222", "#E63900", "#FF4500", "#FF7F00", "#FFA500", "#FFD700", "#ADFF2F",
    "#32CD32", "#228B22", "#008080", "#0000FF", "#0000CD", "#00008B", "#191970",
];

const PH_STRIP_LABELS: [&str; 15] = [
    "very acidic",
    "strong acid",
    "strong acid",
    "moderately acidic",
    "moderately acidic",
    "weak acid",
    "approaching neutral",
    "neutral",
    "weak base",
    "moderately basic",
    "basic",
    "strong base",
    "strong base",
    "very basic",
    "extremely basic",
];

/// Shown for a pH that cannot be placed on the strip.
pub const UNKNOWN_COLOR: &str = "#FFFFFF";

fn strip_index(ph: f64) -> Option<usize> {
    if !ph.is_finite() {
        return None;
    }
    Some(ph.round_ties_even().clamp(0.0, 14.0) as usize)
}

/// Colour of the strip square nearest to `ph`, clamped to 0..=14.
pub fn indicator_color(ph: f64) -> &'static str {
    strip_index(ph).map_or(UNKNOWN_COLOR, |i| PH_STRIP_COLORS[i])
}

pub fn indicator_label(ph: f64) -> &'static str {
    strip_index(ph).map_or("unknown", |i| PH_STRIP_LABELS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_square() {
        assert_eq!(indicator_color(7.0), "#ADFF2F");
        assert_eq!(indicator_color(6.6), "#ADFF2F");
        assert_eq!(indicator_color(2.0), "#E63900");
        assert_eq!(indicator_label(12.301), "strong base");
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(indicator_color(-0.4), "#8B0000");
        assert_eq!(indicator_color(15.2), "#191970");
        assert_eq!(indicator_color(f64::NAN), UNKNOWN_COLOR);
    }
}
