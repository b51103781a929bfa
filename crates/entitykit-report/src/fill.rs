//! Fill color resolution.

use entitykit_core::{Paint, PaintKind};

use crate::number::{js_number, js_round};

/// `rgba(r, g, b, a)` for a solid first fill, `fallback` otherwise.
///
/// Channels are scaled to 0-255 and rounded. An absent, zero or NaN
/// opacity prints as 1.
pub fn resolve_fill(fills: Option<&[Paint]>, fallback: &str) -> String {
    match fills.and_then(|fills| fills.first()) {
        Some(paint) if paint.kind == PaintKind::Solid => rgba(paint),
        _ => fallback.to_string(),
    }
}

fn rgba(paint: &Paint) -> String {
    let channel = |value: f64| js_number(js_round(value * 255.0));
    format!(
        "rgba({}, {}, {}, {})",
        channel(paint.color.r),
        channel(paint.color.g),
        channel(paint.color.b),
        js_number(
            paint
                .opacity
                .filter(|opacity| *opacity != 0.0 && !opacity.is_nan())
                .unwrap_or(1.0)
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "#2D2D2D";

    #[test]
    fn test_solid_fill() {
        let fills = vec![Paint::solid(1.0, 0.5, 0.0)];
        assert_eq!(
            resolve_fill(Some(&fills), FALLBACK),
            "rgba(255, 128, 0, 1)"
        );
    }

    #[test]
    fn test_opacity() {
        let fills = vec![Paint::solid(0.0, 0.0, 0.0).with_opacity(0.35)];
        assert_eq!(resolve_fill(Some(&fills), FALLBACK), "rgba(0, 0, 0, 0.35)");
    }

    #[test]
    fn test_zero_and_nan_opacity_print_as_one() {
        let fills = vec![Paint::solid(0.0, 0.0, 0.0).with_opacity(0.0)];
        assert_eq!(resolve_fill(Some(&fills), FALLBACK), "rgba(0, 0, 0, 1)");

        let fills = vec![Paint::solid(0.0, 0.0, 0.0).with_opacity(f64::NAN)];
        assert_eq!(resolve_fill(Some(&fills), FALLBACK), "rgba(0, 0, 0, 1)");

        let fills = vec![Paint::solid(0.0, 0.0, 0.0)];
        assert_eq!(resolve_fill(Some(&fills), FALLBACK), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(resolve_fill(None, FALLBACK), FALLBACK);
        assert_eq!(resolve_fill(Some(&[]), FALLBACK), FALLBACK);

        let gradient = Paint {
            kind: PaintKind::Other,
            ..Paint::solid(1.0, 1.0, 1.0)
        };
        // Only the first entry is considered.
        let fills = vec![gradient, Paint::solid(1.0, 0.0, 0.0)];
        assert_eq!(resolve_fill(Some(&fills), FALLBACK), FALLBACK);
    }
}
