/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Premultiplication matches the GPU blend configuration used for
/// compositing the backdrop layers (source-over with premultiplied source).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Creates a premultiplied color from straight-alpha components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates an opaque color from hue (degrees), saturation, and lightness
    /// (both in `[0, 1]`).
    ///
    /// Standard HSL → RGB conversion; the palette entries are authored in
    /// HSL because hue/lightness is the natural axis for picking opposing
    /// pairs.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = (h.rem_euclid(360.0)) / 360.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Self::from_straight(r, g, b, 1.0)
    }

    /// Scales coverage by `alpha`.
    ///
    /// For premultiplied colors this is a uniform scale of all four
    /// channels; `with_alpha(1.0)` is the identity.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let k = alpha.clamp(0.0, 1.0);
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
            a: self.a * k,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── hsl ───────────────────────────────────────────────────────────────

    #[test]
    fn hsl_primaries() {
        let red = Color::from_hsl(0.0, 1.0, 0.5);
        assert!(close(red.r, 1.0) && close(red.g, 0.0) && close(red.b, 0.0));

        let green = Color::from_hsl(120.0, 1.0, 0.5);
        assert!(close(green.r, 0.0) && close(green.g, 1.0) && close(green.b, 0.0));

        let blue = Color::from_hsl(240.0, 1.0, 0.5);
        assert!(close(blue.r, 0.0) && close(blue.g, 0.0) && close(blue.b, 1.0));
    }

    #[test]
    fn hsl_achromatic_axis() {
        let gray = Color::from_hsl(77.0, 0.0, 0.5);
        assert!(close(gray.r, 0.5) && close(gray.g, 0.5) && close(gray.b, 0.5));

        let white = Color::from_hsl(0.0, 1.0, 1.0);
        assert_eq!(white, Color::WHITE);
    }

    #[test]
    fn hsl_hue_wraps() {
        assert_eq!(Color::from_hsl(360.0, 1.0, 0.5), Color::from_hsl(0.0, 1.0, 0.5));
        assert_eq!(Color::from_hsl(-120.0, 1.0, 0.5), Color::from_hsl(240.0, 1.0, 0.5));
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn with_alpha_scales_all_channels() {
        let c = Color::WHITE.with_alpha(0.8);
        assert!(close(c.r, 0.8) && close(c.g, 0.8) && close(c.b, 0.8) && close(c.a, 0.8));

        let (r, _, _, a) = c.to_straight();
        assert!(close(r, 1.0) && close(a, 0.8));
    }

    #[test]
    fn with_alpha_one_is_identity() {
        let c = Color::from_hsl(187.0, 1.0, 0.6);
        assert_eq!(c.with_alpha(1.0), c);
    }

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert!(close(c.r, 0.5) && close(c.g, 0.25) && close(c.b, 0.0) && close(c.a, 0.5));
    }
}
