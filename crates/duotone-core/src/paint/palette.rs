use super::Color;

/// Two opposing colors filling the backdrop halves.
///
/// `primary` paints the west and south wedges, `secondary` the north and
/// east wedges. A pair's identity is its index in the palette.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorPair {
    pub primary: Color,
    pub secondary: Color,
}

impl ColorPair {
    #[inline]
    pub const fn new(primary: Color, secondary: Color) -> Self {
        Self { primary, secondary }
    }
}

/// Ordered, immutable list of color pairs.
///
/// Insertion order defines the cyclic successor relation the fade walks on
/// each activation. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Palette {
    pairs: Vec<ColorPair>,
}

impl Palette {
    /// # Panics
    ///
    /// Panics if fewer than two pairs are supplied; a cycle needs at least
    /// two entries to be visible.
    pub fn new(pairs: Vec<ColorPair>) -> Self {
        assert!(pairs.len() >= 2, "palette needs at least two color pairs");
        Self { pairs }
    }

    /// The stock six-pair palette.
    pub fn builtin() -> Self {
        let hsl = |h, s, l| Color::from_hsl(h, s, l);
        Self::new(vec![
            ColorPair::new(hsl(13.0, 0.91, 0.59), hsl(187.0, 1.00, 0.60)), // red / blue
            ColorPair::new(hsl(280.0, 1.00, 0.65), hsl(65.0, 1.00, 0.55)), // purple / lime
            ColorPair::new(hsl(340.0, 1.00, 0.60), hsl(160.0, 1.00, 0.50)), // magenta / teal
            ColorPair::new(hsl(25.0, 1.00, 0.60), hsl(205.0, 1.00, 0.65)), // orange / sky
            ColorPair::new(hsl(300.0, 0.90, 0.65), hsl(120.0, 0.90, 0.50)), // pink / green
            ColorPair::new(hsl(240.0, 1.00, 0.70), hsl(60.0, 1.00, 0.60)), // electric / yellow
        ])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pair at `index`; indices come from a fade walking this palette.
    #[inline]
    pub fn pair(&self, index: usize) -> ColorPair {
        self.pairs[index]
    }

    /// Next index in the cycle.
    #[inline]
    pub fn successor(&self, index: usize) -> usize {
        (index + 1) % self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_is_cyclic() {
        let p = Palette::builtin();
        assert_eq!(p.len(), 6);
        assert_eq!(p.successor(0), 1);
        assert_eq!(p.successor(4), 5);
        assert_eq!(p.successor(5), 0);
    }

    #[test]
    fn walking_len_steps_returns_to_start() {
        let p = Palette::builtin();
        let mut i = 0;
        for _ in 0..p.len() {
            i = p.successor(i);
        }
        assert_eq!(i, 0);
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn rejects_single_entry() {
        let c = Color::from_hsl(0.0, 1.0, 0.5);
        Palette::new(vec![ColorPair::new(c, c)]);
    }
}
