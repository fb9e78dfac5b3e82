use crate::coords::{Triangle, Vec2, Viewport};

/// Zone half-width as a fraction of the surface width (15% per side, 30%
/// of the width total).
pub const ZONE_HALF_WIDTH: f32 = 0.15;

/// Which interactive zones a point falls in.
///
/// Both flags are evaluated independently; for any positive viewport the
/// zones only coincide at the shared center point.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HitReport {
    pub top: bool,
    pub bottom: bool,
}

impl HitReport {
    #[inline]
    pub fn any(self) -> bool {
        self.top || self.bottom
    }
}

/// The two clickable zone triangles, derived from the viewport.
///
/// Both zones share their apex at the surface center; the top zone's base
/// sits on the top edge, the bottom zone's on the bottom edge. Any positive
/// viewport yields non-degenerate triangles, which is what makes the
/// epsilon-free containment test in [`Triangle::contains`] safe here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HitZones {
    top: Triangle,
    bottom: Triangle,
}

impl HitZones {
    pub fn new(viewport: Viewport) -> Self {
        let c = viewport.center();
        let ow = viewport.width * ZONE_HALF_WIDTH;

        Self {
            top: Triangle::new(c, Vec2::new(c.x - ow, 0.0), Vec2::new(c.x + ow, 0.0)),
            bottom: Triangle::new(
                c,
                Vec2::new(c.x - ow, viewport.height),
                Vec2::new(c.x + ow, viewport.height),
            ),
        }
    }

    /// Top (black) zone triangle; also the geometry of its visible overlay.
    #[inline]
    pub fn top(&self) -> Triangle {
        self.top
    }

    /// Bottom (white) zone triangle; also the geometry of its visible overlay.
    #[inline]
    pub fn bottom(&self) -> Triangle {
        self.bottom
    }

    /// Tests both zones independently.
    pub fn test(&self, p: Vec2) -> HitReport {
        HitReport {
            top: self.top.contains(p),
            bottom: self.bottom.contains(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> HitZones {
        HitZones::new(Viewport::new(1000.0, 800.0))
    }

    // ── membership ────────────────────────────────────────────────────────

    #[test]
    fn top_zone_near_top_edge() {
        let hit = zones().test(Vec2::new(500.0, 10.0));
        assert!(hit.top);
        assert!(!hit.bottom);
        assert!(hit.any());
    }

    #[test]
    fn bottom_zone_near_bottom_edge() {
        let hit = zones().test(Vec2::new(500.0, 790.0));
        assert!(!hit.top);
        assert!(hit.bottom);
    }

    #[test]
    fn zone_base_corners_count_as_inside() {
        // ow = 150 for a 1000-wide surface.
        let z = zones();
        assert!(z.test(Vec2::new(350.0, 0.0)).top);
        assert!(z.test(Vec2::new(650.0, 0.0)).top);
        assert!(z.test(Vec2::new(350.0, 800.0)).bottom);
        assert!(z.test(Vec2::new(650.0, 800.0)).bottom);
    }

    #[test]
    fn outside_both_zones() {
        let z = zones();
        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(999.0, 1.0),
            Vec2::new(10.0, 400.0),
            Vec2::new(990.0, 400.0),
            Vec2::new(340.0, 0.0),
            Vec2::new(660.0, 800.0),
            Vec2::new(200.0, 700.0),
            Vec2::new(800.0, 100.0),
        ] {
            let hit = z.test(p);
            assert!(!hit.any(), "{p:?} should miss both zones");
        }
    }

    // ── exclusivity ───────────────────────────────────────────────────────

    #[test]
    fn zones_meet_only_at_center() {
        let z = zones();
        let center = Vec2::new(500.0, 400.0);
        let hit = z.test(center);
        assert!(hit.top && hit.bottom);

        // Sample a coarse grid; no other point reports both.
        for xi in 0..=20 {
            for yi in 0..=16 {
                let p = Vec2::new(xi as f32 * 50.0, yi as f32 * 50.0);
                if p == center {
                    continue;
                }
                let h = z.test(p);
                assert!(!(h.top && h.bottom), "{p:?} reported both zones");
            }
        }
    }
}
