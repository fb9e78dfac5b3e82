//! Deterministic scene composition for the backdrop.
//!
//! [`compose`] turns the current state into a draw stream; it is a pure
//! function of its arguments, so two equal states always produce
//! pixel-equivalent scenes.

use crate::coords::{Triangle, Vec2, Viewport};
use crate::fade::{ColorFade, smoothstep};
use crate::hit::HitZones;
use crate::paint::{Color, ColorPair, Palette};
use crate::scene::{DrawList, Layer};

/// Overlay alpha while the pointer is over a zone.
const HOVER_ALPHA: f32 = 0.8;

/// Paint layers, back to front.
pub const BASE: Layer = Layer(0);
pub const CROSSFADE: Layer = Layer(1);
pub const TOP_ZONE: Layer = Layer(2);
pub const BOTTOM_ZONE: Layer = Layer(3);

/// Transient hover state for the two zones.
///
/// Overwritten from the latest pointer position on every move and cleared
/// when the pointer leaves the surface; never persisted.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HoverFlags {
    pub top: bool,
    pub bottom: bool,
}

/// Records the full backdrop for one frame into `list`.
///
/// Paint order is the contract:
/// 1. four center-to-corner wedges in the current pair's colors, opaque
/// 2. the same wedges in the target pair's colors at `smoothstep(progress)`
///    coverage — present only while a fade is in flight
/// 3. the top zone overlay in black
/// 4. the bottom zone overlay in white
///
/// The list is cleared first; the surface itself is cleared by the caller
/// before the stream is drawn.
pub fn compose(
    list: &mut DrawList,
    viewport: Viewport,
    palette: &Palette,
    fade: &ColorFade,
    hover: HoverFlags,
) {
    debug_assert!(viewport.is_valid(), "compose requires a positive, finite viewport");

    list.clear();

    push_wedges(list, BASE, viewport, palette.pair(fade.current()), 1.0);

    // At progress 0 the backdrop shows `current` alone; at 1 the fade has
    // already settled and `current` equals the old target.
    let t = fade.progress();
    if t > 0.0 && t < 1.0 {
        push_wedges(list, CROSSFADE, viewport, palette.pair(fade.target()), smoothstep(t));
    }

    let zones = HitZones::new(viewport);
    let top_alpha = if hover.top { HOVER_ALPHA } else { 1.0 };
    let bottom_alpha = if hover.bottom { HOVER_ALPHA } else { 1.0 };
    list.push_triangle(TOP_ZONE, zones.top(), Color::BLACK.with_alpha(top_alpha));
    list.push_triangle(BOTTOM_ZONE, zones.bottom(), Color::WHITE.with_alpha(bottom_alpha));
}

/// Pushes the four wedges cut by the two diagonals through the center:
/// west and south carry the pair's primary color, north and east its
/// secondary.
fn push_wedges(list: &mut DrawList, layer: Layer, viewport: Viewport, pair: ColorPair, alpha: f32) {
    let c = viewport.center();
    let tl = Vec2::new(0.0, 0.0);
    let tr = Vec2::new(viewport.width, 0.0);
    let br = Vec2::new(viewport.width, viewport.height);
    let bl = Vec2::new(0.0, viewport.height);

    let primary = pair.primary.with_alpha(alpha);
    let secondary = pair.secondary.with_alpha(alpha);

    list.push_triangle(layer, Triangle::new(c, bl, tl), primary); // west
    list.push_triangle(layer, Triangle::new(c, br, bl), primary); // south
    list.push_triangle(layer, Triangle::new(c, tl, tr), secondary); // north
    list.push_triangle(layer, Triangle::new(c, tr, br), secondary); // east
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 800.0);

    fn composed(fade: &ColorFade, hover: HoverFlags) -> DrawList {
        let mut list = DrawList::new();
        compose(&mut list, VIEWPORT, &Palette::builtin(), fade, hover);
        list
    }

    fn layers(list: &mut DrawList) -> Vec<u8> {
        list.iter_in_paint_order()
            .map(|item| item.key.layer.0)
            .collect()
    }

    fn alpha_of(list: &DrawList, layer: Layer) -> Vec<f32> {
        list.items()
            .iter()
            .filter(|item| item.key.layer == layer)
            .map(|item| {
                let DrawCmd::Triangle(cmd) = item.cmd;
                cmd.color.to_straight().3
            })
            .collect()
    }

    // ── at rest ───────────────────────────────────────────────────────────

    #[test]
    fn idle_scene_has_no_crossfade_layer() {
        let mut list = composed(&ColorFade::new(), HoverFlags::default());
        assert_eq!(list.len(), 6);
        assert_eq!(layers(&mut list), vec![0, 0, 0, 0, 2, 3]);
    }

    #[test]
    fn idle_wedges_use_current_pair_opaque() {
        let palette = Palette::builtin();
        let list = composed(&ColorFade::new(), HoverFlags::default());
        let pair = palette.pair(0);

        let base: Vec<Color> = list
            .items()
            .iter()
            .filter(|item| item.key.layer == BASE)
            .map(|item| {
                let DrawCmd::Triangle(cmd) = item.cmd;
                cmd.color
            })
            .collect();

        assert_eq!(base, vec![pair.primary, pair.primary, pair.secondary, pair.secondary]);
    }

    // ── mid-flight ────────────────────────────────────────────────────────

    #[test]
    fn transitioning_scene_blends_target_with_eased_alpha() {
        let palette = Palette::builtin();
        let mut fade = ColorFade::new();
        fade.activate(&palette);
        for _ in 0..10 {
            fade.tick();
        }
        let t = fade.progress();
        assert!(t > 0.0 && t < 1.0);

        let mut list = composed(&fade, HoverFlags::default());
        assert_eq!(list.len(), 10);
        assert_eq!(layers(&mut list), vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 3]);

        for a in alpha_of(&list, CROSSFADE) {
            assert!((a - smoothstep(t)).abs() < 1e-5);
        }
    }

    // ── settled ───────────────────────────────────────────────────────────

    #[test]
    fn settled_fade_renders_like_rest_at_target() {
        // A click in the top zone followed by a full 25-tick fade must
        // produce a scene indistinguishable from rest on pair 1: no
        // crossfade term, base wedges in pair 1's colors at full opacity.
        let palette = Palette::builtin();
        let zones = HitZones::new(VIEWPORT);
        assert!(zones.test(Vec2::new(500.0, 10.0)).top);

        let mut fade = ColorFade::new();
        fade.activate(&palette);
        assert_eq!((fade.target(), fade.progress()), (1, 0.0));

        for _ in 0..25 {
            fade.tick();
        }
        assert_eq!((fade.current(), fade.progress()), (1, 1.0));

        let mut list = composed(&fade, HoverFlags::default());
        assert_eq!(layers(&mut list), vec![0, 0, 0, 0, 2, 3]);

        let pair = palette.pair(1);
        let base: Vec<Color> = list
            .items()
            .iter()
            .filter(|item| item.key.layer == BASE)
            .map(|item| {
                let DrawCmd::Triangle(cmd) = item.cmd;
                cmd.color
            })
            .collect();
        assert_eq!(base, vec![pair.primary, pair.primary, pair.secondary, pair.secondary]);
    }

    // ── hover ─────────────────────────────────────────────────────────────

    #[test]
    fn hovered_bottom_zone_dims_only_that_overlay() {
        let hover = HoverFlags { top: false, bottom: true };

        // Independent of transition progress.
        let palette = Palette::builtin();
        let mut mid = ColorFade::new();
        mid.activate(&palette);
        mid.tick();

        for fade in [ColorFade::new(), mid] {
            let list = composed(&fade, hover);
            assert_eq!(alpha_of(&list, TOP_ZONE), vec![1.0]);
            assert_eq!(alpha_of(&list, BOTTOM_ZONE), vec![0.8]);
        }
    }

    #[test]
    fn unhovered_overlays_are_opaque() {
        let list = composed(&ColorFade::new(), HoverFlags::default());
        assert_eq!(alpha_of(&list, TOP_ZONE), vec![1.0]);
        assert_eq!(alpha_of(&list, BOTTOM_ZONE), vec![1.0]);
    }

    #[test]
    fn overlay_geometry_matches_hit_zones() {
        let zones = HitZones::new(VIEWPORT);
        let list = composed(&ColorFade::new(), HoverFlags::default());

        let tris: Vec<Triangle> = list
            .items()
            .iter()
            .filter(|item| item.key.layer >= TOP_ZONE)
            .map(|item| {
                let DrawCmd::Triangle(cmd) = item.cmd;
                cmd.tri
            })
            .collect();

        assert_eq!(tris, vec![zones.top(), zones.bottom()]);
    }
}
