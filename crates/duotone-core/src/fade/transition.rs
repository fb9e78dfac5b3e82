use crate::paint::Palette;

/// Crossfade state machine over the palette's cyclic successor relation.
///
/// The two states are derived rather than stored:
/// - idle: `current == target`; the backdrop shows `current` alone
/// - transitioning: `current != target`; the backdrop blends toward
///   `target` with weight `progress`
///
/// `current` only advances when a fade completes, so `progress == 0` always
/// means "showing exactly `current`".
#[derive(Debug, Clone, Default)]
pub struct ColorFade {
    current: usize,
    target: usize,
    progress: f32,
}

impl ColorFade {
    /// Per-tick progress increment.
    ///
    /// Frame-coupled rather than wall-clock-based: a full crossfade takes
    /// ~25 frames regardless of the refresh interval, so the animation
    /// speed tracks the display refresh rate. Known limitation, kept for
    /// simplicity.
    pub const STEP: f32 = 0.04;

    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Crossfade weight in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.current != self.target
    }

    /// Starts (or restarts) a fade toward the successor of the pair
    /// currently displayed.
    ///
    /// Activating mid-flight abandons the running fade: `current` has not
    /// advanced yet, so the target stays the same successor and only
    /// `progress` resets. The caller's tick loop keeps running unchanged.
    pub fn activate(&mut self, palette: &Palette) {
        self.target = palette.successor(self.current);
        self.progress = 0.0;
        log::debug!("fade: {} -> {}", self.current, self.target);
    }

    /// Advances the fade by one frame; no-op while idle.
    ///
    /// On reaching full progress the fade settles: `current` becomes
    /// `target` and subsequent ticks do nothing until the next activation.
    pub fn tick(&mut self) {
        if !self.is_transitioning() {
            return;
        }

        self.progress = (self.progress + Self::STEP).min(1.0);
        if self.progress >= 1.0 {
            self.current = self.target;
            log::debug!("fade: settled on {}", self.current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Palette;

    fn run_to_completion(fade: &mut ColorFade) {
        while fade.is_transitioning() {
            fade.tick();
        }
    }

    // ── activation ────────────────────────────────────────────────────────

    #[test]
    fn starts_idle_at_zero() {
        let fade = ColorFade::new();
        assert_eq!(fade.current(), 0);
        assert_eq!(fade.target(), 0);
        assert_eq!(fade.progress(), 0.0);
        assert!(!fade.is_transitioning());
    }

    #[test]
    fn activate_targets_successor() {
        let palette = Palette::builtin();
        let mut fade = ColorFade::new();

        fade.activate(&palette);
        assert_eq!(fade.current(), 0);
        assert_eq!(fade.target(), 1);
        assert_eq!(fade.progress(), 0.0);
        assert!(fade.is_transitioning());
    }

    #[test]
    fn activate_mid_flight_restarts_in_place() {
        let palette = Palette::builtin();
        let mut fade = ColorFade::new();

        fade.activate(&palette);
        for _ in 0..10 {
            fade.tick();
        }
        assert!(fade.progress() > 0.0);

        // `current` has not advanced, so the target is unchanged and only
        // progress resets.
        fade.activate(&palette);
        assert_eq!(fade.target(), 1);
        assert_eq!(fade.progress(), 0.0);
        assert!(fade.is_transitioning());
    }

    // ── ticking ───────────────────────────────────────────────────────────

    #[test]
    fn tick_is_noop_while_idle() {
        let mut fade = ColorFade::new();
        fade.tick();
        assert_eq!(fade.progress(), 0.0);
        assert_eq!(fade.current(), 0);
    }

    #[test]
    fn progress_rises_monotonically_and_clamps() {
        let palette = Palette::builtin();
        let mut fade = ColorFade::new();
        fade.activate(&palette);

        let mut prev = fade.progress();
        while fade.is_transitioning() {
            fade.tick();
            assert!(fade.progress() > prev);
            prev = fade.progress();
        }
        assert_eq!(fade.progress(), 1.0);
        assert_eq!(fade.current(), 1);

        // Settled: a further tick changes nothing.
        fade.tick();
        assert_eq!(fade.progress(), 1.0);
        assert_eq!(fade.current(), 1);
    }

    #[test]
    fn completes_in_twenty_five_ticks() {
        let palette = Palette::builtin();
        let mut fade = ColorFade::new();
        fade.activate(&palette);

        for _ in 0..24 {
            fade.tick();
        }
        assert!(fade.is_transitioning());
        assert!(fade.progress() < 1.0);

        fade.tick();
        assert_eq!(fade.progress(), 1.0);
        assert_eq!(fade.current(), 1);
        assert!(!fade.is_transitioning());
    }

    // ── cycling ───────────────────────────────────────────────────────────

    #[test]
    fn full_cycle_returns_to_first_pair() {
        let palette = Palette::builtin();
        let mut fade = ColorFade::new();

        for step in 1..=palette.len() {
            fade.activate(&palette);
            run_to_completion(&mut fade);
            assert_eq!(fade.current(), step % palette.len());
        }
        assert_eq!(fade.current(), 0);
    }
}
