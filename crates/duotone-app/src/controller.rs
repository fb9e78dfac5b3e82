use duotone_core::backdrop::{self, HoverFlags};
use duotone_core::coords::Vec2;
use duotone_core::fade::ColorFade;
use duotone_core::hit::{HitReport, HitZones};
use duotone_core::paint::{Color, Palette};
use duotone_core::scene::DrawList;

use duotone_engine::core::{App, AppControl, FrameCtx, InputResponse, WindowCtx};
use duotone_engine::input::{InputEvent, MouseButton, MouseButtonState};
use duotone_engine::render::shapes::TriangleRenderer;
use duotone_engine::window::CursorIcon;

/// Owns all mutable backdrop state and coordinates input with rendering.
///
/// Everything lives in this one struct — palette index and fade progress,
/// hover flags, the per-frame draw list, and the GPU renderer — so there
/// is a single place where state changes and a single reader of it.
pub struct Backdrop {
    palette: Palette,
    fade: ColorFade,
    hover: HoverFlags,
    scene: DrawList,
    renderer: TriangleRenderer,
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            palette: Palette::builtin(),
            fade: ColorFade::new(),
            hover: HoverFlags::default(),
            scene: DrawList::new(),
            renderer: TriangleRenderer::new(),
        }
    }

    fn hit_at(&self, window: &WindowCtx<'_>, x: f32, y: f32) -> HitReport {
        HitZones::new(window.viewport()).test(Vec2::new(x, y))
    }
}

impl App for Backdrop {
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> InputResponse {
        match event {
            InputEvent::PointerMoved(ev) => {
                let hit = self.hit_at(window, ev.x, ev.y);
                window.set_cursor(if hit.any() {
                    CursorIcon::Pointer
                } else {
                    CursorIcon::Default
                });

                let hover = HoverFlags {
                    top: hit.top,
                    bottom: hit.bottom,
                };
                if hover == self.hover {
                    return InputResponse::Ignored;
                }
                self.hover = hover;
                InputResponse::Redraw
            }

            InputEvent::PointerButton(ev)
                if ev.button == MouseButton::Left && ev.state == MouseButtonState::Released =>
            {
                if self.hit_at(window, ev.x, ev.y).any() {
                    // Kicks (or re-kicks) the tick loop via the redraw below.
                    self.fade.activate(&self.palette);
                    InputResponse::Redraw
                } else {
                    InputResponse::Ignored
                }
            }

            InputEvent::PointerLeft => {
                if self.hover == HoverFlags::default() {
                    return InputResponse::Ignored;
                }
                self.hover = HoverFlags::default();
                InputResponse::Redraw
            }

            _ => InputResponse::Ignored,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.fade.tick();

        let viewport = ctx.window.viewport();
        backdrop::compose(&mut self.scene, viewport, &self.palette, &self.fade, self.hover);

        log::trace!(
            "frame {}: fade {:.2}, {} items",
            ctx.time.frame_index,
            self.fade.progress(),
            self.scene.len()
        );

        let control = ctx.render(Color::BLACK, |rctx, target| {
            self.renderer.render(rctx, target, &mut self.scene);
        });

        // Self-rescheduling tick loop: exactly one follow-up frame while
        // the fade is in flight, none once it settles.
        if self.fade.is_transitioning() {
            ctx.window.request_redraw();
        }

        control
    }
}
