use crate::coords::Triangle;
use crate::paint::Color;

/// Solid triangle draw payload.
///
/// The color is premultiplied; translucent layers (crossfade, hovered
/// overlays) are expressed purely through the color's coverage, so no draw
/// command can leak blend state into the next one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleCmd {
    pub tri: Triangle,
    pub color: Color,
}

impl TriangleCmd {
    #[inline]
    pub const fn new(tri: Triangle, color: Color) -> Self {
        Self { tri, color }
    }
}

/// Renderer-agnostic draw command.
///
/// The backdrop is composed entirely of solid triangles. Extending the
/// scene means adding a variant here plus a matching renderer under the
/// engine's `render::shapes`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    Triangle(TriangleCmd),
}
