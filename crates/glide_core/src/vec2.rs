//! Geometry carriers shared across the workspace.

/// 2D vector
///
/// Doubles as a point on a curve (`x` = time in milliseconds, `y` = value)
/// and as a control-point offset relative to an anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
