use crate::constants::POINTER_OFF_SURFACE;
use glam::Vec2;

/// Last known pointer position in surface-local backing pixels.
///
/// Written by the pointer listeners, read once per frame by the scene. When
/// the pointer has not entered the page, or has left it, the position is the
/// off-surface sentinel and no wake force is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

impl PointerState {
    pub const OFF_SURFACE: Vec2 = Vec2::splat(POINTER_OFF_SURFACE);

    #[inline]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }

    #[inline]
    pub fn off_surface() -> Self {
        Self {
            position: Self::OFF_SURFACE,
        }
    }

    #[inline]
    pub fn is_off_surface(&self) -> bool {
        self.position == Self::OFF_SURFACE || !self.position.is_finite()
    }

    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        point.distance(self.position)
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::off_surface()
    }
}
