//! Element transform: size, rotation, and position in card space.

use crate::settings::DEFAULT_ELEMENT_SIZE;
use kurbo::{Point, Rect, Size, Vec2};

/// Placement of a card element in card-space units.
///
/// `offset` is the displacement of the element center from the card
/// center; `rotation` is in degrees. A fresh transform has the default
/// element size so new elements are always visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub size: Size,
    pub rotation: f64,
    pub offset: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            size: DEFAULT_ELEMENT_SIZE,
            rotation: 0.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Transform {
    /// A default transform displaced by `offset` from the card center.
    pub fn with_offset(offset: Vec2) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Axis-aligned bounds in card space, before rotation, with the
    /// origin at the card center.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(Point::new(self.offset.x, self.offset.y), self.size)
    }
}
