//! Frame shape catalog: clip masks selectable by an image element's
//! `frame_index`.

use kurbo::{BezPath, Circle, Point, Rect, RoundedRect, Shape as KurboShape};

/// Cubic approximation constant for quarter-circle arcs.
const KAPPA: f64 = 0.552_284_749_8;

/// Corner radius for the rounded rectangle frame, in card-space units.
const ROUNDED_CORNER_RADIUS: f64 = 25.0;

/// The clip-mask shapes an image element can be framed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Circle,
    Rectangle,
    RoundedRectangle,
    Heart,
    Lens,
    Chevron,
    Cone,
    Cloud,
    Diamond,
    Hexagon,
    Octagon,
}

impl Frame {
    /// Every frame, in catalog order. `frame_index` indexes into this.
    pub const ALL: [Frame; 11] = [
        Frame::Circle,
        Frame::Rectangle,
        Frame::RoundedRectangle,
        Frame::Heart,
        Frame::Lens,
        Frame::Chevron,
        Frame::Cone,
        Frame::Cloud,
        Frame::Diamond,
        Frame::Hexagon,
        Frame::Octagon,
    ];

    /// Look up a frame by catalog index.
    pub fn from_index(index: usize) -> Option<Frame> {
        Self::ALL.get(index).copied()
    }

    /// Position of this frame in the catalog.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Clip path for this frame, filling `rect`.
    pub fn path(self, rect: Rect) -> BezPath {
        match self {
            Frame::Circle => inscribed_circle(rect),
            Frame::Rectangle => rect.to_path(0.1),
            Frame::RoundedRectangle => {
                let radius = ROUNDED_CORNER_RADIUS
                    .min(rect.width() / 2.0)
                    .min(rect.height() / 2.0);
                RoundedRect::from_rect(rect, radius).to_path(0.1)
            }
            Frame::Heart => heart(rect),
            Frame::Lens => lens(rect),
            Frame::Chevron => chevron(rect),
            Frame::Cone => cone(rect),
            Frame::Cloud => cloud(rect),
            Frame::Diamond => diamond(rect),
            Frame::Hexagon => polygon(rect, 6),
            Frame::Octagon => polygon(rect, 8),
        }
    }
}

/// Point at fractional coordinates of `rect`.
fn at(rect: Rect, fx: f64, fy: f64) -> Point {
    Point::new(rect.x0 + rect.width() * fx, rect.y0 + rect.height() * fy)
}

fn inscribed_circle(rect: Rect) -> BezPath {
    let radius = rect.width().min(rect.height()) / 2.0;
    Circle::new(rect.center(), radius).to_path(0.1)
}

fn heart(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(at(rect, 0.5, 1.0));
    path.curve_to(at(rect, 0.2, 0.85), at(rect, 0.0, 0.6), at(rect, 0.0, 0.35));
    path.curve_to(at(rect, 0.0, 0.1), at(rect, 0.15, 0.0), at(rect, 0.3, 0.0));
    path.curve_to(at(rect, 0.4, 0.0), at(rect, 0.5, 0.1), at(rect, 0.5, 0.2));
    path.curve_to(at(rect, 0.5, 0.1), at(rect, 0.6, 0.0), at(rect, 0.7, 0.0));
    path.curve_to(at(rect, 0.85, 0.0), at(rect, 1.0, 0.1), at(rect, 1.0, 0.35));
    path.curve_to(at(rect, 1.0, 0.6), at(rect, 0.8, 0.85), at(rect, 0.5, 1.0));
    path.close_path();
    path
}

fn lens(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(at(rect, 0.0, 0.5));
    path.quad_to(at(rect, 0.5, 0.0), at(rect, 1.0, 0.5));
    path.quad_to(at(rect, 0.5, 1.0), at(rect, 0.0, 0.5));
    path.close_path();
    path
}

fn chevron(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(at(rect, 0.0, 0.0));
    path.line_to(at(rect, 0.75, 0.0));
    path.line_to(at(rect, 1.0, 0.5));
    path.line_to(at(rect, 0.75, 1.0));
    path.line_to(at(rect, 0.0, 1.0));
    path.line_to(at(rect, 0.25, 0.5));
    path.close_path();
    path
}

/// Semicircle on top, tapering to the bottom center. Ice cream, roughly.
fn cone(rect: Rect) -> BezPath {
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0;
    let mut path = BezPath::new();
    path.move_to(Point::new(center.x + radius, center.y));
    path.curve_to(
        Point::new(center.x + radius, center.y - KAPPA * radius),
        Point::new(center.x + KAPPA * radius, center.y - radius),
        Point::new(center.x, center.y - radius),
    );
    path.curve_to(
        Point::new(center.x - KAPPA * radius, center.y - radius),
        Point::new(center.x - radius, center.y - KAPPA * radius),
        Point::new(center.x - radius, center.y),
    );
    path.line_to(Point::new(center.x, rect.y1));
    path.close_path();
    path
}

fn cloud(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(at(rect, 0.2, 0.2));
    path.quad_to(at(rect, 0.32, -0.12), at(rect, 0.6, 0.1));
    path.quad_to(at(rect, 0.8, 0.05), at(rect, 0.85, 0.2));
    path.quad_to(at(rect, 1.1, 0.35), at(rect, 0.9, 0.6));
    path.quad_to(at(rect, 1.0, 0.95), at(rect, 0.65, 0.9));
    path.quad_to(at(rect, 0.2, 1.1), at(rect, 0.15, 0.7));
    path.quad_to(at(rect, -0.15, 0.45), at(rect, 0.2, 0.2));
    path.close_path();
    path
}

fn diamond(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(at(rect, 0.5, 0.0));
    path.line_to(at(rect, 1.0, 0.5));
    path.line_to(at(rect, 0.5, 1.0));
    path.line_to(at(rect, 0.0, 0.5));
    path.close_path();
    path
}

fn polygon(rect: Rect, sides: usize) -> BezPath {
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0;
    let step = std::f64::consts::TAU / sides as f64;
    let mut path = BezPath::new();
    for side in 0..sides {
        let angle = step * side as f64;
        let point = Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
        if side == 0 {
            path.move_to(point);
        } else {
            path.line_to(point);
        }
    }
    path.close_path();
    path
}
