//! Card geometry settings and coordinate-space conversions.
//!
//! Cards live in a fixed 1300x2000 "card space"; every rendering surface
//! (editor canvas, thumbnail, carousel, share export) maps into it through
//! the functions here.

use kurbo::{Point, Rect, Size, Vec2};

/// Canonical card size in card-space units.
pub const CARD_SIZE: Size = Size::new(1300.0, 2000.0);

/// Thumbnail size used by card list previews.
pub const THUMBNAIL_SIZE: Size = Size::new(150.0, 250.0);

/// Default size for newly created card elements.
pub const DEFAULT_ELEMENT_SIZE: Size = Size::new(800.0, 800.0);

/// Smallest initial size for an ingested image element.
pub const MIN_IMAGE_SIZE: Size = Size::new(300.0, 200.0);

/// Largest initial size for an ingested image element.
pub const MAX_IMAGE_SIZE: Size = Size::new(1000.0, 1500.0);

/// The largest rectangle with the card aspect ratio that fits within
/// `available`.
///
/// Returns [`Size::ZERO`] for degenerate (zero or negative) input.
pub fn calculate_size(available: Size) -> Size {
    if available.width <= 0.0 || available.height <= 0.0 {
        return Size::ZERO;
    }
    let scale = (available.width / CARD_SIZE.width).min(available.height / CARD_SIZE.height);
    Size::new(CARD_SIZE.width * scale, CARD_SIZE.height * scale)
}

/// Scale factor from card space to the rendered size fitting `available`.
pub fn calculate_scale(available: Size) -> f64 {
    calculate_size(available).width / CARD_SIZE.width
}

/// Map a raw screen location to a card-space offset from the card center.
///
/// `rendered_frame` is the on-screen frame the card is centered within;
/// the card itself occupies `calculate_size(rendered_frame.size())` of it.
/// Returns [`Vec2::ZERO`] when the frame is degenerate.
pub fn calculate_drop_offset(rendered_frame: Rect, location: Point) -> Vec2 {
    let size = calculate_size(rendered_frame.size());
    if size.width <= 0.0 || size.height <= 0.0 {
        return Vec2::ZERO;
    }

    // Margins between the frame and the centered card rectangle.
    let left_margin = (rendered_frame.width() - size.width) * 0.5 + rendered_frame.x0;
    let top_margin = (rendered_frame.height() - size.height) * 0.5 + rendered_frame.y0;

    // Location relative to the rendered card, rescaled into card space.
    let card_x = (location.x - left_margin) / size.width * CARD_SIZE.width;
    let card_y = (location.y - top_margin) / size.height * CARD_SIZE.height;

    // Re-center so (0, 0) is the middle of the card.
    Vec2::new(
        card_x - CARD_SIZE.width * 0.5,
        card_y - CARD_SIZE.height * 0.5,
    )
}

/// Initial element size for an image with the given pixel dimensions.
///
/// Starts from [`DEFAULT_ELEMENT_SIZE`], clamps the dominant axis to the
/// min/max image sizes, and scales the other axis by the source aspect
/// ratio. Returns [`Size::ZERO`] for degenerate input.
pub fn initial_image_size(pixel_size: Size) -> Size {
    if pixel_size.width <= 0.0 || pixel_size.height <= 0.0 {
        return Size::ZERO;
    }
    if pixel_size.width >= pixel_size.height {
        let width = DEFAULT_ELEMENT_SIZE
            .width
            .max(MIN_IMAGE_SIZE.width)
            .min(MAX_IMAGE_SIZE.width);
        Size::new(width, pixel_size.height * (width / pixel_size.width))
    } else {
        let height = DEFAULT_ELEMENT_SIZE
            .height
            .max(MIN_IMAGE_SIZE.height)
            .min(MAX_IMAGE_SIZE.height);
        Size::new(pixel_size.width * (height / pixel_size.height), height)
    }
}
