//! Card element variants: images and text placed on a card.

use crate::fonts;
use crate::transform::Transform;
use peniko::Color;
use uuid::Uuid;

/// Unique identifier for card elements.
pub type ElementId = Uuid;

/// Placeholder rendered when an element's backing image cannot be
/// resolved from the blob store. A minimal 1x1 transparent PNG.
pub const ERROR_IMAGE: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15,
    0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
    0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82, // IEND
];

/// An image placed on a card.
#[derive(Debug, Clone)]
pub struct ImageElement {
    id: ElementId,
    pub transform: Transform,
    /// Index into the frame shape catalog selecting a clip mask.
    pub frame_index: Option<usize>,
    /// Blob-store identifier for the backing image bytes.
    pub image_filename: Option<String>,
    /// Cached image bytes. Never persisted with the card record; rebuilt
    /// from `image_filename` on load.
    image: Option<Vec<u8>>,
}

impl ImageElement {
    pub fn new(transform: Transform, image: Option<Vec<u8>>, image_filename: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            transform,
            frame_index: None,
            image_filename,
            image,
        }
    }

    /// Rebuild an element from its persisted record. Ids are not stored,
    /// so a restored element gets a fresh one.
    pub(crate) fn restored(
        transform: Transform,
        frame_index: Option<usize>,
        image_filename: Option<String>,
        image: Option<Vec<u8>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            transform,
            frame_index,
            image_filename,
            image,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The cached image bytes, or [`ERROR_IMAGE`] when the blob is
    /// missing or was never stored.
    pub fn image(&self) -> &[u8] {
        self.image.as_deref().unwrap_or(ERROR_IMAGE)
    }

    /// Whether real image bytes are cached (as opposed to the placeholder).
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// A run of styled text placed on a card.
#[derive(Debug, Clone)]
pub struct TextElement {
    id: ElementId,
    pub transform: Transform,
    pub text: String,
    pub text_color: Color,
    /// Name from the static font catalog.
    pub text_font: String,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            transform: Transform::default(),
            text: text.into(),
            text_color: Color::new([0.0, 0.0, 0.0, 1.0]),
            text_font: fonts::DEFAULT_FONT.to_string(),
        }
    }

    pub(crate) fn restored(
        transform: Transform,
        text: String,
        text_color: Color,
        text_font: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            transform,
            text,
            text_color,
            text_font,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }
}

/// An element on a card: either an image or a run of text.
#[derive(Debug, Clone)]
pub enum CardElement {
    Image(ImageElement),
    Text(TextElement),
}

impl CardElement {
    pub fn id(&self) -> ElementId {
        match self {
            CardElement::Image(e) => e.id(),
            CardElement::Text(e) => e.id(),
        }
    }

    pub fn transform(&self) -> &Transform {
        match self {
            CardElement::Image(e) => &e.transform,
            CardElement::Text(e) => &e.transform,
        }
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        match self {
            CardElement::Image(e) => &mut e.transform,
            CardElement::Text(e) => &mut e.transform,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, CardElement::Image(_))
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            CardElement::Image(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut ImageElement> {
        match self {
            CardElement::Image(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            CardElement::Text(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextElement> {
        match self {
            CardElement::Text(e) => Some(e),
            _ => None,
        }
    }
}
