//! Card record codec: the JSON document layout for persisted cards.
//!
//! Elements are split by variant into two arrays (`imageElements`,
//! `textElements`) and concatenated images-first on decode, so only
//! intra-variant paint order survives a save/load round trip. The layout
//! stays compatible with records written by earlier versions of the app.

use super::{CardStorage, StorageError, StorageResult};
use crate::card::Card;
use crate::color::ColorComponents;
use crate::element::{CardElement, ImageElement, TextElement};
use crate::transform::Transform;
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File extension for persisted card records.
pub const CARD_EXTENSION: &str = "card";

/// Legacy sentinel some stored records use for an absent image
/// identifier.
const NO_IMAGE: &str = "none";

/// Width/height pair; also how offsets are stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SizeRecord {
    width: f64,
    height: f64,
}

impl From<Size> for SizeRecord {
    fn from(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl From<Vec2> for SizeRecord {
    fn from(offset: Vec2) -> Self {
        Self {
            width: offset.x,
            height: offset.y,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct TransformRecord {
    size: SizeRecord,
    /// Degrees.
    rotation: f64,
    offset: SizeRecord,
}

impl From<&Transform> for TransformRecord {
    fn from(transform: &Transform) -> Self {
        Self {
            size: transform.size.into(),
            rotation: transform.rotation,
            offset: transform.offset.into(),
        }
    }
}

impl From<TransformRecord> for Transform {
    fn from(record: TransformRecord) -> Self {
        Self {
            size: Size::new(record.size.width, record.size.height),
            rotation: record.rotation,
            offset: Vec2::new(record.offset.width, record.offset.height),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageElementRecord {
    transform: TransformRecord,
    image_filename: Option<String>,
    frame_index: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextElementRecord {
    transform: TransformRecord,
    text: String,
    text_color: ColorComponents,
    text_font: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    id: String,
    background_color: ColorComponents,
    image_elements: Vec<ImageElementRecord>,
    text_elements: Vec<TextElementRecord>,
}

/// Encode a card to its pretty-printed JSON record.
pub fn encode_card(card: &Card) -> StorageResult<String> {
    let record = CardRecord {
        id: card.id().to_string(),
        background_color: card.background_color.into(),
        image_elements: card
            .elements()
            .iter()
            .filter_map(CardElement::as_image)
            .map(|image| ImageElementRecord {
                transform: (&image.transform).into(),
                image_filename: image.image_filename.clone(),
                frame_index: image.frame_index,
            })
            .collect(),
        text_elements: card
            .elements()
            .iter()
            .filter_map(CardElement::as_text)
            .map(|text| TextElementRecord {
                transform: (&text.transform).into(),
                text: text.text.clone(),
                text_color: text.text_color.into(),
                text_font: text.text_font.clone(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&record).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode a card from its JSON record, resolving image blobs through
/// `storage`.
///
/// A blob that fails to resolve leaves the element carrying the error
/// placeholder instead of failing the decode.
pub fn decode_card(json: &str, storage: &dyn CardStorage) -> StorageResult<Card> {
    let record: CardRecord =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
    let id = Uuid::parse_str(&record.id).unwrap_or_else(|_| Uuid::new_v4());

    let mut elements = Vec::with_capacity(record.image_elements.len() + record.text_elements.len());
    for image in record.image_elements {
        let image_filename = image.image_filename.filter(|name| name != NO_IMAGE);
        let bytes = image_filename.as_ref().and_then(|name| {
            match storage.load_image(name) {
                Ok(bytes) => Some(bytes),
                Err(err) => {
                    log::warn!("image blob {name} unavailable: {err}");
                    None
                }
            }
        });
        elements.push(CardElement::Image(ImageElement::restored(
            image.transform.into(),
            image.frame_index,
            image_filename,
            bytes,
        )));
    }
    for text in record.text_elements {
        elements.push(CardElement::Text(TextElement::restored(
            text.transform.into(),
            text.text,
            text.text_color.into(),
            text.text_font,
        )));
    }

    Ok(Card::restored(id, record.background_color.into(), elements))
}
