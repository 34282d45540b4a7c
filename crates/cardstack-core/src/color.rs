//! Color component codec and the card background palette.

use peniko::Color;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::sync::atomic::{AtomicU32, Ordering};

/// RGBA color as four normalized components in `[0, 1]`, the form colors
/// take in persisted card records.
///
/// Decoding is strict: anything other than exactly four components is a
/// decode error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorComponents(pub [f32; 4]);

impl Serialize for ColorComponents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(4))?;
        for component in self.0 {
            seq.serialize_element(&(component as f64))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ColorComponents {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let components = Vec::<f64>::deserialize(deserializer)?;
        if components.len() != 4 {
            return Err(de::Error::invalid_length(
                components.len(),
                &"a color array with exactly 4 components",
            ));
        }
        Ok(Self([
            components[0] as f32,
            components[1] as f32,
            components[2] as f32,
            components[3] as f32,
        ]))
    }
}

impl From<Color> for ColorComponents {
    fn from(color: Color) -> Self {
        Self(color.components)
    }
}

impl From<ColorComponents> for Color {
    fn from(components: ColorComponents) -> Self {
        Color::new(components.0)
    }
}

/// The fixed palette new card backgrounds are drawn from.
const PALETTE: [[f32; 4]; 8] = [
    [0.91, 0.30, 0.35, 1.0], // coral
    [0.96, 0.65, 0.14, 1.0], // marigold
    [0.98, 0.86, 0.36, 1.0], // lemon
    [0.35, 0.72, 0.46, 1.0], // fern
    [0.22, 0.60, 0.85, 1.0], // sky
    [0.42, 0.36, 0.90, 1.0], // violet
    [0.89, 0.44, 0.84, 1.0], // orchid
    [0.55, 0.78, 0.75, 1.0], // seafoam
];

/// All background palette colors, in catalog order.
pub fn background_palette() -> [Color; 8] {
    PALETTE.map(Color::new)
}

/// Pick a background color for a new card.
///
/// A global counter mixed through splitmix32 so consecutive cards don't
/// just cycle the palette in order. Works on all platforms without a RNG.
pub fn random_background() -> Color {
    static PICKS: AtomicU32 = AtomicU32::new(1);
    let counter = PICKS.fetch_add(1, Ordering::Relaxed);
    Color::new(PALETTE[mix(counter) as usize % PALETTE.len()])
}

fn mix(mut x: u32) -> u32 {
    x = x.wrapping_mul(0x9E37_79B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^= x >> 16;
    x
}
