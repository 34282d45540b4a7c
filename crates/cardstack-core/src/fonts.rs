//! Static font catalog for text elements.

/// Font used by new text elements.
pub const DEFAULT_FONT: &str = "Gill Sans";

/// Fonts offered by the text editor, indexed by catalog position.
pub const APP_FONTS: &[&str] = &[
    "San Fransisco",
    "AmericanTypewriter",
    "Avenir-Heavy",
    "Avenir-Book",
    "Baskerville-Italic",
    "ChalkboardSE-Regular",
    "Chalkduster",
    "Cochin-BoldItalic",
    "Copperplate",
    "GillSans-UltraBold",
    "MarkerFelt-Wide",
    "Noteworthy-Bold",
    "Verdana-Bold",
    "Papyrus",
    "PartyLetPlain",
    "SavoyeLetPlain",
    "SnellRoundhand-Black",
];

/// Look up a catalog font by index.
pub fn font_at(index: usize) -> Option<&'static str> {
    APP_FONTS.get(index).copied()
}
