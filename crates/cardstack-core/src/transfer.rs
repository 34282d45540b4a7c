//! Ingestion items arriving from paste, drop, or picker sources.

/// One pasted or dropped item: text or raw image bytes, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferItem {
    Text(String),
    Image(Vec<u8>),
}

impl TransferItem {
    /// Build a text item from raw transfer data, decoded as UTF-8 with
    /// replacement characters for invalid sequences.
    pub fn text_from_data(data: &[u8]) -> Self {
        Self::Text(String::from_utf8_lossy(data).into_owned())
    }

    /// Build an image item from raw transfer data.
    ///
    /// An empty payload is rejected with a logged warning and `None`;
    /// callers skip the item and keep processing the rest of the batch.
    pub fn image_from_data(data: Vec<u8>) -> Option<Self> {
        if data.is_empty() {
            log::warn!("discarding empty image transfer payload");
            return None;
        }
        Some(Self::Image(data))
    }
}
