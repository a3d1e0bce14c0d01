/// Part of the record being read when the buffer ran out
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, uniffi::Enum, strum::Display)]
pub enum RecordField {
    #[strum(serialize = "header")]
    Header,
    #[strum(serialize = "type length")]
    TypeLength,
    #[strum(serialize = "payload length")]
    PayloadLength,
    #[strum(serialize = "id length")]
    IdLength,
    #[strum(serialize = "type")]
    Type,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "payload")]
    Payload,
}

/// A record whose declared structure does not fit in the bytes given
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum FormatError {
    #[error("malformed record, need at least {needed} bytes, got {available}")]
    TooShort { needed: u64, available: u64 },

    #[error(
        "malformed record, {field} needs {needed} bytes at offset {offset}, only {available} left"
    )]
    Truncated {
        field: RecordField,
        offset: u64,
        needed: u64,
        available: u64,
    },
}

/// Errors decoding a well known payload (text or uri)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum PayloadError {
    #[error("text payload is malformed: {0}")]
    MalformedText(String),

    #[error("uri payload is missing its prefix code")]
    EmptyUri,
}

impl FormatError {
    /// `field` needed `needed` bytes at `offset` in `data` and they were not there
    pub(crate) fn truncated(field: RecordField, data: &[u8], offset: usize, needed: usize) -> Self {
        Self::Truncated {
            field,
            offset: offset as u64,
            needed: needed as u64,
            available: data.len().saturating_sub(offset) as u64,
        }
    }
}
