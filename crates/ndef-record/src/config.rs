use crate::tnf::TnfDecoding;

/// Options for [`crate::parser::parse_record_with`]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, uniffi::Record)]
pub struct ParserConfig {
    pub tnf_decoding: TnfDecoding,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the type name format the way older readers did
    pub fn legacy() -> Self {
        Self::new().with_tnf_decoding(TnfDecoding::Legacy)
    }

    pub fn with_tnf_decoding(mut self, tnf_decoding: TnfDecoding) -> Self {
        self.tnf_decoding = tnf_decoding;
        self
    }
}
