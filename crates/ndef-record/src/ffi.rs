use crate::{
    config::ParserConfig,
    error::{FormatError, PayloadError},
    header::NdefHeader,
    parser,
    payload::TextPayload,
    record::NdefRecord,
    tnf::TypeNameFormat,
};

/// Read only view of a record for the bindings, every byte getter returns a fresh copy
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Object)]
pub struct NdefRecordReader {
    record: NdefRecord,
}

impl From<NdefRecord> for NdefRecordReader {
    fn from(record: NdefRecord) -> Self {
        Self { record }
    }
}

#[uniffi::export]
impl NdefRecordReader {
    #[uniffi::constructor]
    pub fn new(data: Vec<u8>) -> Result<Self, FormatError> {
        parser::parse_record(&data).map(Self::from)
    }

    #[uniffi::constructor]
    pub fn new_with_config(data: Vec<u8>, config: ParserConfig) -> Result<Self, FormatError> {
        parser::parse_record_with(&data, &config).map(Self::from)
    }

    pub fn header(&self) -> NdefHeader {
        self.record.header().clone()
    }

    pub fn tnf(&self) -> u8 {
        self.record.tnf()
    }

    pub fn type_name_format(&self) -> Option<TypeNameFormat> {
        self.record.type_name_format()
    }

    pub fn tnf_name(&self) -> Option<String> {
        self.record.tnf_name().map(ToString::to_string)
    }

    pub fn type_(&self) -> Vec<u8> {
        self.record.type_().to_vec()
    }

    pub fn id(&self) -> Vec<u8> {
        self.record.id().to_vec()
    }

    pub fn payload(&self) -> Vec<u8> {
        self.record.payload().to_vec()
    }

    pub fn total_length(&self) -> u64 {
        self.record.total_length() as u64
    }

    pub fn type_string(&self) -> Option<String> {
        String::from_utf8(self.type_()).ok()
    }

    pub fn text(&self) -> Result<Option<TextPayload>, PayloadError> {
        self.record.text()
    }

    pub fn uri(&self) -> Result<Option<String>, PayloadError> {
        self.record.uri()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_do_not_leak_back_into_the_reader() {
        let reader = NdefRecordReader::new(vec![0xD1, 0x01, 0x03, 0x54, 0x61, 0x67, 0x21]).unwrap();

        let mut payload = reader.payload();
        payload[0] = b'X';
        payload.push(0);

        let mut type_ = reader.type_();
        type_.clear();

        assert_eq!(reader.payload(), b"ag!".to_vec());
        assert_eq!(reader.type_(), vec![0x54]);
        assert_eq!(reader.type_string().as_deref(), Some("T"));
        assert!(reader.id().is_empty());
    }

    #[test]
    fn reader_exposes_format_and_length() {
        let reader = NdefRecordReader::new(vec![0xD1, 0x01, 0x03, 0x54, 0x61, 0x67, 0x21]).unwrap();

        assert_eq!(reader.tnf(), 1);
        assert_eq!(reader.type_name_format(), Some(TypeNameFormat::WellKnown));
        assert_eq!(reader.tnf_name().as_deref(), Some("TNF_WELL_KNOWN"));
        assert_eq!(reader.total_length(), 7);
        assert!(reader.header().message_begin);
    }

    #[test]
    fn reader_with_legacy_config() {
        let reader = NdefRecordReader::new_with_config(
            vec![0xD1, 0x01, 0x03, 0x54, 0x61, 0x67, 0x21],
            ParserConfig::legacy(),
        )
        .unwrap();

        assert_eq!(reader.tnf(), 0);
        assert_eq!(reader.tnf_name().as_deref(), Some("TNF_EMPTY"));
        assert_eq!(reader.text(), Ok(None));
    }

    #[test]
    fn short_buffer_fails_to_construct() {
        assert!(matches!(
            NdefRecordReader::new(vec![0xD1]),
            Err(FormatError::TooShort { .. })
        ));
    }
}
