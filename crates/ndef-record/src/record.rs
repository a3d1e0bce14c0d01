use crate::{
    error::{FormatError, PayloadError},
    header::NdefHeader,
    parser,
    payload::{self, TextPayload},
    tnf::{self, TypeNameFormat},
};

/// One decoded record, read only once parsed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NdefRecord {
    header: NdefHeader,
    type_: Vec<u8>,
    id: Vec<u8>,
    payload: Vec<u8>,
    total_length: usize,
}

impl NdefRecord {
    /// Decode a record from the front of `data`, see [`parser::parse_record`]
    pub fn parse(data: &[u8]) -> Result<Self, FormatError> {
        parser::parse_record(data)
    }

    pub(crate) fn from_parts(
        header: NdefHeader,
        type_: Vec<u8>,
        id: Vec<u8>,
        payload: Vec<u8>,
        total_length: usize,
    ) -> Self {
        Self {
            header,
            type_,
            id,
            payload,
            total_length,
        }
    }

    pub fn header(&self) -> &NdefHeader {
        &self.header
    }

    /// Raw type name format code
    pub fn tnf(&self) -> u8 {
        self.header.tnf
    }

    pub fn type_name_format(&self) -> Option<TypeNameFormat> {
        self.header.type_name_format()
    }

    /// `TNF_WELL_KNOWN` etc, `None` if the code is not a valid type name format
    pub fn tnf_name(&self) -> Option<&'static str> {
        tnf::tnf_name(self.header.tnf)
    }

    pub fn type_(&self) -> &[u8] {
        &self.type_
    }

    /// Empty when the record had no id field
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Bytes taken from the input by this record, the next record starts here
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Decode the payload of a well known text (`T`) record
    pub fn text(&self) -> Result<Option<TextPayload>, PayloadError> {
        if !self.is_well_known(b"T") {
            return Ok(None);
        }

        payload::parse_text(&self.payload).map(Some)
    }

    /// Decode the payload of a well known uri (`U`) record, with the prefix expanded
    pub fn uri(&self) -> Result<Option<String>, PayloadError> {
        if !self.is_well_known(b"U") {
            return Ok(None);
        }

        payload::parse_uri(&self.payload).map(Some)
    }

    fn is_well_known(&self, type_: &[u8]) -> bool {
        self.type_name_format() == Some(TypeNameFormat::WellKnown) && self.type_ == type_
    }
}

impl TryFrom<&[u8]> for NdefRecord {
    type Error = FormatError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        parser::parse_record(data)
    }
}
