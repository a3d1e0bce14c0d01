use crate::tnf::TypeNameFormat;

pub const FLAG_MB: u8 = 0x80;
pub const FLAG_ME: u8 = 0x40;
pub const FLAG_CF: u8 = 0x20;
pub const FLAG_SR: u8 = 0x10;
pub const FLAG_IL: u8 = 0x08;

/// Header byte and type length, the smallest possible record
pub const MIN_RECORD_LENGTH: usize = 2;

/// Flags and length fields at the front of every record
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct NdefHeader {
    /// MB, ME and CF are only decoded here, chaining records is left to the caller
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,

    /// Raw type name format code, see [`crate::tnf::TnfDecoding`]
    pub tnf: u8,
    pub type_length: u8,
    pub payload_length: u32,

    /// 0 when `has_id_length` is not set
    pub id_length: u8,
}

impl NdefHeader {
    pub fn type_name_format(&self) -> Option<TypeNameFormat> {
        TypeNameFormat::from_code(self.tnf)
    }

    /// Number of bytes taken by the header byte and the length fields
    pub fn length(&self) -> usize {
        let payload_length_size = if self.short_record { 1 } else { 4 };
        let id_length_size = usize::from(self.has_id_length);

        MIN_RECORD_LENGTH + payload_length_size + id_length_size
    }

    /// Header plus type, id and payload
    pub fn record_length(&self) -> usize {
        self.length()
            + self.type_length as usize
            + self.id_length as usize
            + self.payload_length as usize
    }
}
