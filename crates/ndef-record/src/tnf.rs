/// Type name format, the low 3 bits of a record header
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, uniffi::Enum, strum::IntoStaticStr, strum::EnumIter,
)]
pub enum TypeNameFormat {
    #[strum(serialize = "TNF_EMPTY")]
    Empty,
    #[strum(serialize = "TNF_WELL_KNOWN")]
    WellKnown,
    #[strum(serialize = "TNF_MIME_MEDIA")]
    MimeMedia,
    #[strum(serialize = "TNF_ABSOLUTE_URI")]
    AbsoluteUri,
    #[strum(serialize = "TNF_EXTERNAL_TYPE")]
    ExternalType,
    #[strum(serialize = "TNF_UNKNOWN")]
    Unknown,
    #[strum(serialize = "TNF_UNCHANGED")]
    Unchanged,
    #[strum(serialize = "TNF_RESERVED")]
    Reserved,
}

/// How the type name format is pulled out of the header byte
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum TnfDecoding {
    /// `header & 0x07`
    #[default]
    Masked,

    /// `header & header << 1 & header << 2`, kept for data captured with older readers.
    /// Can produce codes above 7
    Legacy,
}

pub const TNF_MASK: u8 = 0x07;

impl TypeNameFormat {
    pub fn from_code(code: u8) -> Option<Self> {
        let tnf = match code {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::MimeMedia,
            3 => Self::AbsoluteUri,
            4 => Self::ExternalType,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            7 => Self::Reserved,
            _ => return None,
        };

        Some(tnf)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TnfDecoding {
    pub fn decode(self, header: u8) -> u8 {
        match self {
            Self::Masked => header & TNF_MASK,
            Self::Legacy => header & (header << 1) & (header << 2),
        }
    }
}

/// Symbolic name for a raw tnf code, `None` for anything outside the 3 bit range
pub fn tnf_name(code: u8) -> Option<&'static str> {
    TypeNameFormat::from_code(code).map(TypeNameFormat::name)
}
