use winnow::{
    ModalResult, Parser,
    binary::bits::{bits, bool as take_bool, take as take_bits},
    error::{ContextError, ErrMode},
    token::{rest, take},
};

use crate::error::PayloadError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct TextPayload {
    pub format: TextPayloadFormat,
    pub language: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum TextPayloadFormat {
    Utf8,
    Utf16,
}

/// URI prefix codes as defined in NFC Forum RTD URI specification
pub const URI_PREFIXES: &[&str] = &[
    "",                           // 0x00 - no prepending
    "http://www.",                // 0x01
    "https://www.",               // 0x02
    "http://",                    // 0x03
    "https://",                   // 0x04
    "tel:",                       // 0x05
    "mailto:",                    // 0x06
    "ftp://anonymous:anonymous@", // 0x07
    "ftp://ftp.",                 // 0x08
    "ftps://",                    // 0x09
    "sftp://",                    // 0x0A
    "smb://",                     // 0x0B
    "nfs://",                     // 0x0C
    "ftp://",                     // 0x0D
    "dav://",                     // 0x0E
    "news:",                      // 0x0F
    "telnet://",                  // 0x10
    "imap:",                      // 0x11
    "rtsp://",                    // 0x12
    "urn:",                       // 0x13
    "pop:",                       // 0x14
    "sip:",                       // 0x15
    "sips:",                      // 0x16
    "tftp:",                      // 0x17
    "btspp://",                   // 0x18
    "btl2cap://",                 // 0x19
    "btgoep://",                  // 0x1A
    "tcpobex://",                 // 0x1B
    "irdaobex://",                // 0x1C
    "file://",                    // 0x1D
    "urn:epc:id:",                // 0x1E
    "urn:epc:tag:",               // 0x1F
    "urn:epc:pat:",               // 0x20
    "urn:epc:raw:",               // 0x21
    "urn:epc:",                   // 0x22
    "urn:nfc:",                   // 0x23
];

/// Text record payload: status byte, language code, text
pub fn parse_text(payload: &[u8]) -> Result<TextPayload, PayloadError> {
    let mut input = payload;
    text_payload
        .parse_next(&mut input)
        .map_err(|e| PayloadError::MalformedText(e.to_string()))
}

/// Uri record payload: prefix code then the rest of the uri
///
/// Unknown prefix codes are treated as no prefix
pub fn parse_uri(payload: &[u8]) -> Result<String, PayloadError> {
    let (&code, uri) = payload.split_first().ok_or(PayloadError::EmptyUri)?;
    let prefix = URI_PREFIXES.get(code as usize).copied().unwrap_or_default();

    Ok(format!("{prefix}{}", String::from_utf8_lossy(uri)))
}

// private
fn text_payload(input: &mut &[u8]) -> ModalResult<TextPayload> {
    // bit 7 utf16, bit 6 reserved, bits 5..0 language code length
    let (is_utf16, _reserved, language_code_length): (bool, bool, u8) =
        bits::<_, _, ErrMode<ContextError>, _, _>((take_bool, take_bool, take_bits(6_u8)))
            .parse_next(input)?;

    let language_code = take(language_code_length as usize).parse_next(input)?;
    let text = rest.parse_next(input)?;

    let (format, text) = if is_utf16 {
        (TextPayloadFormat::Utf16, decode_utf16(text))
    } else {
        (TextPayloadFormat::Utf8, String::from_utf8_lossy(text).to_string())
    };

    Ok(TextPayload {
        format,
        language: String::from_utf8_lossy(language_code).to_string(),
        text,
    })
}

/// Big endian unless a byte order mark says otherwise
fn decode_utf16(text: &[u8]) -> String {
    let (little_endian, text) = match text {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, text),
    };

    let chunks = text.chunks_exact(2);
    let dangling_byte = !chunks.remainder().is_empty();

    let units = chunks
        .map(|chunk| {
            if little_endian {
                u16::from_le_bytes([chunk[0], chunk[1]])
            } else {
                u16::from_be_bytes([chunk[0], chunk[1]])
            }
        })
        .collect::<Vec<u16>>();

    let mut decoded = String::from_utf16_lossy(&units);
    if dangling_byte {
        decoded.push(char::REPLACEMENT_CHARACTER);
    }

    decoded
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn utf8_text() {
        let text = parse_text(b"\x02enHello, world!").unwrap();

        assert_eq!(text.format, TextPayloadFormat::Utf8);
        assert_eq!(text.language, "en");
        assert_eq!(text.text, "Hello, world!");
    }

    #[test]
    fn utf16_text_big_endian() {
        let mut payload = vec![0x82, b'd', b'e'];
        payload.extend("Grüße".encode_utf16().flat_map(u16::to_be_bytes));

        let text = parse_text(&payload).unwrap();
        assert_eq!(text.format, TextPayloadFormat::Utf16);
        assert_eq!(text.language, "de");
        assert_eq!(text.text, "Grüße");
    }

    #[test]
    fn utf16_text_with_little_endian_bom() {
        let mut payload = vec![0x82, b'f', b'r', 0xFF, 0xFE];
        payload.extend("été".encode_utf16().flat_map(u16::to_le_bytes));

        let text = parse_text(&payload).unwrap();
        assert_eq!(text.text, "été");
    }

    #[test]
    fn utf16_text_with_odd_trailing_byte_is_marked() {
        let payload = [0x82, b'e', b'n', 0x00, b'h', 0x00, b'i', 0x41];

        let text = parse_text(&payload).unwrap();
        assert_eq!(text.text, "hi\u{FFFD}");
    }

    #[test]
    fn reserved_bit_is_not_part_of_language_length() {
        // 0x42: reserved bit set, language code length 2
        let text = parse_text(b"\x42enhi").unwrap();
        assert_eq!(text.language, "en");
        assert_eq!(text.text, "hi");
    }

    #[test]
    fn empty_text_payload_is_malformed() {
        assert!(matches!(parse_text(b""), Err(PayloadError::MalformedText(_))));
    }

    #[test]
    fn language_code_longer_than_payload_is_malformed() {
        assert!(matches!(parse_text(b"\x05en"), Err(PayloadError::MalformedText(_))));
    }

    #[test]
    fn uri_prefixes() {
        assert_eq!(parse_uri(b"\x01example.com").unwrap(), "http://www.example.com");
        assert_eq!(parse_uri(b"\x06me@example.com").unwrap(), "mailto:me@example.com");
        assert_eq!(parse_uri(b"\x00custom:thing").unwrap(), "custom:thing");
        assert_eq!(parse_uri(b"\x23x").unwrap(), "urn:nfc:x");
    }

    #[test]
    fn unknown_uri_prefix_is_ignored() {
        assert_eq!(parse_uri(b"\x24example.com").unwrap(), "example.com");
    }

    #[test]
    fn empty_uri_payload() {
        assert_eq!(parse_uri(b""), Err(PayloadError::EmptyUri));
    }
}
