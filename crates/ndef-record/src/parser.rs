use ndef_util::sub_slice;
use tracing::{debug, trace};
use winnow::{
    ModalResult, Parser,
    binary::{
        Endianness, be_u8,
        bits::{bits, bool as take_bool, take as take_bits},
    },
    combinator::peek,
    error::{ContextError, ErrMode},
};

use crate::{
    config::ParserConfig,
    error::{FormatError, RecordField},
    header::{MIN_RECORD_LENGTH, NdefHeader},
    record::NdefRecord,
    tnf::tnf_name,
};

type Input<'i> = &'i [u8];

/// Decode one record from the front of `data` with the default config
///
/// Bytes after the record are ignored, use [`NdefRecord::total_length`] to find the next one
pub fn parse_record(data: &[u8]) -> Result<NdefRecord, FormatError> {
    parse_record_with(data, &ParserConfig::default())
}

pub fn parse_record_with(data: &[u8], config: &ParserConfig) -> Result<NdefRecord, FormatError> {
    let header = parse_header(data, config)?;
    let start = header.length();

    let type_length = header.type_length as usize;
    let id_length = header.id_length as usize;
    let payload_length = usize::try_from(header.payload_length)
        .map_err(|_| FormatError::truncated(RecordField::Payload, data, start, usize::MAX))?;

    let type_ = take_field(data, RecordField::Type, start, type_length)?;

    let id_start = start + type_length;
    let id = take_field(data, RecordField::Id, id_start, id_length)?;

    let payload_start = id_start + id_length;
    let payload = take_field(data, RecordField::Payload, payload_start, payload_length)?;

    let total_length = payload_start + payload_length;

    debug!(
        "ndef record: tnf {}, data {}, payload {}, type length {}, id length {}, total length {}",
        tnf_name(header.tnf).unwrap_or("invalid"),
        data.len(),
        payload_length,
        type_length,
        id_length,
        total_length
    );

    Ok(NdefRecord::from_parts(
        header,
        type_.to_vec(),
        id.to_vec(),
        payload.to_vec(),
        total_length,
    ))
}

/// Decode the header byte and the length fields that follow it
pub fn parse_header(data: &[u8], config: &ParserConfig) -> Result<NdefHeader, FormatError> {
    if data.len() < MIN_RECORD_LENGTH {
        return Err(FormatError::TooShort {
            needed: MIN_RECORD_LENGTH as u64,
            available: data.len() as u64,
        });
    }

    let mut input: Input<'_> = data;

    let raw_header = field(data, &mut input, RecordField::Header, 1, peek(be_u8))?;
    let (message_begin, message_end, chunked, short_record, has_id_length, _tnf_bits) =
        field(data, &mut input, RecordField::Header, 1, parse_header_byte)?;

    let tnf = config.tnf_decoding.decode(raw_header);
    let type_length = field(data, &mut input, RecordField::TypeLength, 1, be_u8)?;

    let payload_length = if short_record {
        debug!("short record");
        field(data, &mut input, RecordField::PayloadLength, 1, be_u8.map(|x: u8| x as u32))?
    } else {
        debug!("long record");
        let be_u32 = winnow::binary::u32(Endianness::Big);
        field(data, &mut input, RecordField::PayloadLength, 4, be_u32)?
    };

    let id_length = if has_id_length {
        field(data, &mut input, RecordField::IdLength, 1, be_u8)?
    } else {
        0
    };

    let header = NdefHeader {
        message_begin,
        message_end,
        chunked,
        short_record,
        has_id_length,
        tnf,
        type_length,
        payload_length,
        id_length,
    };

    trace!("parsed header: {header:?}");
    Ok(header)
}

// private
fn parse_header_byte(input: &mut Input<'_>) -> ModalResult<(bool, bool, bool, bool, bool, u8)> {
    bits::<_, _, ErrMode<ContextError>, _, _>((
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bits(3_u8),
    ))
    .parse_next(input)
}

/// Run one header parser, reporting where it ran out of bytes
fn field<'i, O>(
    data: &[u8],
    input: &mut Input<'i>,
    record_field: RecordField,
    needed: usize,
    mut parser: impl Parser<Input<'i>, O, ErrMode<ContextError>>,
) -> Result<O, FormatError> {
    let offset = data.len() - input.len();

    parser
        .parse_next(input)
        .map_err(|_| FormatError::truncated(record_field, data, offset, needed))
}

fn take_field(
    data: &[u8],
    record_field: RecordField,
    start: usize,
    length: usize,
) -> Result<&[u8], FormatError> {
    sub_slice(data, start, length)
        .map_err(|_| FormatError::truncated(record_field, data, start, length))
}
