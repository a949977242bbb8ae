use ferrous_mdns_domain::{DecodeError, Header, HEADER_LEN};

use super::wire::read_u16;

/// Parses and validates the fixed 12-byte header.
///
/// Returns the header together with the offset of the first question.
/// Rejects, without looking any further:
///
/// * Buffers of 12 bytes or fewer
/// * Any of TC, RD, RA, Z, AD, CD set, or a non-zero RCODE
/// * All four section counts zero
///
/// QR, OPCODE and AA are accepted as-is.
pub fn decode_header(buf: &[u8]) -> Result<(Header, usize), DecodeError> {
    if buf.len() <= HEADER_LEN {
        return Err(DecodeError::truncated(0, HEADER_LEN + 1, buf.len()));
    }

    let header = parse_header(buf)?;
    check_flag_profile(&header)?;

    if header.total_count() == 0 {
        return Err(DecodeError::EmptyMessage);
    }

    Ok((header, HEADER_LEN))
}

fn parse_header(buf: &[u8]) -> Result<Header, DecodeError> {
    let id = read_u16(buf, 0)?;
    let b2 = buf[2];
    let b3 = buf[3];

    Ok(Header {
        id,
        qr: b2 & 0x80 != 0,
        opcode: (b2 >> 3) & 0x0F,
        aa: b2 & 0x04 != 0,
        tc: b2 & 0x02 != 0,
        rd: b2 & 0x01 != 0,
        ra: b3 & 0x80 != 0,
        z: (b3 >> 6) & 0x01,
        ad: b3 & 0x20 != 0,
        cd: b3 & 0x10 != 0,
        rcode: b3 & 0x0F,
        question_count: read_u16(buf, 4)?,
        answer_count: read_u16(buf, 6)?,
        authority_count: read_u16(buf, 8)?,
        additional_count: read_u16(buf, 10)?,
    })
}

fn check_flag_profile(header: &Header) -> Result<(), DecodeError> {
    let offending = if header.tc {
        "TC"
    } else if header.rd {
        "RD"
    } else if header.ra {
        "RA"
    } else if header.z != 0 {
        "Z"
    } else if header.ad {
        "AD"
    } else if header.cd {
        "CD"
    } else if header.rcode != 0 {
        "RCODE"
    } else {
        return Ok(());
    };
    Err(DecodeError::DisallowedHeader(offending))
}
