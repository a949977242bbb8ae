use ferrous_mdns_domain::{DecodeError, RData, RecordType};
use std::collections::BTreeMap;
use std::fmt::Write;

use super::name::read_name;
use super::wire::{ensure, read_u16};

/// SRV fixed fields: priority, weight, port.
const SRV_FIXED_LEN: usize = 6;

/// Result of decoding one RDATA window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRdata {
    pub rdata: RData,
    /// Raw value bytes per TXT key. Only TXT fills this in.
    pub raw: Option<BTreeMap<String, Vec<u8>>>,
}

impl From<RData> for DecodedRdata {
    fn from(rdata: RData) -> Self {
        Self { rdata, raw: None }
    }
}

/// Decodes the `len`-byte RDATA window at `offset` according to its TYPE.
///
/// Unknown types (and known types without a structured decoder) fall
/// through to a hex dump. Every decoder rejects an empty result.
pub fn decode_rdata(
    buf: &[u8],
    offset: usize,
    len: usize,
    record_type: Option<RecordType>,
    max_hops: usize,
) -> Result<DecodedRdata, DecodeError> {
    ensure(buf, offset, len)?;
    let window = &buf[offset..offset + len];

    match record_type {
        Some(RecordType::A) => decode_a(window, offset).map(Into::into),
        Some(RecordType::AAAA) => decode_aaaa(window, offset).map(Into::into),
        Some(RecordType::PTR) => decode_ptr(buf, offset, len, max_hops).map(Into::into),
        Some(RecordType::TXT) => decode_txt(window, offset),
        Some(RecordType::SRV) => decode_srv(buf, offset, len, max_hops).map(Into::into),
        Some(RecordType::HINFO) => decode_hinfo(window, offset).map(Into::into),
        _ => decode_other(window, offset).map(Into::into),
    }
}

fn decode_a(window: &[u8], offset: usize) -> Result<RData, DecodeError> {
    if window.is_empty() {
        return Err(DecodeError::malformed("A", offset, "empty address"));
    }
    let mut out = String::with_capacity(window.len() * 4);
    for (i, octet) in window.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        write!(out, "{}", octet).ok();
    }
    Ok(RData::A(out))
}

fn decode_aaaa(window: &[u8], offset: usize) -> Result<RData, DecodeError> {
    if window.is_empty() {
        return Err(DecodeError::malformed("AAAA", offset, "empty address"));
    }
    if window.len() % 2 != 0 {
        return Err(DecodeError::malformed("AAAA", offset, "odd address length"));
    }
    let mut out = String::with_capacity(window.len() / 2 * 5);
    for (i, pair) in window.chunks_exact(2).enumerate() {
        if i > 0 {
            out.push(':');
        }
        write!(out, "{:02x}{:02x}", pair[0], pair[1]).ok();
    }
    Ok(RData::Aaaa(out))
}

fn decode_ptr(buf: &[u8], offset: usize, len: usize, max_hops: usize) -> Result<RData, DecodeError> {
    let decoded = read_name(buf, offset, max_hops)?;
    if decoded.consumed > len {
        return Err(DecodeError::malformed("PTR", offset, "name overruns RDATA"));
    }
    if decoded.name.is_empty() {
        return Err(DecodeError::malformed("PTR", offset, "empty RDATA"));
    }
    Ok(RData::Ptr(decoded.name))
}

/// Walks the length-prefixed attribute spans of a TXT payload.
///
/// `key=value` spans populate both maps; anything else is skipped. A span
/// whose length byte points past the window fails the record.
fn decode_txt(window: &[u8], offset: usize) -> Result<DecodedRdata, DecodeError> {
    let mut text = BTreeMap::new();
    let mut raw = BTreeMap::new();
    let mut pos = 0;

    while pos < window.len() {
        let span_len = window[pos] as usize;
        let start = pos + 1;
        let end = start + span_len;
        if end > window.len() {
            return Err(DecodeError::malformed(
                "TXT",
                offset + pos,
                "attribute overruns RDATA",
            ));
        }
        let span = &window[start..end];
        pos = end;

        let Some(eq) = span.iter().position(|&b| b == b'=') else {
            continue;
        };
        if eq == 0 {
            continue;
        }
        let key = String::from_utf8_lossy(&span[..eq]).into_owned();
        let value = &span[eq + 1..];
        text.insert(key.clone(), String::from_utf8_lossy(value).into_owned());
        raw.insert(key, value.to_vec());
    }

    Ok(DecodedRdata {
        rdata: RData::Txt(text),
        raw: Some(raw),
    })
}

fn decode_srv(buf: &[u8], offset: usize, len: usize, max_hops: usize) -> Result<RData, DecodeError> {
    if len <= SRV_FIXED_LEN {
        return Err(DecodeError::malformed("SRV", offset, "no room for target"));
    }
    let priority = read_u16(buf, offset)?;
    let weight = read_u16(buf, offset + 2)?;
    let port = read_u16(buf, offset + 4)?;

    let target = read_name(buf, offset + SRV_FIXED_LEN, max_hops)?;
    if target.consumed > len - SRV_FIXED_LEN {
        return Err(DecodeError::malformed("SRV", offset, "target overruns RDATA"));
    }

    Ok(RData::Srv {
        priority,
        weight,
        port,
        target: target.name,
    })
}

fn decode_hinfo(window: &[u8], offset: usize) -> Result<RData, DecodeError> {
    let (cpu, next) = character_string(window, 0)
        .ok_or_else(|| DecodeError::malformed("HINFO", offset, "cpu overruns RDATA"))?;
    let os = character_string(window, next).map(|(os, _)| os);
    Ok(RData::Hinfo { cpu, os })
}

/// Reads one length-prefixed string at `pos`, returning it and the position after it.
fn character_string(window: &[u8], pos: usize) -> Option<(String, usize)> {
    let len = *window.get(pos)? as usize;
    let bytes = window.get(pos + 1..pos + 1 + len)?;
    Some((String::from_utf8_lossy(bytes).into_owned(), pos + 1 + len))
}

/// Space-separated hex dump of a payload with no structured decoder.
fn decode_other(window: &[u8], offset: usize) -> Result<RData, DecodeError> {
    if window.is_empty() {
        return Err(DecodeError::malformed("RDATA", offset, "empty RDATA"));
    }
    let mut out = String::with_capacity(window.len() * 3);
    for (i, b) in window.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{:02x}", b).ok();
    }
    Ok(RData::Other(out))
}
