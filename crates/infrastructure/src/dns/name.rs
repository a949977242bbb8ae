use ferrous_mdns_domain::DecodeError;
use smallvec::SmallVec;

const POINTER_TAG: u8 = 0xC0;
const POINTER_MASK: u16 = 0x3FFF;

/// A resolved domain name and the bytes it occupied at the offset it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    /// Dotted labels without a trailing dot. The root name is `""`.
    pub name: String,
    /// Bytes consumed at the starting offset. A pointer counts as 2 no matter
    /// how long the name it points to is.
    pub consumed: usize,
}

/// Resolves a possibly-compressed domain name starting at `offset`.
///
/// Pointers are followed until the root label is reached. Every pointer
/// target is remembered for the duration of the call; revisiting one is a
/// loop, and following more than `max_hops` pointers is rejected outright.
pub fn read_name(buf: &[u8], offset: usize, max_hops: usize) -> Result<DecodedName, DecodeError> {
    let mut name = String::new();
    let mut pos = offset;
    let mut consumed: Option<usize> = None;
    let mut visited: SmallVec<[usize; 8]> = SmallVec::new();

    loop {
        let len_byte = *buf
            .get(pos)
            .ok_or_else(|| DecodeError::truncated(pos, 1, buf.len()))?;

        match len_byte & POINTER_TAG {
            0x00 => {
                let label_len = len_byte as usize;
                if label_len == 0 {
                    pos += 1;
                    break;
                }
                let start = pos + 1;
                let end = start + label_len;
                if end > buf.len() {
                    return Err(DecodeError::LabelOutOfBounds {
                        offset: pos,
                        length: label_len,
                    });
                }
                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(&String::from_utf8_lossy(&buf[start..end]));
                pos = end;
            }
            POINTER_TAG => {
                if pos + 2 > buf.len() {
                    return Err(DecodeError::truncated(pos, 2, buf.len()));
                }
                let target = (u16::from_be_bytes([buf[pos], buf[pos + 1]]) & POINTER_MASK) as usize;
                if target >= buf.len() {
                    return Err(DecodeError::PointerOutOfBounds {
                        offset: pos,
                        target,
                    });
                }
                if consumed.is_none() {
                    consumed = Some(pos + 2 - offset);
                }
                if visited.len() >= max_hops {
                    return Err(DecodeError::PointerDepthExceeded(max_hops));
                }
                if visited.contains(&target) {
                    return Err(DecodeError::PointerLoop(target));
                }
                visited.push(target);
                pos = target;
            }
            _ => {
                return Err(DecodeError::InvalidLabel {
                    offset: pos,
                    byte: len_byte,
                });
            }
        }
    }

    Ok(DecodedName {
        name,
        consumed: consumed.unwrap_or(pos - offset),
    })
}
