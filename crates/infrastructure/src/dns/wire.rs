use ferrous_mdns_domain::DecodeError;

#[inline]
pub(crate) fn ensure(buf: &[u8], offset: usize, needed: usize) -> Result<(), DecodeError> {
    match offset.checked_add(needed) {
        Some(end) if end <= buf.len() => Ok(()),
        _ => Err(DecodeError::truncated(offset, needed, buf.len())),
    }
}

#[inline]
pub(crate) fn read_u16(buf: &[u8], offset: usize) -> Result<u16, DecodeError> {
    ensure(buf, offset, 2)?;
    Ok(u16::from_be_bytes([buf[offset], buf[offset + 1]]))
}

#[inline]
pub(crate) fn read_u32(buf: &[u8], offset: usize) -> Result<u32, DecodeError> {
    ensure(buf, offset, 4)?;
    Ok(u32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ]))
}
