use thiserror::Error;

/// Why a datagram was not decodable.
///
/// Every variant means the same thing to a caller: drop the datagram.
/// The distinction only exists for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Truncated input: needed {needed} bytes at offset {offset}, buffer has {len}")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Disallowed header flags: {0}")]
    DisallowedHeader(&'static str),

    #[error("Header declares no records")]
    EmptyMessage,

    #[error("Invalid label length byte 0x{byte:02x} at offset {offset}")]
    InvalidLabel { offset: usize, byte: u8 },

    #[error("Label of length {length} at offset {offset} runs past end of buffer")]
    LabelOutOfBounds { offset: usize, length: usize },

    #[error("Compression pointer at offset {offset} targets {target} outside the buffer")]
    PointerOutOfBounds { offset: usize, target: usize },

    #[error("Compression pointer loop through offset {0}")]
    PointerLoop(usize),

    #[error("More than {0} compression pointers while resolving one name")]
    PointerDepthExceeded(usize),

    #[error("Malformed {record_type} RDATA at offset {offset}: {reason}")]
    MalformedRdata {
        record_type: &'static str,
        offset: usize,
        reason: &'static str,
    },

    #[error("Buffer ended with {remaining} declared records still unread")]
    IncompleteSections { remaining: u32 },
}

impl DecodeError {
    pub fn truncated(offset: usize, needed: usize, len: usize) -> Self {
        DecodeError::Truncated {
            offset,
            needed,
            len,
        }
    }

    pub fn malformed(record_type: &'static str, offset: usize, reason: &'static str) -> Self {
        DecodeError::MalformedRdata {
            record_type,
            offset,
            reason,
        }
    }

    /// Short category name used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::Truncated { .. } => "truncated",
            DecodeError::DisallowedHeader(_) | DecodeError::EmptyMessage => "header",
            DecodeError::InvalidLabel { .. }
            | DecodeError::LabelOutOfBounds { .. }
            | DecodeError::PointerOutOfBounds { .. }
            | DecodeError::PointerLoop(_)
            | DecodeError::PointerDepthExceeded(_) => "name",
            DecodeError::MalformedRdata { .. } => "rdata",
            DecodeError::IncompleteSections { .. } => "sections",
        }
    }
}
