use ferrous_mdns_domain::{DecodeError, DecoderConfig, Message};
use tracing::{debug, trace};

use super::header::decode_header;
use super::walker::walk_sections;

/// Stateless, reentrant message decoder.
///
/// Holds only its configuration, so one instance can be shared freely
/// between listener tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageDecoder {
    config: DecoderConfig,
}

impl MessageDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decodes one datagram. Either every declared record decodes or the
    /// whole message is rejected.
    pub fn decode(&self, buf: &[u8]) -> Result<Message, DecodeError> {
        let result = decode_header(buf)
            .and_then(|(header, offset)| walk_sections(buf, &header, offset, &self.config));

        match &result {
            Ok(message) => trace!(
                len = buf.len(),
                id = message.header.id,
                questions = message.questions.len(),
                answers = message.answers.len(),
                authorities = message.authorities.len(),
                additionals = message.additionals.len(),
                "Decoded message"
            ),
            Err(e) => debug!(len = buf.len(), reason = e.kind(), error = %e, "Dropping undecodable datagram"),
        }

        result
    }
}

/// Decodes one datagram with the default configuration.
pub fn decode(buf: &[u8]) -> Result<Message, DecodeError> {
    MessageDecoder::default().decode(buf)
}
