use serde::{Deserialize, Serialize};

/// Tunables for the message decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecoderConfig {
    /// Maximum number of compression pointers followed while resolving a single name.
    #[serde(default = "default_max_pointer_hops")]
    pub max_pointer_hops: usize,

    /// Treat a buffer that ends before every declared record was read as undecodable.
    /// When false the walk simply stops at the end of the buffer.
    #[serde(default)]
    pub strict_section_counts: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_pointer_hops: default_max_pointer_hops(),
            strict_section_counts: false,
        }
    }
}

fn default_max_pointer_hops() -> usize {
    16
}
