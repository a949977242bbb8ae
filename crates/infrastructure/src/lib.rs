//! Ferrous mDNS Infrastructure Layer: wire-format message decoding
pub mod dns;

pub use dns::decoder::{decode, MessageDecoder};
