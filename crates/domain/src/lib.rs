//! Ferrous mDNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, DecoderConfig, LoggingConfig};
pub use dns_message::{Header, Message, HEADER_LEN};
pub use dns_record::{Question, RData, RecordClass, RecordType, ResourceRecord, CACHE_FLUSH_BIT};
pub use errors::DecodeError;
