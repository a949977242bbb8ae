mod decoder;
mod errors;
mod logging;
mod root;

pub use decoder::DecoderConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
