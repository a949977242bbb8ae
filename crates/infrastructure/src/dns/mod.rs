pub mod decoder;
pub mod header;
pub mod name;
pub mod rdata;
pub mod walker;
mod wire;

pub use decoder::{decode, MessageDecoder};
pub use header::decode_header;
pub use name::{read_name, DecodedName};
pub use rdata::{decode_rdata, DecodedRdata};
pub use walker::{walk_sections, Section};
