mod record;
mod record_class;
mod record_type;

pub use record::{Question, RData, ResourceRecord};
pub use record_class::{RecordClass, CACHE_FLUSH_BIT};
pub use record_type::RecordType;
