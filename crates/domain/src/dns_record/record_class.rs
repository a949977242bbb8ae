use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top bit of the wire CLASS field in mDNS records (RFC 6762 §10.2).
/// It is an overlay flag, not part of the class code.
pub const CACHE_FLUSH_BIT: u16 = 0x8000;

/// Record CLASS lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordClass {
    IN,
    CS,
    CH,
    HS,
    NONE,
    ANY,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CS => "CS",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::NONE => "NONE",
            RecordClass::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::NONE => 254,
            RecordClass::ANY => 255,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordClass::IN),
            2 => Some(RecordClass::CS),
            3 => Some(RecordClass::CH),
            4 => Some(RecordClass::HS),
            254 => Some(RecordClass::NONE),
            255 => Some(RecordClass::ANY),
            _ => None,
        }
    }

    /// Splits a record's wire CLASS into `(cache_flush, class_code)`.
    pub fn split_cache_flush(wire: u16) -> (bool, u16) {
        (wire & CACHE_FLUSH_BIT != 0, wire & !CACHE_FLUSH_BIT)
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(RecordClass::IN),
            "CS" => Ok(RecordClass::CS),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            "NONE" => Ok(RecordClass::NONE),
            "ANY" => Ok(RecordClass::ANY),
            _ => Err(format!("Unknown record class: {}", s)),
        }
    }
}
