use super::{RecordClass, RecordType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Decoded RDATA payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RData {
    /// Dotted-decimal, one component per RDATA byte.
    A(String),
    /// Colon-separated groups of four hex digits.
    Aaaa(String),
    Ptr(String),
    Txt(BTreeMap<String, String>),
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Hinfo {
        cpu: String,
        os: Option<String>,
    },
    /// Space-separated two-digit hex dump of an unrecognized payload.
    Other(String),
}

impl RData {
    pub fn as_txt(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            RData::Txt(map) => Some(map),
            _ => None,
        }
    }

    /// The domain name carried by the payload, if any (PTR target or SRV target).
    pub fn target(&self) -> Option<&str> {
        match self {
            RData::Ptr(name) => Some(name),
            RData::Srv { target, .. } => Some(target),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub name: String,
    pub record_type: Option<RecordType>,
    pub record_class: Option<RecordClass>,
    pub type_code: u16,
    pub class_code: u16,
}

impl Question {
    pub fn new(name: String, type_code: u16, class_code: u16) -> Self {
        Self {
            name,
            record_type: RecordType::from_u16(type_code),
            record_class: RecordClass::from_u16(class_code),
            type_code,
            class_code,
        }
    }

    /// Mnemonic of the question TYPE, or `""` when the code is not in the table.
    pub fn type_name(&self) -> &'static str {
        self.record_type.map(|t| t.as_str()).unwrap_or_default()
    }

    pub fn class_name(&self) -> &'static str {
        self.record_class.map(|c| c.as_str()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: Option<RecordType>,
    pub record_class: Option<RecordClass>,
    pub type_code: u16,
    /// CLASS with the cache-flush bit already masked off.
    pub class_code: u16,
    pub cache_flush: bool,
    pub ttl: u32,
    pub rdata: RData,
    /// Raw value bytes per TXT key; present only for TXT records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_rdata: Option<BTreeMap<String, Vec<u8>>>,
}

impl ResourceRecord {
    pub fn type_name(&self) -> &'static str {
        self.record_type.map(|t| t.as_str()).unwrap_or_default()
    }

    pub fn class_name(&self) -> &'static str {
        self.record_class.map(|c| c.as_str()).unwrap_or_default()
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type == Some(record_type)
    }
}
