use crate::dns_record::{Question, ResourceRecord};
use serde::Serialize;

/// Length of the fixed DNS message header.
pub const HEADER_LEN: usize = 12;

/// The 12-byte message header, flags split into their individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub ad: bool,
    pub cd: bool,
    pub rcode: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn total_count(&self) -> u32 {
        self.question_count as u32
            + self.answer_count as u32
            + self.authority_count as u32
            + self.additional_count as u32
    }
}

/// A fully decoded message. Only ever produced whole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn is_response(&self) -> bool {
        self.header.qr
    }

    /// Answer, authority and additional records, in that order.
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authorities.iter())
            .chain(self.additionals.iter())
    }
}
