#![allow(dead_code)]

/// Assembles a wire-format message byte by byte.
///
/// Section counts are written explicitly through [`PacketBuilder::counts`], so a
/// test can declare more (or fewer) records than it actually appends.
pub struct PacketBuilder {
    buf: Vec<u8>,
}

impl PacketBuilder {
    /// Header with QR and AA set, the flag profile of an mDNS response.
    pub fn response() -> Self {
        Self::with_flags(0x84, 0x00)
    }

    /// Header with every flag clear, the flag profile of an mDNS query.
    pub fn query() -> Self {
        Self::with_flags(0x00, 0x00)
    }

    pub fn with_flags(b2: u8, b3: u8) -> Self {
        Self {
            buf: vec![0x00, 0x00, b2, b3, 0, 0, 0, 0, 0, 0, 0, 0],
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.buf[0..2].copy_from_slice(&id.to_be_bytes());
        self
    }

    pub fn counts(mut self, questions: u16, answers: u16, authorities: u16, additionals: u16) -> Self {
        self.buf[4..6].copy_from_slice(&questions.to_be_bytes());
        self.buf[6..8].copy_from_slice(&answers.to_be_bytes());
        self.buf[8..10].copy_from_slice(&authorities.to_be_bytes());
        self.buf[10..12].copy_from_slice(&additionals.to_be_bytes());
        self
    }

    /// Offset the next appended byte will land at.
    pub fn offset(&self) -> u16 {
        self.buf.len() as u16
    }

    /// Literal labels followed by the root label.
    pub fn name(mut self, name: &str) -> Self {
        self.buf.extend_from_slice(&encode_name(name));
        self
    }

    /// Literal labels terminated by a compression pointer instead of the root label.
    pub fn name_with_pointer(mut self, labels: &str, target: u16) -> Self {
        for label in labels.split('.').filter(|l| !l.is_empty()) {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.pointer(target)
    }

    pub fn pointer(mut self, target: u16) -> Self {
        self.buf.extend_from_slice(&(0xC000 | target).to_be_bytes());
        self
    }

    pub fn question_fields(mut self, qtype: u16, qclass: u16) -> Self {
        self.buf.extend_from_slice(&qtype.to_be_bytes());
        self.buf.extend_from_slice(&qclass.to_be_bytes());
        self
    }

    pub fn question(self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.name(name).question_fields(qtype, qclass)
    }

    /// TYPE, CLASS, TTL, RDLENGTH and RDATA of a record whose name was already written.
    pub fn record_fields(mut self, rtype: u16, class: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.buf.extend_from_slice(&rtype.to_be_bytes());
        self.buf.extend_from_slice(&class.to_be_bytes());
        self.buf.extend_from_slice(&ttl.to_be_bytes());
        self.buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        self.buf.extend_from_slice(rdata);
        self
    }

    pub fn record(self, name: &str, rtype: u16, class: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.name(name).record_fields(rtype, class, ttl, rdata)
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0x00);
    out
}

/// Length-prefixed TXT attribute spans.
pub fn txt_rdata(spans: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::new();
    for span in spans {
        out.push(span.len() as u8);
        out.extend_from_slice(span);
    }
    out
}

/// SRV fixed fields followed by an uncompressed target.
pub fn srv_rdata(priority: u16, weight: u16, port: u16, target: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&priority.to_be_bytes());
    out.extend_from_slice(&weight.to_be_bytes());
    out.extend_from_slice(&port.to_be_bytes());
    out.extend_from_slice(&encode_name(target));
    out
}

pub const TYPE_A: u16 = 1;
pub const TYPE_PTR: u16 = 12;
pub const TYPE_HINFO: u16 = 13;
pub const TYPE_TXT: u16 = 16;
pub const TYPE_AAAA: u16 = 28;
pub const TYPE_SRV: u16 = 33;
pub const CLASS_IN: u16 = 1;
pub const CLASS_IN_FLUSH: u16 = 0x8001;
