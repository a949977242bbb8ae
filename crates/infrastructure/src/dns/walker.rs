use ferrous_mdns_domain::{
    DecodeError, DecoderConfig, Header, Message, Question, RecordClass, RecordType,
    ResourceRecord,
};
use smallvec::SmallVec;
use tracing::debug;

use super::name::read_name;
use super::rdata::decode_rdata;
use super::wire::{ensure, read_u16, read_u32};

/// TYPE + CLASS of a question.
const QUESTION_FIXED_LEN: usize = 4;
/// TYPE + CLASS + TTL + RDLENGTH of a resource record.
const RECORD_FIXED_LEN: usize = 10;

/// Message section a record belongs to, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Question,
    Answer,
    Authority,
    Additional,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        }
    }
}

/// Remaining records per section. The head is the section currently being read.
type SectionQueue = SmallVec<[(Section, u16); 4]>;

fn section_queue(header: &Header) -> SectionQueue {
    [
        (Section::Question, header.question_count),
        (Section::Answer, header.answer_count),
        (Section::Authority, header.authority_count),
        (Section::Additional, header.additional_count),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .collect()
}

/// Decodes every record declared by `header`, starting at `offset`.
///
/// The walk ends when the queue is drained. If the buffer runs out first the
/// walk ends early and, unless `strict_section_counts` is set, the records
/// read so far are returned. Any structural error fails the whole message.
pub fn walk_sections(
    buf: &[u8],
    header: &Header,
    mut offset: usize,
    config: &DecoderConfig,
) -> Result<Message, DecodeError> {
    let mut queue = section_queue(header);
    let mut message = Message {
        header: *header,
        ..Default::default()
    };

    while let Some(&(section, _)) = queue.first() {
        if offset >= buf.len() {
            let remaining: u32 = queue.iter().map(|(_, count)| *count as u32).sum();
            if config.strict_section_counts {
                return Err(DecodeError::IncompleteSections { remaining });
            }
            debug!(
                section = section.as_str(),
                remaining, "Buffer exhausted before all declared records were read"
            );
            break;
        }

        let name = read_name(buf, offset, config.max_pointer_hops)?;
        offset += name.consumed;

        match section {
            Section::Question => {
                let question = read_question(buf, &mut offset, name.name)?;
                message.questions.push(question);
            }
            Section::Answer => message
                .answers
                .push(read_record(buf, &mut offset, name.name, config)?),
            Section::Authority => message
                .authorities
                .push(read_record(buf, &mut offset, name.name, config)?),
            Section::Additional => message
                .additionals
                .push(read_record(buf, &mut offset, name.name, config)?),
        }

        let head = &mut queue[0];
        head.1 -= 1;
        if head.1 == 0 {
            queue.remove(0);
        }
    }

    Ok(message)
}

fn read_question(buf: &[u8], offset: &mut usize, name: String) -> Result<Question, DecodeError> {
    ensure(buf, *offset, QUESTION_FIXED_LEN)?;
    let type_code = read_u16(buf, *offset)?;
    let class_code = read_u16(buf, *offset + 2)?;
    *offset += QUESTION_FIXED_LEN;
    Ok(Question::new(name, type_code, class_code))
}

fn read_record(
    buf: &[u8],
    offset: &mut usize,
    name: String,
    config: &DecoderConfig,
) -> Result<ResourceRecord, DecodeError> {
    ensure(buf, *offset, RECORD_FIXED_LEN)?;
    let type_code = read_u16(buf, *offset)?;
    let (cache_flush, class_code) = RecordClass::split_cache_flush(read_u16(buf, *offset + 2)?);
    let ttl = read_u32(buf, *offset + 4)?;
    let rdlength = read_u16(buf, *offset + 8)? as usize;
    *offset += RECORD_FIXED_LEN;

    let record_type = RecordType::from_u16(type_code);
    let decoded = decode_rdata(buf, *offset, rdlength, record_type, config.max_pointer_hops)?;
    *offset += rdlength;

    Ok(ResourceRecord {
        name,
        record_type,
        record_class: RecordClass::from_u16(class_code),
        type_code,
        class_code,
        cache_flush,
        ttl,
        rdata: decoded.rdata,
        raw_rdata: decoded.raw,
    })
}
