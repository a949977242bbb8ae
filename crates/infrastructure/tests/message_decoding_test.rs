use ferrous_mdns_domain::{DecodeError, DecoderConfig, RData, RecordClass, RecordType};
use ferrous_mdns_infrastructure::{decode, MessageDecoder};

mod helpers;
use helpers::*;

fn printer_announcement() -> Vec<u8> {
    let b = PacketBuilder::response().counts(0, 1, 0, 3);
    let service = b.offset();
    let b = b
        .name("_ipp._tcp.local")
        .record_fields(TYPE_PTR, CLASS_IN, 4500, &{
            let mut rdata = vec![7];
            rdata.extend_from_slice(b"Printer");
            rdata.extend_from_slice(&(0xC000 | service).to_be_bytes());
            rdata
        });
    // "Printer._ipp._tcp.local" starts at RDATA of the PTR, right after its 10 fixed bytes.
    let instance = service + encode_name("_ipp._tcp.local").len() as u16 + 10;
    let b = b.pointer(instance).record_fields(TYPE_SRV, CLASS_IN_FLUSH, 120, &{
        let mut rdata = vec![0, 0, 0, 0, 0x02, 0x77];
        rdata.extend_from_slice(&encode_name("printer.local"));
        rdata
    });
    let b = b.pointer(instance).record_fields(
        TYPE_TXT,
        CLASS_IN_FLUSH,
        4500,
        &txt_rdata(&[b"txtvers=1", b"rp=ipp/print", b"note="]),
    );
    b.record("printer.local", TYPE_A, CLASS_IN_FLUSH, 120, &[192, 168, 1, 50])
        .build()
}

#[test]
fn test_announcement_sections_and_records() {
    let message = decode(&printer_announcement()).unwrap();

    assert!(message.questions.is_empty());
    assert_eq!(message.answers.len(), 1);
    assert!(message.authorities.is_empty());
    assert_eq!(message.additionals.len(), 3);

    let ptr = &message.answers[0];
    assert_eq!(ptr.name, "_ipp._tcp.local");
    assert_eq!(ptr.type_name(), "PTR");
    assert_eq!(ptr.class_name(), "IN");
    assert!(!ptr.cache_flush);
    assert_eq!(ptr.ttl, 4500);
    assert_eq!(ptr.rdata, RData::Ptr("Printer._ipp._tcp.local".to_string()));

    let srv = &message.additionals[0];
    assert_eq!(srv.name, "Printer._ipp._tcp.local");
    assert!(srv.cache_flush);
    assert_eq!(srv.record_class, Some(RecordClass::IN));
    assert_eq!(
        srv.rdata,
        RData::Srv {
            priority: 0,
            weight: 0,
            port: 631,
            target: "printer.local".to_string(),
        }
    );

    let txt = &message.additionals[1];
    let attrs = txt.rdata.as_txt().unwrap();
    assert_eq!(attrs.get("txtvers").map(String::as_str), Some("1"));
    assert_eq!(attrs.get("rp").map(String::as_str), Some("ipp/print"));
    assert_eq!(attrs.get("note").map(String::as_str), Some(""));
    let raw = txt.raw_rdata.as_ref().unwrap();
    assert_eq!(raw.get("rp").map(Vec::as_slice), Some(&b"ipp/print"[..]));

    let a = &message.additionals[2];
    assert!(a.is_type(RecordType::A));
    assert_eq!(a.rdata, RData::A("192.168.1.50".to_string()));
    assert!(a.raw_rdata.is_none());
}

#[test]
fn test_records_iterates_in_section_order() {
    let message = decode(&printer_announcement()).unwrap();
    let types: Vec<&str> = message.records().map(|r| r.type_name()).collect();
    assert_eq!(types, vec!["PTR", "SRV", "TXT", "A"]);
}

#[test]
fn test_every_section_populated() {
    let buf = PacketBuilder::response()
        .counts(1, 1, 1, 1)
        .question("host.local", TYPE_A, CLASS_IN)
        .record("host.local", TYPE_A, CLASS_IN, 120, &[10, 0, 0, 1])
        .record("local", TYPE_PTR, CLASS_IN, 120, &encode_name("host.local"))
        .record("host.local", TYPE_HINFO, CLASS_IN, 120, b"\x05ARMv7\x05Linux")
        .build();

    let message = decode(&buf).unwrap();
    assert_eq!(message.questions.len(), 1);
    assert_eq!(message.questions[0].name, "host.local");
    assert_eq!(message.questions[0].type_name(), "A");
    assert_eq!(message.answers[0].rdata, RData::A("10.0.0.1".to_string()));
    assert_eq!(message.authorities[0].rdata, RData::Ptr("host.local".to_string()));
    assert_eq!(
        message.additionals[0].rdata,
        RData::Hinfo {
            cpu: "ARMv7".to_string(),
            os: Some("Linux".to_string()),
        }
    );
}

#[test]
fn test_unknown_type_falls_back_to_hex() {
    let buf = PacketBuilder::response()
        .counts(0, 2, 0, 0)
        .record("host.local", 9999, CLASS_IN, 60, &[0xDE, 0xAD, 0x01])
        .record("host.local", TYPE_A, CLASS_IN, 60, &[10, 0, 0, 1])
        .build();

    let message = decode(&buf).unwrap();
    let unknown = &message.answers[0];
    assert_eq!(unknown.record_type, None);
    assert_eq!(unknown.type_name(), "");
    assert_eq!(unknown.type_code, 9999);
    assert_eq!(unknown.rdata, RData::Other("de ad 01".to_string()));
    assert_eq!(message.answers[1].rdata, RData::A("10.0.0.1".to_string()));
}

#[test]
fn test_known_type_without_decoder_falls_back_to_hex() {
    let buf = PacketBuilder::response()
        .counts(0, 0, 0, 1)
        .name("")
        .record_fields(47, 1440, 0, &[0xC0, 0x0C])
        .build();

    let message = decode(&buf).unwrap();
    let nsec = &message.additionals[0];
    assert_eq!(nsec.name, "");
    assert_eq!(nsec.type_name(), "NSEC");
    assert_eq!(nsec.class_name(), "");
    assert_eq!(nsec.rdata, RData::Other("c0 0c".to_string()));
}

#[test]
fn test_empty_rdata_invalidates_message() {
    let buf = PacketBuilder::response()
        .counts(0, 2, 0, 1)
        .record("host.local", TYPE_A, CLASS_IN, 120, &[10, 0, 0, 1])
        .record("host.local", TYPE_A, CLASS_IN, 120, &[10, 0, 0, 2])
        .name("")
        .record_fields(41, 1440, 0, &[])
        .build();

    assert!(matches!(
        decode(&buf),
        Err(DecodeError::MalformedRdata { reason: "empty RDATA", .. })
    ));
}

#[test]
fn test_unknown_question_class_has_empty_name() {
    let buf = PacketBuilder::query()
        .counts(1, 0, 0, 0)
        .question("host.local", TYPE_A, 0x0042)
        .build();

    let message = decode(&buf).unwrap();
    assert_eq!(message.questions[0].class_name(), "");
    assert_eq!(message.questions[0].class_code, 0x0042);
}

#[test]
fn test_question_keeps_top_class_bit() {
    // In questions the top bit is the unicast-response bit, not cache-flush;
    // it is not masked, so the class does not resolve.
    let buf = PacketBuilder::query()
        .counts(1, 0, 0, 0)
        .question("host.local", TYPE_A, 0x8001)
        .build();

    let message = decode(&buf).unwrap();
    assert_eq!(message.questions[0].record_class, None);
    assert_eq!(message.questions[0].class_code, 0x8001);
}

#[test]
fn test_label_overrun_invalidates_whole_message() {
    let buf = PacketBuilder::response()
        .counts(0, 2, 0, 0)
        .record("host.local", TYPE_A, CLASS_IN, 120, &[10, 0, 0, 1])
        .bytes(&[10, b'a', b'b', b'c'])
        .build();

    assert!(matches!(
        decode(&buf),
        Err(DecodeError::LabelOutOfBounds { length: 10, .. })
    ));
}

#[test]
fn test_short_fixed_fields_invalidate_message() {
    let question = PacketBuilder::query()
        .counts(1, 0, 0, 0)
        .name("host.local")
        .bytes(&[0x00, 0x01, 0x00])
        .build();
    assert!(matches!(decode(&question), Err(DecodeError::Truncated { .. })));

    let record = PacketBuilder::response()
        .counts(0, 1, 0, 0)
        .name("host.local")
        .bytes(&[0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x78, 0x00])
        .build();
    assert!(matches!(decode(&record), Err(DecodeError::Truncated { .. })));
}

#[test]
fn test_rdlength_past_buffer_invalidates_message() {
    let buf = PacketBuilder::response()
        .counts(0, 1, 0, 0)
        .name("host.local")
        .bytes(&[0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x78, 0x00, 0x04, 10, 0])
        .build();
    assert!(matches!(decode(&buf), Err(DecodeError::Truncated { .. })));
}

#[test]
fn test_srv_without_target_invalidates_message() {
    let buf = PacketBuilder::response()
        .counts(0, 2, 0, 0)
        .record("host.local", TYPE_A, CLASS_IN, 120, &[10, 0, 0, 1])
        .record("_http._tcp.local", TYPE_SRV, CLASS_IN, 120, &[0, 0, 0, 0, 0, 80])
        .build();

    assert!(matches!(
        decode(&buf),
        Err(DecodeError::MalformedRdata { record_type: "SRV", .. })
    ));
}

#[test]
fn test_exhausted_buffer_ends_walk_leniently() {
    let buf = PacketBuilder::response()
        .counts(0, 3, 0, 2)
        .record("host.local", TYPE_A, CLASS_IN, 120, &[10, 0, 0, 1])
        .build();

    let message = decode(&buf).unwrap();
    assert_eq!(message.answers.len(), 1);
    assert!(message.additionals.is_empty());
    assert_eq!(message.header.answer_count, 3);
}

#[test]
fn test_exhausted_buffer_rejected_in_strict_mode() {
    let buf = PacketBuilder::response()
        .counts(0, 3, 0, 2)
        .record("host.local", TYPE_A, CLASS_IN, 120, &[10, 0, 0, 1])
        .build();

    let decoder = MessageDecoder::new(DecoderConfig {
        strict_section_counts: true,
        ..Default::default()
    });
    assert_eq!(
        decoder.decode(&buf),
        Err(DecodeError::IncompleteSections { remaining: 4 })
    );
}

#[test]
fn test_trailing_bytes_after_declared_records_ignored() {
    let buf = PacketBuilder::response()
        .counts(0, 1, 0, 0)
        .record("host.local", TYPE_A, CLASS_IN, 120, &[10, 0, 0, 1])
        .bytes(&[0xFF, 0xFF, 0xFF])
        .build();

    let message = decode(&buf).unwrap();
    assert_eq!(message.answers.len(), 1);
}

#[test]
fn test_decode_is_idempotent() {
    let buf = printer_announcement();
    let first = decode(&buf).unwrap();
    let second = decode(&buf).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_shared_decoder_across_threads() {
    let buf = printer_announcement();
    let decoder = MessageDecoder::default();
    let expected = decoder.decode(&buf).unwrap();

    let (decoder, buf) = (&decoder, &buf);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(move || decoder.decode(buf)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}
