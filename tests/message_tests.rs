use std::borrow::Cow;
use std::net::Ipv4Addr;

use dns_wire::{
    rdata::{RData, A, DNSKEY, NSEC, OPT, RRSIG, TXT, TypeBitMap},
    DnsWireError, Name, Packet, PacketFlag, Question, ResourceRecord, CLASS, TYPE,
};

#[test]
fn parse_reply_groups_answers_into_one_set() -> Result<(), DnsWireError> {
    let bytes = b"\x00\x03\x81\x80\x00\x01\x00\x0b\x00\x00\x00\x00\x06\x67\x6f\x6f\x67\x6c\x65\x03\x63\x6f\x6d\x00\
        \x00\x01\x00\x01\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x23\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\
        \x00\x04\x4a\x7d\xec\x25\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x27\xc0\x0c\x00\x01\x00\x01\x00\x00\
        \x00\x04\x00\x04\x4a\x7d\xec\x20\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x28\xc0\x0c\x00\x01\x00\x01\
        \x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x21\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x29\xc0\x0c\x00\x01\
        \x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x22\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x24\xc0\x0c\
        \x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x2e\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x26";

    let packet = Packet::parse(bytes)?;

    assert!(packet.header.has_flags(PacketFlag::RESPONSE));
    assert_eq!(1, packet.questions.len());

    // all eleven answers share owner, class and type
    assert_eq!(1, packet.answers.len());
    let set = &packet.answers[0];
    assert_eq!("google.com.", set.name().to_string());
    assert_eq!(CLASS::IN, set.class());
    assert_eq!(TYPE::A, set.rr_type());
    assert_eq!(11, set.records().len());
    assert_eq!(11, packet.header.answers);

    match &set.records()[0].rdata {
        RData::A(a) => assert_eq!(Ipv4Addr::new(74, 125, 236, 35), a.address),
        _ => panic!("invalid RDATA"),
    }

    Ok(())
}

#[test]
fn rebuild_is_uncompressed_but_equivalent() -> Result<(), DnsWireError> {
    let bytes = b"\x00\x03\x81\x80\x00\x01\x00\x02\x00\x00\x00\x00\x06\x67\x6f\x6f\x67\x6c\x65\x03\x63\x6f\x6d\x00\
        \x00\x01\x00\x01\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d\xec\x23\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\
        \x00\x04\x4a\x7d\xec\x25";

    let packet = Packet::parse(bytes)?;
    let rebuilt = packet.build_bytes_vec()?;

    assert!(rebuilt.len() > bytes.len());
    assert_eq!(packet, Packet::parse(&rebuilt)?);

    Ok(())
}

#[test]
fn grouping_ignores_owner_name_case() -> Result<(), DnsWireError> {
    let bytes = b"\x00\x01\x81\x80\x00\x00\x00\x02\x00\x00\x00\x00\
        \x07Example\x03com\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\x01\x02\x03\x04\
        \x07example\x03COM\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\x05\x06\x07\x08";

    let packet = Packet::parse(bytes)?;

    assert_eq!(1, packet.answers.len());
    assert_eq!(2, packet.answers[0].records().len());
    assert_eq!(2, packet.header.answers);

    Ok(())
}

#[test]
fn parse_rejects_forward_compression_pointer() {
    // the answer name points past its own position
    let bytes = b"\x00\x01\x81\x80\x00\x00\x00\x01\x00\x00\x00\x00\
        \xc0\x20\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\x01\x02\x03\x04";

    assert_eq!(
        Err(DnsWireError::InvalidCompressionPointer),
        Packet::parse(bytes)
    );
}

#[test]
fn parse_rejects_truncated_message() {
    let bytes = b"\x00\x03\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\x06\x67\x6f\x6f\x67\x6c\x65\x03\x63\x6f\x6d\x00\
        \x00\x01\x00\x01\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x04\x00\x04\x4a\x7d";

    assert_eq!(Err(DnsWireError::InsufficientData), Packet::parse(bytes));
}

#[test]
fn opt_record_round_trip_forces_dnssec_ok() -> Result<(), DnsWireError> {
    let mut query = Packet::new_query(42);
    query.add_question(Question::new(
        "example.com".try_into()?,
        TYPE::A.into(),
        CLASS::IN.into(),
    ));
    query.add_additional_record(ResourceRecord::new(
        Name::root(),
        CLASS::IN,
        0,
        RData::OPT(OPT {
            udp_payload_size: 4096,
            extended_rcode: 0,
            version: 0,
            flags: 0,
            data: Cow::Borrowed(&[]),
        }),
    ))?;

    let bytes = query.build_bytes_vec()?;
    let parsed = Packet::parse(&bytes)?;

    assert_eq!(1, parsed.header.additional_records);
    let opt = parsed.opt().expect("missing OPT record");
    assert_eq!(4096, opt.udp_payload_size);
    assert_eq!(0, opt.extended_rcode);
    assert_eq!(0, opt.version);
    assert!(opt.dnssec_ok());

    Ok(())
}

#[test]
fn unknown_record_type_passes_through_untouched() -> Result<(), DnsWireError> {
    // one answer of type 65280 with opaque rdata, written without compression
    let bytes = b"\x00\x01\x81\x80\x00\x00\x00\x01\x00\x00\x00\x00\
        \x07example\x03com\x00\xff\x00\x00\x01\x00\x00\x00\x3c\x00\x04\xde\xad\xbe\xef";

    let packet = Packet::parse(bytes)?;

    let record = &packet.answers[0].records()[0];
    assert_eq!(TYPE::Unknown(65280), record.rdata.type_code());
    assert_eq!(b"\xde\xad\xbe\xef", record.rdata_bytes());
    match &record.rdata {
        RData::Unknown(65280, opaque) => assert_eq!(b"\xde\xad\xbe\xef", &*opaque.data),
        _ => panic!("invalid RDATA"),
    }

    // the input has no compression pointers, the rebuild is byte identical
    assert_eq!(&bytes[..], &packet.build_bytes_vec()?[..]);

    Ok(())
}

#[test]
fn dnssec_records_survive_a_round_trip() -> Result<(), DnsWireError> {
    let mut reply = Packet::new_reply(7);
    reply.header.set_flags(PacketFlag::AUTHENTIC_DATA);

    let dnskey = DNSKEY {
        flags: 257,
        protocol: 3,
        algorithm: 8,
        public_key: Cow::Borrowed(&[0x01, 0x02]),
    };
    let key_tag = dnskey.key_tag();

    reply.add_answer(ResourceRecord::new(
        "example.com".try_into()?,
        CLASS::IN,
        3600,
        RData::DNSKEY(dnskey),
    ));
    reply.add_answer(ResourceRecord::new(
        "a.example.com".try_into()?,
        CLASS::IN,
        3600,
        RData::RRSIG(RRSIG {
            type_covered: 1,
            algorithm: 8,
            labels: 2,
            original_ttl: 3600,
            signature_expiration: 1048354263,
            signature_inception: 1045762263,
            key_tag,
            signer_name: "example.com".try_into()?,
            signature: Cow::Borrowed(b"TEST"),
        }),
    ));
    reply.add_name_server(ResourceRecord::new(
        "example.com".try_into()?,
        CLASS::IN,
        3600,
        RData::NSEC(NSEC {
            next_name: "host.example.com".try_into()?,
            type_bit_maps: vec![TypeBitMap {
                window_block: 0,
                bitmap: vec![0x42].into(),
            }],
        }),
    ));

    let bytes = reply.build_bytes_vec()?;
    let parsed = Packet::parse(&bytes)?;
    assert_eq!(reply, parsed);

    match &parsed.answers[1].records()[0].rdata {
        RData::RRSIG(rrsig) => {
            assert_eq!(key_tag, rrsig.key_tag);
            assert!(rrsig.is_wildcard(&"a.example.com".try_into()?));
        }
        _ => panic!("invalid RDATA"),
    }

    match &parsed.name_servers[0].records()[0].rdata {
        RData::NSEC(nsec) => assert_eq!(vec![TYPE::A, TYPE::SOA], nsec.types()),
        _ => panic!("invalid RDATA"),
    }

    Ok(())
}

#[test]
fn txt_record_round_trip_through_a_message() -> Result<(), DnsWireError> {
    let mut reply = Packet::new_reply(9);
    reply.add_answer(ResourceRecord::new(
        "example.com".try_into()?,
        CLASS::IN,
        300,
        RData::TXT(TXT::new().with_string("v=spf1 -all")?),
    ));

    let bytes = reply.build_bytes_vec()?;
    let parsed = Packet::parse(&bytes)?;

    match &parsed.answers[0].records()[0].rdata {
        RData::TXT(txt) => {
            assert_eq!(1, txt.strings().len());
            assert_eq!(b"v=spf1 -all", txt.strings()[0].data());
        }
        _ => panic!("invalid RDATA"),
    }

    Ok(())
}

#[test]
fn strict_address_record_lengths() {
    // A record with rdlength 3
    let bytes = b"\x00\x01\x81\x80\x00\x00\x00\x01\x00\x00\x00\x00\
        \x07example\x03com\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x03\x01\x02\x03";

    assert_eq!(Err(DnsWireError::InvalidRecordLength), Packet::parse(bytes));
}

#[test]
fn invalid_record_class_is_an_error() {
    let bytes = b"\x00\x01\x81\x80\x00\x00\x00\x01\x00\x00\x00\x00\
        \x07example\x03com\x00\x00\x01\x00\x09\x00\x00\x00\x3c\x00\x04\x01\x02\x03\x04";

    assert_eq!(Err(DnsWireError::InvalidClass(9)), Packet::parse(bytes));
}

#[test]
fn equality_ignores_ttl_but_not_rdata() -> Result<(), DnsWireError> {
    let record = |ttl, address| {
        ResourceRecord::new(
            Name::new_unchecked("example.com"),
            CLASS::IN,
            ttl,
            RData::A(A { address }),
        )
    };

    assert_eq!(
        record(300, Ipv4Addr::new(10, 0, 0, 1)),
        record(60, Ipv4Addr::new(10, 0, 0, 1))
    );
    assert_ne!(
        record(300, Ipv4Addr::new(10, 0, 0, 1)),
        record(300, Ipv4Addr::new(10, 0, 0, 2))
    );

    Ok(())
}
