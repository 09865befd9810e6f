//! End-to-end tests of the message codec against fixed wire captures.

use dnswire::base::iana::{Rcode, Rtype};
use dnswire::base::{
    DecodeError, HeaderSection, Message, ProtocolError, Question,
};

/// The question section of a query for example.com IN A.
const QUESTION_WIRE: &[u8] = b"\x07example\x03com\x00\x00\x01\x00\x01";

/// Builds the wire format of a response to `query`.
///
/// The response carries the answer records given as (type, TTL, data)
/// triples, with their owner names compressed to the question name.
fn respond(query: &Message, answers: &[(Rtype, u32, &[u8])]) -> Vec<u8> {
    let mut wire = Vec::new();
    let mut section = HeaderSection::new();
    section.header_mut().set_id(query.id());
    section.header_mut().set_qr(true);
    section.header_mut().set_ra(true);
    section.counts_mut().set_qdcount(1);
    section.counts_mut().set_ancount(answers.len() as u16);
    section.compose(&mut wire);
    query.question().compose(&mut wire);
    for &(rtype, ttl, data) in answers {
        wire.extend_from_slice(b"\xc0\x0c");
        rtype.compose(&mut wire);
        wire.extend_from_slice(b"\x00\x01");
        wire.extend_from_slice(&ttl.to_be_bytes());
        wire.extend_from_slice(&(data.len() as u16).to_be_bytes());
        wire.extend_from_slice(data);
    }
    wire
}

#[test]
fn query_wire_format() {
    let query = Message::query("example.com", "A").unwrap();
    let wire = query.compose().unwrap();

    assert_eq!(wire.len(), 12 + QUESTION_WIRE.len());
    assert_eq!(wire[..2], query.id().to_be_bytes());
    // QR clear, opcode QUERY, RD set; zero RA/Z/RCODE.
    assert_eq!(&wire[2..4], b"\x01\x00");
    // One question, nothing in the other sections.
    assert_eq!(&wire[4..12], b"\x00\x01\x00\x00\x00\x00\x00\x00");
    assert_eq!(&wire[12..], QUESTION_WIRE);
}

#[test]
fn queries_differ_only_in_id() {
    let first = Message::query("example.com", "A").unwrap();
    let second = Message::query("example.com", "A").unwrap();
    assert_eq!(
        first.compose().unwrap()[2..],
        second.compose().unwrap()[2..]
    );
}

#[test]
fn exchange_with_compressed_answer() {
    let query = Message::query("example.com", "A").unwrap();
    let wire =
        respond(&query, &[(Rtype::A, 3600, b"\x5d\xb8\xd8\x22")]);

    let response =
        Message::parse_response(&wire, query.id(), query.question())
            .unwrap();
    assert!(response.no_error());
    assert_eq!(response.answers().len(), 1);

    let answer = &response.answers()[0];
    assert_eq!(answer.owner(), query.question().qname());
    assert_eq!(answer.ttl(), 3600);
    assert_eq!(
        answer.to_ipv4(),
        Some("93.184.216.34".parse().unwrap())
    );
}

#[test]
fn exchange_with_multiple_answers() {
    let query = Message::query("example.com", "AAAA").unwrap();
    let first = "2606:2800:220:1:248:1893:25c8:1946"
        .parse::<std::net::Ipv6Addr>()
        .unwrap();
    let second = "2606:2800:220:1:248:1893:25c8:1947"
        .parse::<std::net::Ipv6Addr>()
        .unwrap();
    let wire = respond(
        &query,
        &[
            (Rtype::AAAA, 300, &first.octets()),
            (Rtype::AAAA, 300, &second.octets()),
        ],
    );

    let response =
        Message::parse_response(&wire, query.id(), query.question())
            .unwrap();
    let addrs: Vec<_> = response
        .answers()
        .iter()
        .filter_map(|record| record.to_ipv6())
        .collect();
    assert_eq!(addrs, [first, second]);
}

#[test]
fn response_with_wrong_id_is_rejected() {
    let query = Message::query("example.com", "A").unwrap();
    let wire =
        respond(&query, &[(Rtype::A, 3600, b"\x5d\xb8\xd8\x22")]);

    assert_eq!(
        Message::parse_response(
            &wire,
            query.id().wrapping_add(1),
            query.question(),
        ),
        Err(ProtocolError::TransactionMismatch.into())
    );
}

#[test]
fn response_to_another_question_is_rejected() {
    let query = Message::query("example.com", "A").unwrap();
    let wire =
        respond(&query, &[(Rtype::A, 3600, b"\x5d\xb8\xd8\x22")]);

    let other = Question::new_in("example.org".parse().unwrap(), Rtype::A);
    assert_eq!(
        Message::parse_response(&wire, query.id(), &other),
        Err(ProtocolError::QuestionMismatch.into())
    );
}

#[test]
fn nxdomain_parses_and_is_surfaced() {
    let query = Message::query("no-such-name.example", "A").unwrap();
    let mut wire = respond(&query, &[]);
    wire[3] |= Rcode::NXDOMAIN.to_int();

    let response =
        Message::parse_response(&wire, query.id(), query.question())
            .unwrap();
    assert_eq!(response.rcode(), Rcode::NXDOMAIN);
    assert_eq!(
        response.server_error(),
        Some(ProtocolError::ServerError(Rcode::NXDOMAIN))
    );
    assert!(response.answers().is_empty());
}

#[test]
fn every_truncation_is_detected() {
    let query = Message::query("example.com", "A").unwrap();
    let wire =
        respond(&query, &[(Rtype::A, 3600, b"\x5d\xb8\xd8\x22")]);

    for len in 0..wire.len() {
        assert_eq!(
            Message::parse_response(
                &wire[..len],
                query.id(),
                query.question(),
            ),
            Err(DecodeError::Truncated.into()),
            "prefix of {} octets",
            len
        );
    }
}
