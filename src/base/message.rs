//! DNS messages.
//!
//! This module provides [`Message`], the structured in-memory
//! representation of a DNS message: the header, exactly one question, and
//! the three record sections. A query message is built via
//! [`QueryBuilder`][super::message_builder::QueryBuilder] and serialized
//! with [`Message::compose`]; a response message is produced from raw
//! octets by [`Message::parse_response`], which also enforces the
//! query/response contract.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::Rcode;
use super::question::Question;
use super::record::Record;
use super::wire::{DecodeError, EncodeError, Parser};
use core::fmt;

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// A message is immutable once built. Values produced by
/// [`parse_response`][Self::parse_response] own all their data; nothing
/// borrows from the buffer the message was decoded from.
///
/// The section counts of the header are not stored: they are derived from
/// the actual section lengths whenever the message is composed, so they
/// can never disagree with the sections themselves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    /// The message ID and flags.
    header: Header,

    /// The single question of the message.
    question: Question,

    /// The records of the answer section.
    answers: Vec<Record>,

    /// The records of the authority section.
    authorities: Vec<Record>,

    /// The records of the additional section.
    additionals: Vec<Record>,
}

impl Message {
    /// Creates a message from a header and a question with empty record
    /// sections.
    pub(super) fn new(header: Header, question: Question) -> Self {
        Message {
            header,
            question,
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }
}

/// # Field Access
///
impl Message {
    /// Returns the message header.
    #[must_use]
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns the message ID.
    #[must_use]
    pub fn id(&self) -> u16 {
        self.header.id()
    }

    /// Returns the section counts the message composes to.
    #[must_use]
    pub fn counts(&self) -> HeaderCounts {
        let mut res = HeaderCounts::new();
        res.set_qdcount(1);
        res.set_ancount(self.answers.len() as u16);
        res.set_nscount(self.authorities.len() as u16);
        res.set_arcount(self.additionals.len() as u16);
        res
    }

    /// Returns a reference to the question of the message.
    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Returns the records of the answer section.
    #[must_use]
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the records of the authority section.
    #[must_use]
    pub fn authorities(&self) -> &[Record] {
        &self.authorities
    }

    /// Returns the records of the additional section.
    #[must_use]
    pub fn additionals(&self) -> &[Record] {
        &self.additionals
    }

    /// Returns the response code of the message.
    #[must_use]
    pub fn rcode(&self) -> Rcode {
        self.header.rcode()
    }

    /// Returns whether the response code is NOERROR.
    #[must_use]
    pub fn no_error(&self) -> bool {
        self.rcode().is_no_error()
    }

    /// Returns whether the response code is one of the error values.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.no_error()
    }

    /// Returns the server-reported error of the message, if any.
    ///
    /// A non-zero response code is not a parse failure: the server
    /// answered, just not with what was asked for. Whether an error
    /// response with zero records is terminal is the caller's decision,
    /// so [`parse_response`][Self::parse_response] surfaces the condition
    /// here instead of failing.
    #[must_use]
    pub fn server_error(&self) -> Option<ProtocolError> {
        if self.is_error() {
            Some(ProtocolError::ServerError(self.rcode()))
        } else {
            None
        }
    }
}

/// # Parsing and Composing
///
impl Message {
    /// Returns the wire format of the message.
    ///
    /// The output is the header section with the counts derived from the
    /// actual sections, the question, and then the answer, authority, and
    /// additional records in that order. Serialization is deterministic:
    /// two messages differing only in their ID compose to octets
    /// differing only in the two ID octets.
    pub fn compose(&self) -> Result<Vec<u8>, EncodeError> {
        let record_count = self.answers.len()
            + self.authorities.len()
            + self.additionals.len();
        if self.answers.len() > usize::from(u16::MAX)
            || self.authorities.len() > usize::from(u16::MAX)
            || self.additionals.len() > usize::from(u16::MAX)
        {
            return Err(EncodeError::FieldOutOfRange);
        }

        let mut section = HeaderSection::new();
        *section.header_mut() = self.header;
        *section.counts_mut() = self.counts();

        let mut target = Vec::with_capacity(
            HeaderSection::LEN + self.question.qname().len() + 4
                + record_count * 16,
        );
        section.compose(&mut target);
        self.question.compose(&mut target);
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.compose(&mut target)?;
        }
        Ok(target)
    }

    /// Parses a response to a previously sent query.
    ///
    /// Beyond decoding, this enforces the query/response contract. The
    /// response must carry the transaction ID of the query
    /// ([`ProtocolError::TransactionMismatch`] otherwise; on a shared
    /// UDP socket this typically means "ignore and keep waiting", since
    /// delayed or off-path packets are expected). It must have the QR bit
    /// set ([`ProtocolError::NotAResponse`]) and echo the question that
    /// was asked ([`ProtocolError::QuestionMismatch`], also used when the
    /// response does not carry exactly one question). The declared number
    /// of answer, authority, and additional records must all be present,
    /// or decoding fails with [`DecodeError::Truncated`].
    ///
    /// A non-zero response code does not fail the parse; see
    /// [`server_error`][Self::server_error].
    pub fn parse_response(
        octets: &[u8],
        expected_id: u16,
        expected_question: &Question,
    ) -> Result<Self, ResponseError> {
        let mut parser = Parser::new(octets);
        let section = HeaderSection::parse(&mut parser)?;
        let header = *section.header();
        if header.id() != expected_id {
            return Err(ProtocolError::TransactionMismatch.into());
        }
        if !header.qr() {
            return Err(ProtocolError::NotAResponse.into());
        }
        if section.counts().qdcount() != 1 {
            return Err(ProtocolError::QuestionMismatch.into());
        }
        let question = Question::parse(&mut parser)?;
        if question != *expected_question {
            return Err(ProtocolError::QuestionMismatch.into());
        }
        Ok(Message {
            header,
            question,
            answers: Self::parse_records(
                &mut parser,
                section.counts().ancount(),
            )?,
            authorities: Self::parse_records(
                &mut parser,
                section.counts().nscount(),
            )?,
            additionals: Self::parse_records(
                &mut parser,
                section.counts().arcount(),
            )?,
        })
    }

    /// Parses `count` records from `parser`.
    fn parse_records(
        parser: &mut Parser<'_>,
        count: u16,
    ) -> Result<Vec<Record>, DecodeError> {
        let mut res = Vec::with_capacity(usize::from(count).min(64));
        for _ in 0..count {
            res.push(Record::parse(parser)?);
        }
        Ok(res)
    }
}

//============ Error Types ===================================================

//------------ ProtocolError -------------------------------------------------

/// A syntactically valid message violated the query/response contract.
///
/// This is deliberately distinct from [`DecodeError`]: the octets were
/// well-formed, they just did not belong to the query in question or
/// reported a server-side failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProtocolError {
    /// The response did not carry the transaction ID of the query.
    TransactionMismatch,

    /// The QR bit of the message says it is a query, not a response.
    NotAResponse,

    /// The response did not echo the question that was asked.
    QuestionMismatch,

    /// The server reported an error via a non-zero response code.
    ServerError(Rcode),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ProtocolError::TransactionMismatch => {
                f.write_str("transaction ID mismatch")
            }
            ProtocolError::NotAResponse => {
                f.write_str("message is not a response")
            }
            ProtocolError::QuestionMismatch => {
                f.write_str("response question does not match query")
            }
            ProtocolError::ServerError(rcode) => {
                write!(f, "server returned {}", rcode)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

//------------ ResponseError -------------------------------------------------

/// Parsing a response failed.
///
/// The two halves keep the failure modes apart: [`Decode`][Self::Decode]
/// means the octets were malformed or truncated, while
/// [`Protocol`][Self::Protocol] means they formed a valid message that
/// does not belong to the query. Callers retrying over another transport
/// care about the former; callers multiplexing a socket care about the
/// latter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResponseError {
    /// The octets could not be decoded.
    Decode(DecodeError),

    /// The message violated the query/response contract.
    Protocol(ProtocolError),
}

//--- From

impl From<DecodeError> for ResponseError {
    fn from(err: DecodeError) -> Self {
        ResponseError::Decode(err)
    }
}

impl From<ProtocolError> for ResponseError {
    fn from(err: ProtocolError) -> Self {
        ResponseError::Protocol(err)
    }
}

//--- Display and Error

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ResponseError::Decode(ref err) => err.fmt(f),
            ResponseError::Protocol(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ResponseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            ResponseError::Decode(ref err) => Some(err),
            ResponseError::Protocol(ref err) => Some(err),
        }
    }
}

//============ Testing ======================================================
