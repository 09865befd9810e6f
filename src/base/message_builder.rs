//! Building a query message.
//!
//! Outgoing messages in this crate are always queries, so instead of a
//! general message builder there is only [`QueryBuilder`]. It validates
//! its caller-facing string inputs up front, lets the standard query
//! flags be adjusted, and produces a finished [`Message`] with a fresh
//! random transaction ID.
//!
//! For the common case there is the [`Message::query`] shortcut:
//!
//! ```
//! use dnswire::base::Message;
//!
//! let query = Message::query("example.com", "A").unwrap();
//! let wire = query.compose().unwrap();
//! ```

use super::header::{Flags, Header};
use super::iana::Rtype;
use super::message::Message;
use super::name::Name;
use super::question::Question;
use core::fmt;

//------------ QueryBuilder --------------------------------------------------

/// A builder for a DNS query message.
///
/// The hostname and query type are validated by [`new`][Self::new], so
/// once a builder exists, finishing it cannot fail. Recursion is
/// requested by default; stub queries without it are rarely useful.
#[derive(Clone, Debug)]
pub struct QueryBuilder {
    /// The question the query will carry.
    question: Question,

    /// Whether to set the RD bit in the query.
    recursion_desired: bool,
}

impl QueryBuilder {
    /// Creates a builder for a query for `qtype` records of `hostname`.
    ///
    /// The hostname uses the usual dotted presentation format and the
    /// query type its IANA mnemonic, e.g. `"A"` or `"AAAA"`. The class is
    /// always IN.
    pub fn new(
        hostname: &str,
        qtype: &str,
    ) -> Result<Self, ValidationError> {
        let qname = hostname
            .parse::<Name>()
            .map_err(|_| ValidationError::InvalidHostname)?;
        let qtype = Rtype::from_mnemonic(qtype.as_bytes())
            .ok_or(ValidationError::UnknownQueryType)?;
        Ok(QueryBuilder {
            question: Question::new_in(qname, qtype),
            recursion_desired: true,
        })
    }

    /// Returns a reference to the question of the query.
    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Sets whether the query requests recursive service.
    pub fn set_recursion_desired(&mut self, value: bool) {
        self.recursion_desired = value;
    }

    /// Finishes the builder into a query message.
    ///
    /// The message gets a freshly generated random transaction ID each
    /// time, so building the same query twice yields messages that differ
    /// only in their ID.
    #[must_use]
    pub fn finish(self) -> Message {
        let mut header = Header::new();
        header.set_random_id();
        let mut flags = Flags::new();
        flags.rd = self.recursion_desired;
        // Flags::new() is a standard query, so the flags are in range.
        let _ = header.set_flags(flags);
        Message::new(header, self.question)
    }
}

impl Message {
    /// Creates a query for `qtype` records of `hostname`.
    ///
    /// This is a shortcut for running a [`QueryBuilder`] with its default
    /// settings.
    pub fn query(
        hostname: &str,
        qtype: &str,
    ) -> Result<Self, ValidationError> {
        Ok(QueryBuilder::new(hostname, qtype)?.finish())
    }
}

//------------ ValidationError -----------------------------------------------

/// A query could not be built from its string inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// The hostname is not a valid domain name.
    InvalidHostname,

    /// The query type mnemonic is not known.
    UnknownQueryType,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValidationError::InvalidHostname => {
                f.write_str("invalid hostname")
            }
            ValidationError::UnknownQueryType => {
                f.write_str("unknown query type")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Opcode, Rcode};

    #[test]
    fn build_query() {
        let query = Message::query("example.com", "A").unwrap();
        let header = query.header();
        assert!(!header.qr());
        assert_eq!(header.opcode(), Opcode::QUERY);
        assert!(header.rd());
        assert!(!header.aa());
        assert!(!header.tc());
        assert!(!header.ra());
        assert_eq!(header.z(), 0);
        assert_eq!(header.rcode(), Rcode::NOERROR);
        assert_eq!(query.counts().qdcount(), 1);
        assert_eq!(query.counts().ancount(), 0);
        assert_eq!(query.question().qname(), &"example.com".parse().unwrap());
        assert_eq!(query.question().qtype(), Rtype::A);
        assert_eq!(query.question().qclass(), Class::IN);
    }

    #[test]
    fn random_ids() {
        // Sixteen bits of randomness may collide now and then but not
        // sixteen times in a row.
        let first = Message::query("example.com", "A").unwrap().id();
        assert!((0..16).any(|_| {
            Message::query("example.com", "A").unwrap().id() != first
        }));
    }

    #[test]
    fn recursion_flag() {
        let mut builder = QueryBuilder::new("example.com", "MX").unwrap();
        builder.set_recursion_desired(false);
        assert!(!builder.finish().header().rd());
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            QueryBuilder::new("", "A").unwrap_err(),
            ValidationError::InvalidHostname
        );
        assert_eq!(
            QueryBuilder::new("example..com", "A").unwrap_err(),
            ValidationError::InvalidHostname
        );
        assert_eq!(
            QueryBuilder::new("example.com", "BOGUS").unwrap_err(),
            ValidationError::UnknownQueryType
        );
    }

    #[test]
    fn mnemonic_case() {
        let builder = QueryBuilder::new("example.com", "aaaa").unwrap();
        assert_eq!(builder.question().qtype(), Rtype::AAAA);
    }
}
