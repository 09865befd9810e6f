//! A single question in a DNS message.
//!
//! In DNS, a question describes what is requested in a query: a domain
//! name, a record type, and a class. The server echoes the question back
//! in its response, which lets a caller check that a response actually
//! belongs to the query it sent.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{DecodeError, Parser};
use core::fmt;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// Equality uses the name's case-insensitive comparison, so a question
/// echoed with randomized letter case still matches.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the question.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three components.
    #[must_use]
    pub fn new(qname: Name, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming
    /// class IN.
    #[must_use]
    pub fn new_in(qname: Name, qtype: Rtype) -> Self {
        Question {
            qname,
            qtype,
            qclass: Class::IN,
        }
    }

    /// Converts the question into its domain name.
    #[must_use]
    pub fn into_qname(self) -> Name {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain name of the question.
    #[must_use]
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    #[must_use]
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    #[must_use]
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question {
    /// Takes a question from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, DecodeError> {
        Ok(Question {
            qname: Name::parse(parser)?,
            qtype: Rtype::parse(parser)?,
            qclass: Class::parse(parser)?,
        })
    }

    /// Appends the wire format of the question to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) {
        self.qname.compose(target);
        self.qtype.compose(target);
        self.qclass.compose(target);
    }
}

//--- Display and Debug

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Question")
            .field("qname", &self.qname)
            .field("qtype", &self.qtype)
            .field("qclass", &self.qclass)
            .finish()
    }
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compose_and_parse() {
        let question =
            Question::new_in("example.com".parse().unwrap(), Rtype::A);
        let mut wire = Vec::new();
        question.compose(&mut wire);
        assert_eq!(
            wire.as_slice(),
            b"\x07example\x03com\x00\x00\x01\x00\x01"
        );
        let mut parser = Parser::new(&wire);
        assert_eq!(Question::parse(&mut parser).unwrap(), question);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn eq_ignores_name_case() {
        let a = Question::new_in("Example.Com".parse().unwrap(), Rtype::MX);
        let b = Question::new_in("example.com".parse().unwrap(), Rtype::MX);
        assert_eq!(a, b);
        let c = Question::new_in("example.com".parse().unwrap(), Rtype::A);
        assert_ne!(a, c);
    }
}
