//! Resource records.
//!
//! A resource record is a typed, timed entry returned in the answer,
//! authority, or additional section of a DNS response: an owner name, a
//! record type and class, a time to live, and the record data itself.
//!
//! Interpretation of record data is type specific. This crate carries it
//! as raw octets for every type and only provides a convenience decode for
//! the two address types, A and AAAA.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{DecodeError, EncodeError, Parser};
use bytes::Bytes;
use core::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// Decoding a record copies its data out of the message buffer, so the
/// record owns everything it refers to. The owner name is stored
/// uncompressed even if it was compressed on the wire.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The owner of the record.
    owner: Name,

    /// The record type.
    rtype: Rtype,

    /// The class of the record.
    class: Class,

    /// The number of seconds the record may be cached.
    ttl: u32,

    /// The raw record data.
    data: Bytes,
}

/// # Creation and Conversion
///
impl Record {
    /// Creates a new record from its components.
    #[must_use]
    pub fn new(
        owner: Name,
        rtype: Rtype,
        class: Class,
        ttl: u32,
        data: Bytes,
    ) -> Self {
        Record {
            owner,
            rtype,
            class,
            ttl,
            data,
        }
    }
}

/// # Field Access
///
impl Record {
    /// Returns a reference to the owner name of the record.
    #[must_use]
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the type of the record.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the time to live of the record in seconds.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns a reference to the raw record data.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the IPv4 address of an A record.
    ///
    /// Returns `None` if the record is not an A record or its data is not
    /// exactly four octets long.
    #[must_use]
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        if self.rtype != Rtype::A {
            return None;
        }
        let octets: [u8; 4] = self.data.as_ref().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }

    /// Returns the IPv6 address of an AAAA record.
    ///
    /// Returns `None` if the record is not an AAAA record or its data is
    /// not exactly sixteen octets long.
    #[must_use]
    pub fn to_ipv6(&self) -> Option<Ipv6Addr> {
        if self.rtype != Rtype::AAAA {
            return None;
        }
        let octets: [u8; 16] = self.data.as_ref().try_into().ok()?;
        Some(Ipv6Addr::from(octets))
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Takes a record from the beginning of `parser`.
    ///
    /// The record data length is taken from the RDLENGTH field; if the
    /// buffer ends before that many octets, parsing fails with
    /// [`DecodeError::Truncated`].
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, DecodeError> {
        let owner = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = parser.parse_u32()?;
        let rdlen = parser.parse_u16()?;
        let data = Bytes::copy_from_slice(
            parser.parse_slice(usize::from(rdlen))?,
        );
        Ok(Record {
            owner,
            rtype,
            class,
            ttl,
            data,
        })
    }

    /// Appends the wire format of the record to `target`.
    ///
    /// Fails with [`EncodeError::LongRecordData`] if the record data does
    /// not fit the 16 bit RDLENGTH field. Nothing is appended in that
    /// case.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), EncodeError> {
        let rdlen = u16::try_from(self.data.len())
            .map_err(|_| EncodeError::LongRecordData)?;
        self.owner.compose(target);
        self.rtype.compose(target);
        self.class.compose(target);
        target.extend_from_slice(&self.ttl.to_be_bytes());
        target.extend_from_slice(&rdlen.to_be_bytes());
        target.extend_from_slice(&self.data);
        Ok(())
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}\t{}\t{} octets",
            self.owner,
            self.ttl,
            self.class,
            self.rtype,
            self.data.len()
        )
    }
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn a_record() -> Record {
        Record::new(
            "example.com".parse().unwrap(),
            Rtype::A,
            Class::IN,
            3600,
            Bytes::from_static(b"\x5d\xb8\xd8\x22"),
        )
    }

    #[test]
    fn compose_and_parse() {
        let record = a_record();
        let mut wire = Vec::new();
        record.compose(&mut wire).unwrap();
        assert_eq!(
            wire.as_slice(),
            b"\x07example\x03com\x00\
              \x00\x01\x00\x01\
              \x00\x00\x0e\x10\
              \x00\x04\x5d\xb8\xd8\x22"
        );
        let mut parser = Parser::new(&wire);
        assert_eq!(Record::parse(&mut parser).unwrap(), record);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn truncated_rdata() {
        let mut wire = Vec::new();
        a_record().compose(&mut wire).unwrap();
        wire.pop();
        let mut parser = Parser::new(&wire);
        assert_eq!(Record::parse(&mut parser), Err(DecodeError::Truncated));
    }

    #[test]
    fn address_access() {
        let record = a_record();
        assert_eq!(
            record.to_ipv4(),
            Some("93.184.216.34".parse().unwrap())
        );
        assert_eq!(record.to_ipv6(), None);

        let aaaa = Record::new(
            "example.com".parse().unwrap(),
            Rtype::AAAA,
            Class::IN,
            3600,
            Bytes::copy_from_slice(
                &"2606:2800:220:1:248:1893:25c8:1946"
                    .parse::<Ipv6Addr>()
                    .unwrap()
                    .octets(),
            ),
        );
        assert_eq!(
            aaaa.to_ipv6(),
            Some("2606:2800:220:1:248:1893:25c8:1946".parse().unwrap())
        );
        assert_eq!(aaaa.to_ipv4(), None);

        // Malformed length yields no address rather than a panic.
        let bad = Record::new(
            "example.com".parse().unwrap(),
            Rtype::A,
            Class::IN,
            0,
            Bytes::from_static(b"\x7f\x00\x00"),
        );
        assert_eq!(bad.to_ipv4(), None);
    }

    #[test]
    fn long_record_data() {
        let record = Record::new(
            Name::root(),
            Rtype::TXT,
            Class::IN,
            0,
            Bytes::from(vec![0u8; 0x10000]),
        );
        let mut wire = Vec::new();
        assert_eq!(
            record.compose(&mut wire),
            Err(EncodeError::LongRecordData)
        );
        assert!(wire.is_empty());
    }
}
