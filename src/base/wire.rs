//! Creating and consuming data in wire format.
//!
//! All multi-octet integers in a DNS message are transmitted in network
//! byte order. This module provides [`Parser`], a cursor over an octets
//! slice that reads these values while keeping track of its position, as
//! well as the error types shared by everything that encodes or decodes
//! wire data.

use core::fmt;

//------------ Parser --------------------------------------------------------

/// A reader of DNS wire data atop an octets slice.
///
/// The parser keeps a reference to the complete message octets and the
/// current read position. Keeping the whole message around is necessary
/// because domain names may contain compression pointers which are indexes
/// into the message from its very beginning.
///
/// The parser is `Copy`, so a temporary copy can be used to jump around the
/// message without disturbing the position of the original.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'a> {
    /// The octets we are reading from.
    octets: &'a [u8],

    /// The current position of the parser.
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser atop an octets slice.
    #[must_use]
    pub fn new(octets: &'a [u8]) -> Self {
        Parser { octets, pos: 0 }
    }

    /// Returns the current parser position.
    ///
    /// This is the index of the octet returned by the next read.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining octets to parse.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.octets.len() - self.pos
    }

    /// Returns a reference to the underlying octets slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        self.octets
    }

    /// Repositions the parser to the given absolute position.
    ///
    /// Fails if `pos` is beyond the end of the octets.
    pub fn seek(&mut self, pos: usize) -> Result<(), DecodeError> {
        if pos > self.octets.len() {
            return Err(DecodeError::Truncated);
        }
        self.pos = pos;
        Ok(())
    }

    /// Advances the parser by `len` octets.
    ///
    /// Fails if that would take the parser beyond the end of the octets.
    pub fn advance(&mut self, len: usize) -> Result<(), DecodeError> {
        if len > self.remaining() {
            return Err(DecodeError::Truncated);
        }
        self.pos += len;
        Ok(())
    }

    /// Takes the next `len` octets and advances over them.
    pub fn parse_slice(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if len > self.remaining() {
            return Err(DecodeError::Truncated);
        }
        let res = &self.octets[self.pos..self.pos + len];
        self.pos += len;
        Ok(res)
    }

    /// Fills the given buffer from the parser and advances over it.
    pub fn parse_buf(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        let len = buf.len();
        buf.copy_from_slice(self.parse_slice(len)?);
        Ok(())
    }

    /// Takes a single octet from the parser.
    pub fn parse_u8(&mut self) -> Result<u8, DecodeError> {
        let res = self.parse_slice(1)?;
        Ok(res[0])
    }

    /// Takes a big-endian `u16` from the parser.
    pub fn parse_u16(&mut self) -> Result<u16, DecodeError> {
        let mut buf = [0u8; 2];
        self.parse_buf(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Takes a big-endian `u32` from the parser.
    pub fn parse_u32(&mut self) -> Result<u32, DecodeError> {
        let mut buf = [0u8; 4];
        self.parse_buf(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }
}

//============ Error Types ===================================================

//------------ EncodeError ---------------------------------------------------

/// A value cannot be represented in the wire format.
///
/// All variants are caller errors detected before any output is produced:
/// an encode operation either returns the complete encoding or fails with
/// one of these values and leaves nothing half-written behind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// A header field value exceeds the bit width of its wire position.
    FieldOutOfRange,

    /// A label is longer than the 63 octets allowed.
    LabelTooLong,

    /// A name is longer than the 255 octets allowed.
    NameTooLong,

    /// A zero length label was given.
    ///
    /// The empty label encodes as a zero length octet, which the wire
    /// format reserves for the root name terminator.
    EmptyLabel,

    /// Record data is longer than the 65535 octets its length field allows.
    LongRecordData,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodeError::FieldOutOfRange => {
                f.write_str("field value exceeds its bit width")
            }
            EncodeError::LabelTooLong => f.write_str("long label"),
            EncodeError::NameTooLong => f.write_str("long domain name"),
            EncodeError::EmptyLabel => f.write_str("empty label"),
            EncodeError::LongRecordData => f.write_str("long record data"),
        }
    }
}

impl std::error::Error for EncodeError {}

//------------ DecodeError ---------------------------------------------------

/// An octets sequence contained malformed or incomplete wire data.
///
/// Decode errors mean the input could not be read at all. They are distinct
/// from [`ProtocolError`][crate::base::message::ProtocolError], which covers
/// syntactically valid messages that violate the query/response contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The data ended before a declared field was complete.
    Truncated,

    /// A label length octet declared more than the 63 octets allowed.
    LabelTooLong,

    /// A reassembled name was longer than the 255 octets allowed.
    NameTooLong,

    /// A compression pointer did not point strictly backwards.
    ///
    /// Following such a pointer could never terminate, so the name is
    /// rejected instead.
    PointerCycle,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::Truncated => f.write_str("unexpected end of input"),
            DecodeError::LabelTooLong => f.write_str("long label"),
            DecodeError::NameTooLong => f.write_str("long domain name"),
            DecodeError::PointerCycle => {
                f.write_str("compression pointer cycle")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_integers() {
        let mut parser = Parser::new(b"\x12\x01\x02\x01\x02\x03\x04");
        assert_eq!(parser.parse_u8(), Ok(0x12));
        assert_eq!(parser.parse_u16(), Ok(0x0102));
        assert_eq!(parser.parse_u32(), Ok(0x01020304));
        assert_eq!(parser.remaining(), 0);
        assert_eq!(parser.parse_u8(), Err(DecodeError::Truncated));
    }

    #[test]
    fn parse_slice() {
        let mut parser = Parser::new(b"\x01\x02\x03");
        assert_eq!(parser.parse_slice(2), Ok(&b"\x01\x02"[..]));
        assert_eq!(parser.pos(), 2);
        assert_eq!(parser.parse_slice(2), Err(DecodeError::Truncated));
        // A failed read leaves the position untouched.
        assert_eq!(parser.pos(), 2);
        assert_eq!(parser.parse_slice(1), Ok(&b"\x03"[..]));
    }

    #[test]
    fn seek_and_advance() {
        let mut parser = Parser::new(b"\x01\x02\x03\x04");
        assert_eq!(parser.advance(3), Ok(()));
        assert_eq!(parser.pos(), 3);
        assert_eq!(parser.advance(2), Err(DecodeError::Truncated));
        assert_eq!(parser.seek(1), Ok(()));
        assert_eq!(parser.pos(), 1);
        assert_eq!(parser.seek(4), Ok(()));
        assert_eq!(parser.seek(5), Err(DecodeError::Truncated));
    }
}
