//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of entries in each of the four sections that follow the
//! header. Its content and format are defined in section 4.1.1 of
//! [RFC 1035].
//!
//! The header section is split into two parts: [`Header`] contains the
//! message ID and the flags word, [`HeaderCounts`] contains the four
//! section counts. [`HeaderSection`] wraps both of them into a single
//! twelve octet type.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{DecodeError, EncodeError, Parser};

//------------ Header --------------------------------------------------------

/// The first part of the header of a DNS message.
///
/// This type represents the information contained in the first four octets
/// of the header: the message ID, opcode, rcode, and the various flags. It
/// keeps those four octets in wire representation, i.e., in network byte
/// order. The data is layed out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|    Z   |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// Because the octets are kept in wire representation, no field can alias
/// another's bit position and every bit pattern read off the wire is
/// preserved, including the three reserved Z bits. Setters for the narrow
/// integer fields check that the value fits its bit width and fail with
/// [`EncodeError::FieldOutOfRange`] otherwise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    /// The actual header in its wire format representation.
    ///
    /// This means that the ID field is in big endian.
    inner: [u8; 4],
}

/// # Creation and Conversion
///
impl Header {
    /// Creates a new header.
    ///
    /// The new header has all fields as either zero or false. Thus, the
    /// opcode will be [`Opcode::QUERY`] and the response code will be
    /// [`Rcode::NOERROR`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying octets slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }
}

/// # Field Access
///
impl Header {
    /// Returns the value of the ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    ///
    /// When choosing an ID for an outgoing message, make sure it is random
    /// to avoid spoofing through guessing the message ID. The method
    /// [`set_random_id`][Self::set_random_id] can be used for this purpose.
    #[must_use]
    pub fn id(self) -> u16 {
        u16::from_be_bytes([self.inner[0], self.inner[1]])
    }

    /// Sets the value of the ID field.
    pub fn set_id(&mut self, value: u16) {
        self.inner[..2].copy_from_slice(&value.to_be_bytes())
    }

    /// Sets the value of the ID field to a randomly chosen number.
    pub fn set_random_id(&mut self) {
        self.set_id(::rand::random())
    }

    /// Returns whether the QR bit is set.
    ///
    /// The bit specifies whether a message is a query (`false`) or a
    /// response (`true`).
    #[must_use]
    pub fn qr(self) -> bool {
        self.get_bit(2, 7)
    }

    /// Sets the value of the QR bit.
    pub fn set_qr(&mut self, set: bool) {
        self.set_bit(2, 7, set)
    }

    /// Returns the value of the Opcode field.
    ///
    /// This field specifies the kind of query a message contains. Normal
    /// queries have the variant [`Opcode::QUERY`], which is also the
    /// default value when creating a new header.
    #[must_use]
    pub fn opcode(self) -> Opcode {
        Opcode::from_int((self.inner[2] >> 3) & 0x0F)
    }

    /// Sets the value of the Opcode field.
    ///
    /// The field is four bits wide, so opcodes above 15 are rejected.
    pub fn set_opcode(&mut self, opcode: Opcode) -> Result<(), EncodeError> {
        if opcode.to_int() > 0x0F {
            return Err(EncodeError::FieldOutOfRange);
        }
        self.inner[2] = self.inner[2] & 0x87 | (opcode.to_int() << 3);
        Ok(())
    }

    /// Returns whether the AA bit is set.
    ///
    /// Using this bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name. The bit has no
    /// meaning in a query.
    #[must_use]
    pub fn aa(self) -> bool {
        self.get_bit(2, 2)
    }

    /// Sets the value of the AA bit.
    pub fn set_aa(&mut self, set: bool) {
        self.set_bit(2, 2, set)
    }

    /// Returns whether the TC bit is set.
    ///
    /// The *truncation* bit is set if there was more data available than
    /// fit into the message. A caller receiving a truncated response over
    /// UDP will typically retry the query over a stream transport.
    #[must_use]
    pub fn tc(self) -> bool {
        self.get_bit(2, 1)
    }

    /// Sets the value of the TC bit.
    pub fn set_tc(&mut self, set: bool) {
        self.set_bit(2, 1, set)
    }

    /// Returns whether the RD bit is set.
    ///
    /// The *recursion desired* bit may be set in a query to ask the name
    /// server to try and recursively gather a response if it doesn't have
    /// the data available locally. The bit's value is copied into the
    /// response.
    #[must_use]
    pub fn rd(self) -> bool {
        self.get_bit(2, 0)
    }

    /// Sets the value of the RD bit.
    pub fn set_rd(&mut self, set: bool) {
        self.set_bit(2, 0, set)
    }

    /// Returns whether the RA bit is set.
    ///
    /// In a response, the *recursion available* bit denotes whether the
    /// responding name server supports recursion. It has no meaning in a
    /// query.
    #[must_use]
    pub fn ra(self) -> bool {
        self.get_bit(3, 7)
    }

    /// Sets the value of the RA bit.
    pub fn set_ra(&mut self, set: bool) {
        self.set_bit(3, 7, set)
    }

    /// Returns the value of the three reserved Z bits.
    ///
    /// These bits are reserved and zero in practice, but whatever arrives
    /// off the wire round-trips through this type unchanged.
    #[must_use]
    pub fn z(self) -> u8 {
        (self.inner[3] >> 4) & 0x07
    }

    /// Sets the value of the reserved Z bits.
    ///
    /// The field is three bits wide, so values above 7 are rejected.
    pub fn set_z(&mut self, value: u8) -> Result<(), EncodeError> {
        if value > 0x07 {
            return Err(EncodeError::FieldOutOfRange);
        }
        self.inner[3] = self.inner[3] & 0x8F | (value << 4);
        Ok(())
    }

    /// Returns the value of the RCODE field.
    ///
    /// The *response code* is used in a response to indicate what happened
    /// when processing the query. See the [`Rcode`] type for the possible
    /// values and their meaning.
    #[must_use]
    pub fn rcode(self) -> Rcode {
        Rcode::from_int(self.inner[3] & 0x0F)
    }

    /// Sets the value of the RCODE field.
    ///
    /// The field is four bits wide, so response codes above 15 are
    /// rejected.
    pub fn set_rcode(&mut self, rcode: Rcode) -> Result<(), EncodeError> {
        if rcode.to_int() > 0x0F {
            return Err(EncodeError::FieldOutOfRange);
        }
        self.inner[3] = self.inner[3] & 0xF0 | rcode.to_int();
        Ok(())
    }

    /// Returns all flag fields contained in the header.
    ///
    /// This is a virtual field composed of everything in the flags word
    /// except the message ID. It is useful when working with all the
    /// fields at once rather than a single one.
    #[must_use]
    pub fn flags(self) -> Flags {
        Flags {
            qr: self.qr(),
            opcode: self.opcode(),
            aa: self.aa(),
            tc: self.tc(),
            rd: self.rd(),
            ra: self.ra(),
            z: self.z(),
            rcode: self.rcode(),
        }
    }

    /// Sets all flag fields at once.
    ///
    /// Fails with [`EncodeError::FieldOutOfRange`] if any of the narrow
    /// integer fields exceeds its bit width. The header is unchanged in
    /// that case.
    pub fn set_flags(&mut self, flags: Flags) -> Result<(), EncodeError> {
        let mut res = *self;
        res.set_qr(flags.qr);
        res.set_opcode(flags.opcode)?;
        res.set_aa(flags.aa);
        res.set_tc(flags.tc);
        res.set_rd(flags.rd);
        res.set_ra(flags.ra);
        res.set_z(flags.z)?;
        res.set_rcode(flags.rcode)?;
        *self = res;
        Ok(())
    }

    //--- Internal helpers

    /// Returns the value of the bit at the given position.
    ///
    /// The argument `offset` gives the byte offset of the underlying bytes
    /// slice and `bit` gives the number of the bit with the most
    /// significant bit being 7.
    fn get_bit(self, offset: usize, bit: usize) -> bool {
        self.inner[offset] & (1 << bit) != 0
    }

    /// Sets or resets the given bit.
    fn set_bit(&mut self, offset: usize, bit: usize, set: bool) {
        if set {
            self.inner[offset] |= 1 << bit
        } else {
            self.inner[offset] &= !(1 << bit)
        }
    }
}

/// # Parsing and Composing
///
impl Header {
    /// Takes a header from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, DecodeError> {
        let mut res = Self::default();
        parser.parse_buf(&mut res.inner)?;
        Ok(res)
    }

    /// Appends the wire format of the header to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.inner)
    }
}

//------------ Flags ---------------------------------------------------------

/// The flag fields of the DNS message header.
///
/// This is a utility type collecting everything in the second and third
/// header octets: the boolean flags and the narrow integer fields packed
/// between them. A value can be read out of a [`Header`] with
/// [`Header::flags`] and written back with [`Header::set_flags`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Flags {
    /// Whether the message is a response.
    pub qr: bool,

    /// The kind of query the message contains.
    pub opcode: Opcode,

    /// Whether the response is an authoritative answer.
    pub aa: bool,

    /// Whether the message was truncated.
    pub tc: bool,

    /// Whether recursion is desired.
    pub rd: bool,

    /// Whether the server supports recursion.
    pub ra: bool,

    /// The three reserved bits, kept as given.
    pub z: u8,

    /// The response code.
    pub rcode: Rcode,
}

/// # Creation and Conversion
///
impl Flags {
    /// Creates new flags.
    ///
    /// All fields will be unset or zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            qr: false,
            opcode: Opcode::QUERY,
            aa: false,
            tc: false,
            rd: false,
            ra: false,
            z: 0,
            rcode: Rcode::NOERROR,
        }
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The section count part of the header section of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries in
/// the four sections of a DNS message. The type contains the sequence of
/// these four values in wire format, i.e., in network byte order.
///
/// The counters are arranged in the same order as the sections themselves:
/// QDCOUNT for the question section, ANCOUNT for the answer section,
/// NSCOUNT for the authority section, and ARCOUNT for the additional
/// section. These are defined in [RFC 1035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderCounts {
    /// The actual counts in their wire format representation.
    ///
    /// I.e., all values are stored big endian.
    inner: [u8; 8],
}

/// # Creation and Conversion
///
impl HeaderCounts {
    /// Creates a new value with all counters set to zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the raw octets slice of the header counts.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }
}

/// # Field Access
///
impl HeaderCounts {
    /// Returns the value of the QDCOUNT field.
    ///
    /// This field contains the number of questions in the first section of
    /// the message.
    #[must_use]
    pub fn qdcount(self) -> u16 {
        self.get_u16(0)
    }

    /// Sets the value of the QDCOUNT field.
    pub fn set_qdcount(&mut self, value: u16) {
        self.set_u16(0, value)
    }

    /// Returns the value of the ANCOUNT field.
    ///
    /// This field contains the number of resource records in the answer
    /// section of the message.
    #[must_use]
    pub fn ancount(self) -> u16 {
        self.get_u16(2)
    }

    /// Sets the value of the ANCOUNT field.
    pub fn set_ancount(&mut self, value: u16) {
        self.set_u16(2, value)
    }

    /// Returns the value of the NSCOUNT field.
    ///
    /// This field contains the number of resource records in the authority
    /// section of the message.
    #[must_use]
    pub fn nscount(self) -> u16 {
        self.get_u16(4)
    }

    /// Sets the value of the NSCOUNT field.
    pub fn set_nscount(&mut self, value: u16) {
        self.set_u16(4, value)
    }

    /// Returns the value of the ARCOUNT field.
    ///
    /// This field contains the number of resource records in the
    /// additional section of the message.
    #[must_use]
    pub fn arcount(self) -> u16 {
        self.get_u16(6)
    }

    /// Sets the value of the ARCOUNT field.
    pub fn set_arcount(&mut self, value: u16) {
        self.set_u16(6, value)
    }

    //--- Internal helpers

    /// Returns the value of the 16 bit integer starting at a given offset.
    fn get_u16(self, offset: usize) -> u16 {
        u16::from_be_bytes([self.inner[offset], self.inner[offset + 1]])
    }

    /// Sets the value of the 16 bit integer starting at a given offset.
    fn set_u16(&mut self, offset: usize, value: u16) {
        self.inner[offset..offset + 2].copy_from_slice(&value.to_be_bytes())
    }
}

/// # Parsing and Composing
///
impl HeaderCounts {
    /// Takes the header counts from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, DecodeError> {
        let mut res = Self::default();
        parser.parse_buf(&mut res.inner)?;
        Ok(res)
    }

    /// Appends the wire format of the header counts to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.inner)
    }
}

//------------ HeaderSection -------------------------------------------------

/// The complete header section of a DNS message.
///
/// Consists of a [`Header`] directly followed by a [`HeaderCounts`],
/// twelve octets in all. Parsing consumes exactly twelve octets or fails
/// with [`DecodeError::Truncated`]; every twelve octet bit pattern is a
/// valid, if unusual, header section.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderSection {
    header: Header,
    counts: HeaderCounts,
}

/// # Creation and Conversion
///
impl HeaderSection {
    /// The length of the header section in wire format.
    pub const LEN: usize = 12;

    /// Creates a new header section.
    ///
    /// The value will have all header and header counts fields set to zero
    /// or false.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// # Access to Header and Counts
///
impl HeaderSection {
    /// Returns a reference to the header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a mutable reference to the header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns a reference to the header counts.
    #[must_use]
    pub fn counts(&self) -> &HeaderCounts {
        &self.counts
    }

    /// Returns a mutable reference to the header counts.
    pub fn counts_mut(&mut self) -> &mut HeaderCounts {
        &mut self.counts
    }
}

/// # Parsing and Composing
///
impl HeaderSection {
    /// Takes a header section from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, DecodeError> {
        Ok(HeaderSection {
            header: Header::parse(parser)?,
            counts: HeaderCounts::parse(parser)?,
        })
    }

    /// Appends the wire format of the header section to `target`.
    pub fn compose(&self, target: &mut Vec<u8>) {
        self.header.compose(target);
        self.counts.compose(target);
    }
}

//--- AsRef and AsMut

impl AsRef<Header> for HeaderSection {
    fn as_ref(&self) -> &Header {
        self.header()
    }
}

impl AsMut<Header> for HeaderSection {
    fn as_mut(&mut self) -> &mut Header {
        self.header_mut()
    }
}

impl AsRef<HeaderCounts> for HeaderSection {
    fn as_ref(&self) -> &HeaderCounts {
        self.counts()
    }
}

impl AsMut<HeaderCounts> for HeaderSection {
    fn as_mut(&mut self) -> &mut HeaderCounts {
        self.counts_mut()
    }
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::wire::EncodeError;

    macro_rules! test_field {
        ($get:ident, $set:ident, $default:expr, $($value:expr),*) => {
            $({
                let mut h = Header::new();
                assert_eq!(h.$get(), $default);
                h.$set($value);
                assert_eq!(h.$get(), $value);
            })*
        }
    }

    #[test]
    fn header() {
        test_field!(id, set_id, 0, 0x1234);
        test_field!(qr, set_qr, false, true, false);
        test_field!(aa, set_aa, false, true, false);
        test_field!(tc, set_tc, false, true, false);
        test_field!(rd, set_rd, false, true, false);
        test_field!(ra, set_ra, false, true, false);
    }

    #[test]
    fn narrow_fields() {
        let mut h = Header::new();
        assert_eq!(h.opcode(), Opcode::QUERY);
        h.set_opcode(Opcode::STATUS).unwrap();
        assert_eq!(h.opcode(), Opcode::STATUS);
        assert_eq!(
            h.set_opcode(Opcode::from_int(16)),
            Err(EncodeError::FieldOutOfRange)
        );
        assert_eq!(h.opcode(), Opcode::STATUS);

        assert_eq!(h.z(), 0);
        h.set_z(5).unwrap();
        assert_eq!(h.z(), 5);
        assert_eq!(h.set_z(8), Err(EncodeError::FieldOutOfRange));
        assert_eq!(h.z(), 5);

        assert_eq!(h.rcode(), Rcode::NOERROR);
        h.set_rcode(Rcode::REFUSED).unwrap();
        assert_eq!(h.rcode(), Rcode::REFUSED);
        assert_eq!(
            h.set_rcode(Rcode::from_int(200)),
            Err(EncodeError::FieldOutOfRange)
        );
        assert_eq!(h.rcode(), Rcode::REFUSED);
    }

    #[test]
    fn fields_do_not_alias() {
        let mut h = Header::new();
        h.set_id(0xFFFF);
        h.set_qr(true);
        h.set_opcode(Opcode::from_int(15)).unwrap();
        h.set_aa(true);
        h.set_tc(true);
        h.set_rd(true);
        h.set_ra(true);
        h.set_z(7).unwrap();
        h.set_rcode(Rcode::from_int(15)).unwrap();
        assert_eq!(h.as_slice(), b"\xFF\xFF\xFF\xFF");

        h.set_opcode(Opcode::QUERY).unwrap();
        assert_eq!(h.as_slice(), b"\xFF\xFF\x87\xFF");
        assert!(h.qr() && h.aa() && h.tc() && h.rd() && h.ra());
        h.set_z(0).unwrap();
        assert_eq!(h.as_slice(), b"\xFF\xFF\x87\x8F");
        assert_eq!(h.rcode(), Rcode::from_int(15));
    }

    #[test]
    fn flags_round_trip() {
        let flags = Flags {
            qr: true,
            opcode: Opcode::IQUERY,
            aa: false,
            tc: true,
            rd: true,
            ra: false,
            z: 3,
            rcode: Rcode::NXDOMAIN,
        };
        let mut h = Header::new();
        h.set_flags(flags).unwrap();
        assert_eq!(h.flags(), flags);

        let mut bad = flags;
        bad.z = 9;
        assert_eq!(h.set_flags(bad), Err(EncodeError::FieldOutOfRange));
        // A rejected set leaves the header untouched.
        assert_eq!(h.flags(), flags);
    }

    #[test]
    fn counts() {
        let mut c = HeaderCounts {
            inner: [1, 2, 3, 4, 5, 6, 7, 8],
        };
        assert_eq!(c.qdcount(), 0x0102);
        assert_eq!(c.ancount(), 0x0304);
        assert_eq!(c.nscount(), 0x0506);
        assert_eq!(c.arcount(), 0x0708);
        c.set_qdcount(0x0807);
        c.set_ancount(0x0605);
        c.set_nscount(0x0403);
        c.set_arcount(0x0201);
        assert_eq!(c.inner, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn section_wire_format() {
        let wire = b"\x01\x02\x81\x20\x00\x01\x00\x02\x00\x03\x00\x04";
        let mut parser = Parser::new(wire);
        let section = HeaderSection::parse(&mut parser).unwrap();
        assert_eq!(parser.pos(), HeaderSection::LEN);
        assert_eq!(section.header().id(), 0x0102);
        assert!(section.header().qr());
        assert!(section.header().rd());
        assert_eq!(section.header().z(), 2);
        assert_eq!(section.counts().qdcount(), 1);
        assert_eq!(section.counts().ancount(), 2);
        assert_eq!(section.counts().nscount(), 3);
        assert_eq!(section.counts().arcount(), 4);

        let mut target = Vec::new();
        section.compose(&mut target);
        assert_eq!(target.as_slice(), wire);
    }

    #[test]
    fn short_section() {
        let mut parser = Parser::new(b"\x01\x02\x81\x20\x00\x01");
        assert_eq!(
            HeaderSection::parse(&mut parser),
            Err(DecodeError::Truncated)
        );
    }
}
