//! Domain names.
//!
//! A domain name is a sequence of labels. On the wire, each label is
//! preceded by a one octet length, and the whole name is terminated by a
//! label of length zero, the root label. A label can be at most 63 octets
//! long and the entire encoded name, length octets and terminator
//! included, at most 255 octets.
//!
//! In a message, a name or a suffix of it may be replaced by a compression
//! pointer: two octets with the top two bits set whose remaining fourteen
//! bits give the position of an earlier occurrence of the remainder of the
//! name. [`Name::parse`] follows such pointers and reassembles the
//! uncompressed name; [`Name`] itself always stores the uncompressed wire
//! encoding. Compression is never produced when encoding, which only costs
//! message size, never correctness.

use super::wire::{DecodeError, EncodeError, Parser};
use core::{fmt, hash, str};

/// The maximum length of an encoded name in octets.
const MAX_NAME_LEN: usize = 255;

/// The maximum length of a single label in octets.
const MAX_LABEL_LEN: usize = 63;

//------------ Name ----------------------------------------------------------

/// An uncompressed domain name.
///
/// The name owns its wire encoding: length-prefixed labels followed by the
/// root terminator. The root name itself is the single zero octet.
///
/// Names can be created from their presentation format via [`FromStr`],
/// built label by label via [`NameBuilder`], or taken from a message via
/// [`parse`][Self::parse].
///
/// Equality and hashing treat ASCII letters case-insensitively, as domain
/// name comparison must. A response echoing the question with randomized
/// letter case therefore still compares equal.
///
/// [`FromStr`]: struct.Name.html#impl-FromStr-for-Name
#[derive(Clone)]
pub struct Name {
    /// The wire encoding of the name, root terminator included.
    octets: Vec<u8>,
}

/// # Creation and Conversion
///
impl Name {
    /// Creates the root name.
    #[must_use]
    pub fn root() -> Self {
        Name { octets: vec![0] }
    }

    /// Returns a reference to the wire encoding of the name.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

    /// Returns the length of the wire encoding in octets.
    ///
    /// This includes the label length octets and the root terminator, so
    /// it is at least 1 and at most 255.
    #[must_use]
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the name is the root name only.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The root terminator is not included, so iterating over the root
    /// name yields nothing.
    #[must_use]
    pub fn iter_labels(&self) -> LabelIter<'_> {
        LabelIter {
            slice: &self.octets,
        }
    }
}

/// # Parsing and Composing
///
impl Name {
    /// Appends the wire format of the name to `target`.
    ///
    /// The name is always appended uncompressed.
    pub fn compose(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.octets)
    }

    /// Takes a name from the beginning of `parser`.
    ///
    /// The parser must be positioned atop the complete message, since
    /// compression pointers are indexes from the message start. On
    /// success, the parser has advanced over the inline portion of the
    /// name only: up to and including either the root terminator or the
    /// first compression pointer. Octets reached by following pointers are
    /// not consumed.
    ///
    /// Every pointer must target an offset strictly below the position it
    /// was read from, and no offset may be visited twice while decoding
    /// one name. Anything else fails with [`DecodeError::PointerCycle`],
    /// so adversarial input can never cause the decoder to loop.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, DecodeError> {
        let mut octets = Vec::new();

        // Phase one: no compression pointer has been found yet. Read
        // labels off the caller's parser until the root label ends the
        // name or a pointer sends us elsewhere.
        let mut ptr = loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => {
                    octets.push(0);
                    return Ok(Name { octets });
                }
                LabelType::Normal(label_len) => {
                    Self::take_label(&mut octets, parser, label_len)?;
                }
                LabelType::Compressed(ptr) => break ptr,
            }
        };

        // Phase two: compression has occurred. Work on a copy of the
        // parser so the original stays put right after the pointer.
        let mut parser = *parser;
        let mut visited = Vec::new();
        loop {
            // The pointer sits at parser.pos() - 2 and must target an
            // offset strictly below that, so it can never point at
            // itself or forward.
            if ptr + 2 >= parser.pos() {
                return Err(DecodeError::PointerCycle);
            }
            if visited.contains(&ptr) {
                return Err(DecodeError::PointerCycle);
            }
            visited.push(ptr);
            parser.seek(ptr)?;

            loop {
                match LabelType::parse(&mut parser)? {
                    LabelType::Normal(0) => {
                        octets.push(0);
                        return Ok(Name { octets });
                    }
                    LabelType::Normal(label_len) => {
                        Self::take_label(&mut octets, &mut parser, label_len)?;
                    }
                    LabelType::Compressed(new_ptr) => {
                        ptr = new_ptr;
                        break;
                    }
                }
            }
        }
    }

    /// Copies one label from `parser` into the name being assembled.
    fn take_label(
        octets: &mut Vec<u8>,
        parser: &mut Parser<'_>,
        label_len: u8,
    ) -> Result<(), DecodeError> {
        let label = parser.parse_slice(usize::from(label_len))?;
        octets.push(label_len);
        octets.extend_from_slice(label);
        if octets.len() + 1 > MAX_NAME_LEN {
            return Err(DecodeError::NameTooLong);
        }
        Ok(())
    }
}

//--- FromStr

impl str::FromStr for Name {
    type Err = FromStrError;

    /// Creates a name from its presentation format.
    ///
    /// Labels are separated by dots; a single trailing dot is allowed and
    /// ignored. The string `.` produces the root name. The empty string,
    /// empty interior labels, overlong labels, and overlong names are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FromStrError::EmptyName);
        }
        if s == "." {
            return Ok(Name::root());
        }
        let s = s.strip_suffix('.').unwrap_or(s);
        let mut builder = NameBuilder::new();
        for label in s.split('.') {
            builder.append_label(label.as_bytes()).map_err(|err| {
                match err {
                    EncodeError::EmptyLabel => FromStrError::EmptyLabel,
                    EncodeError::LabelTooLong => FromStrError::LongLabel,
                    _ => FromStrError::LongName,
                }
            })?;
        }
        Ok(builder.finish())
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        // Length octets are below 64 and thus never letters, so folding
        // the whole encoding is safe.
        self.octets.eq_ignore_ascii_case(&other.octets)
    }
}

impl Eq for Name {}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in &self.octets {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    /// Formats the name in presentation format without a trailing dot.
    ///
    /// Dots and backslashes inside a label are escaped with a backslash,
    /// non-printable octets as `\DDD`, so the output can be read back
    /// unambiguously.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;

        if self.is_root() {
            return f.write_char('.');
        }
        let mut first = true;
        for label in self.iter_labels() {
            if first {
                first = false;
            } else {
                f.write_char('.')?;
            }
            for &ch in label {
                match ch {
                    b'.' | b'\\' => write!(f, "\\{}", ch as char)?,
                    0x20..=0x7E => f.write_char(ch as char)?,
                    _ => write!(f, "\\{:03}", ch)?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the labels of a [`Name`].
#[derive(Clone, Debug)]
pub struct LabelIter<'a> {
    /// The remainder of the wire encoding.
    slice: &'a [u8],
}

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, rest) = self.slice.split_first()?;
        if len == 0 {
            self.slice = &[];
            return None;
        }
        let (label, rest) = rest.split_at(usize::from(len));
        self.slice = rest;
        Some(label)
    }
}

//------------ NameBuilder ---------------------------------------------------

/// An incremental builder for domain names.
///
/// Labels are appended one by one via
/// [`append_label`][Self::append_label], which enforces the label and name
/// length limits of the wire format. [`finish`][Self::finish] appends the
/// root terminator and produces the [`Name`].
#[derive(Clone, Debug, Default)]
pub struct NameBuilder {
    /// The wire encoding assembled so far, without the terminator.
    octets: Vec<u8>,
}

impl NameBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a label to the end of the name.
    ///
    /// Fails with [`EncodeError::EmptyLabel`] for a zero length label,
    /// [`EncodeError::LabelTooLong`] for a label over 63 octets, and
    /// [`EncodeError::NameTooLong`] if appending the label would push the
    /// finished encoding past 255 octets. The builder is unchanged on
    /// error.
    pub fn append_label(&mut self, label: &[u8]) -> Result<(), EncodeError> {
        if label.is_empty() {
            return Err(EncodeError::EmptyLabel);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(EncodeError::LabelTooLong);
        }
        // One octet for this label's length, one for the terminator
        // finish() will add.
        if self.octets.len() + label.len() + 2 > MAX_NAME_LEN {
            return Err(EncodeError::NameTooLong);
        }
        self.octets.push(label.len() as u8);
        self.octets.extend_from_slice(label);
        Ok(())
    }

    /// Appends the root terminator and returns the finished name.
    #[must_use]
    pub fn finish(mut self) -> Name {
        self.octets.push(0);
        Name {
            octets: self.octets,
        }
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label as told by its first octet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with its length in octets.
    Normal(u8),

    /// A compression pointer with the position it refers to.
    Compressed(usize),
}

impl LabelType {
    /// Takes a label type from the beginning of `parser`.
    ///
    /// An octet with both upper bits set starts a two octet compression
    /// pointer. An octet with neither set is a plain length. The two
    /// remaining patterns would declare a length above 63 and are
    /// rejected.
    fn parse(parser: &mut Parser<'_>) -> Result<Self, DecodeError> {
        let ltype = parser.parse_u8()?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype)),
            0xC0..=0xFF => {
                let res = usize::from(parser.parse_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(DecodeError::LabelTooLong),
        }
    }
}

//============ Error Types ===================================================

//------------ FromStrError --------------------------------------------------

/// A domain name could not be created from its presentation format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The name was the empty string.
    EmptyName,

    /// An interior label was empty.
    EmptyLabel,

    /// A label was longer than the 63 octets allowed.
    LongLabel,

    /// The encoded name would exceed the 255 octets allowed.
    LongName,
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FromStrError::EmptyName => f.write_str("empty domain name"),
            FromStrError::EmptyLabel => f.write_str("empty label"),
            FromStrError::LongLabel => f.write_str("long label"),
            FromStrError::LongName => f.write_str("long domain name"),
        }
    }
}

impl std::error::Error for FromStrError {}

//============ Testing ======================================================
