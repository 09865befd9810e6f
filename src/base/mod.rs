//! Basics.
//!
//! This module provides the types for working with DNS data in wire
//! format. We use the term *parsing* for extracting data from the wire
//! format and *composing* for producing it.
//!
//! Both parsing and composing happen on buffers holding a complete DNS
//! message. This is a reasonable choice given the limited size of DNS
//! messages and the complexities introduced by compressing domain names
//! by referencing earlier parts of the message.
//!
//! The types are arranged in submodules roughly along the structure of a
//! message:
//!
//! * [header] for the fixed header section at the start of each message,
//! * [iana] for the newtypes wrapping IANA-registered parameter values,
//! * [name] for domain names,
//! * [question] for the entries of the question section,
//! * [record] for resource records,
//! * [message] for whole messages and the query/response contract, and
//! * [message_builder] for building query messages.
//!
//! The [wire] module underneath them provides the parsing primitives and
//! the error types shared by everything here.
//!
//! The most commonly used types are re-exported at the module level.

//--- Re-exports

pub use self::header::{Flags, Header, HeaderCounts, HeaderSection};
pub use self::message::{Message, ProtocolError, ResponseError};
pub use self::message_builder::{QueryBuilder, ValidationError};
pub use self::name::{Name, NameBuilder};
pub use self::question::Question;
pub use self::record::Record;
pub use self::wire::{DecodeError, EncodeError, Parser};

//--- Modules

pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;
