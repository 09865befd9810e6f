//! Parameter values of the DNS registries.
//!
//! A number of fields in DNS messages carry values from registries kept by
//! IANA. This module provides newtypes for the registries the message
//! codec needs: opcodes, response codes, record types, and classes. Each
//! type wraps the raw integer so unknown values pass through untouched.

#[macro_use]
mod macros;

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

mod class;
mod opcode;
mod rcode;
mod rtype;
