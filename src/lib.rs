//! Encoding and decoding of DNS messages in wire format.
//!
//! This crate provides the building blocks of a DNS stub resolver that
//! talks to a recursive server: it builds query messages for a hostname
//! and record type, serializes them into the RFC 1035 wire format, and
//! parses response messages back into structured data, including domain
//! names referencing earlier parts of the message via compression
//! pointers.
//!
//! The crate is purely a codec. It never touches the network; moving the
//! resulting octets over UDP or TCP is up to the caller.
//!
//! Everything lives in the [base] module. A typical exchange looks like
//! this:
//!
//! ```
//! use dnswire::base::Message;
//!
//! // Build and serialize a query.
//! let query = Message::query("example.com", "A").unwrap();
//! let wire = query.compose().unwrap();
//!
//! // ... send `wire` to a server, receive `response_wire` back ...
//! # let response_wire = {
//! #     let mut octets = Vec::new();
//! #     let mut section = dnswire::base::HeaderSection::new();
//! #     section.header_mut().set_id(query.id());
//! #     section.header_mut().set_qr(true);
//! #     section.counts_mut().set_qdcount(1);
//! #     section.compose(&mut octets);
//! #     query.question().compose(&mut octets);
//! #     octets
//! # };
//!
//! // Parse the response, checking it belongs to the query.
//! let response = Message::parse_response(
//!     &response_wire, query.id(), query.question(),
//! ).unwrap();
//! for record in response.answers() {
//!     if let Some(addr) = record.to_ipv4() {
//!         println!("{}", addr);
//!     }
//! }
//! ```

pub mod base;
