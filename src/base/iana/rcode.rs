//! DNS response codes.

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS response codes.
    ///
    /// The response code of a message indicates what happened on the server
    /// when processing the query. It lives in the lower four bits of the
    /// fourth header octet.
    ///
    /// The initial set of values is defined in [RFC 1035]; the [IANA
    /// registry] has the full list. Unknown values pass through unchanged.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-6
    =>
    Rcode, u8, parse_u8;

    /// No error condition (0).
    (NOERROR => 0, "NOERROR")

    /// Format error (1).
    ///
    /// The server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure (2).
    ///
    /// The server encountered an internal problem while processing the
    /// query.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error (3).
    ///
    /// The domain name in the query does not exist. Only meaningful in a
    /// response from an authoritative server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented (4).
    ///
    /// The server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused (5).
    ///
    /// The server refused to answer for policy reasons.
    (REFUSED => 5, "REFUSED")
}

impl Rcode {
    /// Returns whether this is the no-error response code.
    #[must_use]
    pub const fn is_no_error(self) -> bool {
        self.to_int() == 0
    }
}

#[cfg(test)]
mod test {
    use super::Rcode;

    #[test]
    fn is_no_error() {
        assert!(Rcode::NOERROR.is_no_error());
        assert!(!Rcode::SERVFAIL.is_no_error());
        assert!(!Rcode::from_int(11).is_no_error());
    }

    #[test]
    fn mnemonics() {
        assert_eq!(Rcode::from_mnemonic(b"nxdomain"), Some(Rcode::NXDOMAIN));
        assert_eq!(Rcode::NXDOMAIN.to_mnemonic(), Some("NXDOMAIN"));
        assert_eq!(format!("{}", Rcode::from_int(11)), "11");
    }
}
