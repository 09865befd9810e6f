//! DNS resource record types.

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// DNS resource record types.
    ///
    /// Each resource record has a 16 bit type value describing what kind of
    /// data it carries. The same values are used in the question section of
    /// a query to state what kind of records are requested.
    ///
    /// The well-known values below cover the record types this crate can
    /// build queries for. Record data of any type, including types not
    /// listed here, is carried as raw octets.
    ///
    /// See the [IANA registry] for the complete list of assigned values.
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16, parse_u16;

    /// A host address (1).
    ///
    /// The record data is a single IPv4 address. Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (A => 1, "A")

    /// An authoritative name server (2).
    ///
    /// Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (NS => 2, "NS")

    /// The canonical name for an alias (5).
    ///
    /// Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (CNAME => 5, "CNAME")

    /// The start of a zone of authority (6).
    ///
    /// Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (SOA => 6, "SOA")

    /// A domain name pointer (12).
    ///
    /// Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (PTR => 12, "PTR")

    /// A mail exchange (15).
    ///
    /// Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (MX => 15, "MX")

    /// Text strings (16).
    ///
    /// Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (TXT => 16, "TXT")

    /// An IPv6 host address (28).
    ///
    /// The record data is a single IPv6 address. Defined in [RFC 3596].
    ///
    /// [RFC 3596]: https://tools.ietf.org/html/rfc3596
    (AAAA => 28, "AAAA")

    /// The location of a service (33).
    ///
    /// Defined in [RFC 2782].
    ///
    /// [RFC 2782]: https://tools.ietf.org/html/rfc2782
    (SRV => 33, "SRV")

    /// EDNS pseudo record type (41).
    ///
    /// An OPT record in the additional section carries EDNS information.
    /// This crate only acknowledges its presence; the record data stays
    /// opaque. Defined in [RFC 6891].
    ///
    /// [RFC 6891]: https://tools.ietf.org/html/rfc6891
    (OPT => 41, "OPT")
}

#[cfg(test)]
mod test {
    use super::Rtype;

    #[test]
    fn mnemonics() {
        assert_eq!(Rtype::from_mnemonic(b"A"), Some(Rtype::A));
        assert_eq!(Rtype::from_mnemonic(b"aaaa"), Some(Rtype::AAAA));
        assert_eq!(Rtype::from_mnemonic(b"Mx"), Some(Rtype::MX));
        assert_eq!(Rtype::from_mnemonic(b"SPF"), None);
    }

    #[test]
    fn int_round_trip() {
        assert_eq!(Rtype::from_int(28), Rtype::AAAA);
        assert_eq!(Rtype::from_int(257).to_int(), 257);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Rtype::A), "Rtype::A");
        assert_eq!(format!("{:?}", Rtype::from_int(257)), "Rtype(257)");
    }
}
