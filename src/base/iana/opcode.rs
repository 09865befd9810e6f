//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It lives in
    /// four bits of the second header octet, so only values 0 to 15 can be
    /// encoded; [`Header::set_opcode`][crate::base::header::Header::set_opcode]
    /// rejects anything larger.
    ///
    /// The opcode and its initial set of values are defined in [RFC 1035].
    /// Values assigned later can be found in the [IANA registry]. Unknown
    /// values simply pass through.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-5
    =>
    Opcode, u8, parse_u8;

    /// A standard query (0).
    ///
    /// This query requests all records matching the name, class, and record
    /// type given in the query's question section. Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (QUERY => 0, "QUERY")

    /// An inverse query (1, obsolete).
    ///
    /// Defined in [RFC 1035] and obsoleted by [RFC 3425].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 3425]: https://tools.ietf.org/html/rfc3425
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    ///
    /// Defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    (STATUS => 2, "STATUS")
}

#[cfg(test)]
mod test {
    use super::Opcode;

    #[test]
    fn from_int() {
        assert_eq!(Opcode::from_int(0), Opcode::QUERY);
        assert_eq!(Opcode::from_int(7).to_int(), 7);
    }

    #[test]
    fn debug_and_display() {
        assert_eq!(format!("{:?}", Opcode::QUERY), "Opcode::QUERY");
        assert_eq!(format!("{:?}", Opcode::from_int(9)), "Opcode(9)");
        assert_eq!(format!("{}", Opcode::STATUS), "STATUS");
        assert_eq!(format!("{}", Opcode::from_int(9)), "9");
    }
}
