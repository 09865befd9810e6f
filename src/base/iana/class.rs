//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is really
    /// relevant: every query this crate builds uses it.
    ///
    /// Classes are represented by a 16 bit value. See [RFC 1034] for their
    /// introduction and the [DNS CLASSes IANA registry] for assigned
    /// values.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16, parse_u16;

    /// Internet (IN).
    (IN => 1, "IN")

    /// Chaosnet (CH).
    ///
    /// Reused by BIND for built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class * (ANY).
    ///
    /// Can be used in a query to request records of any class.
    (ANY => 0xFF, "*")
}

#[cfg(test)]
mod test {
    use super::Class;

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Class::IN), "Class::IN");
        assert_eq!(format!("{:?}", Class::from_int(69)), "Class(69)");
    }
}
