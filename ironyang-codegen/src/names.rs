//! Identifier normalization.

/// Converts a schema name into a valid Thrift type identifier.
///
/// ASCII letters, digits and underscores are kept; every other character
/// becomes an underscore. A leading digit gets an underscore prefix and an
/// empty name becomes `_`. Applying this twice gives the same result as
/// applying it once.
#[must_use]
pub fn struct_name(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len() + 1);

    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            result.push(c);
        } else {
            result.push('_');
        }
    }

    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    result
}

/// Converts a schema name into a Thrift field name.
///
/// Only hyphens are replaced; use [`struct_name`] for type identifiers.
#[must_use]
pub fn field_name(raw: &str) -> String {
    raw.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_name() {
        assert_eq!(struct_name("Device"), "Device");
        assert_eq!(struct_name("interfaces-state"), "interfaces_state");
        assert_eq!(struct_name("ietf.ip:v4"), "ietf_ip_v4");
        assert_eq!(struct_name("8021x"), "_8021x");
        assert_eq!(struct_name(""), "_");
        assert_eq!(struct_name("caf\u{e9}"), "caf_");
    }

    #[test]
    fn test_struct_name_idempotent() {
        let inputs = [
            "",
            "a",
            "-",
            "9",
            "9-a",
            "host-name",
            "x.y.z",
            "__",
            "a b\tc",
            "\u{3b1}\u{3b2}",
            "Already_Ok",
        ];
        for raw in inputs {
            let once = struct_name(raw);
            assert_eq!(struct_name(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn test_field_name_only_replaces_hyphens() {
        assert_eq!(field_name("host-name"), "host_name");
        assert_eq!(field_name("ip-addr-v4"), "ip_addr_v4");
        assert_eq!(field_name("a.b"), "a.b");
        assert_eq!(field_name("plain"), "plain");
    }
}
