//! YANG to Thrift type mapping.

use ironyang_schema::TypeKind;

/// Prefix of type tokens standing in for a missing Thrift mapping.
pub const PLACEHOLDER_PREFIX: &str = "TODO-";

/// Returns the Thrift type token for a YANG base type.
///
/// Types without a Thrift equivalent yet map to a `TODO-` placeholder.
#[must_use]
pub const fn thrift_type(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Int8 => "byte",           // [-128, 127]
        TypeKind::Int16 => "i16",           // [-32768, 32767]
        TypeKind::Int32 => "i32",           // [-2147483648, 2147483647]
        TypeKind::Int64 => "i64",           // [-9223372036854775808, 9223372036854775807]
        TypeKind::Uint8 => "TODO-uint8",    // [0, 255]
        TypeKind::Uint16 => "TODO-uint16",  // [0, 65535]
        TypeKind::Uint32 => "TODO-uint32",  // [0, 4294967295]
        TypeKind::Uint64 => "TODO-uint64",  // [0, 18446744073709551615]
        TypeKind::Binary => "TODO-bytes",
        TypeKind::Bits => "TODO-bits",
        TypeKind::Boolean => "bool",
        TypeKind::Decimal64 => "TODO-decimal64",
        TypeKind::Empty => "TODO-empty",
        TypeKind::Enumeration => "enum",
        TypeKind::Identityref => "string",
        TypeKind::InstanceIdentifier => "TODO-ii",
        TypeKind::Leafref => "string",
        TypeKind::String => "string",
        TypeKind::Union => "TODO-union",
        TypeKind::None => "TODO-none",
    }
}

/// Returns true if `token` is a placeholder rather than a Thrift type.
#[must_use]
pub fn is_placeholder(token: &str) -> bool {
    token.starts_with(PLACEHOLDER_PREFIX)
}
