//! YANG type definitions.
//!
//! This module contains the built-in YANG base types and the type reference
//! carried by leaf entries.

use std::fmt;

/// Built-in YANG base type of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeKind {
    /// Base type could not be resolved (unknown typedef).
    None,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Arbitrary binary data.
    Binary,
    /// Set of named bits.
    Bits,
    /// Boolean value.
    Boolean,
    /// Signed decimal number.
    Decimal64,
    /// Leaf without a value.
    Empty,
    /// Enumerated strings.
    Enumeration,
    /// Reference to an identity.
    Identityref,
    /// Reference to a data tree node.
    InstanceIdentifier,
    /// Reference to a leaf instance.
    Leafref,
    /// Human readable string.
    String,
    /// Choice of member types.
    Union,
}

impl TypeKind {
    /// Every type kind, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::None,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Binary,
        Self::Bits,
        Self::Boolean,
        Self::Decimal64,
        Self::Empty,
        Self::Enumeration,
        Self::Identityref,
        Self::InstanceIdentifier,
        Self::Leafref,
        Self::String,
        Self::Union,
    ];

    /// Returns the YANG keyword naming this type.
    #[must_use]
    pub const fn yang_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Binary => "binary",
            Self::Bits => "bits",
            Self::Boolean => "boolean",
            Self::Decimal64 => "decimal64",
            Self::Empty => "empty",
            Self::Enumeration => "enumeration",
            Self::Identityref => "identityref",
            Self::InstanceIdentifier => "instance-identifier",
            Self::Leafref => "leafref",
            Self::String => "string",
            Self::Union => "union",
        }
    }

    /// Parses a built-in type from its YANG keyword.
    ///
    /// Returns `None` for derived (typedef) names.
    #[must_use]
    pub fn from_yang_name(name: &str) -> Option<Self> {
        match name {
            "int8" => Some(Self::Int8),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "uint8" => Some(Self::Uint8),
            "uint16" => Some(Self::Uint16),
            "uint32" => Some(Self::Uint32),
            "uint64" => Some(Self::Uint64),
            "binary" => Some(Self::Binary),
            "bits" => Some(Self::Bits),
            "boolean" => Some(Self::Boolean),
            "decimal64" => Some(Self::Decimal64),
            "empty" => Some(Self::Empty),
            "enumeration" => Some(Self::Enumeration),
            "identityref" => Some(Self::Identityref),
            "instance-identifier" => Some(Self::InstanceIdentifier),
            "leafref" => Some(Self::Leafref),
            "string" => Some(Self::String),
            "union" => Some(Self::Union),
            _ => None,
        }
    }

    /// Returns true if this is a signed integer type.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns true if this is an unsigned integer type.
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.yang_name())
    }
}

/// Type of a leaf as written in the schema, with its resolved base kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YangType {
    /// Type name as written (may name a typedef).
    pub name: String,
    /// Resolved base type.
    pub kind: TypeKind,
}

impl YangType {
    /// Creates a type reference.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a reference to a built-in type, named after the kind.
    #[must_use]
    pub fn builtin(kind: TypeKind) -> Self {
        Self::new(kind.yang_name(), kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yang_name_roundtrip() {
        for kind in TypeKind::ALL {
            if kind == TypeKind::None {
                continue;
            }
            assert_eq!(TypeKind::from_yang_name(kind.yang_name()), Some(kind));
        }
    }

    #[test]
    fn test_derived_name_is_not_builtin() {
        assert_eq!(TypeKind::from_yang_name("inet:ip-address"), None);
        assert_eq!(TypeKind::from_yang_name("none"), None);
        assert_eq!(TypeKind::from_yang_name("String"), None);
    }

    #[test]
    fn test_signedness() {
        assert!(TypeKind::Int32.is_signed());
        assert!(!TypeKind::Int32.is_unsigned());
        assert!(TypeKind::Uint16.is_unsigned());
        assert!(!TypeKind::String.is_signed());
        assert!(!TypeKind::String.is_unsigned());
    }

    #[test]
    fn test_builtin_type_name() {
        let ty = YangType::builtin(TypeKind::InstanceIdentifier);
        assert_eq!(ty.name, "instance-identifier");
        assert_eq!(ty.kind, TypeKind::InstanceIdentifier);
        assert_eq!(ty.kind.to_string(), "instance-identifier");
    }
}
