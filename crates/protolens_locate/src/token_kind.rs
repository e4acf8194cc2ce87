//! Token categories the engine can resolve.

use std::fmt;

/// Semantic category of a token.
///
/// Keyword kinds (`Package`, `Message`, ...) along with `Comment`,
/// `FieldCardinality` and `FieldType` are recorded while resolving other
/// kinds but cannot be requested on their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Comment,
    Package,
    PackageName,
    Message,
    MessageName,
    Enum,
    EnumName,
    EnumValueName,
    FieldCardinality,
    FieldType,
    FieldName,
    Rpc,
    RpcName,
    Service,
    ServiceName,
    /// The `required` keyword of a proto2 field.
    Required,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 16] = [
        TokenKind::Comment,
        TokenKind::Package,
        TokenKind::PackageName,
        TokenKind::Message,
        TokenKind::MessageName,
        TokenKind::Enum,
        TokenKind::EnumName,
        TokenKind::EnumValueName,
        TokenKind::FieldCardinality,
        TokenKind::FieldType,
        TokenKind::FieldName,
        TokenKind::Rpc,
        TokenKind::RpcName,
        TokenKind::Service,
        TokenKind::ServiceName,
        TokenKind::Required,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Package => "package keyword",
            TokenKind::PackageName => "package name",
            TokenKind::Message => "message keyword",
            TokenKind::MessageName => "message name",
            TokenKind::Enum => "enum keyword",
            TokenKind::EnumName => "enum name",
            TokenKind::EnumValueName => "enum value name",
            TokenKind::FieldCardinality => "field cardinality",
            TokenKind::FieldType => "field type",
            TokenKind::FieldName => "field name",
            TokenKind::Rpc => "rpc keyword",
            TokenKind::RpcName => "rpc name",
            TokenKind::Service => "service keyword",
            TokenKind::ServiceName => "service name",
            TokenKind::Required => "required keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
