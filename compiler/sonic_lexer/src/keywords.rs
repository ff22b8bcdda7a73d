//! Reserved-word resolution.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (reserved words range from 1 to 15 bytes), then matches against the
//! spellings of that length. Lookups are case-sensitive: `Self` and `self`
//! resolve to different keywords, and `Let` is a plain identifier.

use crate::token::Keyword;

/// Look up a reserved word by identifier text.
///
/// Returns the corresponding [`Keyword`] if the text exactly equals one of
/// the reserved spellings, `None` for a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Keyword> {
    match text.len() {
        1 => match text {
            "_" => Some(Keyword::Underscore),
            _ => None,
        },
        2 => match text {
            "as" => Some(Keyword::As),
            "do" => Some(Keyword::Do),
            "if" => Some(Keyword::If),
            "in" => Some(Keyword::In),
            "is" => Some(Keyword::Is),
            _ => None,
        },
        3 => match text {
            "Any" => Some(Keyword::Any),
            "for" => Some(Keyword::For),
            "get" => Some(Keyword::Get),
            "let" => Some(Keyword::Let),
            "nil" => Some(Keyword::Nil),
            "set" => Some(Keyword::Set),
            "try" => Some(Keyword::Try),
            "var" => Some(Keyword::Var),
            _ => None,
        },
        4 => match text {
            "case" => Some(Keyword::Case),
            "else" => Some(Keyword::Else),
            "enum" => Some(Keyword::Enum),
            "func" => Some(Keyword::Func),
            "init" => Some(Keyword::Init),
            "lazy" => Some(Keyword::Lazy),
            "left" => Some(Keyword::Left),
            "none" => Some(Keyword::None),
            "open" => Some(Keyword::Open),
            "self" => Some(Keyword::SelfLower),
            "Self" => Some(Keyword::SelfUpper),
            "some" => Some(Keyword::Some),
            "true" => Some(Keyword::True),
            "Type" => Some(Keyword::Type),
            "weak" => Some(Keyword::Weak),
            _ => None,
        },
        5 => match text {
            "break" => Some(Keyword::Break),
            "catch" => Some(Keyword::Catch),
            "class" => Some(Keyword::Class),
            "defer" => Some(Keyword::Defer),
            "false" => Some(Keyword::False),
            "final" => Some(Keyword::Final),
            "guard" => Some(Keyword::Guard),
            "infix" => Some(Keyword::Infix),
            "inout" => Some(Keyword::Inout),
            "right" => Some(Keyword::Right),
            "super" => Some(Keyword::Super),
            "throw" => Some(Keyword::Throw),
            "where" => Some(Keyword::Where),
            "while" => Some(Keyword::While),
            _ => None,
        },
        6 => match text {
            "deinit" => Some(Keyword::Deinit),
            "didSet" => Some(Keyword::DidSet),
            "import" => Some(Keyword::Import),
            "prefix" => Some(Keyword::Prefix),
            "public" => Some(Keyword::Public),
            "repeat" => Some(Keyword::Repeat),
            "return" => Some(Keyword::Return),
            "static" => Some(Keyword::Static),
            "struct" => Some(Keyword::Struct),
            "switch" => Some(Keyword::Switch),
            "throws" => Some(Keyword::Throws),
            _ => None,
        },
        7 => match text {
            "default" => Some(Keyword::Default),
            "dynamic" => Some(Keyword::Dynamic),
            "postfix" => Some(Keyword::Postfix),
            "private" => Some(Keyword::Private),
            "unowned" => Some(Keyword::Unowned),
            "willSet" => Some(Keyword::WillSet),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Keyword::Continue),
            "indirect" => Some(Keyword::Indirect),
            "internal" => Some(Keyword::Internal),
            "mutating" => Some(Keyword::Mutating),
            "operator" => Some(Keyword::Operator),
            "optional" => Some(Keyword::Optional),
            "override" => Some(Keyword::Override),
            "protocol" => Some(Keyword::Protocol),
            "Protocol" => Some(Keyword::ProtocolUpper),
            "rethrows" => Some(Keyword::Rethrows),
            "required" => Some(Keyword::Required),
            _ => None,
        },
        9 => match text {
            "extension" => Some(Keyword::Extension),
            "subscript" => Some(Keyword::Subscript),
            "typealias" => Some(Keyword::Typealias),
            _ => None,
        },
        10 => match text {
            "precedence" => Some(Keyword::Precedence),
            _ => None,
        },
        11 => match text {
            "convenience" => Some(Keyword::Convenience),
            "fallthrough" => Some(Keyword::Fallthrough),
            "fileprivate" => Some(Keyword::Fileprivate),
            "nonmutating" => Some(Keyword::Nonmutating),
            _ => None,
        },
        13 => match text {
            "associativity" => Some(Keyword::Associativity),
            _ => None,
        },
        14 => match text {
            "associatedtype" => Some(Keyword::Associatedtype),
            _ => None,
        },
        15 => match text {
            "precedencegroup" => Some(Keyword::Precedencegroup),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
