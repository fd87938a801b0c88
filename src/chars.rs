// ABOUTME: Character classes for hostname labels.
// ABOUTME: Pure const predicates over single characters, ASCII only.

/// `'0'` through `'9'`.
pub const fn is_numeric(c: char) -> bool {
    matches!(c, '0'..='9')
}

/// `'A'` through `'Z'` or `'a'` through `'z'`.
pub const fn is_alphabetic(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z')
}

/// The hyphen, permitted inside a label but not at its start.
pub const fn is_delimiter(c: char) -> bool {
    c == '-'
}

pub const fn is_alphanumeric(c: char) -> bool {
    is_numeric(c) || is_alphabetic(c)
}

/// Valid as the first character of a label.
pub const fn is_label_start(c: char) -> bool {
    !is_delimiter(c) && is_alphanumeric(c)
}

/// Valid anywhere in a label.
pub const fn is_label_char(c: char) -> bool {
    is_alphanumeric(c) || is_delimiter(c)
}
