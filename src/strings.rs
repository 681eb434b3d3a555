//! Byte-class predicates for the scanner and rewriter.

pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

pub fn is_line_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

pub fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b'$'
}

pub fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

/// Tag names admit member access (`Foo.Bar`), namespaces (`svg:rect`) and
/// dashed web-component names.
pub fn is_tag_name_byte(byte: u8) -> bool {
    is_ident_byte(byte) || matches!(byte, b'.' | b':' | b'-')
}

pub fn is_attr_name_byte(byte: u8) -> bool {
    is_ident_byte(byte) || matches!(byte, b'-' | b':')
}
