//! URI component encoding shared by the link builders.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the characters a
/// browser's `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one URI component. Spaces become `%20`, never `+`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_reserved_characters_are_escaped() {
        assert_eq!(encode_component("Acme Plumbing"), "Acme%20Plumbing");
        assert_eq!(encode_component("A&B/C+D=E?"), "A%26B%2FC%2BD%3DE%3F");
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(encode_component("Bob's (Best)!*~-_."), "Bob's%20(Best)!*~-_.");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(encode_component("Café"), "Caf%C3%A9");
    }
}
