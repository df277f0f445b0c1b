//! `mailto:` link builder for replying to contact messages.

use crate::uri::encode_component;

/// Build a `mailto:` link pre-filled with `subject`.
pub fn mailto(email: &str, subject: &str) -> String {
    format!("mailto:{email}?subject={}", encode_component(subject))
}

/// Reply link for a contact message: `Re: <original subject>`.
pub fn reply_link(email: &str, original_subject: &str) -> String {
    mailto(email, &format!("Re: {original_subject}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_link_prefixes_subject() {
        assert_eq!(
            reply_link("sam@example.test", "Quote request"),
            "mailto:sam@example.test?subject=Re%3A%20Quote%20request"
        );
    }

    #[test]
    fn ampersands_and_plus_signs_survive() {
        assert_eq!(
            mailto("a@b.test", "Q&A + more"),
            "mailto:a@b.test?subject=Q%26A%20%2B%20more"
        );
    }
}
