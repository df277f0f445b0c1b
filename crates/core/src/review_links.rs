//! Google review link generator offered on the Tools page.
//!
//! Pure string templating; nothing is stored.

use serde::Serialize;

use crate::forms::ReviewLinkForm;
use crate::uri::encode_component;

const WRITE_REVIEW_BASE: &str = "https://search.google.com/local/writereview?placeid=";
const SEARCH_BASE: &str = "https://www.google.com/search?q=";

/// One generated link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewLink {
    pub platform: &'static str,
    pub url: String,
    pub description: &'static str,
}

/// Suggestions rendered under the generated links.
pub const USAGE_TIPS: &[&str] = &[
    "Share these links with satisfied customers via email, SMS, or social media",
    "Add QR codes with these links to receipts, business cards, or flyers",
    "Include them in follow-up emails after completing services",
    "Post them on your website or social media profiles",
];

/// Build both review links. Callers validate the form first; the business
/// name and location are trimmed here.
pub fn generate(form: &ReviewLinkForm) -> Vec<ReviewLink> {
    let name = encode_component(form.business_name.trim());
    let location = form.location.trim();

    // Encoding leaves no whitespace, so the encoded name is the place id.
    let place_id = name.clone();

    let mut query = name;
    if !location.is_empty() {
        query.push('+');
        query.push_str(&encode_component(location));
    }
    query.push_str("+reviews");

    vec![
        ReviewLink {
            platform: "Google Reviews",
            url: format!("{WRITE_REVIEW_BASE}{place_id}"),
            description: "Direct link to leave a Google review",
        },
        ReviewLink {
            platform: "Google Business Profile",
            url: format!("{SEARCH_BASE}{query}"),
            description: "Search for your business to find review options",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, location: &str) -> ReviewLinkForm {
        ReviewLinkForm {
            business_name: name.into(),
            location: location.into(),
        }
    }

    #[test]
    fn builds_both_templates_with_location() {
        let links = generate(&form("  Acme Plumbing ", "Denver, CO"));
        assert_eq!(links.len(), 2);
        assert_eq!(
            links[0].url,
            "https://search.google.com/local/writereview?placeid=Acme%20Plumbing"
        );
        assert_eq!(
            links[1].url,
            "https://www.google.com/search?q=Acme%20Plumbing+Denver%2C%20CO+reviews"
        );
    }

    #[test]
    fn location_is_optional() {
        let links = generate(&form("Bob's Bakery", "   "));
        assert_eq!(
            links[1].url,
            "https://www.google.com/search?q=Bob's%20Bakery+reviews"
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let links = generate(&form("A&B/C", ""));
        assert!(links[0].url.ends_with("placeid=A%26B%2FC"));
    }
}
