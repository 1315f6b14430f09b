use std::collections::HashSet;

use regex::Regex;

// Characters replaced with a space before matching, so the pattern cannot run
// across tag boundaries. This is coarse markup neutralization, not a parser.
const MARKUP_CHARS: [char; 9] = ['<', '>', '/', '\\', ';', ':', '=', '&', '%'];

/// Extract every email address in `body` whose host part ends with `domain`.
///
/// Deliberately permissive: matches a superset of RFC-valid addresses,
/// trading precision for recall since search result snippets are noisy and
/// often truncated. Pure function, no failure modes.
pub fn extract_emails(body: &str, domain: &str) -> HashSet<String> {
    let cleaned: String = body
        .chars()
        .map(|c| if MARKUP_CHARS.contains(&c) { ' ' } else { c })
        .collect();

    // The domain is caller data, not a pattern. Escaping keeps "." literal,
    // so "ex.ample.com" never matches "exXample.com".
    let pattern = format!(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]*{}", regex::escape(domain));
    let email_regex = Regex::new(&pattern).unwrap(); // escaped domain is always a valid pattern

    email_regex
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::extract_emails;

    fn set(emails: &[&str]) -> HashSet<String> {
        emails.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn extracts_addresses_wrapped_in_markup() {
        let body = "contact john.doe@example.com or <b>jane@example.com</b> now";
        let result = extract_emails(body, "example.com");

        assert_eq!(result, set(&["john.doe@example.com", "jane@example.com"]));
    }

    #[test]
    fn ignores_other_domains() {
        let body = "reach us at sales@other.com";
        let result = extract_emails(body, "example.com");

        assert!(result.is_empty());
    }

    #[test]
    fn matches_address_with_no_subdomain() {
        let body = "mail admin@example.com today";
        let result = extract_emails(body, "example.com");

        assert_eq!(result, set(&["admin@example.com"]));
    }

    #[test]
    fn matches_subdomain_hosts() {
        let body = "support is at help@mail.example.com";
        let result = extract_emails(body, "example.com");

        assert_eq!(result, set(&["help@mail.example.com"]));
    }

    #[test]
    fn domain_dots_stay_literal() {
        let body = "real x@ex.ample.com decoy x@exXample.com";
        let result = extract_emails(body, "ex.ample.com");

        assert_eq!(result, set(&["x@ex.ample.com"]));
    }

    #[test]
    fn duplicates_collapse() {
        let body = "a@example.com again a@example.com and <a@example.com>";
        let result = extract_emails(body, "example.com");

        assert_eq!(result, set(&["a@example.com"]));
    }

    #[test]
    fn empty_body_yields_empty_set() {
        assert!(extract_emails("", "example.com").is_empty());
    }

    #[test]
    fn extraction_is_idempotent() {
        let body = "x@example.com <y@example.com> plus noise@other.org";
        let first = extract_emails(body, "example.com");
        let second = extract_emails(body, "example.com");

        assert_eq!(first, second);
    }

    #[test]
    fn every_match_ends_with_domain_and_has_one_at_sign() {
        let body = "a@example.com b@sub.example.com c@other.com <d@example.com/path>";
        let result = extract_emails(body, "example.com");

        for email in &result {
            assert!(email.ends_with("example.com"));
            assert_eq!(email.matches('@').count(), 1);
        }
    }
}
