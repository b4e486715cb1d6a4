//! Counterparty matching against scraped candidate lines.
//!
//! Candidate lines come from a scrollable list the registration collaborator
//! scrapes off the external application. Each line is comma-delimited; the
//! tokens of interest carry the tax-id and subcode markers.

/// Marker preceding a counterparty's tax id in a candidate line.
pub const TAX_ID_MARKER: &str = "ИНН";
/// Marker preceding a counterparty's registration subcode.
pub const SUBCODE_MARKER: &str = "КПП";

/// Finds the candidate line identifying the given counterparty.
///
/// A line matches when a `ИНН:<tax id>` token appears verbatim among its
/// normalized tokens, and additionally either the `КПП:<subcode>` token
/// appears (when a subcode is supplied) or some token contains the
/// normalized counterparty name as a substring (when it is not). A supplied
/// but wrong subcode fails the match outright; there is no fallback to name
/// matching. Returns the index of the first matching line, in input order.
pub fn find_counterparty_key<S: AsRef<str>>(
    lines: &[S],
    tax_id: &str,
    subcode: Option<&str>,
    name: &str,
) -> Option<usize> {
    let tax_token = normalize_token(&format!("{TAX_ID_MARKER}:{tax_id}"));
    let subcode_token = subcode.map(|s| normalize_token(&format!("{SUBCODE_MARKER}:{s}")));
    let name_needle = normalize_token(name);

    lines.iter().position(|line| {
        let tokens: Vec<String> = line
            .as_ref()
            .split(',')
            .map(normalize_token)
            .collect();

        if !tokens.iter().any(|t| *t == tax_token) {
            return false;
        }

        match &subcode_token {
            Some(needed) => tokens.iter().any(|t| t == needed),
            None => {
                !name_needle.is_empty() && tokens.iter().any(|t| t.contains(&name_needle))
            }
        }
    })
}

/// Trims a token, drops all whitespace and lower-cases the rest.
fn normalize_token(token: &str) -> String {
    token
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<String> {
        vec![
            "Acme Corp,ИНН:1234567890,КПП:987654321".to_string(),
            "Beta LLC,ИНН:1111111111".to_string(),
        ]
    }

    #[test]
    fn test_match_by_tax_id_and_subcode() {
        let idx = find_counterparty_key(&lines(), "1234567890", Some("987654321"), "Acme Corp");
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn test_wrong_subcode_does_not_fall_back_to_name() {
        let idx = find_counterparty_key(&lines(), "1234567890", Some("000000000"), "Acme Corp");
        assert_eq!(idx, None);
    }

    #[test]
    fn test_match_by_name_without_subcode() {
        let idx = find_counterparty_key(&lines(), "1111111111", None, "Beta LLC");
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn test_tax_id_is_mandatory() {
        let idx = find_counterparty_key(&lines(), "9999999999", None, "Acme Corp");
        assert_eq!(idx, None);
    }

    #[test]
    fn test_name_match_is_substring_after_normalization() {
        let scraped = vec!["ООО \"Бета Плюс\",ИНН:2222222222".to_string()];
        let idx = find_counterparty_key(&scraped, "2222222222", None, "бета плюс");
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn test_tokens_are_whitespace_and_case_insensitive() {
        let scraped = vec!["Acme Corp , инн: 1234 567 890 ".to_string()];
        let idx = find_counterparty_key(&scraped, "1234567890", None, "ACME");
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn test_first_matching_line_wins() {
        let scraped = vec![
            "Acme branch,ИНН:1234567890".to_string(),
            "Acme head office,ИНН:1234567890".to_string(),
        ];
        let idx = find_counterparty_key(&scraped, "1234567890", None, "Acme");
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn test_empty_name_without_subcode_matches_nothing() {
        let idx = find_counterparty_key(&lines(), "1111111111", None, "  ");
        assert_eq!(idx, None);
    }
}
