//! Base-name normalization.

/// Normalizes a file base name for spreadsheet/PDF comparison.
///
/// One pass trims the name, removes every case-insensitive occurrence of the
/// organizational marker, strips a trailing two-character done marker (the
/// Cyrillic or Latin "OK"), drops all remaining whitespace and lower-cases
/// the rest. The pass is iterated to a fixpoint, which makes the function
/// idempotent for every input, not just well-formed ones.
pub fn normalize(name: &str, org_marker: &str) -> String {
    let mut current = name.to_string();
    loop {
        let next = normalize_once(&current, org_marker);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn normalize_once(name: &str, org_marker: &str) -> String {
    let trimmed = name.trim();
    let without_marker = remove_all_ci(trimmed, org_marker);
    let without_done = strip_done_marker(&without_marker);
    without_done
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Removes every non-overlapping, case-insensitive occurrence of `marker`.
fn remove_all_ci(input: &str, marker: &str) -> String {
    if marker.is_empty() {
        return input.to_string();
    }

    let chars: Vec<char> = input.chars().collect();
    let marker_chars: Vec<char> = marker
        .chars()
        .flat_map(char::to_lowercase)
        .collect();

    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        if matches_at(&chars, i, &marker_chars) {
            i += marker_chars.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn matches_at(chars: &[char], start: usize, marker_lower: &[char]) -> bool {
    if start + marker_lower.len() > chars.len() {
        return false;
    }
    chars[start..start + marker_lower.len()]
        .iter()
        .zip(marker_lower)
        .all(|(c, m)| c.to_lowercase().next() == Some(*m))
}

/// Strips a trailing "OK" done marker, in either script, case-insensitively.
fn strip_done_marker(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() < 2 {
        return input.to_string();
    }

    let tail: Vec<char> = chars[chars.len() - 2..]
        .iter()
        .filter_map(|c| c.to_lowercase().next())
        .collect();
    let is_done = tail == ['о', 'к'] || tail == ['o', 'k'];
    if is_done {
        chars[..chars.len() - 2].iter().collect()
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "ЭДО";

    #[test]
    fn test_plain_name_is_lowercased_and_stripped() {
        assert_eq!(normalize("  Report 2026 ", MARKER), "report2026");
    }

    #[test]
    fn test_org_marker_removed_case_insensitively() {
        assert_eq!(normalize("Report ЭДО 2026", MARKER), "report2026");
        assert_eq!(normalize("Report эдо 2026", MARKER), "report2026");
    }

    #[test]
    fn test_done_marker_stripped_in_both_scripts() {
        assert_eq!(normalize("Report ОК", MARKER), "report");
        assert_eq!(normalize("Report OK", MARKER), "report");
        assert_eq!(normalize("Report ok", MARKER), "report");
    }

    #[test]
    fn test_done_marker_equivalence() {
        // A converted sheet and its plain original compare equal.
        assert_eq!(normalize("Report ОК", MARKER), normalize("Report", MARKER));
    }

    #[test]
    fn test_latin_marker() {
        assert_eq!(normalize("acme Report", "ACME"), "report");
    }

    #[test]
    fn test_empty_marker_is_inert() {
        assert_eq!(normalize("Report ЭДО", ""), "reportэдо");
    }

    #[test]
    fn test_idempotent_on_simple_names() {
        let once = normalize("Report ЭДО ОК", MARKER);
        assert_eq!(normalize(&once, MARKER), once);
    }

    #[test]
    fn test_idempotent_on_adversarial_names() {
        // Whitespace removal can surface a new trailing marker; the fixpoint
        // loop still converges to a stable value.
        for name in ["o k", "okok", "Э ДО", "ЭЭДОДО", "brook", "  ", ""] {
            let once = normalize(name, MARKER);
            assert_eq!(normalize(&once, MARKER), once, "input: {name:?}");
        }
    }

    #[test]
    fn test_nested_marker_occurrences_removed() {
        assert_eq!(normalize("ЭЭДОДОreport", MARKER), "report");
    }

    #[test]
    fn test_normalization_can_yield_empty() {
        assert_eq!(normalize(" ЭДО ОК ", MARKER), "");
    }
}
