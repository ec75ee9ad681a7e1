//! Label parsing and key derivation for "label: value" lines

/// Derive a map key from a free-text label
///
/// Trims the label, lower-cases its first character, and removes every
/// whitespace character from the remainder:
/// - `"Relevant Period Start"` → `"relevantPeriodStart"`
/// - `"Negation Reason"` → `"negationReason"`
///
/// Only the first character is lower-cased, so `"ID"` becomes `"iD"`.
pub fn derive_key(label: &str) -> String {
    let mut chars = label.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_lowercase()
            .chain(chars.filter(|c| !c.is_whitespace()))
            .collect(),
        None => String::new(),
    }
}

/// Split a line into its label and value on the first colon
///
/// Both halves are trimmed. Returns `None` when there is no colon or
/// either half is empty, so callers never record a partial entry.
pub fn parse_label_line(text: &str) -> Option<(&str, &str)> {
    let (label, value) = text.split_once(':')?;
    let (label, value) = (label.trim(), value.trim());
    if label.is_empty() || value.is_empty() {
        return None;
    }
    Some((label, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Relevant Period Start", "relevantPeriodStart")]
    #[test_case("Relevant Period End", "relevantPeriodEnd")]
    #[test_case("Prevalence Period Start", "prevalencePeriodStart")]
    #[test_case("Author DateTime", "authorDateTime")]
    #[test_case("Result DateTime", "resultDateTime")]
    #[test_case("Result", "result")]
    #[test_case("Negation Reason", "negationReason")]
    #[test_case("Birth Datetime", "birthDatetime")]
    #[test_case("Expired Datetime", "expiredDatetime")]
    fn test_derive_key_observed_labels(label: &str, expected: &str) {
        assert_eq!(derive_key(label), expected);
    }

    #[test_case("  Relevant   Period\tStart  ", "relevantPeriodStart" ; "irregular whitespace")]
    #[test_case("ID", "iD" ; "only first character lowered")]
    #[test_case("result", "result" ; "already lower")]
    #[test_case("", "" ; "empty label")]
    #[test_case("   ", "" ; "blank label")]
    fn test_derive_key_edge_cases(label: &str, expected: &str) {
        assert_eq!(derive_key(label), expected);
    }

    #[test]
    fn test_parse_label_line_basic() {
        assert_eq!(
            parse_label_line("Relevant Period Start: 2020-01-01"),
            Some(("Relevant Period Start", "2020-01-01"))
        );
    }

    #[test]
    fn test_parse_label_line_keeps_later_colons_in_value() {
        assert_eq!(
            parse_label_line("Relevant Period Start: 2020-01-01T10:30:00"),
            Some(("Relevant Period Start", "2020-01-01T10:30:00"))
        );
        assert_eq!(
            parse_label_line("CPT:99213-Office: Established"),
            Some(("CPT", "99213-Office: Established"))
        );
    }

    #[test_case("No colon here" ; "no colon")]
    #[test_case("Result:" ; "empty value")]
    #[test_case("Result:    " ; "blank value")]
    #[test_case(": orphan value" ; "empty label")]
    #[test_case("" ; "empty line")]
    fn test_parse_label_line_dropped(text: &str) {
        assert_eq!(parse_label_line(text), None);
    }
}
