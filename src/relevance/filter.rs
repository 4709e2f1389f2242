use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Trigger words for license-relevant text: license/licence, copyright,
/// the `(c)` sign and "public domain".
pub static LICENSE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)licen|copyright|\(c\)|public domain").expect("valid license pattern")
});

/// Extracted literals split by license relevance, each newline-terminated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelevanceSplit {
    pub relevant: String,
    pub other: String,
}

impl RelevanceSplit {
    pub fn has_relevant(&self) -> bool {
        !self.relevant.is_empty()
    }
}

pub fn is_license_relevant(text: &str) -> bool {
    LICENSE_PATTERN.is_match(text)
}

/// Partition `literals` in order; every literal lands in exactly one blob.
pub fn split_relevant<S: AsRef<str>>(literals: &[S]) -> RelevanceSplit {
    let mut split = RelevanceSplit::default();
    for literal in literals {
        let literal = literal.as_ref();
        let target = if is_license_relevant(literal) {
            &mut split.relevant
        } else {
            &mut split.other
        };
        target.push_str(literal);
        target.push('\n');
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let split = split_relevant(&["This is MIT licensed", "foo()", "Copyright 2020"]);
        assert_eq!(split.relevant, "This is MIT licensed\nCopyright 2020\n");
        assert_eq!(split.other, "foo()\n");
    }

    #[test]
    fn test_empty_input() {
        let split = split_relevant::<&str>(&[]);
        assert_eq!(split, RelevanceSplit::default());
        assert!(!split.has_relevant());
    }

    #[test]
    fn test_trigger_words() {
        assert!(is_license_relevant("LICENCE"));
        assert!(is_license_relevant("(C) ACME Corp"));
        assert!(is_license_relevant("Released into the Public Domain"));
        assert!(is_license_relevant("COPYRIGHT notice"));
        assert!(!is_license_relevant("c = a + b"));
        assert!(!is_license_relevant("public static void main"));
    }

    #[test]
    fn test_no_drop_no_duplication() {
        let literals = vec!["a".to_string(), "license".to_string(), "b".to_string()];
        let split = split_relevant(&literals);
        let total = split.relevant.lines().count() + split.other.lines().count();
        assert_eq!(total, literals.len());
    }
}
