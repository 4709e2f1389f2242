use crate::extractor::{extract_or_empty, ExtractOptions};
use crate::error::Result;
use crate::models::{MimeType, ParsedItem};

use super::filter::split_relevant;

const SPDX_TAG: &str = "spdx-license-identifier";

/// Words that tend to show up in license headers.
const LICENSE_KEYWORDS: &[&str] = &[
    "source",
    "free",
    "under",
    "use",
    "copyright",
    "grant",
    "software",
    "license",
    "licence",
    "agreement",
    "distribute",
    "redistribution",
    "liability",
    "rights",
    "reserved",
    "general",
    "public",
    "modify",
    "modified",
    "modification",
    "permission",
    "permitted",
    "granted",
    "distributed",
    "notice",
    "distribution",
    "terms",
    "freely",
    "licensed",
    "merchantability",
    "warranty",
    "redistributed",
    "see",
    "read",
    "(c)",
    "copying",
    "legal",
    "licensing",
    "spdx",
];

/// Number of distinct keywords found in `text` (substring match, case-insensitive).
pub fn keyword_score(text: &str) -> usize {
    let lower = text.to_lowercase();
    LICENSE_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count()
}

/// Pick the comment most likely to be the license header.
///
/// Only comments are considered; string literals are code. A comment
/// carrying an `SPDX-License-Identifier` tag wins outright. Otherwise the
/// highest keyword score wins, earliest on ties; `None` when nothing scores.
pub fn best_license_comment(items: &[ParsedItem]) -> Option<String> {
    let mut best: Option<(String, usize)> = None;

    for item in items {
        let ParsedItem::Comment(comment) = item else {
            continue;
        };
        let text = comment.text();
        if text.to_lowercase().contains(SPDX_TAG) {
            return Some(text);
        }

        let score = keyword_score(&text);
        if score > best.as_ref().map(|(_, s)| *s).unwrap_or(0) {
            best = Some((text, score));
        }
    }

    best.map(|(text, _)| text)
}

/// Text to hand to the classifier for one file.
///
/// The license-relevant literals when there are any, the raw text otherwise.
pub fn select_text(raw: &str, mime: MimeType, options: &ExtractOptions) -> Result<String> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }

    let literals = extract_or_empty(raw, mime, options)?;
    let split = split_relevant(&literals);
    if split.has_relevant() {
        Ok(split.relevant)
    } else {
        Ok(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, StringLiteral};

    fn comments(texts: &[&str]) -> Vec<ParsedItem> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| ParsedItem::Comment(Comment::single(*t, i * 3 + 1)))
            .collect()
    }

    #[test]
    fn test_spdx_wins() {
        let items = comments(&[
            "Copyright (c) 2020 ACME. All rights reserved. Licensed under the terms of",
            "SPDX-License-Identifier: MIT",
        ]);
        assert_eq!(
            best_license_comment(&items).as_deref(),
            Some("SPDX-License-Identifier: MIT")
        );
    }

    #[test]
    fn test_highest_score_wins() {
        let items = comments(&[
            "helper function",
            "Copyright 2020. Permission is hereby granted, free of charge",
            "see also",
        ]);
        assert_eq!(
            best_license_comment(&items).as_deref(),
            Some("Copyright 2020. Permission is hereby granted, free of charge")
        );
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let items = comments(&["copyright one", "copyright two"]);
        assert_eq!(best_license_comment(&items).as_deref(), Some("copyright one"));
    }

    #[test]
    fn test_nothing_scores() {
        assert_eq!(best_license_comment(&comments(&["x", "y"])), None);
    }

    #[test]
    fn test_strings_never_chosen() {
        let mut items = comments(&["copyright holder"]);
        items.push(ParsedItem::String(StringLiteral::new(
            "SPDX-License-Identifier: MIT",
            9,
        )));
        assert_eq!(best_license_comment(&items).as_deref(), Some("copyright holder"));

        let only_strings = vec![ParsedItem::String(StringLiteral::new("licensed under MIT", 1))];
        assert_eq!(best_license_comment(&only_strings), None);
    }

    #[test]
    fn test_multiline_comment_joined() {
        let items = vec![ParsedItem::Comment(Comment::new(
            vec!["Copyright 2020".into(), "Licensed under MIT".into()],
            1,
            2,
        ))];
        assert_eq!(
            best_license_comment(&items).as_deref(),
            Some("Copyright 2020\nLicensed under MIT")
        );
    }

    #[test]
    fn test_select_text_prefers_relevant() {
        let src = "// Copyright 2020 ACME\nint main() { puts(\"hi\"); }\n";
        let text = select_text(src, MimeType::C, &ExtractOptions::default()).unwrap();
        assert_eq!(text, "Copyright 2020 ACME\n");
    }

    #[test]
    fn test_select_text_falls_back_to_raw() {
        let src = "int main() { return 0; }\n";
        assert_eq!(
            select_text(src, MimeType::C, &ExtractOptions::default()).unwrap(),
            src
        );
        assert_eq!(
            select_text("MIT License", MimeType::Unknown, &ExtractOptions::default()).unwrap(),
            "MIT License"
        );
    }

    #[test]
    fn test_select_text_empty() {
        assert_eq!(
            select_text("  \n", MimeType::C, &ExtractOptions::default()).unwrap(),
            ""
        );
    }
}
