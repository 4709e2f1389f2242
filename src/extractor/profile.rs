use crate::error::{ExtractError, Result};
use crate::models::MimeType;

/// Delimiters of a block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockComment {
    pub open: &'static str,
    /// Prefix decorating interior lines (PHPDoc `*`), stripped when present.
    pub interior: Option<&'static str>,
    pub close: &'static str,
}

/// Comment and string syntax of a line-oriented language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedSyntax {
    pub line_comment: Option<&'static str>,
    pub block_comment: Option<BlockComment>,
    pub quotes: &'static [char],
}

/// Which markup reader a tree-structured document goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupDialect {
    /// Error-tolerant HTML tokenizer; also used for SGML.
    Html,
    /// Well-formed XML event reader.
    Xml,
}

/// How a MIME type is lexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageProfile {
    Delimited(DelimitedSyntax),
    /// Tree-structured document handed to a markup reader.
    Markup(MarkupDialect),
}

const C_LIKE: LanguageProfile = LanguageProfile::Delimited(DelimitedSyntax {
    line_comment: Some("//"),
    block_comment: Some(BlockComment {
        open: "/*",
        interior: None,
        close: "*/",
    }),
    quotes: &['"'],
});

const PYTHON: LanguageProfile = LanguageProfile::Delimited(DelimitedSyntax {
    line_comment: Some("#"),
    block_comment: Some(BlockComment {
        open: "\"\"\"",
        interior: None,
        close: "\"\"\"",
    }),
    quotes: &['"', '\''],
});

const SHELL: LanguageProfile = LanguageProfile::Delimited(DelimitedSyntax {
    line_comment: Some("#"),
    block_comment: None,
    quotes: &['"', '\''],
});

// PHPDoc style docblocks
const PHP: LanguageProfile = LanguageProfile::Delimited(DelimitedSyntax {
    line_comment: Some("//"),
    block_comment: Some(BlockComment {
        open: "/**",
        interior: Some("*"),
        close: "*/",
    }),
    quotes: &['"', '\''],
});

/// Look up the profile registered for `mime`.
pub fn profile_for(mime: MimeType) -> Result<&'static LanguageProfile> {
    match mime {
        MimeType::C | MimeType::CPlusPlus | MimeType::Java => Ok(&C_LIKE),
        MimeType::Python => Ok(&PYTHON),
        MimeType::Shell => Ok(&SHELL),
        MimeType::Php => Ok(&PHP),
        MimeType::Html | MimeType::Sgml => Ok(&LanguageProfile::Markup(MarkupDialect::Html)),
        MimeType::Xml => Ok(&LanguageProfile::Markup(MarkupDialect::Xml)),
        MimeType::Unknown => Err(ExtractError::UnsupportedLanguage(mime)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_family_shares_profile() {
        let c = profile_for(MimeType::C).unwrap();
        assert_eq!(profile_for(MimeType::CPlusPlus).unwrap(), c);
        assert_eq!(profile_for(MimeType::Java).unwrap(), c);
    }

    #[test]
    fn test_shell_has_no_block_comments() {
        match profile_for(MimeType::Shell).unwrap() {
            LanguageProfile::Delimited(syntax) => {
                assert_eq!(syntax.line_comment, Some("#"));
                assert!(syntax.block_comment.is_none());
            }
            LanguageProfile::Markup(_) => panic!("shell is not markup"),
        }
    }

    #[test]
    fn test_markup_profiles() {
        let html = LanguageProfile::Markup(MarkupDialect::Html);
        assert_eq!(profile_for(MimeType::Html).unwrap(), &html);
        assert_eq!(profile_for(MimeType::Sgml).unwrap(), &html);
        assert_eq!(
            profile_for(MimeType::Xml).unwrap(),
            &LanguageProfile::Markup(MarkupDialect::Xml)
        );
    }

    #[test]
    fn test_unknown_is_unsupported() {
        assert!(matches!(
            profile_for(MimeType::Unknown),
            Err(ExtractError::UnsupportedLanguage(MimeType::Unknown))
        ));
    }
}
