use std::collections::HashMap;
use std::path::Path;

use crate::models::MimeType;

/// Guess a file's [`MimeType`] from its extension, then its shebang line.
///
/// `overrides` maps lowercase extensions to a type and wins over the built-in
/// table. `content` is only consulted when the extension is not conclusive.
pub fn detect_mime(path: &Path, content: &str, overrides: &HashMap<String, MimeType>) -> MimeType {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    if let Some(ext) = ext.as_deref() {
        if let Some(mime) = overrides.get(ext) {
            return *mime;
        }
        let mime = from_extension(ext);
        if mime != MimeType::Unknown {
            return mime;
        }
    }

    from_shebang(content)
}

fn from_extension(ext: &str) -> MimeType {
    match ext {
        "c" | "h" => MimeType::C,
        "cc" | "cpp" | "cxx" | "c++" | "hh" | "hpp" | "hxx" => MimeType::CPlusPlus,
        "java" => MimeType::Java,
        "html" | "htm" | "xhtml" => MimeType::Html,
        "xml" | "xsd" | "xsl" | "xslt" | "pom" | "svg" => MimeType::Xml,
        "sgml" | "sgm" => MimeType::Sgml,
        "py" | "pyw" => MimeType::Python,
        "sh" | "bash" | "ksh" | "zsh" => MimeType::Shell,
        "php" | "phtml" => MimeType::Php,
        _ => MimeType::Unknown,
    }
}

fn from_shebang(content: &str) -> MimeType {
    let Some(first) = content.lines().next() else {
        return MimeType::Unknown;
    };
    let Some(command) = first.trim().strip_prefix("#!") else {
        return MimeType::Unknown;
    };

    // `#!/usr/bin/env python3` names the interpreter in the last word
    let interpreter = command
        .split_whitespace()
        .last()
        .and_then(|w| w.rsplit('/').next())
        .unwrap_or("");

    if interpreter.starts_with("python") {
        MimeType::Python
    } else if interpreter.starts_with("php") {
        MimeType::Php
    } else if matches!(interpreter, "sh" | "bash" | "dash" | "ksh" | "zsh") {
        MimeType::Shell
    } else {
        MimeType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(name: &str, content: &str) -> MimeType {
        detect_mime(Path::new(name), content, &HashMap::new())
    }

    #[test]
    fn test_extensions() {
        assert_eq!(detect("main.c", ""), MimeType::C);
        assert_eq!(detect("lib.HPP", ""), MimeType::CPlusPlus);
        assert_eq!(detect("Main.java", ""), MimeType::Java);
        assert_eq!(detect("index.html", ""), MimeType::Html);
        assert_eq!(detect("pom.xml", ""), MimeType::Xml);
        assert_eq!(detect("setup.py", ""), MimeType::Python);
        assert_eq!(detect("run.sh", ""), MimeType::Shell);
        assert_eq!(detect("index.php", ""), MimeType::Php);
        assert_eq!(detect("notes.scratch", ""), MimeType::Unknown);
    }

    #[test]
    fn test_shebang_fallback() {
        assert_eq!(detect("configure", "#!/bin/sh\necho"), MimeType::Shell);
        assert_eq!(detect("tool", "#!/usr/bin/env python3\n"), MimeType::Python);
        assert_eq!(detect("tool", "#!/usr/bin/perl\n"), MimeType::Unknown);
        assert_eq!(detect("README", "plain text"), MimeType::Unknown);
    }

    #[test]
    fn test_overrides_win() {
        let mut overrides = HashMap::new();
        overrides.insert("h".to_string(), MimeType::CPlusPlus);
        assert_eq!(
            detect_mime(Path::new("x.h"), "", &overrides),
            MimeType::CPlusPlus
        );
    }
}
