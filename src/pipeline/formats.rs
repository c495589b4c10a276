//! Format-list parsing
//!
//! The command line carries a comma-separated, case-insensitive list such as
//! `"DOCX, html"`. Each token becomes zero or more [`FormatRequest`] entries
//! in the order given; `all` expands to docx, pdf and html.

use std::fmt;
use std::str::FromStr;

/// Token used when no format list is supplied.
pub const DEFAULT_FORMAT: &str = "docx";

/// Every token accepted on the command line, for warnings and help text.
pub const SUPPORTED_TOKENS: &[&str] = &["docx", "pdf", "html", "all"];

/// An output format pandoc is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Docx,
    Pdf,
    Html,
}

impl Format {
    /// All formats in the order `all` expands to.
    pub const ALL: [Format; 3] = [Format::Docx, Format::Pdf, Format::Html];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Docx => "docx",
            Format::Pdf => "pdf",
            Format::Html => "html",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Format::Docx => "DOCX",
            Format::Pdf => "PDF",
            Format::Html => "HTML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "docx" => Ok(Format::Docx),
            "pdf" => Ok(Format::Pdf),
            "html" => Ok(Format::Html),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

/// One entry of a parsed format list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatRequest {
    Convert(Format),
    /// Token that names no format. Skipped with a warning.
    Unknown(String),
}

/// Normalise the raw argument into its lower-cased, trimmed tokens.
///
/// Empty tokens from stray commas are dropped. An argument that is missing
/// or leaves no tokens (`""`, `","`) yields the default token.
pub fn normalize_tokens(raw: Option<&str>) -> Vec<String> {
    let tokens: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        vec![DEFAULT_FORMAT.to_string()]
    } else {
        tokens
    }
}

/// Parse a format list into ordered requests, expanding `all`.
pub fn parse_format_list(raw: Option<&str>) -> Vec<FormatRequest> {
    parse_tokens(&normalize_tokens(raw))
}

/// Map already-normalised tokens to requests, expanding `all`.
pub fn parse_tokens(tokens: &[String]) -> Vec<FormatRequest> {
    let mut requests = Vec::new();
    for token in tokens {
        if token == "all" {
            requests.extend(Format::ALL.iter().copied().map(FormatRequest::Convert));
            continue;
        }
        match token.parse::<Format>() {
            Ok(format) => requests.push(FormatRequest::Convert(format)),
            Err(_) => requests.push(FormatRequest::Unknown(token.clone())),
        }
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("PDF".parse::<Format>(), Ok(Format::Pdf));
        assert_eq!(" Html ".parse::<Format>(), Ok(Format::Html));
        assert!("rtf".parse::<Format>().is_err());
    }

    #[test]
    fn test_blank_argument_uses_default() {
        assert_eq!(normalize_tokens(Some("   ")), vec!["docx"]);
        assert_eq!(normalize_tokens(None), vec!["docx"]);
    }

    #[test]
    fn test_stray_commas_are_dropped() {
        assert_eq!(normalize_tokens(Some("docx,,pdf,")), vec!["docx", "pdf"]);
    }

    #[test]
    fn test_only_commas_uses_default() {
        assert_eq!(normalize_tokens(Some(",")), vec!["docx"]);
        assert_eq!(normalize_tokens(Some(" , ,")), vec!["docx"]);
    }

    #[test]
    fn test_extensions() {
        let exts: Vec<_> = Format::ALL.iter().map(|f| f.extension()).collect();
        assert_eq!(exts, vec!["docx", "pdf", "html"]);
    }
}
