//! String helpers
//!
//! Encoding-aware operations live on [`Strings`], a small context value that carries
//! the selected character encoding. Helpers that do not depend on the encoding are
//! free functions.

use crate::error::{ArgumentError, RuntimeError};
use encoding_rs::{Encoding, REPLACEMENT, UTF_8, UTF_16BE, UTF_16LE};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DEFAULT_ENCODING: &str = "UTF-8";

const TRUE_STRINGS: &[&str] = &["1", "true", "on", "yes", "y"];
const FALSE_STRINGS: &[&str] = &["0", "false", "off", "no", "n", ""];

/// Encoding-aware string operations.
///
/// Text handed to the methods is always valid Unicode; the encoding decides how
/// bytes are decoded into text, encoded back, and how [`Strings::byte_length`]
/// measures a string.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    encoding: &'static Encoding,
}

impl Default for Strings {
    fn default() -> Self {
        Self { encoding: UTF_8 }
    }
}

impl Strings {
    /// Create a context for the given encoding label (e.g. `"UTF-8"`, `"ISO-8859-1"`).
    ///
    /// # Examples
    /// ```
    /// use toolbelt::strings::Strings;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let strings = Strings::new("utf-8")?;
    /// assert_eq!(strings.encoding(), "UTF-8");
    /// assert!(Strings::new("klingon").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(encoding: &str) -> crate::Result<Self> {
        Ok(Self {
            encoding: lookup_encoding(encoding)?,
        })
    }

    /// Canonical name of the selected encoding
    pub fn encoding(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn set_encoding(&mut self, encoding: &str) -> crate::Result<()> {
        self.encoding = lookup_encoding(encoding)?;
        log::debug!("String encoding set to {}", self.encoding.name());
        Ok(())
    }

    /// Decode bytes in the selected encoding, rejecting malformed input
    pub fn decode(&self, bytes: &[u8]) -> crate::Result<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| {
                ArgumentError::InvalidValue {
                    field: "bytes".to_string(),
                    value: format!("{} bytes", bytes.len()),
                    reason: format!("malformed {} input", self.encoding.name()),
                }
                .into()
            })
    }

    /// Encode text in the selected encoding, rejecting unmappable characters
    pub fn encode(&self, text: &str) -> crate::Result<Vec<u8>> {
        // encoding_rs only decodes UTF-16; its encoder falls back to UTF-8
        if self.encoding == UTF_16LE {
            return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
        }
        if self.encoding == UTF_16BE {
            return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
        }

        let (bytes, used, unmappable) = self.encoding.encode(text);
        if used != self.encoding {
            return Err(RuntimeError::Unavailable {
                operation: format!("encoding text as {}", self.encoding.name()),
            }
            .into());
        }
        if unmappable {
            return Err(ArgumentError::InvalidValue {
                field: "text".to_string(),
                value: text.to_string(),
                reason: format!("not representable in {}", self.encoding.name()),
            }
            .into());
        }
        Ok(bytes.into_owned())
    }

    /// Number of characters
    pub fn length(&self, text: &str) -> usize {
        text.chars().count()
    }

    /// Number of bytes `text` occupies in the selected encoding
    pub fn byte_length(&self, text: &str) -> crate::Result<usize> {
        Ok(self.encode(text)?.len())
    }

    pub fn lower(&self, text: &str) -> String {
        text.to_lowercase()
    }

    pub fn upper(&self, text: &str) -> String {
        text.to_uppercase()
    }

    /// Upper-case the first letter of every word and lower-case the rest
    pub fn title(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut word_start = true;
        for ch in text.chars() {
            if ch.is_whitespace() {
                word_start = true;
                result.push(ch);
            } else if word_start {
                result.extend(ch.to_uppercase());
                word_start = false;
            } else {
                result.extend(ch.to_lowercase());
            }
        }
        result
    }

    pub fn upper_first(&self, text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn lower_first(&self, text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Character-based substring.
    ///
    /// A negative `start` counts from the end of the string. `length` of `None`
    /// takes everything up to the end.
    pub fn substr(&self, text: &str, start: isize, length: Option<usize>) -> String {
        let total = self.length(text);
        let begin = if start < 0 {
            total.saturating_sub(start.unsigned_abs())
        } else {
            start.unsigned_abs()
        };
        if begin >= total {
            return String::new();
        }
        let take = length.unwrap_or(total - begin);
        text.chars().skip(begin).take(take).collect()
    }

    /// Character index of the first occurrence of `needle`.
    ///
    /// The index always addresses `haystack` itself, even when case folding
    /// changes the number of characters.
    pub fn position(&self, haystack: &str, needle: &str, case_insensitive: bool) -> Option<usize> {
        if !case_insensitive {
            return haystack
                .find(needle)
                .map(|byte_index| haystack[..byte_index].chars().count());
        }
        if needle.is_empty() {
            return Some(0);
        }
        haystack
            .char_indices()
            .position(|(byte_index, _)| starts_with_folded(&haystack[byte_index..], needle))
    }

    pub fn contains(&self, haystack: &str, needle: &str, case_insensitive: bool) -> bool {
        self.position(haystack, needle, case_insensitive).is_some()
    }

    pub fn starts_with(&self, haystack: &str, needle: &str, case_insensitive: bool) -> bool {
        if case_insensitive {
            starts_with_folded(haystack, needle)
        } else {
            haystack.starts_with(needle)
        }
    }

    pub fn ends_with(&self, haystack: &str, needle: &str, case_insensitive: bool) -> bool {
        let (haystack, needle) = fold_case(haystack, needle, case_insensitive);
        haystack.ends_with(needle.as_str())
    }
}

/// Resolve a WHATWG label. The `replacement` encoding maps every input to an
/// error, so it is refused like an unknown label.
fn lookup_encoding(label: &str) -> crate::Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .filter(|encoding| *encoding != REPLACEMENT)
        .ok_or_else(|| {
            ArgumentError::UnknownEncoding {
                name: label.to_string(),
            }
            .into()
        })
}

fn starts_with_folded(text: &str, prefix: &str) -> bool {
    let mut folded = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| folded.next() == Some(expected))
}

fn fold_case(haystack: &str, needle: &str, case_insensitive: bool) -> (String, String) {
    if case_insensitive {
        (haystack.to_lowercase(), needle.to_lowercase())
    } else {
        (haystack.to_string(), needle.to_string())
    }
}

const ELLIPSIS: &str = "...";

/// Truncate to a display width, ending with `...` when shortened
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    match max_width.checked_sub(ELLIPSIS.len()) {
        Some(room) => format!("{}{}", take_width(text, room), ELLIPSIS),
        None => ELLIPSIS[..max_width].to_string(),
    }
}

/// Longest prefix of `text` that fits in `width` columns
fn take_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (byte_index, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[..byte_index];
        }
    }
    text
}

/// Keep the first `words` words, appending `end` when anything was dropped
pub fn limit_words(text: &str, words: usize, end: &str) -> String {
    let all: Vec<&str> = text.split_whitespace().collect();
    if all.len() <= words {
        return text.to_string();
    }
    format!("{}{}", all[..words].join(" "), end)
}

/// Left-align in `width` display columns
pub fn pad_to_width(text: &str, width: usize) -> String {
    pad_around(text, width, 0)
}

/// Center in `width` display columns; an odd gap leaves the extra space on the right
pub fn center(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(text.width());
    pad_around(text, width, gap / 2)
}

fn pad_around(text: &str, width: usize, left: usize) -> String {
    let gap = width.saturating_sub(text.width());
    let right = gap.saturating_sub(left);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Lower-case URL slug; runs of other characters become one `separator`
pub fn slugify(text: &str, separator: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn snake_case(text: &str) -> String {
    slugify(text, "_")
}

pub fn camel_case(text: &str) -> String {
    let studly = studly_case(text);
    Strings::default().lower_first(&studly)
}

pub fn studly_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| Strings::default().upper_first(&word.to_lowercase()))
        .collect()
}

/// Split into words on non-alphanumerics and on lower-to-upper case transitions
fn words(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;

    for ch in text.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
            previous_lower = false;
            continue;
        }
        if ch.is_uppercase() && previous_lower && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        previous_lower = ch.is_lowercase() || ch.is_numeric();
        current.push(ch);
    }
    if !current.is_empty() {
        result.push(current);
    }
    result
}

/// Trim and collapse internal whitespace runs to a single space
pub fn squish(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text between the first `start` and the following `end`
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = text.find(start)? + start.len();
    let to = text[from..].find(end)? + from;
    Some(&text[from..to])
}

/// Normalise boolean-like strings; anything unrecognised yields `None`
///
/// # Examples
/// ```
/// use toolbelt::strings::to_bool;
///
/// assert_eq!(to_bool("Yes"), Some(true));
/// assert_eq!(to_bool("off"), Some(false));
/// assert_eq!(to_bool("maybe"), None);
/// ```
pub fn to_bool(text: &str) -> Option<bool> {
    let normalized = text.trim().to_lowercase();
    if TRUE_STRINGS.contains(&normalized.as_str()) {
        Some(true)
    } else if FALSE_STRINGS.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_encoding_selection() {
        let mut strings = Strings::default();
        assert_eq!(strings.encoding(), DEFAULT_ENCODING);

        strings.set_encoding("latin1").unwrap();
        assert_eq!(strings.encoding(), "windows-1252");

        match strings.set_encoding("not-an-encoding") {
            Err(AppError::Argument(ArgumentError::UnknownEncoding { name })) => {
                assert_eq!(name, "not-an-encoding")
            }
            other => panic!("Expected UnknownEncoding, got {:?}", other),
        }
        // A failed switch keeps the previous encoding
        assert_eq!(strings.encoding(), "windows-1252");
    }

    #[test]
    fn test_decode_and_encode() {
        let latin = Strings::new("ISO-8859-1").unwrap();
        assert_eq!(latin.decode(&[0x63, 0x61, 0x66, 0xE9]).unwrap(), "café");
        assert_eq!(latin.encode("café").unwrap(), vec![0x63, 0x61, 0x66, 0xE9]);
        assert!(latin.encode("日本").is_err());

        let utf8 = Strings::default();
        assert!(utf8.decode(&[0xFF, 0xFE, 0xFD]).is_err());
    }

    #[test]
    fn test_utf16_encodings() {
        let little = Strings::new("UTF-16LE").unwrap();
        assert_eq!(little.encode("ab").unwrap(), vec![b'a', 0, b'b', 0]);
        assert_eq!(little.byte_length("ab").unwrap(), 4);
        assert_eq!(little.byte_length("😀").unwrap(), 4);
        assert_eq!(little.decode(&[b'a', 0, b'b', 0]).unwrap(), "ab");

        let big = Strings::new("utf-16be").unwrap();
        assert_eq!(big.encode("é").unwrap(), vec![0x00, 0xE9]);
        assert_eq!(big.decode(&big.encode("日本").unwrap()).unwrap(), "日本");
    }

    #[test]
    fn test_replacement_encoding_is_refused() {
        assert!(Strings::new("replacement").is_err());
        assert!(Strings::new("iso-2022-kr").is_err());
    }

    #[test]
    fn test_lengths_depend_on_encoding() {
        let utf8 = Strings::default();
        let latin = Strings::new("ISO-8859-1").unwrap();
        assert_eq!(utf8.length("café"), 4);
        assert_eq!(utf8.byte_length("café").unwrap(), 5);
        assert_eq!(latin.byte_length("café").unwrap(), 4);
    }

    #[test]
    fn test_case_helpers() {
        let strings = Strings::default();
        assert_eq!(strings.upper("straße"), "STRASSE");
        assert_eq!(strings.lower("ÉCOLE"), "école");
        assert_eq!(strings.title("hello wORLD  again"), "Hello World  Again");
        assert_eq!(strings.upper_first("élan"), "Élan");
        assert_eq!(strings.lower_first("Hello"), "hello");
        assert_eq!(strings.upper_first(""), "");
    }

    #[test]
    fn test_substr() {
        let strings = Strings::default();
        assert_eq!(strings.substr("héllo wörld", 0, Some(5)), "héllo");
        assert_eq!(strings.substr("héllo wörld", 6, None), "wörld");
        assert_eq!(strings.substr("héllo wörld", -5, Some(2)), "wö");
        assert_eq!(strings.substr("abc", -10, None), "abc");
        assert_eq!(strings.substr("abc", 5, None), "");
    }

    #[test]
    fn test_search_helpers() {
        let strings = Strings::default();
        assert_eq!(strings.position("naïve café", "café", false), Some(6));
        assert_eq!(strings.position("Hello", "LL", true), Some(2));
        assert_eq!(strings.position("Hello", "LL", false), None);
        assert!(strings.contains("Hello World", "world", true));
        assert!(!strings.contains("Hello World", "world", false));
        assert!(strings.starts_with("Hello", "he", true));
        assert!(strings.ends_with("Hello", "llo", false));
    }

    #[test]
    fn test_case_insensitive_position_addresses_original_text() {
        let strings = Strings::default();
        assert_eq!(strings.position("İa", "A", true), Some(1));
        assert_eq!(strings.substr("İa", 1, Some(1)), "a");
        assert_eq!(strings.position("ÉCOLE école", "école", true), Some(0));
        assert_eq!(strings.position("Straße", "SSE", true), None);
        assert_eq!(strings.position("abc", "", true), Some(0));
        assert!(strings.contains("Grüße aus KÖLN", "köln", true));
        assert!(strings.starts_with("İstanbul", "i\u{307}st", true));
    }

    #[test]
    fn test_truncate_by_display_width() {
        assert_eq!(truncate("src/filesystem/walker.rs", 12), "src/files...");
        assert_eq!(truncate("walker.rs", 9), "walker.rs");
        assert_eq!(truncate("日本語テキスト", 9), "日本語...");
        assert_eq!(truncate("日本語テキスト", 4), "...");
        assert_eq!(truncate("walker.rs", 2), "..");
    }

    #[test]
    fn test_limit_words() {
        assert_eq!(limit_words("one two three four", 2, "..."), "one two...");
        assert_eq!(limit_words("one two", 5, "..."), "one two");
    }

    #[test]
    fn test_pad_and_center_by_display_width() {
        assert_eq!(pad_to_width("日本", 6), "日本  ");
        assert_eq!(pad_to_width("directory", 4), "directory");
        assert_eq!(center("日本", 7), " 日本  ");
        assert_eq!(center("KiB", 7), "  KiB  ");
        assert_eq!(center("", 3), "   ");
    }

    #[test]
    fn test_case_style_conversions() {
        assert_eq!(slugify("Hello, World! 2024", "-"), "hello-world-2024");
        assert_eq!(snake_case("userAccountId"), "user_account_id");
        assert_eq!(snake_case("HTTP status code"), "http_status_code");
        assert_eq!(camel_case("user_account_id"), "userAccountId");
        assert_eq!(studly_case("user-account id"), "UserAccountId");
    }

    #[test]
    fn test_squish_and_between() {
        assert_eq!(squish("  a \n\t b   c "), "a b c");
        assert_eq!(between("[start]middle[end]", "]", "["), Some("middle"));
        assert_eq!(between("no markers", "<", ">"), None);
    }

    #[test]
    fn test_to_bool() {
        assert_eq!(to_bool("TRUE"), Some(true));
        assert_eq!(to_bool(" 1 "), Some(true));
        assert_eq!(to_bool("no"), Some(false));
        assert_eq!(to_bool(""), Some(false));
        assert_eq!(to_bool("perhaps"), None);
    }
}
