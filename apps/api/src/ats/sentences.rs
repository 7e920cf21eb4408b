//! Sentence splitting for resume rewriting.

/// Whitespace as regular expressions define `\s`: Unicode White_Space plus the
/// byte order mark, minus NEL.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Splits text into sentences.
///
/// A boundary is a whitespace run that follows `.`, `!` or `?`, or a run of
/// newlines anywhere. Boundary whitespace is dropped and the terminal
/// punctuation stays with the preceding sentence. Always returns at least one
/// (possibly empty) slice.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let after_terminal = matches!(prev, Some('.' | '!' | '?'));
        if !(after_terminal && is_space(c)) && c != '\n' {
            prev = Some(c);
            continue;
        }

        sentences.push(&text[start..idx]);

        // After punctuation any whitespace continues the boundary; otherwise only newlines do.
        let mut end = idx + c.len_utf8();
        let mut last = c;
        while let Some(&(next_idx, next)) = chars.peek() {
            let continues = if after_terminal {
                is_space(next)
            } else {
                next == '\n'
            };
            if !continues {
                break;
            }
            end = next_idx + next.len_utf8();
            last = next;
            chars.next();
        }
        start = end;
        prev = Some(last);
    }

    sentences.push(&text[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_after_terminal_punctuation() {
        assert_eq!(
            split_sentences("Built APIs. Shipped fast! Why not? Done"),
            vec!["Built APIs.", "Shipped fast!", "Why not?", "Done"]
        );
    }

    #[test]
    fn test_splits_on_newlines_without_punctuation() {
        assert_eq!(
            split_sentences("Skills\n\nRust, Go\nPython"),
            vec!["Skills", "Rust, Go", "Python"]
        );
    }

    #[test]
    fn test_punctuation_without_whitespace_is_not_a_boundary() {
        assert_eq!(
            split_sentences("Used Node.js and ASP.NET daily."),
            vec!["Used Node.js and ASP.NET daily."]
        );
    }

    #[test]
    fn test_mixed_whitespace_after_punctuation_is_one_boundary() {
        assert_eq!(
            split_sentences("First line. \n\t Second line."),
            vec!["First line.", "Second line."]
        );
    }

    #[test]
    fn test_leading_newline_yields_empty_first_sentence() {
        assert_eq!(split_sentences("\nSummary"), vec!["", "Summary"]);
    }

    #[test]
    fn test_trailing_boundary_yields_empty_last_sentence() {
        assert_eq!(split_sentences("Done.\n"), vec!["Done.", ""]);
    }

    #[test]
    fn test_whitespace_between_newlines_is_kept() {
        assert_eq!(split_sentences("a\n \nb"), vec!["a", " ", "b"]);
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        assert_eq!(split_sentences("Done.\u{feff}Next"), vec!["Done.", "Next"]);
    }

    #[test]
    fn test_next_line_char_is_not_a_boundary() {
        assert_eq!(split_sentences("Done.\u{85}Next"), vec!["Done.\u{85}Next"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_sentence() {
        assert_eq!(split_sentences(""), vec![""]);
    }
}
