// Syntax highlighting collaborator
//
// Invoked by the renderer after a source update lands; nothing in the
// lifecycle waits on it. The bundled demos ship Rust source, so the default
// implementation is a small line-oriented Rust tokenizer that colors
// comments, strings, numbers and keywords into ratatui spans. It does not
// attempt block comments or multi-line strings.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Turns raw source text into styled lines for the source panel.
pub trait Highlighter {
    fn highlight(&self, source: &str) -> Text<'static>;
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

fn comment_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn string_style() -> Style {
    Style::default().fg(Color::Green)
}

fn number_style() -> Style {
    Style::default().fg(Color::Cyan)
}

fn keyword_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

#[derive(Default)]
pub struct RustHighlighter;

impl Highlighter for RustHighlighter {
    fn highlight(&self, source: &str) -> Text<'static> {
        Text::from(source.lines().map(highlight_line).collect::<Vec<_>>())
    }
}

fn highlight_line(line: &str) -> Line<'static> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return Line::from(Span::styled(line.to_string(), comment_style()));
    }
    if trimmed.starts_with("#[") || trimmed.starts_with("#![") {
        return Line::from(Span::styled(line.to_string(), comment_style()));
    }

    let mut spans = Vec::new();
    let mut plain = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        // Line comment: everything to the end of the line
        if chars[i] == '/' && chars.get(i + 1) == Some(&'/') {
            flush(&mut spans, &mut plain);
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, comment_style()));
            break;
        }

        // String literal (escapes respected, unterminated runs to EOL)
        if chars[i] == '"' {
            flush(&mut spans, &mut plain);
            let mut literal = String::from('"');
            i += 1;
            while i < chars.len() {
                let ch = chars[i];
                literal.push(ch);
                i += 1;
                if ch == '\\' {
                    if let Some(&escaped) = chars.get(i) {
                        literal.push(escaped);
                        i += 1;
                    }
                    continue;
                }
                if ch == '"' {
                    break;
                }
            }
            spans.push(Span::styled(literal, string_style()));
            continue;
        }

        // Word: keyword, number or identifier
        if chars[i].is_alphanumeric() || chars[i] == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            // Keep the fractional part of a float attached to the literal
            if chars[start].is_ascii_digit() && chars.get(i) == Some(&'.') {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let word: String = chars[start..i].iter().collect();
            if KEYWORDS.contains(&word.as_str()) {
                flush(&mut spans, &mut plain);
                spans.push(Span::styled(word, keyword_style()));
            } else if word.starts_with(|c: char| c.is_ascii_digit()) {
                flush(&mut spans, &mut plain);
                spans.push(Span::styled(word, number_style()));
            } else {
                plain.push_str(&word);
            }
            continue;
        }

        plain.push(chars[i]);
        i += 1;
    }

    flush(&mut spans, &mut plain);
    Line::from(spans)
}

fn flush(spans: &mut Vec<Span<'static>>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::raw(std::mem::take(plain)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn comment_lines_are_one_dimmed_span() {
        let text = RustHighlighter.highlight("    // canvas is shared");
        assert_eq!(text.lines.len(), 1);
        assert_eq!(text.lines[0].spans.len(), 1);
        assert_eq!(text.lines[0].spans[0].style, comment_style());
    }

    #[test]
    fn keywords_strings_and_numbers_get_distinct_styles() {
        let text = RustHighlighter.highlight("let x = \"hi\"; // done");
        let line = &text.lines[0];
        let texts = span_texts(line);

        let kw = texts.iter().position(|t| t == "let").unwrap();
        assert_eq!(line.spans[kw].style, keyword_style());

        let lit = texts.iter().position(|t| t == "\"hi\"").unwrap();
        assert_eq!(line.spans[lit].style, string_style());

        let comment = texts.iter().position(|t| t == "// done").unwrap();
        assert_eq!(line.spans[comment].style, comment_style());
    }

    #[test]
    fn slashes_inside_strings_are_not_comments() {
        let text = RustHighlighter.highlight("let url = \"http://x\";");
        let texts = span_texts(&text.lines[0]);
        assert!(texts.contains(&"\"http://x\"".to_string()));
        assert!(!texts.iter().any(|t| t.starts_with("//")));
    }

    #[test]
    fn numbers_are_styled() {
        let text = RustHighlighter.highlight("const N: usize = 80;");
        let line = &text.lines[0];
        let texts = span_texts(line);
        let n = texts.iter().position(|t| t == "80").unwrap();
        assert_eq!(line.spans[n].style, number_style());
    }
}
