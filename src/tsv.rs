//! Tab-delimited text with spreadsheet-style quoting.
//!
//! A field that starts with `"` is quoted: it may contain tabs and line
//! breaks, and `""` stands for a literal quote. Blank lines are not rows.

use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TsvError {
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvRow {
    /// 1-based line on which the row starts.
    pub line: usize,
    pub fields: Vec<String>,
}

pub fn parse_rows(text: &str) -> Result<Vec<TsvRow>, TsvError> {
    let mut rows = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_started = false;
    let mut line = 1_usize;
    let mut row_line = 1_usize;
    let mut quote_line = 1_usize;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if !field_started => {
                in_quotes = true;
                field_started = true;
                quote_line = line;
            }
            '\t' => {
                fields.push(std::mem::take(&mut field));
                field_started = false;
            }
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                fields.push(std::mem::take(&mut field));
                field_started = false;
                push_row(&mut rows, row_line, std::mem::take(&mut fields));
                line += 1;
                row_line = line;
            }
            _ => {
                field.push(ch);
                field_started = true;
            }
        }
    }

    if in_quotes {
        return Err(TsvError::UnterminatedQuote { line: quote_line });
    }
    if field_started || !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_row(&mut rows, row_line, fields);
    }

    Ok(rows)
}

fn push_row(rows: &mut Vec<TsvRow>, line: usize, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].is_empty();
    if !blank {
        rows.push(TsvRow { line, fields });
    }
}

pub fn escape_tsv_field(value: &str) -> String {
    if value.contains('\t')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> io::Result<()> {
    let line = fields
        .iter()
        .map(|field| escape_tsv_field(field))
        .collect::<Vec<String>>()
        .join("\t");
    writeln!(writer, "{line}")
}

#[cfg(test)]
mod tests {
    use super::{TsvError, escape_tsv_field, parse_rows};

    #[test]
    fn parse_rows_splits_on_tabs_and_skips_blank_lines() {
        let rows = parse_rows("a\tb\tc\n\n1\t2\t3\r\n").expect("rows should parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["a", "b", "c"]);
        assert_eq!(rows[1].fields, vec!["1", "2", "3"]);
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn parse_rows_keeps_trailing_empty_fields() {
        let rows = parse_rows("a\t\t").expect("row should parse");
        assert_eq!(rows[0].fields, vec!["a", "", ""]);
    }

    #[test]
    fn parse_rows_handles_quoted_tabs_newlines_and_doubled_quotes() {
        let text = "x\t\"say \"\"no\"\"\tnow\nplease\"\ty\nnext\trow\n";
        let rows = parse_rows(text).expect("quoted row should parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["x", "say \"no\"\tnow\nplease", "y"]);
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn parse_rows_rejects_unterminated_quote() {
        let error = parse_rows("a\n\"open\tfield\n").expect_err("quote never closes");
        assert_eq!(error, TsvError::UnterminatedQuote { line: 2 });
    }

    #[test]
    fn escape_tsv_field_quotes_only_when_needed() {
        assert_eq!(escape_tsv_field("plain text"), "plain text");
        assert_eq!(escape_tsv_field("a \"b\""), "\"a \"\"b\"\"\"");
        assert_eq!(escape_tsv_field("a\tb"), "\"a\tb\"");
    }

    #[test]
    fn escaped_fields_parse_back_to_the_original_value() {
        let value = "gloss; \"quoted\"\tand tabbed";
        let line = format!("{}\tend\n", escape_tsv_field(value));
        let rows = parse_rows(&line).expect("escaped row should parse");
        assert_eq!(rows[0].fields, vec![value, "end"]);
    }
}
