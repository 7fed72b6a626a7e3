//! Minimal CSV codec for the history table.
//!
//! Only what the history file needs: comma separators, double-quote quoting
//! with `""` escapes, and quoted fields that may span lines.

use super::HistoryError;

/// Append one record (terminated by `\n`) to `out`.
pub fn write_record(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if needs_quoting(field) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn needs_quoting(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}

/// Split CSV text into records.
///
/// Blank lines outside quotes are skipped. A trailing record without a final
/// newline is accepted.
pub fn parse(text: &str) -> Result<Vec<Vec<String>>, HistoryError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // Whether the current record has seen any character at all.
    let mut dirty = false;
    let mut line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                dirty = true;
            }
            '"' => {
                return Err(HistoryError::Parse {
                    line,
                    reason: "unexpected quote inside unquoted field".to_string(),
                });
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                dirty = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                if dirty {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                    dirty = false;
                }
                line += 1;
            }
            _ => {
                field.push(c);
                dirty = true;
            }
        }
    }

    if in_quotes {
        return Err(HistoryError::Parse {
            line,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if dirty {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}
