//! CSV word list parsing

use crate::{Error, Result};

/// Parse a CSV document into candidate words, one per record.
///
/// Only the first field of each record is kept. The document has no header
/// row and every record must carry the same number of fields; a ragged or
/// otherwise malformed document fails as a whole rather than yielding a
/// partial list.
pub fn parse_words(bytes: &[u8]) -> Result<Vec<String>> {
    check_quotes(bytes)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(bytes);

    let mut words = Vec::new();
    for record in reader.records() {
        let record = record?;
        // csv never yields a record without fields
        words.push(record[0].to_string());
    }

    Ok(words)
}

/// Reject quoting the csv reader would otherwise accept leniently.
///
/// A `"` may only open a field, appear doubled inside a quoted field, or
/// close a quoted field directly before a delimiter, line end or end of
/// input. Every quoted field must be closed.
fn check_quotes(bytes: &[u8]) -> Result<()> {
    let mut line = 1u64;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            match b {
                b'"' if bytes.get(i + 1) == Some(&b'"') => i += 1,
                b'"' => {
                    in_quotes = false;
                    if !matches!(bytes.get(i + 1), None | Some(b',' | b'\n' | b'\r')) {
                        return Err(Error::Quote {
                            line,
                            reason: "extraneous \" after quoted field",
                        });
                    }
                }
                b'\n' => line += 1,
                _ => {}
            }
        } else {
            match b {
                b'"' if field_start => {
                    in_quotes = true;
                    field_start = false;
                }
                b'"' => {
                    return Err(Error::Quote {
                        line,
                        reason: "bare \" in unquoted field",
                    });
                }
                b',' => field_start = true,
                b'\n' => {
                    field_start = true;
                    line += 1;
                }
                _ => field_start = false,
            }
        }
        i += 1;
    }

    if in_quotes {
        return Err(Error::Quote {
            line,
            reason: "quoted field is never closed",
        });
    }
    Ok(())
}
