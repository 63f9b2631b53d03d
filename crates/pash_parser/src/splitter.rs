//! Delimiter-based field splitting.
//!
//! Every layer of the parser is built on the same primitive: cut a line into
//! at most `max` fields around exact occurrences of a delimiter substring.
//! Adjacent delimiters never produce empty fields; an empty field simply
//! collapses into its neighbour, so `a ## ## b` yields the same fields as
//! `a ## b`.

/// Split `input` on exact occurrences of `delimiter`, producing at most
/// `max` fields.
///
/// Fields are borrowed slices of `input`; the input itself is never
/// modified, so a caller whose split turns out not to apply can hand the
/// same line to the next stage untouched. Empty fields are dropped as they
/// appear. Once `max` fields have been produced, the remainder of the line
/// is discarded.
pub fn split_fields<'a>(input: &'a str, delimiter: &str, max: usize) -> Vec<&'a str> {
    debug_assert!(!delimiter.is_empty(), "delimiter must be non-empty");

    let mut fields = Vec::new();
    let mut rest = input;
    while fields.len() < max {
        match rest.find(delimiter) {
            Some(at) => {
                let field = &rest[..at];
                rest = &rest[at + delimiter.len()..];
                if !field.is_empty() {
                    fields.push(field);
                }
            }
            None => {
                if !rest.is_empty() {
                    fields.push(rest);
                }
                break;
            }
        }
    }
    fields
}
