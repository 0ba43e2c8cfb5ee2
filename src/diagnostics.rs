//! Source locations in compiler output.
//!
//! The compiler reports positions as `at »path:line:column«`; line and column
//! may be empty.

use memchr::memmem;

use crate::types::SourceLocation;

const LOCATION_OPEN: &str = "at »";
const LOCATION_CLOSE: char = '«';
const MIN_FILE_CHARS: usize = 2;

pub fn locations(text: &str) -> Vec<SourceLocation> {
    memmem::find_iter(text.as_bytes(), LOCATION_OPEN.as_bytes())
        .filter_map(|pos| parse_location(&text[pos + LOCATION_OPEN.len()..]))
        .collect()
}

fn parse_location(rest: &str) -> Option<SourceLocation> {
    let line_end = rest.find('\n').unwrap_or(rest.len());
    let rest = &rest[..line_end];
    let inner = &rest[..rest.find(LOCATION_CLOSE)?];

    let mut fields = inner.rsplitn(3, ':');
    let column = number_field(fields.next()?)?;
    let line = number_field(fields.next()?)?;
    let file = fields.next()?;

    if file.chars().count() < MIN_FILE_CHARS {
        return None;
    }

    Some(SourceLocation {
        file: file.to_string(),
        line,
        column,
    })
}

/// `Some(None)` for an empty field, `None` when the field is not numeric.
fn number_field(field: &str) -> Option<Option<u32>> {
    if field.is_empty() {
        return Some(None);
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(field.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_location() {
        let found = locations("error: unknown directive at »notes/index.scim:12:7«\n");
        assert_eq!(
            found,
            vec![SourceLocation {
                file: "notes/index.scim".into(),
                line: Some(12),
                column: Some(7),
            }]
        );
    }

    #[test]
    fn test_empty_line_and_column() {
        let found = locations("warning at »a.scim::«");
        assert_eq!(found[0].file, "a.scim");
        assert_eq!(found[0].line, None);
        assert_eq!(found[0].column, None);
    }

    #[test]
    fn test_file_with_colon() {
        let found = locations("at »C:/docs/a.scim:3:1«");
        assert_eq!(found[0].file, "C:/docs/a.scim");
        assert_eq!(found[0].line, Some(3));
    }

    #[test]
    fn test_multiple_and_unterminated() {
        let text = "first at »x.scim:1:2« then at »y.scim:3:4«\nbroken at »z.scim:5:6\n";
        let found = locations(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].file, "y.scim");
        assert_eq!(found[1].to_string(), "y.scim:3:4");
    }

    #[test]
    fn test_single_char_file_ignored() {
        assert!(locations("at »x:1:2«").is_empty());
        assert_eq!(locations("at »ab:1:2«")[0].file, "ab");
    }

    #[test]
    fn test_non_numeric_fields_ignored() {
        assert!(locations("at »x.scim:one:two«").is_empty());
    }
}
