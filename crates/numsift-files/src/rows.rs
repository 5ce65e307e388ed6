use crate::error::{FilesError, Result};
use std::fs;
use std::path::Path;

const CSV_SEPARATORS: [char; 3] = [',', ';', '\t'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    Text,
    Csv,
}

impl RowFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("txt") => Ok(Self::Text),
            Some("csv") => Ok(Self::Csv),
            _ => Err(FilesError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reads the non-empty rows of an imported number file. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn read_rows(path: &Path) -> Result<Vec<String>> {
    let format = RowFormat::from_path(path)?;
    let bytes = fs::read(path)?;
    let decoded = String::from_utf8_lossy(&bytes);
    let data = decoded.strip_prefix('\u{feff}').unwrap_or(&decoded);
    Ok(match format {
        RowFormat::Text => parse_text_rows(data),
        RowFormat::Csv => parse_csv_rows(data),
    })
}

pub fn parse_text_rows(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits delimited text into cells, row by row. Separators inside double
/// quotes are kept and `""` in a quoted cell is a literal quote. Quoted
/// newlines are not supported.
pub fn parse_csv_rows(data: &str) -> Vec<String> {
    let mut cells = Vec::new();
    for line in data.lines() {
        for cell in split_csv_line(line) {
            let cell = cell.trim();
            if !cell.is_empty() {
                cells.push(cell.to_string());
            }
        }
    }
    cells
}

fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ch if !in_quotes && CSV_SEPARATORS.contains(&ch) => {
                cells.push(std::mem::take(&mut current));
            }
            ch => current.push(ch),
        }
    }
    cells.push(current);
    cells
}

#[cfg(test)]
mod tests {
    use super::{parse_csv_rows, parse_text_rows, RowFormat};
    use std::path::Path;

    #[test]
    fn text_rows_skip_blank_lines() {
        let rows = parse_text_rows("  0825551234 \n\n\t\n+27 79 361 2279\r\n");
        assert_eq!(rows, vec!["0825551234", "+27 79 361 2279"]);
    }

    #[test]
    fn csv_rows_flatten_cells_in_order() {
        let rows = parse_csv_rows("name,phone\n\"Ada\",\"082 555 1234\"\nGrace;0793612279;\n");
        assert_eq!(
            rows,
            vec!["name", "phone", "Ada", "082 555 1234", "Grace", "0793612279"]
        );
    }

    #[test]
    fn csv_rows_keep_quoted_separators() {
        let rows = parse_csv_rows("\"Smith, John\",\"082 555 1234\"\n\"say \"\"hi\"\"\";0793612279\n");
        assert_eq!(
            rows,
            vec!["Smith, John", "082 555 1234", "say \"hi\"", "0793612279"]
        );
    }

    #[test]
    fn csv_rows_drop_empty_quoted_cells() {
        assert!(parse_csv_rows("\"\", ,\t\n").is_empty());
    }

    #[test]
    fn row_format_from_extension() {
        assert_eq!(
            RowFormat::from_path(Path::new("numbers.TXT")).unwrap(),
            RowFormat::Text
        );
        assert_eq!(
            RowFormat::from_path(Path::new("dir/contacts.csv")).unwrap(),
            RowFormat::Csv
        );
        assert!(RowFormat::from_path(Path::new("contacts.xlsx")).is_err());
        assert!(RowFormat::from_path(Path::new("contacts")).is_err());
    }
}
