//! Построение CSV для выгрузки списков (скачивание делает фронтенд)

use thiserror::Error;

/// Разделитель колонок; Excel в большинстве локалей открывает его без мастера импорта
pub const CSV_SEPARATOR: &str = ";";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
}

/// Trait для записей, которые выгружаются в CSV
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// CSV c BOM в начале; пустой список даёт `ExportError::Empty`
pub fn build_csv<T: CsvExportable>(data: &[T]) -> Result<String, ExportError> {
    if data.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut csv = String::new();
    // BOM, чтобы Excel распознал UTF-8
    csv.push('\u{FEFF}');
    csv.push_str(&T::headers().join(CSV_SEPARATOR));
    csv.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv.push_str(&row.join(CSV_SEPARATOR));
        csv.push('\n');
    }

    Ok(csv)
}

/// Ячейка с разделителем, кавычкой или переводом строки оборачивается в кавычки,
/// внутренние кавычки удваиваются
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Price"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("12\" rack"), "\"12\"\" rack\"");
        assert_eq!(escape_csv_cell("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Row("Mug; set", 29.99), Row("Tee", 24.99)]).unwrap();
        assert_eq!(csv, "\u{FEFF}Name;Price\n\"Mug; set\";29.99\nTee;24.99\n");
    }

    #[test]
    fn test_empty_export_is_error() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(build_csv(&rows), Err(ExportError::Empty));
        assert_eq!(ExportError::Empty.to_string(), "nothing to export");
    }
}
