/// CSV export with client-side download
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait for row types that can be exported to CSV
pub trait CsvExportable {
    /// Column headers, in output order
    fn headers() -> Vec<&'static str>;

    /// One exported line worth of field values
    fn to_csv_row(&self) -> Vec<String>;
}

/// Serialize rows to CSV text: a header line followed by one line per row.
/// Fields containing the separator, quotes or line breaks are quoted with
/// inner quotes doubled.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(","));
        csv_content.push('\n');
    }

    csv_content
}

/// Export rows to a CSV file and trigger a browser download
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)
}

/// Quote a CSV cell if necessary
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

/// Create a Blob holding the CSV content
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Trigger a browser download of the Blob
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        a: String,
        b: String,
    }

    impl CsvExportable for Fixture {
        fn headers() -> Vec<&'static str> {
            vec!["A", "B"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.a.clone(), self.b.clone()]
        }
    }

    #[test]
    fn header_line_comes_first() {
        let rows = vec![Fixture {
            a: "1".into(),
            b: "2".into(),
        }];
        assert_eq!(build_csv(&rows), "A,B\n1,2\n");
    }

    #[test]
    fn embedded_separators_are_quoted() {
        let rows = vec![Fixture {
            a: "plain".into(),
            b: "has, comma".into(),
        }];
        assert_eq!(build_csv(&rows), "A,B\nplain,\"has, comma\"\n");
    }

    #[test]
    fn quotes_are_doubled_and_newlines_quoted() {
        let rows = vec![Fixture {
            a: "say \"hi\"".into(),
            b: "two\nlines".into(),
        }];
        assert_eq!(build_csv(&rows), "A,B\n\"say \"\"hi\"\"\",\"two\nlines\"\n");
    }

    #[test]
    fn row_order_is_preserved() {
        let rows = vec![
            Fixture {
                a: "first".into(),
                b: "x".into(),
            },
            Fixture {
                a: "second".into(),
                b: "y".into(),
            },
        ];
        let csv = build_csv(&rows);
        let first = csv.find("first").unwrap();
        let second = csv.find("second").unwrap();
        assert!(first < second);
    }
}
