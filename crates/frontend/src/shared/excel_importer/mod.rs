pub mod parser;
pub mod types;
pub mod widget;

pub use types::{ColumnDef, ExcelData, ExcelMetadata};
pub use widget::ExcelImporter;
