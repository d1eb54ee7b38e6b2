pub mod view;

pub use view::ImportFromExcelPage;
