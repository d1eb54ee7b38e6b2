pub mod u501_import_from_excel;
