use super::parser::read_excel_from_file;
use super::types::{ColumnDef, ExcelData};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn ExcelImporter(
    /// Expected columns of the upload
    columns: Vec<ColumnDef>,
    /// Called with the parsed data when the user confirms the import
    on_import: Callback<ExcelData>,
) -> impl IntoView {
    let (selected_file_name, set_selected_file_name) = signal(Option::<String>::None);
    let (excel_data, set_excel_data) = signal(Option::<ExcelData>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let columns_for_file_select = columns.clone();

    // Parse immediately on file selection
    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    set_selected_file_name.set(Some(file.name()));
                    set_error.set(None);
                    set_excel_data.set(None);

                    let file_for_parse = file.clone();
                    let columns_clone = columns_for_file_select.clone();

                    set_is_loading.set(true);
                    leptos::task::spawn_local(async move {
                        match read_excel_from_file(file_for_parse.clone()).await {
                            Ok(raw_data) => {
                                let file_name = file_for_parse.name();
                                match ExcelData::from_raw(raw_data, columns_clone, file_name) {
                                    Ok(data) => {
                                        set_excel_data.set(Some(data));
                                        set_error.set(None);
                                    }
                                    Err(e) => set_error.set(Some(e)),
                                }
                            }
                            Err(e) => set_error.set(Some(e)),
                        }
                        set_is_loading.set(false);
                    });
                }
            }
        }
    };

    let handle_import = move |_| {
        if let Some(data) = excel_data.get() {
            on_import.run(data);
            set_excel_data.set(None);
            set_selected_file_name.set(None);
        }
    };

    view! {
        <div class="excel-importer">
            <div class="excel-importer__file-select">
                <input
                    type="file"
                    accept=".xlsx, .xls"
                    on:change=handle_file_select
                    disabled=move || is_loading.get()
                />
                {move || selected_file_name.get().map(|name| view! {
                    <span class="excel-importer__file-name">{name}</span>
                })}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || is_loading.get().then(|| view! {
                <div class="excel-importer__loading">"Parsing file…"</div>
            })}

            {move || excel_data.get().map(|data| {
                let mapping = data.column_mapping.clone();
                let row_count = data.metadata.row_count;
                let unmapped = data.unmapped_count();
                view! {
                    <div class="excel-importer__preview">
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Expected column"</th>
                                    <th class="table__header-cell">"Found in file"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {mapping.into_iter().map(|m| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{m.expected}</td>
                                        <td class="table__cell">
                                            {m.found.unwrap_or_else(|| "(not found)".to_string())}
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>

                        <p class="excel-importer__summary">
                            {format!("{row_count} data rows parsed")}
                            {(unmapped > 0).then(|| format!(", {unmapped} expected columns missing (will import empty)"))}
                        </p>

                        <details class="excel-importer__json">
                            <summary>"JSON preview"</summary>
                            <pre>{data.to_json_pretty().unwrap_or_else(|e| e)}</pre>
                        </details>

                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_import
                        >
                            {icon("import")}
                            {format!("Import {row_count} rows")}
                        </Button>
                    </div>
                }
            })}
        </div>
    }
}
