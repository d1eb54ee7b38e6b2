use crate::shared::data::local_store::{Collection, SKUS_KEY};
use crate::shared::date_utils::today_iso;
use crate::shared::excel_importer::{ColumnDef, ExcelData, ExcelImporter};
use contracts::domain::a002_sku::aggregate::Sku;
use contracts::domain::a002_sku::excel::{import_columns, merge_rows, ExcelRow};
use leptos::prelude::*;

/// Import SKU rows from an uploaded spreadsheet.
///
/// The first sheet is parsed client-side, each row is stamped with the
/// current date, and the result is appended to the stored SKU collection
/// (merge, not replace). No schema enforcement: unmapped columns import as
/// empty values with zeroed derived fields.
#[component]
#[allow(non_snake_case)]
pub fn ImportFromExcelPage() -> impl IntoView {
    let (notice, set_notice) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (ledger_count, set_ledger_count) = signal(Collection::<Sku>::load(SKUS_KEY).items.len());

    let columns: Vec<ColumnDef> = import_columns()
        .into_iter()
        .map(|(field_name, title)| ColumnDef::new(field_name, title))
        .collect();

    let handle_import = Callback::new(move |data: ExcelData| {
        let rows: Vec<ExcelRow> = data.rows.iter().map(ExcelRow::from_fields).collect();

        let mut collection = Collection::<Sku>::load(SKUS_KEY);
        let base_id = chrono::Utc::now().timestamp_millis();
        let result = merge_rows(&mut collection.items, rows, base_id, &today_iso());

        match collection.save() {
            Ok(()) => {
                log::info!(
                    "imported {} rows from {}, ledger now holds {}",
                    result.imported,
                    data.metadata.file_name,
                    result.total_after
                );
                set_ledger_count.set(result.total_after);
                set_error.set(None);
                set_notice.set(Some(format!(
                    "Merged {} rows into the SKU ledger",
                    result.imported
                )));
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(4_000).await;
                    set_notice.set(None);
                });
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Import from Excel"}</h2>
            </div>

            <p class="import-hint">
                {move || format!("SKU ledger currently holds {} records. Imported rows are appended, never replaced.", ledger_count.get())}
            </p>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || notice.get().map(|n| view! { <div class="notice">{n}</div> })}

            <ExcelImporter columns=columns on_import=handle_import />
        </div>
    }
}
