use gloo_file::futures::read_as_text;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::csv::parse_sales_csv;
use crate::models::SalesRecord;
use crate::services::{ApiClient, Session};
use crate::upload::{
    UploadMode, UploadState, UploadStateCell, SUCCESS_AUTOCLEAR_MS, SUCCESS_MESSAGE,
};

pub struct UseUploadHandle {
    pub state: UseStateHandle<UploadState>,
    pub mode: UploadMode,
    /// Wire this to the file input's `onchange`.
    pub on_file_change: Callback<Event>,
}

/// Upload adapter: one interface, two strategies. `LocalParse` reads the
/// file in the browser and hands the parsed series to `on_data`;
/// `Remote` ships the raw file to the ingestion endpoint and never parses
/// locally. Selecting no file is a no-op.
///
/// The cell owns the live state; the `use_state` handle is only a render
/// mirror updated after each transition. Completions must never derive
/// their next state from the handle: a handle captured by a spawned future
/// derefs to the value of the render that spawned it, not the value
/// `begin()` produced.
#[hook]
pub fn use_upload(mode: UploadMode, on_data: Callback<Vec<SalesRecord>>) -> UseUploadHandle {
    let session = use_context::<Session>().unwrap_or_default();
    let cell = use_memo((), |_| UploadStateCell::default());
    let state = use_state(UploadState::default);

    let on_file_change = {
        let cell = cell.clone();
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let Some((ticket, snapshot)) = cell.begin() else {
                log::warn!("⏳ Upload already in flight, ignoring");
                return;
            };
            state.set(snapshot);

            let cell = (*cell).clone();
            let state = state.clone();
            match mode {
                UploadMode::LocalParse => {
                    let on_data = on_data.clone();
                    wasm_bindgen_futures::spawn_local(run_local_parse(
                        file, input, ticket, cell, state, on_data,
                    ));
                }
                UploadMode::Remote => {
                    let session = session.clone();
                    wasm_bindgen_futures::spawn_local(run_remote_upload(
                        file, input, ticket, cell, state, session,
                    ));
                }
            }
        })
    };

    UseUploadHandle {
        state,
        mode,
        on_file_change,
    }
}

async fn run_local_parse(
    file: web_sys::File,
    input: HtmlInputElement,
    ticket: u64,
    cell: UploadStateCell,
    view: UseStateHandle<UploadState>,
    on_data: Callback<Vec<SalesRecord>>,
) {
    let name = file.name();
    let result = read_as_text(&gloo_file::File::from(file)).await;

    // Reset the control so the same filename can be re-selected.
    input.set_value("");

    match result {
        Ok(text) => {
            let records = parse_sales_csv(&text);
            if records.is_empty() {
                log::info!("ℹ️ {} produced no records, keeping current dataset", name);
                view.set(cell.finish_silently(ticket));
            } else {
                let count = records.len();
                on_data.emit(records);
                view.set(cell.succeed(ticket, format!("Loaded {} rows from {}", count, name)));
                schedule_autoclear(cell, view, ticket);
            }
        }
        Err(e) => {
            // Read failures are swallowed: diagnostic log only, the
            // previous dataset stays as-is.
            log::error!("❌ Error reading CSV {}: {}", name, e);
            view.set(cell.finish_silently(ticket));
        }
    }
}

async fn run_remote_upload(
    file: web_sys::File,
    input: HtmlInputElement,
    ticket: u64,
    cell: UploadStateCell,
    view: UseStateHandle<UploadState>,
    session: Session,
) {
    let api = ApiClient::new(session);
    let result = api.upload_csv(&file).await;

    input.set_value("");

    match result {
        Ok(ack) => {
            log::info!("✅ CSV ingested by backend: {:?}", ack.message);
            view.set(cell.succeed(ticket, SUCCESS_MESSAGE));
            schedule_autoclear(cell, view, ticket);
        }
        Err(e) => {
            log::error!("❌ CSV upload failed: {}", e);
            view.set(cell.fail(ticket, e));
        }
    }
}

fn schedule_autoclear(cell: UploadStateCell, view: UseStateHandle<UploadState>, ticket: u64) {
    Timeout::new(SUCCESS_AUTOCLEAR_MS, move || {
        view.set(cell.clear_success(ticket));
    })
    .forget();
}
