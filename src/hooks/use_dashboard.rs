use std::rc::Rc;

use yew::prelude::*;

use crate::models::{ComprehensiveResponse, SalesRecord};
use crate::services::{load_locations, ApiClient, Session};
use crate::stores::{DashboardStore, RequestFence};

/// Store transitions, dispatched through a reducer so every completion
/// applies to the current store value. A future that captured an older
/// render's handle can therefore no longer roll back writes (such as an
/// upload landing mid-refresh) that happened in between.
pub enum DashboardAction {
    BeginRefresh,
    ApplyComprehensive(ComprehensiveResponse),
    /// Result of the per-location sales fetch.
    ApplySales(Vec<SalesRecord>),
    /// Local replacement from the upload adapter.
    ReplaceSales(Vec<SalesRecord>),
    Fail(String),
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: DashboardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::BeginRefresh => next.begin_refresh(),
            DashboardAction::ApplyComprehensive(response) => next.apply_comprehensive(response),
            DashboardAction::ApplySales(series) => {
                next.loading = false;
                next.error = None;
                next.replace_sales(series);
            }
            DashboardAction::ReplaceSales(records) => {
                if next.replace_sales(records) {
                    log::info!(
                        "📈 Sales series replaced from upload ({} rows)",
                        next.sales_data.len()
                    );
                }
            }
            DashboardAction::Fail(message) => next.set_error(message),
        }
        Rc::new(next)
    }
}

pub struct UseDashboardHandle {
    pub store: UseReducerHandle<DashboardStore>,
    pub locations: UseStateHandle<Vec<String>>,
    pub selected_location: UseStateHandle<Option<String>>,
    pub refresh: Callback<()>,
    pub select_location: Callback<Option<String>>,
    /// Consumer entry point for the upload adapter: wholesale replacement
    /// of the sales series, ignored when the parsed sequence is empty.
    pub replace_sales: Callback<Vec<SalesRecord>>,
}

/// Dashboard data store plus its remote refresh path. Overlapping
/// refreshes are fenced: only the most recently issued request may apply
/// its result, a slow earlier response is dropped.
#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let session = use_context::<Session>().unwrap_or_default();
    let store = use_reducer(DashboardStore::new);
    let locations = use_state(Vec::new);
    let selected_location = use_state(|| None::<String>);
    let fence = use_memo((), |_| RequestFence::new());

    let refresh = {
        let store = store.clone();
        let session = session.clone();
        let fence = fence.clone();
        Callback::from(move |_| {
            let ticket = fence.issue();
            store.dispatch(DashboardAction::BeginRefresh);

            let store = store.clone();
            let fence = (*fence).clone();
            let api = ApiClient::new(session.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.comprehensive().await;
                if !fence.is_current(ticket) {
                    log::debug!("⏭️ Dropping superseded dashboard response");
                    return;
                }

                match result {
                    Ok(response) => {
                        log::info!("📊 Dashboard data refreshed");
                        store.dispatch(DashboardAction::ApplyComprehensive(response));
                    }
                    Err(e) => {
                        log::error!("❌ Dashboard refresh failed: {}", e);
                        store.dispatch(DashboardAction::Fail(e));
                    }
                }
            });
        })
    };

    let select_location = {
        let store = store.clone();
        let selected_location = selected_location.clone();
        let session = session.clone();
        let fence = fence.clone();
        Callback::from(move |location: Option<String>| {
            selected_location.set(location.clone());

            let ticket = fence.issue();
            store.dispatch(DashboardAction::BeginRefresh);

            let store = store.clone();
            let fence = (*fence).clone();
            let api = ApiClient::new(session.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.sales_data(location.as_deref()).await;
                if !fence.is_current(ticket) {
                    return;
                }

                match result {
                    Ok(series) => store.dispatch(DashboardAction::ApplySales(series)),
                    Err(e) => {
                        log::error!("❌ Sales data fetch failed: {}", e);
                        store.dispatch(DashboardAction::Fail(e));
                    }
                }
            });
        })
    };

    let replace_sales = {
        let store = store.clone();
        Callback::from(move |records: Vec<SalesRecord>| {
            store.dispatch(DashboardAction::ReplaceSales(records));
        })
    };

    // Initial fetch plus the location filter options.
    {
        let locations = locations.clone();
        let refresh = refresh.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            refresh.emit(());

            let api = ApiClient::new(session);
            wasm_bindgen_futures::spawn_local(async move {
                match load_locations(&api).await {
                    Ok(list) => locations.set(list),
                    Err(e) => log::warn!("⚠️ Could not load locations: {}", e),
                }
            });
            || ()
        });
    }

    UseDashboardHandle {
        store,
        locations,
        selected_location,
        refresh,
        select_location,
        replace_sales,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DashboardStats;

    fn record(month: &str, sales: f64, forecast: f64) -> SalesRecord {
        SalesRecord {
            month: month.to_string(),
            sales,
            forecast,
        }
    }

    #[test]
    fn upload_landing_mid_refresh_survives_the_fetch_completion() {
        let store = Rc::new(DashboardStore::new());
        let store = store.reduce(DashboardAction::BeginRefresh);

        // An upload replaces the series while the fetch is in flight.
        let store = store.reduce(DashboardAction::ReplaceSales(vec![record("Jul", 1.0, 2.0)]));

        // The fetch then resolves without a sales key of its own; the
        // uploaded series must not be rolled back.
        let response = ComprehensiveResponse {
            stats: Some(DashboardStats::default()),
            ..ComprehensiveResponse::default()
        };
        let store = store.reduce(DashboardAction::ApplyComprehensive(response));

        assert_eq!(store.sales_data.len(), 1);
        assert_eq!(store.sales_data[0].month, "Jul");
        assert!(store.stats.is_some());
        assert!(!store.loading);
    }

    #[test]
    fn failed_fetch_keeps_an_interleaved_upload() {
        let store = Rc::new(DashboardStore::new());
        let store = store.reduce(DashboardAction::BeginRefresh);
        let store = store.reduce(DashboardAction::ReplaceSales(vec![record("Jul", 1.0, 2.0)]));
        let store = store.reduce(DashboardAction::Fail("HTTP 500: backend down".to_string()));

        assert_eq!(store.sales_data.len(), 1);
        assert_eq!(store.error.as_deref(), Some("HTTP 500: backend down"));
        assert!(!store.loading);
    }

    #[test]
    fn location_fetch_result_clears_loading_and_error() {
        let store = Rc::new(DashboardStore::new());
        let store = store.reduce(DashboardAction::Fail("HTTP 500: backend down".to_string()));
        let store = store.reduce(DashboardAction::BeginRefresh);
        let store = store.reduce(DashboardAction::ApplySales(vec![record("Aug", 3.0, 4.0)]));

        assert_eq!(store.sales_data.len(), 1);
        assert_eq!(store.sales_data[0].month, "Aug");
        assert!(store.error.is_none());
        assert!(!store.loading);
    }

    #[test]
    fn empty_upload_dispatch_is_ignored() {
        let store = Rc::new(DashboardStore::new());
        let before = store.sales_data.clone();
        let store = store.reduce(DashboardAction::ReplaceSales(Vec::new()));
        assert_eq!(store.sales_data, before);
    }
}
