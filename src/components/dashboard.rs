// ============================================================================
// DASHBOARD - stat cards, sales table, breakdowns, upload and filter controls
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::{use_dashboard, use_upload};
use crate::models::DashboardStats;
use crate::upload::{UploadMode, UploadStatus};
use crate::utils::constants::UPLOAD_MODE;

use super::StatCard;

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let dashboard = use_dashboard();
    let upload = use_upload(
        UploadMode::from_config(UPLOAD_MODE),
        dashboard.replace_sales.clone(),
    );

    let store = &*dashboard.store;

    let on_location_change = {
        let select_location = dashboard.select_location.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let value = select.value();
            select_location.emit((!value.is_empty()).then_some(value));
        })
    };

    let on_refresh = dashboard.refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="dashboard">
            <div class="dashboard-toolbar">
                <select class="location-filter" onchange={on_location_change}>
                    <option value="" selected={dashboard.selected_location.is_none()}>
                        {"All Locations"}
                    </option>
                    {
                        dashboard.locations.iter().map(|location| {
                            let selected =
                                dashboard.selected_location.as_deref() == Some(location.as_str());
                            html! {
                                <option value={location.clone()} {selected}>
                                    { location }
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>

                <button class="btn-refresh" onclick={on_refresh} disabled={store.loading}>
                    { if store.loading { "Refreshing..." } else { "Refresh" } }
                </button>

                <label class="upload-control">
                    {"Import CSV"}
                    <input
                        type="file"
                        accept=".csv"
                        onchange={upload.on_file_change.clone()}
                        disabled={upload.state.in_flight()}
                    />
                </label>
            </div>

            { upload_status_line(upload.state.status()) }

            if let Some(error) = &store.error {
                <div class="error-banner">
                    <span>{ error }</span>
                    <button class="btn-link" onclick={dashboard.refresh.reform(|_: MouseEvent| ())}>
                        {"Retry"}
                    </button>
                </div>
            }

            { stat_cards(store.stats.as_ref()) }

            <section class="panel">
                <h2>{"Sales vs Forecast"}</h2>
                <table class="sales-table">
                    <thead>
                        <tr>
                            <th>{"Month"}</th>
                            <th>{"Sales"}</th>
                            <th>{"Forecast"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            store.sales_data.iter().map(|record| html! {
                                <tr>
                                    <td>{ &record.month }</td>
                                    <td>{ format_amount(record.sales) }</td>
                                    <td>{ format_amount(record.forecast) }</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </section>

            <div class="panel-grid">
                <section class="panel">
                    <h2>{"Top Products"}</h2>
                    <ul class="breakdown-list">
                        {
                            store.top_products.iter().map(|product| html! {
                                <li>
                                    <span class="breakdown-name">{ &product.product_name }</span>
                                    <span class="breakdown-detail">{ &product.category }</span>
                                    <span class="breakdown-amount">
                                        { format_amount(product.total_revenue) }
                                    </span>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </section>

                <section class="panel">
                    <h2>{"Categories"}</h2>
                    <ul class="breakdown-list">
                        {
                            store.categories.iter().map(|category| html! {
                                <li>
                                    <span class="breakdown-name">{ &category.category }</span>
                                    <span class="breakdown-detail">
                                        { format!("{} orders", category.order_count) }
                                    </span>
                                    <span class="breakdown-amount">
                                        { format_amount(category.total_revenue) }
                                    </span>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </section>

                <section class="panel">
                    <h2>{"Locations"}</h2>
                    <ul class="breakdown-list">
                        {
                            store.locations.iter().map(|location| html! {
                                <li>
                                    <span class="breakdown-name">{ &location.location }</span>
                                    <span class="breakdown-detail">
                                        { format!("{} customers", location.customer_count) }
                                    </span>
                                    <span class="breakdown-amount">
                                        { format_amount(location.total_revenue) }
                                    </span>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </section>
            </div>

            if let Some(refreshed) = &store.last_refreshed {
                <p class="last-refreshed">
                    { format!("Last refreshed: {}", refreshed.format("%Y-%m-%d %H:%M UTC")) }
                </p>
            }
        </div>
    }
}

fn upload_status_line(status: &UploadStatus) -> Html {
    match status {
        UploadStatus::Idle => html! {},
        UploadStatus::Success(message) => html! {
            <p class="upload-status success">{ message }</p>
        },
        UploadStatus::Error(message) => html! {
            <p class="upload-status error">{ message }</p>
        },
    }
}

fn stat_cards(stats: Option<&DashboardStats>) -> Html {
    let Some(stats) = stats else {
        return html! {};
    };

    html! {
        <div class="stat-grid">
            <StatCard
                title="Total Revenue"
                value={stats.total_revenue.clone()}
                change={stats.revenue_change.clone()}
            />
            <StatCard
                title="Growth Rate"
                value={stats.growth_rate.clone()}
                change={stats.growth_change.clone()}
            />
            <StatCard
                title="Active Customers"
                value={stats.active_customers.clone()}
                change={stats.customers_change.clone()}
            />
            <StatCard
                title="Target Progress"
                value={stats.target_progress.clone()}
                change={stats.target_change.clone()}
            />
        </div>
    }
}

/// NaN marks a field that was missing or non-numeric in the source CSV.
fn format_amount(value: f64) -> String {
    if value.is_nan() {
        "N/A".to_string()
    } else {
        format!("${:.0}", value)
    }
}
