// ============================================================================
// DASHBOARD DATA STORE - in-memory holder of the currently displayed data
// ============================================================================

use chrono::{DateTime, Utc};

use crate::models::{
    CategoryPerformance, ComprehensiveResponse, DashboardStats, LocationPerformance,
    ProductPerformance, SalesRecord,
};

/// The current chart dataset plus its fetch status. Sub-datasets are
/// replaced wholesale, never merged row-by-row; on fetch failure the
/// last-good data stays visible next to the error (stale-but-available).
#[derive(Clone, PartialEq, Debug)]
pub struct DashboardStore {
    pub sales_data: Vec<SalesRecord>,
    pub stats: Option<DashboardStats>,
    pub top_products: Vec<ProductPerformance>,
    pub categories: Vec<CategoryPerformance>,
    pub locations: Vec<LocationPerformance>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_refreshed: Option<DateTime<Utc>>,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self {
            sales_data: demo_sales_series(),
            stats: None,
            top_products: Vec::new(),
            categories: Vec::new(),
            locations: Vec::new(),
            loading: false,
            error: None,
            last_refreshed: None,
        }
    }
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale replacement of the sales series from an upload. An empty
    /// sequence (all rows skipped) leaves the prior dataset untouched.
    pub fn replace_sales(&mut self, records: Vec<SalesRecord>) -> bool {
        if records.is_empty() {
            return false;
        }
        self.sales_data = records;
        true
    }

    /// Apply one aggregate read. Each key is optional and only overwrites
    /// its sub-dataset when present; absent keys keep their prior values.
    pub fn apply_comprehensive(&mut self, response: ComprehensiveResponse) {
        if let Some(sales_data) = response.sales_data {
            self.sales_data = sales_data;
        }
        if let Some(stats) = response.stats {
            self.stats = Some(stats);
        }
        if let Some(top_products) = response.top_products {
            self.top_products = top_products;
        }
        if let Some(categories) = response.categories {
            self.categories = categories;
        }
        if let Some(locations) = response.locations {
            self.locations = locations;
        }
        self.loading = false;
        self.error = None;
        self.last_refreshed = Some(Utc::now());
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Keeps the last-good dataset visible; only the error banner changes.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

/// Demo series shown until the first upload or fetch replaces it.
pub fn demo_sales_series() -> Vec<SalesRecord> {
    [
        ("Jan", 45000.0, 48000.0),
        ("Feb", 52000.0, 54000.0),
        ("Mar", 48000.0, 51000.0),
        ("Apr", 61000.0, 63000.0),
        ("May", 55000.0, 58000.0),
        ("Jun", 67000.0, 69000.0),
    ]
    .into_iter()
    .map(|(month, sales, forecast)| SalesRecord {
        month: month.to_string(),
        sales,
        forecast,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: &str, sales: f64, forecast: f64) -> SalesRecord {
        SalesRecord {
            month: month.to_string(),
            sales,
            forecast,
        }
    }

    #[test]
    fn starts_with_the_demo_series() {
        let store = DashboardStore::new();
        assert_eq!(store.sales_data.len(), 6);
        assert_eq!(store.sales_data[0].month, "Jan");
        assert!(store.stats.is_none());
    }

    #[test]
    fn empty_upload_leaves_prior_data_untouched() {
        let mut store = DashboardStore::new();
        let before = store.sales_data.clone();

        assert!(!store.replace_sales(Vec::new()));
        assert_eq!(store.sales_data, before);

        assert!(store.replace_sales(vec![record("Jul", 1.0, 2.0)]));
        assert_eq!(store.sales_data.len(), 1);
    }

    #[test]
    fn partial_comprehensive_response_only_touches_present_keys() {
        let mut store = DashboardStore::new();
        let before_sales = store.sales_data.clone();

        let response = ComprehensiveResponse {
            stats: Some(DashboardStats {
                total_revenue: "$324,500".into(),
                growth_rate: "23.8%".into(),
                active_customers: "1,429".into(),
                target_progress: "87%".into(),
                ..DashboardStats::default()
            }),
            ..ComprehensiveResponse::default()
        };
        store.apply_comprehensive(response);

        assert_eq!(store.sales_data, before_sales);
        assert!(store.top_products.is_empty());
        assert!(store.categories.is_empty());
        assert!(store.locations.is_empty());
        assert_eq!(store.stats.as_ref().unwrap().total_revenue, "$324,500");
        assert!(store.last_refreshed.is_some());
    }

    #[test]
    fn full_response_replaces_every_sub_dataset() {
        let mut store = DashboardStore::new();
        let response = ComprehensiveResponse {
            sales_data: Some(vec![record("Jul", 72000.0, 74000.0)]),
            stats: Some(DashboardStats::default()),
            top_products: Some(vec![ProductPerformance {
                product_name: "Widget".into(),
                total_revenue: 1000.0,
                total_quantity: 10,
                order_count: 4,
                avg_price: 100.0,
                category: "Hardware".into(),
            }]),
            categories: Some(Vec::new()),
            locations: Some(Vec::new()),
        };
        store.apply_comprehensive(response);

        assert_eq!(store.sales_data.len(), 1);
        assert_eq!(store.top_products.len(), 1);
        assert!(store.error.is_none());
        assert!(!store.loading);
    }

    #[test]
    fn fetch_failure_keeps_last_good_data_visible() {
        let mut store = DashboardStore::new();
        store.begin_refresh();
        assert!(store.loading);

        store.set_error("HTTP 500: backend down");
        assert!(!store.loading);
        assert_eq!(store.error.as_deref(), Some("HTTP 500: backend down"));
        assert_eq!(store.sales_data.len(), 6, "stale data is still there");

        // A later successful refresh clears the error.
        store.apply_comprehensive(ComprehensiveResponse::default());
        assert!(store.error.is_none());
    }
}
