use serde::{Deserialize, Serialize};

/// One month's observation in the sales series. `sales`/`forecast` may be
/// NaN when the source CSV field was missing or non-numeric.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SalesRecord {
    pub month: String,
    pub sales: f64,
    pub forecast: f64,
}

/// Headline figures for the stat cards. The backend formats these as
/// display strings ("$324,500", "+12.5%"), the client does not re-derive
/// them.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardStats {
    pub total_revenue: String,
    pub growth_rate: String,
    pub active_customers: String,
    pub target_progress: String,
    #[serde(default)]
    pub revenue_change: String,
    #[serde(default)]
    pub growth_change: String,
    #[serde(default)]
    pub customers_change: String,
    #[serde(default)]
    pub target_change: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductPerformance {
    pub product_name: String,
    pub total_revenue: f64,
    pub total_quantity: i64,
    pub order_count: i64,
    pub avg_price: f64,
    pub category: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CategoryPerformance {
    pub category: String,
    pub total_revenue: f64,
    pub total_quantity: i64,
    pub order_count: i64,
    pub avg_order_value: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LocationPerformance {
    pub location: String,
    pub total_revenue: f64,
    pub total_quantity: i64,
    pub order_count: i64,
    pub customer_count: i64,
}

/// Aggregate read from `/api/dashboard/comprehensive`. Every key is
/// optional; an absent key means "keep whatever you already have".
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ComprehensiveResponse {
    #[serde(default)]
    pub sales_data: Option<Vec<SalesRecord>>,
    #[serde(default)]
    pub stats: Option<DashboardStats>,
    #[serde(default)]
    pub top_products: Option<Vec<ProductPerformance>>,
    #[serde(default)]
    pub categories: Option<Vec<CategoryPerformance>>,
    #[serde(default)]
    pub locations: Option<Vec<LocationPerformance>>,
}

/// Ingestion acknowledgment from `/api/upload/csv`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UploadAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub rows_processed: Option<u64>,
}
