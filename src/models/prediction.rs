use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The predict endpoints accept a flat object of numeric features; the
/// model decides which keys it uses and fills in defaults for the rest.
pub type FeatureMap = BTreeMap<String, f64>;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PredictionResponse {
    pub prediction: f64,
}
