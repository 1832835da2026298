use yew::prelude::*;

use crate::models::FeatureMap;
use crate::services::{ApiClient, Session};

#[derive(Clone, PartialEq, Default)]
pub struct PredictionState {
    pub result: Option<f64>,
    pub error: Option<String>,
    pub busy: bool,
}

pub struct UsePredictionsHandle {
    pub sales: UseStateHandle<PredictionState>,
    pub stock: UseStateHandle<PredictionState>,
    pub predict_sales: Callback<FeatureMap>,
    pub predict_stock: Callback<FeatureMap>,
}

#[derive(Clone, Copy)]
enum Model {
    Sales,
    Stock,
}

/// The two predictive endpoints: sales revenue and stock reorder quantity.
/// Each form keeps its own inline result/error state.
#[hook]
pub fn use_predictions() -> UsePredictionsHandle {
    let session = use_context::<Session>().unwrap_or_default();
    let sales = use_state(PredictionState::default);
    let stock = use_state(PredictionState::default);

    let predict_sales = predict_callback(sales.clone(), session.clone(), Model::Sales);
    let predict_stock = predict_callback(stock.clone(), session, Model::Stock);

    UsePredictionsHandle {
        sales,
        stock,
        predict_sales,
        predict_stock,
    }
}

fn predict_callback(
    state: UseStateHandle<PredictionState>,
    session: Session,
    model: Model,
) -> Callback<FeatureMap> {
    Callback::from(move |features: FeatureMap| {
        let state = state.clone();
        let session = session.clone();

        state.set(PredictionState {
            result: (*state).result,
            error: None,
            busy: true,
        });

        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new(session);
            let result = match model {
                Model::Sales => api.predict_sales(&features).await,
                Model::Stock => api.predict_stock(&features).await,
            };

            match result {
                Ok(response) => {
                    state.set(PredictionState {
                        result: Some(response.prediction),
                        error: None,
                        busy: false,
                    });
                }
                Err(e) => {
                    log::error!("❌ Prediction failed: {}", e);
                    state.set(PredictionState {
                        result: (*state).result,
                        error: Some(e),
                        busy: false,
                    });
                }
            }
        });
    })
}
