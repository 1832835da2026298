// ============================================================================
// PREDICTIONS - feature forms for the two model endpoints
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_predictions, PredictionState};
use crate::models::FeatureMap;

#[function_component(PredictionsView)]
pub fn predictions_view() -> Html {
    let predictions = use_predictions();

    html! {
        <div class="predictions">
            <PredictionForm
                title="Sales Forecast"
                description="Estimate revenue for a product line"
                features={vec!["price", "quantity", "discount_percent", "month"]}
                state={(*predictions.sales).clone()}
                on_predict={predictions.predict_sales.clone()}
            />
            <PredictionForm
                title="Stock Reorder"
                description="Estimate the reorder quantity for an item"
                features={vec![
                    "current_stock",
                    "avg_daily_sales",
                    "lead_time_days",
                    "supplier_delay_days",
                ]}
                state={(*predictions.stock).clone()}
                on_predict={predictions.predict_stock.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PredictionFormProps {
    title: AttrValue,
    description: AttrValue,
    features: Vec<&'static str>,
    state: PredictionState,
    on_predict: Callback<FeatureMap>,
}

#[function_component(PredictionForm)]
fn prediction_form(props: &PredictionFormProps) -> Html {
    let refs = use_memo(props.features.len(), |len| {
        (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    let on_submit = {
        let features = props.features.clone();
        let refs = refs.clone();
        let on_predict = props.on_predict.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut map = FeatureMap::new();
            for (name, node) in features.iter().zip(refs.iter()) {
                let Some(input) = node.cast::<HtmlInputElement>() else {
                    return;
                };
                let Ok(value) = input.value().trim().parse::<f64>() else {
                    return;
                };
                map.insert((*name).to_string(), value);
            }
            on_predict.emit(map);
        })
    };

    html! {
        <section class="panel prediction-form">
            <h2>{ &props.title }</h2>
            <p class="panel-subtitle">{ &props.description }</p>

            <form onsubmit={on_submit}>
                {
                    props.features.iter().zip(refs.iter()).map(|(name, node)| html! {
                        <div class="form-group">
                            <label for={*name}>{ feature_label(name) }</label>
                            <input
                                type="number"
                                step="any"
                                id={*name}
                                ref={node.clone()}
                                required=true
                            />
                        </div>
                    }).collect::<Html>()
                }

                <button type="submit" class="btn-primary" disabled={props.state.busy}>
                    { if props.state.busy { "Predicting..." } else { "Predict" } }
                </button>
            </form>

            if let Some(result) = props.state.result {
                <p class="prediction-result">{ format!("Prediction: {:.2}", result) }</p>
            }
            if let Some(error) = &props.state.error {
                <p class="form-error">{ error }</p>
            }
        </section>
    }
}

fn feature_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    for (i, part) in name.split('_').enumerate() {
        if i > 0 {
            label.push(' ');
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(chars.as_str());
        }
    }
    label
}
