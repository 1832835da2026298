use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub change: AttrValue,
}

/// One headline figure. Values arrive pre-formatted from the backend.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-title">{ &props.title }</span>
            <span class="stat-value">{ &props.value }</span>
            if !props.change.is_empty() {
                <span class="stat-change">{ &props.change }</span>
            }
        </div>
    }
}
