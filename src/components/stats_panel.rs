use crate::view::state::StatsView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: StatsView,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let stats = &props.stats;

    html! {
        <div class="stats-panel">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Calories"}</h3>
                    <p id="stat-calories" class="summary-value">{&stats.calories}</p>
                    <span class="summary-unit">{"kcal"}</span>
                </div>
                <div class="summary-item">
                    <h3>{"Protein"}</h3>
                    <p id="stat-protein" class="summary-value">{&stats.protein}</p>
                    <span class="summary-unit">{"g"}</span>
                </div>
                <div class="summary-item">
                    <h3>{"Fat"}</h3>
                    <p id="stat-fat" class="summary-value">{&stats.fat}</p>
                    <span class="summary-unit">{"g"}</span>
                </div>
                <div class="summary-item">
                    <h3>{"Carbs"}</h3>
                    <p id="stat-carbs" class="summary-value">{&stats.carbs}</p>
                    <span class="summary-unit">{"g"}</span>
                </div>
            </div>
            if let Some(count) = stats.meal_count {
                <p class="meal-count">
                    {format!("{count} {} logged today", if count == 1 { "meal" } else { "meals" })}
                </p>
            }
        </div>
    }
}
