use crate::view::render::{EMPTY_MEALS_HINT, EMPTY_MEALS_MESSAGE};
use crate::view::state::{MealCard, MealsView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MealListProps {
    pub meals: MealsView,
}

#[function_component(MealList)]
pub fn meal_list(props: &MealListProps) -> Html {
    let content = match &props.meals {
        MealsView::Pending => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading meals..."}</p>
            </div>
        },
        MealsView::Empty => html! {
            <div class="meals-empty">
                <p class="meals-empty-title">{EMPTY_MEALS_MESSAGE}</p>
                <p class="meals-empty-hint">{EMPTY_MEALS_HINT}</p>
            </div>
        },
        MealsView::Cards(cards) => cards.iter().map(meal_card).collect::<Html>(),
    };

    html! {
        <div id="meals-list" class="meals-list">
            {content}
        </div>
    }
}

fn meal_card(card: &MealCard) -> Html {
    html! {
        <div class="meal-card">
            <div class="meal-card-header">
                <div class="meal-time">
                    {&card.time_label}
                    if let Some(meal_type) = card.meal_type {
                        <span class="meal-type">{meal_type.label()}</span>
                    }
                </div>
                <div class="meal-calories">{format!("{} kcal", card.calories)}</div>
            </div>
            if let Some(description) = &card.description {
                <p class="meal-description">{description}</p>
            }
            <div class="meal-macros">
                <div>
                    <span class="macro-label">{"Protein:"}</span>
                    <span class="macro-value">{format!("{}g", card.protein)}</span>
                </div>
                <div>
                    <span class="macro-label">{"Fat:"}</span>
                    <span class="macro-value">{format!("{}g", card.fat)}</span>
                </div>
                <div>
                    <span class="macro-label">{"Carbs:"}</span>
                    <span class="macro-value">{format!("{}g", card.carbs)}</span>
                </div>
            </div>
        </div>
    }
}
