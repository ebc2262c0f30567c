use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::meal::MealType;
use crate::view::state::{FormField, MealForm as MealFormState, SubmitButton};

#[derive(Properties, PartialEq)]
pub struct MealFormProps {
    pub form: MealFormState,
    pub submit: SubmitButton,
    pub on_input: Callback<(FormField, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Form for logging a new meal
#[function_component(MealForm)]
pub fn meal_form(props: &MealFormProps) -> Html {
    let number_input = |field: FormField, name: &'static str, label: &'static str, value: &str| {
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, target.value()));
        });

        html! {
            <label class="form-field">
                <span>{label}</span>
                <input type="number" {name} min="0" step="any" value={value.to_string()} {oninput} />
            </label>
        }
    };

    let on_meal_type = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            on_input.emit((FormField::MealType, target.value()));
        })
    };

    let on_description = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((FormField::Description, target.value()));
        })
    };

    html! {
        <form id="meal-form" class="meal-form" onsubmit={props.on_submit.clone()}>
            <div class="form-grid">
                {number_input(FormField::Calories, "calories", "Calories (kcal)", &props.form.calories)}
                {number_input(FormField::Protein, "protein", "Protein (g)", &props.form.protein)}
                {number_input(FormField::Fat, "fat", "Fat (g)", &props.form.fat)}
                {number_input(FormField::Carbs, "carbs", "Carbs (g)", &props.form.carbs)}
            </div>
            <div class="form-grid">
                <label class="form-field">
                    <span>{"Meal type"}</span>
                    <select name="meal_type" onchange={on_meal_type}>
                        <option value="" selected={props.form.meal_type.is_empty()}>{"Select..."}</option>
                        {
                            MealType::all().iter().map(|t| {
                                let selected = props.form.meal_type == t.code();
                                html! {
                                    <option value={t.code()} {selected}>{t.label()}</option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </label>
                <label class="form-field">
                    <span>{"Description"}</span>
                    <input
                        type="text"
                        name="description"
                        value={props.form.description.clone()}
                        oninput={on_description}
                    />
                </label>
            </div>
            <button type="submit" disabled={!props.submit.enabled}>
                {props.submit.label}
            </button>
        </form>
    }
}
