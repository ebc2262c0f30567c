use yew::prelude::*;

use diet_tracker::components::{MealForm, MealList, StatsPanel, ToastStack};
use diet_tracker::hooks::use_diet::use_diet;

#[function_component(App)]
fn app() -> Html {
    let diet = use_diet();
    let state = &diet.state;

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Diet Tracker"}</h1>
            </header>

            <main class="app-main">
                <section class="stats-section">
                    <h2>{"Today"}</h2>
                    <StatsPanel stats={state.stats.clone()} />
                </section>

                <section class="form-section">
                    <h2>{"Add Meal"}</h2>
                    <MealForm
                        form={state.form.clone()}
                        submit={state.submit.clone()}
                        on_input={diet.on_input.clone()}
                        on_submit={diet.on_submit.clone()}
                    />
                </section>

                <section class="meals-section">
                    <h2>{"Recent Meals"}</h2>
                    <MealList meals={state.meals.clone()} />
                </section>
            </main>

            <ToastStack toasts={state.toasts.clone()} />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
