use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::controller::Controller;
use crate::services::api::DietClient;
use crate::services::notifier::BrowserNotifier;
use crate::utils::diagnostics;
use crate::view::state::{FormField, ViewHandle, ViewState};
use wasm_bindgen_futures::spawn_local;

type DietController = Controller<DietClient, BrowserNotifier>;

/// Handle returned by `use_diet` hook
#[derive(Clone, PartialEq)]
pub struct DietHandle {
    pub state: ViewState,
    pub on_input: Callback<(FormField, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Builds the view state and controller once, runs the initial load, and
/// exposes the form callbacks.
#[hook]
pub fn use_diet() -> DietHandle {
    let force_update = use_force_update();
    let view = use_memo((), move |_| {
        ViewHandle::new(move || force_update.force_update())
    });

    let controller = {
        let view = (*view).clone();
        use_memo((), move |_| create_controller(view))
    };

    // Effect: initial load
    {
        let controller = controller.clone();
        let view = (*view).clone();
        use_effect_with((), move |_| {
            if let Some(controller) = (*controller).clone() {
                spawn_local(async move { controller.init(&view).await });
            }
            || ()
        });
    }

    let on_input = {
        let view = (*view).clone();
        Callback::from(move |(field, value): (FormField, String)| {
            view.update(|v| v.form.set(field, value));
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let view = (*view).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(controller) = (*controller).clone() else {
                return;
            };
            if let Some(pending) = controller.begin_submission(&view) {
                let view = view.clone();
                spawn_local(async move { controller.complete_submission(&view, pending).await });
            }
        })
    };

    DietHandle {
        state: view.snapshot(),
        on_input,
        on_submit,
    }
}

fn create_controller(view: ViewHandle) -> Option<Rc<DietController>> {
    DietClient::new()
        .inspect_err(|e| diagnostics::error("Error creating API client", e))
        .ok()
        .map(|client| {
            Rc::new(Controller::new(
                client,
                BrowserNotifier::new(view),
                Config::USER_ID,
            ))
        })
}
