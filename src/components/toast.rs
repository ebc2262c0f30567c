use crate::view::state::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
}

/// Success notifications, newest last.
#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            {
                props.toasts.iter().map(|toast| html! {
                    <div key={toast.id} class="toast success">
                        <p>{"✅ "}{&toast.message}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
