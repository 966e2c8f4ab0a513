use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view. Stays shown
/// afterwards. `delay` is in milliseconds.
#[component]
pub fn Reveal(
    #[prop(optional)] delay: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let in_view = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if in_view.get() && !shown.get_untracked() {
            set_shown.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            style:transition-delay=format!("{delay}ms")
            class=move || {
                let state = if shown.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-8"
                };
                format!("{class} transition-all duration-700 ease-out {state}")
            }
        >
            {children()}
        </div>
    }
}
