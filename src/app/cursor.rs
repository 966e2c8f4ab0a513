use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{
    use_document, use_event_listener, use_media_query, use_raf_fn, UseRafFnCallbackArgs,
};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::cursor::{CursorState, INTERACTIVE_SELECTOR};

fn show_native_cursor(shown: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let value = if shown { "auto" } else { "none" };
    if let Err(e) = body.style().set_property("cursor", value) {
        log::warn!("couldn't set body cursor: {e:?}");
    }
}

fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Spring-following ring that replaces the native pointer. Stays out of the
/// way on touch devices and under reduced motion.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let coarse_pointer = use_media_query("(pointer: coarse)");
    let (hydrated, set_hydrated) = signal(false);
    let (has_touch, set_has_touch) = signal(false);

    // only runs in the browser, so the server render never shows the cursor
    Effect::new(move |_| {
        set_has_touch.set(window().navigator().max_touch_points() > 0);
        set_hydrated.set(true);
    });

    let enabled = Memo::new(move |_| {
        hydrated.get() && !has_touch.get() && !reduced_motion.get() && !coarse_pointer.get()
    });

    Effect::new(move |_| show_native_cursor(!enabled.get()));
    on_cleanup(move || {
        if enabled.try_get_untracked().unwrap_or(false) {
            show_native_cursor(true);
        }
    });

    let cursor = RwSignal::new(CursorState::default());

    let _ = use_event_listener(use_document(), ev::mousemove, move |e| {
        if enabled.get_untracked() {
            cursor.update(|c| c.on_move(e.client_x() as f64, e.client_y() as f64));
        }
    });
    let _ = use_event_listener(use_document(), ev::mouseleave, move |_| {
        cursor.update(|c| c.on_leave());
    });
    let _ = use_event_listener(use_document(), ev::mousedown, move |_| {
        cursor.update(|c| c.set_pressed(true));
    });
    let _ = use_event_listener(use_document(), ev::mouseup, move |_| {
        cursor.update(|c| c.set_pressed(false));
    });
    let _ = use_event_listener(use_document(), ev::mouseover, move |e| {
        let hovering = is_interactive(e.target());
        if cursor.with_untracked(|c| c.hovering()) != hovering {
            cursor.update(|c| c.set_hovering(hovering));
        }
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if !enabled.get_untracked() {
            return;
        }
        let elapsed = Duration::from_secs_f64(args.delta.max(0.0) / 1000.0);
        cursor.maybe_update(|c| c.tick(elapsed));
    });

    let position = Memo::new(move |_| cursor.with(|c| c.position()));
    let visible = Memo::new(move |_| cursor.with(|c| c.visible()));
    let hovering = Memo::new(move |_| cursor.with(|c| c.hovering()));
    let scale = Memo::new(move |_| cursor.with(|c| c.scale()));
    let transform = move || {
        let (x, y) = position.get();
        format!("translate3d({x}px, {y}px, 0)")
    };

    view! {
        <Show when=move || enabled.get()>
            <div
                class="fixed top-0 left-0 pointer-events-none z-[9999] mix-blend-difference"
                style:transform=transform
            >
                <div
                    class="relative -translate-x-1/2 -translate-y-1/2 transition-all duration-150"
                    style:opacity=move || if visible.get() { "1" } else { "0" }
                    style:scale=move || scale.get().to_string()
                >
                    <div class=move || {
                        if hovering.get() {
                            "w-8 h-8 rounded-full border-2 border-primary bg-primary/10 transition-colors duration-200"
                        } else {
                            "w-8 h-8 rounded-full border-2 border-primary/80 transition-colors duration-200"
                        }
                    }></div>
                    <div class=move || {
                        if hovering.get() {
                            "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-1.5 h-1.5 rounded-full bg-primary transition-transform scale-0"
                        } else {
                            "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-1.5 h-1.5 rounded-full bg-primary transition-transform scale-100"
                        }
                    }></div>
                </div>
            </div>
            {(0..3u32)
                .map(|i| {
                    let lag = format!("transform {}ms linear", (i + 1) * 30);
                    let opacity = 0.3 - f64::from(i) * 0.1;
                    let size = (1.0 - f64::from(i) * 0.2).to_string();
                    view! {
                        <div
                            class="fixed top-0 left-0 pointer-events-none z-[9998]"
                            style:transform=transform
                            style:transition=lag
                        >
                            <div
                                class="w-2 h-2 -translate-x-1/2 -translate-y-1/2 rounded-full bg-primary/50"
                                style:opacity=move || {
                                    if visible.get() { opacity.to_string() } else { "0".to_string() }
                                }
                                style:scale=size
                            ></div>
                        </div>
                    }
                })
                .collect_view()}
        </Show>
    }
}
