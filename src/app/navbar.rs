use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::content::{nav_icon, NAV_SECTIONS};
use crate::nav::{NavTracker, SectionBounds, SectionScroller, Viewport};

/// The live page. Only call into it from the browser (event handlers).
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl DomViewport {
    fn element(id: &str) -> Option<HtmlElement> {
        document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn height(&self) -> f64 {
        window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }

    fn width(&self) -> f64 {
        window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default()
    }

    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        let el = Self::element(id)?;
        Some(SectionBounds {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }
}

impl SectionScroller for DomViewport {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn Navbar() -> impl IntoView {
    let tracker = RwSignal::new(NavTracker::new(NAV_SECTIONS));
    let active = Memo::new(move |_| tracker.with(|t| t.active_id()));
    let visible = Memo::new(move |_| tracker.with(|t| t.nav_visible()));
    let menu_open = Memo::new(move |_| tracker.with(|t| t.menu_open()));

    // leptos-use removes the listener when this component's owner is cleaned up
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        tracker.update(|t| t.on_scroll(&DomViewport));
    });

    let go_to = move |id: &'static str| tracker.update(|t| t.scroll_to(&DomViewport, id));

    view! {
        <nav class=move || {
            if visible.get() {
                "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 hidden md:block transition-all duration-300 translate-y-0 opacity-100"
            } else {
                "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 hidden md:block transition-all duration-300 translate-y-24 opacity-0 pointer-events-none"
            }
        }>
            <div class="glass-strong rounded-full px-2 py-2 shadow-neon">
                <div class="flex items-center gap-1">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            let is_active = move || active.get() == Some(id);
                            view! {
                                <button
                                    on:click=move |_| go_to(id)
                                    class=move || {
                                        if is_active() {
                                            "relative flex flex-col items-center justify-center px-4 py-2 rounded-full transition-all duration-300 hover:scale-110 text-primary"
                                        } else {
                                            "relative flex flex-col items-center justify-center px-4 py-2 rounded-full transition-all duration-300 hover:scale-110 text-muted-foreground hover:text-foreground"
                                        }
                                    }
                                >
                                    <Show when=is_active>
                                        <span class="absolute inset-0 bg-primary/20 rounded-full shadow-neon-sm"></span>
                                        <span class="absolute -bottom-1 left-1/2 -ml-0.5 w-1 h-1 bg-primary rounded-full animate-pulse"></span>
                                    </Show>
                                    <span class="relative z-10 text-lg leading-none">
                                        {nav_icon(id)}
                                    </span>
                                    <span class="text-[10px] mt-1 relative z-10 font-medium">
                                        {section.label}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>

        <button
            aria-label="Toggle navigation"
            on:click=move |_| tracker.update(|t| t.toggle_menu())
            class=move || {
                if visible.get() {
                    "fixed bottom-6 right-6 z-50 md:hidden w-14 h-14 rounded-full bg-primary shadow-neon flex items-center justify-center transition-transform duration-300 scale-100"
                } else {
                    "fixed bottom-6 right-6 z-50 md:hidden w-14 h-14 rounded-full bg-primary shadow-neon flex items-center justify-center transition-transform duration-300 scale-0"
                }
            }
        >
            <span class="text-2xl text-primary-foreground">
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </span>
        </button>

        <Show when=move || menu_open.get()>
            <div
                class="fixed inset-0 z-40 md:hidden bg-background/80 backdrop-blur-xl animate-fade-in"
                on:click=move |_| tracker.update(|t| t.close_menu())
            >
                <div
                    class="absolute bottom-24 right-6 glass-strong rounded-2xl p-4 shadow-neon"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex flex-col gap-2">
                        {NAV_SECTIONS
                            .iter()
                            .enumerate()
                            .map(|(index, section)| {
                                let id = section.id;
                                let delay = format!("{}ms", index * 50);
                                view! {
                                    <button
                                        on:click=move |_| go_to(id)
                                        style:animation-delay=delay
                                        class=move || {
                                            if active.get() == Some(id) {
                                                "flex items-center gap-3 px-4 py-3 rounded-xl transition-all animate-slide-in bg-primary/20 text-primary"
                                            } else {
                                                "flex items-center gap-3 px-4 py-3 rounded-xl transition-all animate-slide-in text-muted-foreground hover:text-foreground hover:bg-muted"
                                            }
                                        }
                                    >
                                        <span class="text-lg">{nav_icon(id)}</span>
                                        <span class="font-medium">{section.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
