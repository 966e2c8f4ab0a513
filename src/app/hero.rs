use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::navbar::DomViewport;
use crate::content::{OWNER, ROLES};
use crate::nav::SectionScroller;

const ROLE_INTERVAL_MS: u64 = 3000;

fn scroll_to(id: &str) {
    if !DomViewport.scroll_into_view(id) {
        log::debug!("no section with id {id}");
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let (role, set_role) = signal(0usize);
    let _ = use_interval_fn(
        move || set_role.update(|i| *i = (*i + 1) % ROLES.len()),
        ROLE_INTERVAL_MS,
    );

    view! {
        <section id="home" class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute -top-1/2 -left-1/2 w-full h-full bg-gradient-radial opacity-30 animate-spin-slow"></div>
                <div class="absolute top-1/4 right-0 w-96 h-96 bg-muted/20 rounded-full blur-3xl animate-drift"></div>
            </div>

            <div class="section-container relative z-10">
                <div class="text-left max-w-4xl animate-fade-up">
                    <p class="text-muted-foreground mb-4 tracking-widest uppercase text-sm">
                        "Hello, I'm"
                    </p>
                    <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-display font-bold mb-6">
                        <span class="text-foreground">{OWNER}</span>
                    </h1>

                    <div class="h-12 sm:h-14 md:h-16 mb-8 flex items-start">
                        {move || {
                            let current = role.get();
                            view! {
                                <p class="text-xl sm:text-2xl md:text-3xl text-muted-foreground font-medium animate-blur-in"
                                >
                                    {ROLES[current]}
                                </p>
                            }
                        }}
                    </div>

                    <p class="text-muted-foreground text-lg sm:text-xl max-w-2xl mb-10">
                        "Crafting digital experiences that blend creativity with technical excellence. Turning complex problems into elegant solutions."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4">
                        <button
                            class="group btn-hero px-8 py-4 rounded-xl text-lg font-semibold"
                            on:click=|_| scroll_to("projects")
                        >
                            <span class="mr-2 inline-block group-hover:rotate-12 transition-transform">
                                "↗"
                            </span>
                            "See My Work"
                        </button>
                        <button
                            class="group btn-hero-outline px-8 py-4 rounded-xl text-lg font-semibold"
                            on:click=|_| scroll_to("contact")
                        >
                            <span class="mr-2 inline-block group-hover:scale-110 transition-transform">
                                "✉"
                            </span>
                            "Let's Talk"
                        </button>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-24 md:bottom-32 left-1/2 -translate-x-1/2 animate-fade-in-late">
                <button
                    class="flex flex-col items-center gap-2 text-muted-foreground hover:text-primary transition-colors animate-bob"
                    on:click=|_| scroll_to("about")
                >
                    <span class="text-xs uppercase tracking-widest">"Scroll"</span>
                    <span class="text-sm">"↓"</span>
                </button>
            </div>
        </section>
    }
}
