use leptos::prelude::*;

use super::navbar::scroll_to_top;
use crate::content::{copyright_year, MONOGRAM, OWNER};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border/50">
            <div class="section-container">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <div class="text-2xl font-display font-bold gradient-text">{MONOGRAM}</div>
                    <p class="text-sm text-muted-foreground flex items-center gap-1">
                        "Made with " <span class="inline-block animate-heartbeat">"❤"</span>
                        {format!(" by {OWNER} © {}", copyright_year())}
                    </p>
                    <button
                        class="text-sm text-muted-foreground hover:text-primary transition-colors"
                        on:click=|_| scroll_to_top()
                    >
                        "Back to top ↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}
