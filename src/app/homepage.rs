use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::about::About;
use super::contact::Contact;
use super::cursor::CustomCursor;
use super::education::Education;
use super::footer::Footer;
use super::hero::Hero;
use super::loading_screen::LoadingScreen;
use super::navbar::Navbar;
use super::projects::Projects;
use super::skills::Skills;

/// How long the intro overlay holds the page before it starts to fade.
const PAGE_LOAD_MS: f64 = 2500.0;

#[component]
pub fn HomePage() -> impl IntoView {
    let (is_loading, set_is_loading) = signal(true);
    let (intro_done, set_intro_done) = signal(false);

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_is_loading.set(false), PAGE_LOAD_MS);
    Effect::new(move |_| start(()));

    let on_complete = Callback::new(move |_| {
        log::debug!("intro finished");
        set_intro_done.set(true);
    });

    view! {
        <Title text="Portfolio" />
        <Show when=move || !intro_done.get()>
            <LoadingScreen is_loading=is_loading on_complete />
        </Show>
        <CustomCursor />
        <div class="relative min-h-screen overflow-x-hidden">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Skills />
                <Education />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
