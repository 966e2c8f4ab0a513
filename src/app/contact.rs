use std::time::Duration;

use leptos::{
    ev::{FocusEvent, SubmitEvent},
    prelude::*,
};

use super::reveal::Reveal;
use super::toast::{use_toaster, Toast};
use crate::contact::{ContactError, ContactMessage};
use crate::content::{Icon, RESUME_PATH, SOCIAL_LINKS};

/// How long the "Message Sent!" panel stays before the form comes back empty.
const SUCCESS_RESET: Duration = Duration::from_millis(3000);

fn label_class(raised: bool, focused: bool) -> &'static str {
    match (raised, focused) {
        (true, true) => {
            "absolute left-4 top-3 text-sm pointer-events-none origin-left transition-all duration-200 -translate-y-6 scale-[0.85] text-primary"
        }
        (true, false) => {
            "absolute left-4 top-3 text-sm pointer-events-none origin-left transition-all duration-200 -translate-y-6 scale-[0.85] text-muted-foreground"
        }
        _ => {
            "absolute left-4 top-3 text-sm pointer-events-none origin-left transition-all duration-200 text-muted-foreground"
        }
    }
}

#[component]
fn FloatingField(
    field: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    focused: RwSignal<Option<&'static str>>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let is_focused = move || focused.get() == Some(field);
    let class = move || label_class(is_focused() || !value.read().is_empty(), is_focused());
    let on_focus = move |_: FocusEvent| focused.set(Some(field));
    let on_blur = move |_: FocusEvent| focused.set(None);

    let input = if multiline {
        view! {
            <textarea
                name=field
                rows="5"
                required
                bind:value=value
                on:focus=on_focus
                on:blur=on_blur
                class="w-full px-4 pt-5 pb-2 bg-muted/50 border border-border/50 rounded-xl focus:border-primary focus:ring-primary focus:outline-none resize-none"
            ></textarea>
        }
        .into_any()
    } else {
        let kind = if field == "email" { "email" } else { "text" };
        view! {
            <input
                type=kind
                name=field
                required
                bind:value=value
                on:focus=on_focus
                on:blur=on_blur
                class="w-full h-12 px-4 pt-3 bg-muted/50 border border-border/50 rounded-xl focus:border-primary focus:ring-primary focus:outline-none"
            />
        }
        .into_any()
    };

    view! {
        <div class="relative">
            <label class=class>{label}</label>
            {input}
        </div>
    }
}

#[component]
fn Confetti() -> impl IntoView {
    (0..12)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::PI / 6.0;
            let style = format!(
                "--dx: {:.0}px; --dy: {:.0}px; animation-delay: {}ms",
                angle.cos() * 100.0,
                angle.sin() * 100.0,
                i * 30
            );
            view! {
                <div class="absolute w-2 h-2 rounded-full bg-primary animate-confetti" style=style></div>
            }
        })
        .collect_view()
}

#[component]
pub fn Contact() -> impl IntoView {
    let toaster = use_toaster();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let focused = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let reset_timer = StoredValue::new(None::<TimeoutHandle>);

    let clear_reset = move || {
        if let Some(Some(handle)) = reset_timer.try_update_value(|t| t.take()) {
            handle.clear();
        }
    };
    on_cleanup(clear_reset);

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let on_sent = move || {
        sent.set(true);
        toaster.show(Toast::info(
            "Message sent successfully!",
            "Thanks for reaching out. I'll get back to you soon.",
        ));
        clear_reset();
        let reset = move || {
            sent.try_set(false);
            name.try_set(String::new());
            email.try_set(String::new());
            message.try_set(String::new());
        };
        match set_timeout_with_handle(reset, SUCCESS_RESET) {
            Ok(handle) => reset_timer.set_value(Some(handle)),
            Err(e) => log::error!("contact form won't reset: {e:?}"),
        }
    };

    let on_failed = move |e: ContactError| {
        log::warn!("contact form: {e}");
        let description = match e {
            ContactError::MissingField(_) => {
                let mut text = e.to_string();
                if let Some(first) = text.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                text
            }
            _ => "Something went wrong. Please try again or email directly.".to_string(),
        };
        toaster.show(Toast::destructive("Error", description));
    };

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = msg.validate() {
            on_failed(e);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::contact::submit(&msg).await;
                submitting.try_set(false);
                match result {
                    Ok(()) => on_sent(),
                    Err(e) => on_failed(e),
                }
            });
        }
    };

    view! {
        <section id="contact" class="py-24 md:py-32 relative">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-muted/20 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-muted/20 rounded-full blur-3xl animate-pulse"></div>
            </div>

            <div class="section-container relative z-10">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-display font-bold mb-4 text-foreground">
                        "Get In " <span class="gradient-text">"Touch"</span>
                    </h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "Have a project in mind? Let's create something amazing together."
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20">
                    <Reveal delay=200>
                        <div class="glass rounded-3xl p-6 md:p-8">
                            <Show
                                when=move || sent.get()
                                fallback=move || {
                                    view! {
                                        <form class="space-y-6" on:submit=on_submit>
                                            <FloatingField field="name" label="Your Name" value=name focused />
                                            <FloatingField field="email" label="Your Email" value=email focused />
                                            <FloatingField
                                                field="message"
                                                label="Your Message"
                                                value=message
                                                focused
                                                multiline=true
                                            />
                                            <button
                                                type="submit"
                                                disabled=move || submitting.get()
                                                class="w-full rounded-xl btn-hero py-3 font-semibold flex items-center justify-center gap-2 disabled:opacity-70"
                                            >
                                                {move || {
                                                    if submitting.get() {
                                                        view! { <span class="animate-spin inline-block">"✦"</span> }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <span>"➤"</span>
                                                            <span>"Send Message"</span>
                                                        }
                                                            .into_any()
                                                    }
                                                }}
                                            </button>
                                        </form>
                                    }
                                }
                            >
                                <div class="flex flex-col items-center justify-center py-12 relative animate-fade-in">
                                    <div class="w-20 h-20 rounded-full bg-primary/20 flex items-center justify-center mb-4 text-4xl text-primary">
                                        "✓"
                                    </div>
                                    <h3 class="text-xl font-display font-semibold mb-2 text-foreground">
                                        "Message Sent!"
                                    </h3>
                                    <p class="text-muted-foreground text-center">
                                        "Thanks for reaching out. I'll get back to you soon."
                                    </p>
                                    <Confetti />
                                </div>
                            </Show>
                        </div>
                    </Reveal>

                    <Reveal delay=400 class="flex flex-col justify-center">
                        <div class="space-y-8">
                            <div>
                                <h3 class="text-2xl font-display font-semibold mb-4 text-foreground">
                                    "Let's work together"
                                </h3>
                                <p class="text-muted-foreground leading-relaxed">
                                    "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions. Feel free to reach out through the form or connect with me on social media."
                                </p>
                            </div>

                            <div>
                                <h4 class="text-sm uppercase tracking-widest text-muted-foreground mb-4">
                                    "Connect with me"
                                </h4>
                                <div class="flex gap-4">
                                    {SOCIAL_LINKS
                                        .iter()
                                        .map(|link| {
                                            let icon = match link.icon {
                                                Icon::Devicon(class) => {
                                                    view! { <i class=class></i> }.into_any()
                                                }
                                                Icon::Emoji(glyph) => view! { <span>{glyph}</span> }.into_any(),
                                            };
                                            view! {
                                                <a
                                                    href=link.href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label=link.label
                                                    class="w-12 h-12 rounded-xl glass flex items-center justify-center text-xl text-muted-foreground hover:text-primary hover:border-primary/50 hover:-translate-y-1 transition-all"
                                                >
                                                    {icon}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <a
                                href=RESUME_PATH
                                download
                                class="group inline-flex items-center rounded-xl border border-border px-6 py-3 hover:bg-muted transition-colors"
                            >
                                <span class="mr-2 group-hover:animate-bounce">"⬇"</span>
                                "Download CV"
                            </a>

                            <div class="flex items-center gap-3 text-sm">
                                <div class="w-3 h-3 rounded-full bg-green-500 shadow-[0_0_10px_rgba(34,197,94,0.5)] animate-pulse"></div>
                                <span class="text-muted-foreground">
                                    "Currently available for freelance projects"
                                </span>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
