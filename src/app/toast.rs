use std::time::Duration;

use leptos::prelude::*;

const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Destructive,
        }
    }
}

/// One toast at a time; a new one replaces the current one and restarts the
/// dismiss timer.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    timer: StoredValue<Option<TimeoutHandle>>,
}

impl Toaster {
    pub fn provide() {
        let toaster = Self {
            current: RwSignal::new(None),
            timer: StoredValue::new(None),
        };
        on_cleanup(move || toaster.clear_timer());
        provide_context(toaster);
    }

    pub fn show(&self, toast: Toast) {
        self.clear_timer();
        self.current.set(Some(toast));
        let current = self.current;
        match set_timeout_with_handle(
            move || {
                current.try_set(None);
            },
            TOAST_DURATION,
        ) {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(e) => log::error!("toast won't dismiss itself: {e:?}"),
        }
    }

    pub fn dismiss(&self) {
        self.clear_timer();
        self.current.set(None);
    }

    fn clear_timer(&self) {
        if let Some(Some(handle)) = self.timer.try_update_value(|t| t.take()) {
            handle.clear();
        }
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastOutlet() -> impl IntoView {
    let toaster = use_toaster();

    move || {
        toaster.current.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Info => {
                    "glass-strong border border-primary/30 shadow-neon-sm"
                }
                ToastKind::Destructive => {
                    "bg-destructive text-destructive-foreground border border-destructive"
                }
            };
            view! {
                <div
                    role="status"
                    aria-live="polite"
                    class="fixed top-6 right-6 z-[110] max-w-sm w-[calc(100%-3rem)] animate-slide-in"
                >
                    <div class=format!("{class} rounded-xl p-4 pr-10 relative")>
                        <p class="font-semibold text-sm">{toast.title}</p>
                        <p class="text-sm opacity-90 mt-1">{toast.description}</p>
                        <button
                            aria-label="Dismiss"
                            class="absolute top-3 right-3 text-sm opacity-70 hover:opacity-100"
                            on:click=move |_| toaster.dismiss()
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
