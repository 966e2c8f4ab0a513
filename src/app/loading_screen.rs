use std::time::Duration;

use leptos::prelude::*;

use crate::content::MONOGRAM;
use crate::loading::{
    Cancel, Deferred, LoadingController, Mode, Phase, ScheduleError, Scheduler, Timing,
};

/// Hands due tasks back to the component through `dispatch`.
#[derive(Clone, Copy)]
struct BrowserScheduler {
    dispatch: Callback<Deferred>,
}

enum BrowserTimer {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

impl Cancel for BrowserTimer {
    fn cancel(&self) {
        match self {
            BrowserTimer::Timeout(handle) => handle.clear(),
            BrowserTimer::Interval(handle) => handle.clear(),
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn after(&self, delay: Duration, task: Deferred) -> Result<BrowserTimer, ScheduleError> {
        let dispatch = self.dispatch;
        set_timeout_with_handle(move || dispatch.run(task), delay)
            .map(BrowserTimer::Timeout)
            .map_err(|e| ScheduleError::Unavailable(format!("{e:?}")))
    }

    fn every(&self, period: Duration, task: Deferred) -> Result<BrowserTimer, ScheduleError> {
        let dispatch = self.dispatch;
        set_interval_with_handle(move || dispatch.run(task), period)
            .map(BrowserTimer::Interval)
            .map_err(|e| ScheduleError::Unavailable(format!("{e:?}")))
    }
}

/// Full-screen intro overlay.
///
/// Without `is_loading` the bar fills on its own; with it, the bar waits for
/// the signal to turn `false`. `on_complete` runs once per loading episode,
/// shortly after the overlay has faded out.
#[component]
pub fn LoadingScreen(
    #[prop(optional, into)] is_loading: Option<Signal<bool>>,
    #[prop(optional)] on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let mode = match is_loading {
        Some(_) => Mode::ExternallyDriven,
        None => Mode::self_timed(),
    };
    let phase = RwSignal::new(Phase::Loading(0));
    let controller = StoredValue::new(None::<LoadingController<BrowserScheduler>>);

    let publish = move || {
        if let Some(Some(current)) = controller.try_with_value(|c| c.as_ref().map(|c| c.phase()))
        {
            phase.set(current);
        }
    };

    let dispatch = Callback::new(move |task: Deferred| {
        let notify = controller
            .try_update_value(|c| c.as_mut().is_some_and(|c| c.fire(task)))
            .unwrap_or(false);
        publish();
        if notify {
            if let Some(on_complete) = on_complete {
                on_complete.run(());
            }
        }
    });

    Effect::new(move |_| {
        let still_loading = is_loading.map(|s| s.get());
        controller.try_update_value(|c| {
            let c = c.get_or_insert_with(|| {
                LoadingController::new(mode, Timing::default(), BrowserScheduler { dispatch })
            });
            c.start();
            if let Some(still_loading) = still_loading {
                c.set_loading(still_loading);
            }
        });
        publish();
    });

    on_cleanup(move || {
        controller.try_update_value(|c| {
            if let Some(c) = c.as_mut() {
                c.teardown();
            }
        });
    });

    let progress = move || phase.get().progress();
    let waiting = move || mode == Mode::ExternallyDriven && phase.get() == Phase::Loading(0);

    view! {
        <Show when=move || phase.get() != Phase::Hidden>
            <div class=move || {
                if phase.get() == Phase::Completing {
                    "fixed inset-0 z-[100] flex items-center justify-center bg-background transition-opacity duration-500 opacity-0"
                } else {
                    "fixed inset-0 z-[100] flex items-center justify-center bg-background transition-opacity duration-500 opacity-100"
                }
            }>
                <div class="absolute inset-0 overflow-hidden pointer-events-none">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-primary/20 rounded-full blur-3xl animate-pulse"></div>
                    <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-accent/20 rounded-full blur-3xl animate-pulse"></div>
                </div>

                <div class="relative flex flex-col items-center gap-8">
                    <div class="relative w-24 h-24">
                        <div class="absolute inset-0 rounded-full border-2 border-primary/30 animate-ping"></div>
                        <div class="absolute inset-0 rounded-full glass-strong shadow-neon flex items-center justify-center">
                            <span class="text-3xl font-bold gradient-text">{MONOGRAM}</span>
                        </div>
                    </div>

                    <div class="w-64 h-1.5 bg-muted rounded-full overflow-hidden">
                        <Show
                            when=waiting
                            fallback=move || {
                                view! {
                                    <div
                                        class="h-full bg-gradient-to-r from-primary to-accent transition-all duration-150 ease-out"
                                        style:width=move || format!("{}%", progress())
                                    ></div>
                                }
                            }
                        >
                            <div class="h-full w-1/3 bg-gradient-to-r from-primary to-accent animate-indeterminate"></div>
                        </Show>
                    </div>

                    <p class="text-sm text-muted-foreground font-mono tracking-widest">
                        {move || {
                            if waiting() {
                                "LOADING".to_string()
                            } else {
                                format!("{}%", progress())
                            }
                        }}
                    </p>
                </div>
            </div>
        </Show>
    }
}
