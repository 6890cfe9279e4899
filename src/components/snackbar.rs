//! Snackbar Component
//!
//! Transient notification banner. Auto-hides after the fixed delay, or
//! earlier on explicit dismissal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ui::SNACKBAR_HIDE_MS;

/// Tracks the latest open instance. A timer armed for an earlier instance
/// must not close a snackbar that was dismissed and reopened in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct HideTimer {
    generation: u64,
}

impl HideTimer {
    fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[component]
pub fn Snackbar(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: Signal<String>,
    #[prop(optional)] class: &'static str,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let timer = RwSignal::new(HideTimer::default());

    // One timer per closed→open edge. Re-runs caused by unrelated writes to
    // the source signal see an unchanged `open` and do not rearm.
    Effect::new(move |prev: Option<bool>| {
        let is_open = open.get();
        if is_open && prev != Some(true) {
            let mut generation = 0;
            timer.update(|t| generation = t.arm());
            spawn_local(async move {
                TimeoutFuture::new(SNACKBAR_HIDE_MS).await;
                if timer.with_untracked(|t| t.is_current(generation)) && open.get_untracked() {
                    on_close.run(());
                }
            });
        }
        is_open
    });

    view! {
        <Show when=move || open.get()>
            <div class=format!("snackbar {class}")>
                <span class="snackbar-message">{move || message.get()}</span>
                <button class="snackbar-close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_is_not_current_after_a_reopen() {
        let mut timer = HideTimer::default();
        // Open, dismiss, reopen before the first delay elapses: the first
        // timer must not cut the second snackbar short.
        let first = timer.arm();
        let second = timer.arm();
        assert!(!timer.is_current(first));
        assert!(timer.is_current(second));
    }

    #[test]
    fn timer_for_the_current_open_fires() {
        let mut timer = HideTimer::default();
        let only = timer.arm();
        assert!(timer.is_current(only));
    }
}
