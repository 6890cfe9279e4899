//! Dashboard Component
//!
//! Today's completion percentage plus the per-habit finish flow:
//! guard → confirmation dialog → finish endpoint → store update → snackbar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FinishHabitItem, Snackbar};
use crate::session::use_session;
use crate::store::{completed_percent, dispatch, use_habit_store, HabitAction, HabitStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_habit_store();
    let session = use_session();

    let (finish_dialog_open, set_finish_dialog_open) = signal(false);
    let (habit_id, set_habit_id) = signal(String::new());
    let (finish_snackbar_open, set_finish_snackbar_open) = signal(false);

    let open_finish_dialog = move |id: String| {
        if session.guard().is_none() {
            return;
        }
        set_habit_id.set(id);
        set_finish_dialog_open.set(true);
    };

    let close_finish_dialog = move |_| {
        set_finish_dialog_open.set(false);
        set_habit_id.set(String::new());
    };

    let finish_habit = move |_| {
        let Some(token) = session.guard() else { return };
        let id = habit_id.get_untracked();
        spawn_local(async move {
            match api::finish_habit(&token, &id).await {
                Ok(()) => {
                    dispatch(&store, HabitAction::FinishHabit(id));
                    set_finish_dialog_open.set(false);
                    set_habit_id.set(String::new());
                    set_finish_snackbar_open.set(true);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("finish habit failed: {err:?}").into());
                }
            }
        });
    };

    let percent = Memo::new(move |_| store.habits().with(|habits| completed_percent(habits)));

    view! {
        <main class="dashboard">
            <div class="title-wrapper">
                <h1>"Today's progress"</h1>
                // Blank placeholder instead of a number when nothing is tracked
                <h2 class="percent">
                    {move || match percent.get() {
                        Some(p) => format!("{p}%"),
                        None => "\u{a0}".to_string(),
                    }}
                </h2>
            </div>
            <div class="progress-wrapper">
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style:width=move || format!("{}%", percent.get().unwrap_or(0))
                    ></div>
                </div>
            </div>
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading-wrapper">"Loading habits…"</div> }
            >
                <ul class="habit-list">
                    <For
                        each=move || store.habits().get()
                        // Key on the mutable fields so a finish re-renders the row
                        key=|habit| (habit.id.clone(), habit.is_finished, habit.streak)
                        children=move |habit| {
                            let id = habit.id.clone();
                            view! {
                                <FinishHabitItem
                                    name=habit.name
                                    is_finished=habit.is_finished
                                    streak=habit.streak
                                    clicked=move |()| open_finish_dialog(id.clone())
                                />
                            }
                        }
                    />
                </ul>
            </Show>
            <Show when=move || finish_dialog_open.get()>
                <div class="dialog-backdrop" on:click=close_finish_dialog>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Reminder"</h2>
                        <p>
                            "Did you really finish that habit? Remember - cheating won't get you anywhere!"
                        </p>
                        <div class="dialog-actions">
                            <button class="primary" on:click=finish_habit>
                                "Finish"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
            <Snackbar
                open=finish_snackbar_open
                message=Signal::derive(|| "Well done!".to_string())
                class="info"
                on_close=move |()| set_finish_snackbar_open.set(false)
            />
        </main>
    }
}
