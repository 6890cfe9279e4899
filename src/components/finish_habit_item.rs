//! Finish Habit Item Component
//!
//! Dashboard row with the completion toggle for one habit.

use leptos::prelude::*;

#[component]
pub fn FinishHabitItem(
    name: String,
    is_finished: bool,
    streak: u32,
    #[prop(into)] clicked: Callback<()>,
) -> impl IntoView {
    view! {
        <li class=if is_finished { "finish-item done" } else { "finish-item" }>
            <span class="habit-name">{name}</span>
            <span class="habit-streak">{format!("{streak}")}</span>
            <button
                class="finish-btn"
                disabled=is_finished
                on:click=move |_| clicked.run(())
            >
                {if is_finished { "Done" } else { "Finish" }}
            </button>
        </li>
    }
}
