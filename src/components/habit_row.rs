//! Habit Row Component
//!
//! One row on the management screen: name, streak, and the per-habit menu
//! with the edit/delete entries. The menu renders anchored at its trigger.

use leptos::prelude::*;

use crate::models::Habit;

#[component]
pub fn HabitRow(
    habit: Habit,
    /// True when the shared menu is open for this row's habit
    #[prop(into)]
    menu_open: Signal<bool>,
    #[prop(into)] on_menu: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <li class="habit-row">
            <span class="habit-name">{habit.name}</span>
            <span class="habit-streak">{format!("{} day streak", habit.streak)}</span>
            <button
                class="menu-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_menu.run(());
                }
            >
                "⋮"
            </button>
            <Show when=move || menu_open.get()>
                <div class="habit-menu">
                    <button class="menu-item" on:click=move |_| on_edit.run(())>
                        "Edit"
                    </button>
                    <button class="menu-item danger" on:click=move |_| on_delete.run(())>
                        "Delete"
                    </button>
                </div>
            </Show>
        </li>
    }
}
