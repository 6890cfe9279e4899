//! Manage Component
//!
//! Habit list management screen. All transient state lives in the ManageUi
//! state machine; this component wires user events through the session guard
//! and the API client, then dispatches the matching store action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{HabitRow, Snackbar};
use crate::session::use_session;
use crate::store::{dispatch, use_habit_store, HabitAction, HabitStateStoreFields};
use crate::ui::{Dialog, ManageUi, MAX_HABITS};

#[component]
pub fn Manage() -> impl IntoView {
    let store = use_habit_store();
    let session = use_session();
    let ui = RwSignal::new(ManageUi::new());

    let close_dialog = move |_| ui.update(|u| u.close_dialog());

    let open_add = move |_| {
        if session.guard().is_none() {
            return;
        }
        let count = store.get_untracked().habits.len();
        ui.update(|u| u.open_add(count));
    };

    let submit_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.guard() else { return };
        let name = ui.with_untracked(|u| u.draft_name.clone());
        spawn_local(async move {
            match api::create_habit(&token, &name).await {
                Ok(habit) => {
                    dispatch(&store, HabitAction::AddHabit(habit));
                    ui.update(|u| u.add_succeeded());
                }
                Err(ApiError::Validation(errors)) => {
                    ui.update(|u| u.add_failed(errors));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("create habit failed: {err:?}").into());
                }
            }
        });
    };

    let submit_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.guard() else { return };
        let (id, name) = ui.with_untracked(|u| (u.target_id.clone(), u.edit_draft.clone()));
        let Some(id) = id else { return };
        spawn_local(async move {
            match api::update_habit(&token, &id, &name).await {
                Ok(()) => {
                    dispatch(&store, HabitAction::EditHabit { id, name });
                    ui.update(|u| u.edit_succeeded());
                }
                Err(ApiError::Validation(errors)) => {
                    ui.update(|u| u.edit_failed(errors));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("update habit failed: {err:?}").into());
                }
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(token) = session.guard() else { return };
        let Some(id) = ui.with_untracked(|u| u.target_id.clone()) else { return };
        spawn_local(async move {
            match api::delete_habit(&token, &id).await {
                Ok(()) => {
                    dispatch(&store, HabitAction::DeleteHabit(id));
                    ui.update(|u| u.delete_succeeded());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("delete habit failed: {err:?}").into());
                }
            }
        });
    };

    let field_error = move |field: &'static str| {
        ui.with(|u| u.errors.get(field).cloned())
            .map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <main class="manage">
            <div class="title-wrapper">
                <h1>"Manage habits"</h1>
                <button class="primary add-btn" on:click=open_add>
                    "Add habit"
                </button>
            </div>
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading-wrapper">"Loading habits…"</div> }
            >
                <ul class="habit-list">
                    <For
                        each=move || store.habits().get()
                        // Key on the mutable fields so a rename re-renders the row
                        key=|habit| (habit.id.clone(), habit.name.clone(), habit.streak)
                        children=move |habit| {
                            let id = habit.id.clone();
                            let name = habit.name.clone();
                            let menu_id = id.clone();
                            let open_menu = move |()| {
                                if session.guard().is_none() {
                                    return;
                                }
                                ui.update(|u| u.open_menu(&id, &name));
                            };
                            let menu_open = Signal::derive(move || {
                                ui.with(|u| {
                                    u.menu_open && u.target_id.as_deref() == Some(menu_id.as_str())
                                })
                            });
                            view! {
                                <HabitRow
                                    habit=habit
                                    menu_open=menu_open
                                    on_menu=open_menu
                                    on_edit=move |()| ui.update(|u| u.menu_to_edit())
                                    on_delete=move |()| ui.update(|u| u.menu_to_delete())
                                />
                            }
                        }
                    />
                </ul>
            </Show>

            // Add dialog
            <Show when=move || ui.with(|u| u.dialog == Dialog::Add)>
                <div class="dialog-backdrop" on:click=close_dialog>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Add a habit"</h2>
                        <form on:submit=submit_add>
                            <input
                                type="text"
                                placeholder="Habit name"
                                prop:value=move || ui.with(|u| u.draft_name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ui.update(|u| u.set_draft_name(value));
                                }
                            />
                            {move || field_error("name")}
                            <div class="dialog-actions">
                                <button type="button" on:click=close_dialog>
                                    "Cancel"
                                </button>
                                <button type="submit" class="primary">
                                    "Add"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>

            // Edit dialog
            <Show when=move || ui.with(|u| u.dialog == Dialog::Edit)>
                <div class="dialog-backdrop" on:click=close_dialog>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Edit habit"</h2>
                        <form on:submit=submit_edit>
                            <input
                                type="text"
                                prop:value=move || ui.with(|u| u.edit_draft.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ui.update(|u| u.set_edit_draft(value));
                                }
                            />
                            {move || field_error("name")}
                            <div class="dialog-actions">
                                <button type="button" on:click=close_dialog>
                                    "Cancel"
                                </button>
                                <button type="submit" class="primary">
                                    "Save"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>

            // Delete confirmation dialog
            <Show when=move || ui.with(|u| u.dialog == Dialog::Delete)>
                <div class="dialog-backdrop" on:click=close_dialog>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Delete habit"</h2>
                        <p>
                            {move || {
                                ui.with(|u| {
                                    format!(
                                        "Delete \"{}\"? Its streak will be gone for good.",
                                        u.target_name,
                                    )
                                })
                            }}
                        </p>
                        <div class="dialog-actions">
                            <button type="button" on:click=close_dialog>
                                "Cancel"
                            </button>
                            <button class="danger" on:click=confirm_delete>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Snackbar
                open=Signal::derive(move || ui.with(|u| u.info_open))
                message=Signal::derive(move || ui.with(|u| u.info_message.text().to_string()))
                class="info"
                on_close=move |()| ui.update(|u| u.dismiss_info())
            />
            <Snackbar
                open=Signal::derive(move || ui.with(|u| u.error_open))
                message=Signal::derive(|| {
                    format!("You can track up to {MAX_HABITS} habits at a time")
                })
                class="error"
                on_close=move |()| ui.update(|u| u.dismiss_error())
            />
            <Snackbar
                open=Signal::derive(move || ui.with(|u| u.delete_open))
                message=Signal::derive(|| "Habit deleted".to_string())
                class="danger"
                on_close=move |()| ui.update(|u| u.dismiss_delete())
            />
        </main>
    }
}
