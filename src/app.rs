//! Habits Frontend App
//!
//! Root component: initializes the session from the stored token, provides
//! the habit store, runs the guarded initial fetch, and switches between the
//! dashboard and the management screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{Dashboard, Manage, Navbar, Screen};
use crate::session::{self, SessionContext};
use crate::store::{dispatch, HabitAction, HabitState, HabitStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(HabitState::new());
    provide_context(store);

    let session_ctx = SessionContext::new();
    provide_context(session_ctx);
    if let Some(token) = session::stored_token() {
        session_ctx.init(&token);
    }

    let (screen, set_screen) = signal(Screen::Dashboard);

    // Initial load, guarded. Runs once on mount; an expired token forces the
    // logout before any request goes out.
    Effect::new(move |_| {
        let Some(token) = session_ctx.guard() else { return };
        spawn_local(async move {
            match api::list_habits(&token).await {
                Ok(habits) => dispatch(&store, HabitAction::SetHabits(habits)),
                Err(err) => {
                    store.loading().set(false);
                    web_sys::console::error_1(&format!("failed to load habits: {err:?}").into());
                }
            }
        });
    });

    let auth = session_ctx.auth();

    view! {
        <div class="app-layout">
            <Navbar screen=screen set_screen=set_screen />
            <Show
                when=move || auth.with(|a| a.is_authenticated)
                fallback=move || {
                    view! {
                        <main class="logged-out">
                            <p>
                                {move || {
                                    auth.with(|a| {
                                        if a.expired_info.is_empty() {
                                            "You are logged out.".to_string()
                                        } else {
                                            a.expired_info.clone()
                                        }
                                    })
                                }}
                            </p>
                        </main>
                    }
                }
            >
                <Show
                    when=move || screen.get() == Screen::Manage
                    fallback=|| view! { <Dashboard /> }
                >
                    <Manage />
                </Show>
            </Show>
        </div>
    }
}
