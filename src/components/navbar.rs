//! Navbar Component
//!
//! Two-tab switch between the dashboard and the management screen.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Manage,
}

#[component]
pub fn Navbar(screen: ReadSignal<Screen>, set_screen: WriteSignal<Screen>) -> impl IntoView {
    let tab = move |target: Screen, label: &'static str| {
        view! {
            <button
                class=move || {
                    if screen.get() == target { "nav-tab active" } else { "nav-tab" }
                }
                on:click=move |_| set_screen.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="navbar">
            <span class="navbar-title">"Habits"</span>
            {tab(Screen::Dashboard, "Dashboard")}
            {tab(Screen::Manage, "Manage")}
        </nav>
    }
}
