use leptos::*;
use leptos_router::*;

use crate::state::session;

/// Layout component with navbar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Navbar with the signed-in account and a logout action
#[component]
fn Navbar() -> impl IntoView {
    let navigate = use_navigate();
    let account = session::get_account();
    let greeting = account
        .as_ref()
        .map(|a| format!("Welcome, {}", a.display_name()));

    let on_logout = move |_| {
        session::clear_account();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"ZenHome"</h1>
                {greeting.map(|text| view! { <span class="navbar-user">{text}</span> })}
                <div class="navbar-actions">
                    <button class="btn" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </div>
        </nav>
    }
}
