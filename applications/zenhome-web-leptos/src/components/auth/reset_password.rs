use crate::api::ApiClient;
use leptos::*;
use leptos_router::{use_navigate, use_query_map, A};

#[component]
pub fn ResetPassword() -> impl IntoView {
    let query = use_query_map();
    // The token rides in from the emailed link: /reset-password?token=...
    let token = move || query.with(|q| q.get("token").cloned().unwrap_or_default());

    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);

    let reset_action = create_action(|(token, password): &(String, String)| {
        let client = ApiClient::new();
        let token = token.clone();
        let password = password.clone();
        async move { client.reset_password(token, password).await }
    });
    let pending = reset_action.pending();

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(_) => navigate("/login", Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if password.get() != confirm.get() {
            set_error.set(Some("Passwords do not match".into()));
            return;
        }
        set_error.set(None);
        reset_action.dispatch((token(), password.get()));
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Choose a new password"</h2>
                <label>
                    "New password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
                <button class="btn" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Saving..." } else { "Reset password" }}
                </button>
                <p class="auth-links">
                    <A href="/login">"Back to sign in"</A>
                </p>
            </form>
        </div>
    }
}
