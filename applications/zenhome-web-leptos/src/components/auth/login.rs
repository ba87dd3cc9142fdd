use crate::api::ApiClient;
use crate::state::session;
use leptos::*;
use leptos_router::{use_navigate, A};

#[component]
pub fn Login() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);

    let login_action = create_action(|(email, password): &(String, String)| {
        let client = ApiClient::new();
        let email = email.clone();
        let password = password.clone();
        async move { client.login(email, password).await }
    });
    let pending = login_action.pending();

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(account) => {
                    session::store_account(&account);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        login_action.dispatch((email.get(), password.get()));
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Sign in"</h2>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
                <button class="btn" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-links">
                    <A href="/register">"Create an account"</A>
                    " · "
                    <A href="/forgot-password">"Forgot password?"</A>
                </p>
            </form>
        </div>
    }
}
