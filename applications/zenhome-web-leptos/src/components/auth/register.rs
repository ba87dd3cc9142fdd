use crate::api::ApiClient;
use crate::models::RegisterRequest;
use leptos::*;
use leptos_router::{use_navigate, A};

fn none_if_blank(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let (last_name, set_last_name) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);

    let register_action = create_action(|request: &RegisterRequest| {
        let client = ApiClient::new();
        let request = request.clone();
        async move { client.register(request).await }
    });
    let pending = register_action.pending();

    let navigate = use_navigate();
    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => navigate("/login", Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        register_action.dispatch(RegisterRequest {
            last_name: none_if_blank(last_name.get()),
            first_name: none_if_blank(first_name.get()),
            email: email.get(),
            password: password.get(),
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Create an account"</h2>
                <label>
                    "Last name"
                    <input
                        type="text"
                        prop:value=last_name
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "First name"
                    <input
                        type="text"
                        prop:value=first_name
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                    />
                </label>
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
                    {move || if pending.get() { "Creating..." } else { "Sign up" }}
                </button>
                <p class="auth-links">
                    <A href="/login">"Already registered? Sign in"</A>
                </p>
            </form>
        </div>
    }
}
