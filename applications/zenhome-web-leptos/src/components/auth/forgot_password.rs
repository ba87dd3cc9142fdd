use crate::api::ApiClient;
use leptos::*;
use leptos_router::A;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());

    let request_action = create_action(|email: &String| {
        let client = ApiClient::new();
        let email = email.clone();
        async move { client.forgot_password(email).await }
    });
    let pending = request_action.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        request_action.dispatch(email.get());
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Reset your password"</h2>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    request_action.value().get().map(|result| match result {
                        // The backend answers the same way whether or not
                        // the address exists
                        Ok(reply) => view! { <p class="info-message">{reply.message}</p> },
                        Err(e) => view! { <p class="error-message">{e.to_string()}</p> },
                    })
                }}
                <button class="btn" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Sending..." } else { "Send reset link" }}
                </button>
                <p class="auth-links">
                    <A href="/login">"Back to sign in"</A>
                </p>
            </form>
        </div>
    }
}
