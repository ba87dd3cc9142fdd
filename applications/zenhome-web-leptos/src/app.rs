use leptos::*;
use leptos_router::*;

use crate::components::auth::{ForgotPassword, Login, Register, ResetPassword};
use crate::components::layout::Layout;
use crate::components::Dashboard;
use crate::state::provide_thresholds_context;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // Thresholds live for the whole session, whatever route is shown
    provide_thresholds_context();

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=Login />
                <Route path="/register" view=Register />
                <Route path="/forgot-password" view=ForgotPassword />
                <Route path="/reset-password" view=ResetPassword />
                <Route path="/" view=Layout>
                    <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="dashboard" view=Dashboard />
                </Route>
            </Routes>
        </Router>
    }
}
