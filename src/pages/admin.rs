//! Authenticated landing page for the admin area.
//!
//! The session guard keeps unauthenticated visitors out; this page only
//! renders identity and offers the way back out.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Admin landing page showing the signed-in user and a sign-out action.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<crate::config::Config>();

    let on_logout = move |_| {
        let config = config.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::session::logout(&config, auth).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
        }
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin"</h1>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || view! { <p class="admin-page__status">"Checking session..."</p> }
            >
                <p class="admin-page__welcome">
                    "Signed in as "
                    <span class="admin-page__user">
                        {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                    </span>
                </p>
            </Show>
        </div>
    }
}
