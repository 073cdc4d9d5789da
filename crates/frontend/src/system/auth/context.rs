use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    pub fn is_operario(&self) -> bool {
        self.user.as_ref().map(|u| u.is_operario()).unwrap_or(false)
    }
}

/// Auth context provider component
///
/// The session is owned by the login flow; this layer only reads it.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        user: storage::get_current_user(),
    });

    // Another tab may log in or out; follow the shared localStorage.
    let _ = window_event_listener(leptos::ev::storage, move |_| {
        set_auth_state.set(AuthState {
            user: storage::get_current_user(),
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    match (
        use_context::<ReadSignal<AuthState>>(),
        use_context::<WriteSignal<AuthState>>(),
    ) {
        (Some(read), Some(write)) => (read, write),
        _ => {
            log::warn!("AuthProvider not found in component tree, reading session directly");
            signal(AuthState {
                user: storage::get_current_user(),
            })
        }
    }
}
