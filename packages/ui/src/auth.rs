//! Authentication context and hooks for the UI.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use store::{AuthError, SessionToken};

use crate::storage::{make_credentials, use_config, Credentials};

/// Authentication state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Whether the stored session marker says the dashboard may be shown.
    pub logged_in: bool,
    /// Claims of the stored token, when it decodes.
    pub session: Option<SessionToken>,
}

impl AuthState {
    fn read(credentials: &Credentials) -> Self {
        let logged_in = credentials.is_logged_in();
        Self {
            logged_in,
            session: logged_in.then(|| credentials.current_session()).flatten(),
        }
    }

    /// Display name of the logged-in user, if the token carries one.
    pub fn user_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.name.as_str())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_credentials() -> Credentials {
    use_context::<Credentials>()
}

/// Calls `on_signed_out` once each time the session goes away, and once on
/// mount when there is none. Returns whether a session is present.
pub fn use_session_gate(on_signed_out: EventHandler<()>) -> bool {
    let auth = use_auth();
    let signalled = use_hook(|| Rc::new(Cell::new(false)));

    let logged_in = auth().logged_in;
    if logged_in {
        signalled.set(false);
    } else if !signalled.replace(true) {
        on_signed_out.call(());
    }
    logged_in
}

/// Provider component that reads the session marker from storage on mount.
/// Expects a [`store::BlogConfig`] in context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_config();
    let credentials = use_context_provider(|| make_credentials(&config));
    use_context_provider(|| Signal::new(AuthState::read(&credentials)));

    rsx! {
        {children}
    }
}

/// Log in and publish the new session.
pub fn login(
    auth: &mut Signal<AuthState>,
    credentials: &Credentials,
    email: &str,
    password: &str,
) -> Result<SessionToken, AuthError> {
    let token = credentials.login(email, password)?;
    tracing::info!(user = %token.user_id, "logged in");
    auth.set(AuthState::read(credentials));
    Ok(token)
}

/// Register, log in and publish the new session.
pub fn register(
    auth: &mut Signal<AuthState>,
    credentials: &Credentials,
    name: &str,
    email: &str,
    password: &str,
) -> Result<SessionToken, AuthError> {
    let token = credentials.register(name, email, password)?;
    tracing::info!(user = %token.user_id, "registered");
    auth.set(AuthState::read(credentials));
    Ok(token)
}

/// Button to log out the current user. Pages react to the cleared session
/// through [`use_session_gate`].
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let credentials = use_credentials();

    let onclick = move |_| {
        if let Err(e) = credentials.logout() {
            tracing::error!("Failed to clear session: {e}");
        }
        tracing::info!("logged out");
        auth_state.set(AuthState::read(&credentials));
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::core::{ScopeId, VirtualDom};

    use super::*;

    thread_local! {
        static SIGN_OUTS: Cell<u32> = const { Cell::new(0) };
        static AUTH: Cell<Option<Signal<AuthState>>> = const { Cell::new(None) };
    }

    fn gated_page() -> Element {
        let auth = use_context_provider(|| {
            Signal::new(AuthState {
                logged_in: true,
                session: None,
            })
        });
        AUTH.with(|slot| slot.set(Some(auth)));
        let on_signed_out =
            use_hook(|| EventHandler::new(|_: ()| SIGN_OUTS.with(|n| n.set(n.get() + 1))));

        let logged_in = use_session_gate(on_signed_out);
        rsx! {
            if logged_in { p { "dashboard" } }
        }
    }

    fn set_logged_in(dom: &mut VirtualDom, logged_in: bool) {
        let mut auth = AUTH.with(Cell::get).unwrap();
        dom.in_runtime(|| auth.set(AuthState { logged_in, session: None }));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
    }

    #[test]
    fn test_logout_signals_sign_out_once() {
        let mut dom = VirtualDom::new(gated_page);
        dom.rebuild_in_place();
        assert_eq!(SIGN_OUTS.with(Cell::get), 0);

        set_logged_in(&mut dom, false);
        assert_eq!(SIGN_OUTS.with(Cell::get), 1);

        // Later renders without a session stay quiet
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        assert_eq!(SIGN_OUTS.with(Cell::get), 1);

        // A fresh login re-arms the gate
        set_logged_in(&mut dom, true);
        set_logged_in(&mut dom, false);
        assert_eq!(SIGN_OUTS.with(Cell::get), 2);
    }
}
