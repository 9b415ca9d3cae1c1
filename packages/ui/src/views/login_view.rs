//! Login / register screen backed by the local credential store.

use dioxus::prelude::*;

use crate::auth::{self, use_auth, use_credentials};

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

/// Toggles between signing in and creating an account. `on_success` runs
/// after a session has been written; the platform crate navigates from there.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let mut auth_state = use_auth();
    let credentials = use_credentials();
    let mut is_login = use_signal(|| true);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let result = if is_login() {
            auth::login(&mut auth_state, &credentials, &email(), &password())
        } else {
            auth::register(&mut auth_state, &credentials, &name(), &email(), &password())
        };
        match result {
            Ok(_) => on_success.call(()),
            Err(e) => {
                tracing::warn!("authentication failed: {e}");
                error.set(Some(e.to_string()));
            }
        }
    };

    let toggle_mode = move |_: MouseEvent| {
        is_login.set(!is_login());
        error.set(None);
        name.set(String::new());
        email.set(String::new());
        password.set(String::new());
    };

    rsx! {
        document::Stylesheet { href: LOGIN_CSS }

        div {
            class: "login-page",

            div {
                class: "login-hero",
                h1 { "Blog Management System" }
                p { "Create, manage, and share your blog posts with the world." }
            }

            div {
                class: "login-card",
                h2 {
                    if is_login() { "Welcome Back" } else { "Create Account" }
                }
                p {
                    class: "login-subtitle",
                    if is_login() {
                        "Enter your credentials to access your account"
                    } else {
                        "Sign up to start creating your blog posts"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    class: "login-form",

                    if let Some(err) = error() {
                        div { class: "login-error", role: "alert", "{err}" }
                    }

                    if !is_login() {
                        label { r#for: "login-name", "Full Name" }
                        input {
                            id: "login-name",
                            r#type: "text",
                            required: true,
                            placeholder: "John Doe",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }

                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        required: true,
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        required: true,
                        placeholder: "••••••••",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        r#type: "submit",
                        class: "primary",
                        if is_login() { "Sign In" } else { "Create Account" }
                    }
                }

                p {
                    class: "login-toggle",
                    if is_login() { "Don't have an account? " } else { "Already have an account? " }
                    button {
                        r#type: "button",
                        class: "link",
                        onclick: toggle_mode,
                        if is_login() { "Sign up" } else { "Sign in" }
                    }
                }
            }
        }
    }
}
