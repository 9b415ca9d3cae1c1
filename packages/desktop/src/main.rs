use dioxus::prelude::*;
use views::{Dashboard, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/table")]
    Dashboard {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Reads blog.toml and BLOG_API_BASE_URL from the data dir / .env
    use_context_provider(ui::load_config);
    use_context_provider(|| Signal::new(ui::Notifications::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::AuthProvider {
            ui::PostsProvider {
                Router::<Route> {}
            }
        }
    }
}
