use dioxus::prelude::*;
use ui::views::DashboardView;

use crate::Route;

/// Dashboard, sent back to the login screen once the session is gone.
#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
