use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

/// Site name, used in the shell header and for document titles.
pub const SITE_NAME: &str = "Truth For Life";

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppRoutes />
    }
}
