use crate::app::SITE_NAME;
use leptos::prelude::*;

/// Static page chrome shared by every route.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-title" href="/">{SITE_NAME}</a>
        </header>
        <main class="site-main">{children()}</main>
        <footer class="site-footer">
            <small>{SITE_NAME}</small>
        </footer>
    }
}
