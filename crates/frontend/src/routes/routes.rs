use crate::domain::articles::ui::details::ArticleDetails;
use crate::domain::articles::ui::list::ArticleList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="error">"Page not found."</p> }>
                    <Route path=path!("/") view=ArticleList />
                    <Route path=path!("/article") view=ArticleDetails />
                </Routes>
            </Shell>
        </Router>
    }
}
