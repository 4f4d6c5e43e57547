pub mod state;

use self::state::create_state;
use crate::domain::articles::api::fetch_articles;
use crate::shared::components::article_card::ArticleCard;
use crate::shared::document::set_document_title;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Home view: searchable, category-filterable article list with
/// "load more" pagination. Filtering re-runs synchronously on every
/// input event against the already-loaded set; no re-fetch occurs.
#[component]
pub fn ArticleList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // An earlier article view may have left its title behind.
    set_document_title(None);

    spawn_local(async move {
        match fetch_articles().await {
            Ok(articles) => {
                state.update(|s| s.load(articles));
                set_error.set(None);
            }
            Err(e) => {
                log::error!("article feed load failed: {}", e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let chips = move || state.get().chip_labels();

    view! {
        <section class="home">
            <div class="list-controls">
                <input
                    type="search"
                    class="search"
                    placeholder="Search articles..."
                    prop:value=move || state.get().query.clone()
                    on:input=move |ev| {
                        state.update(|s| s.on_search_changed(event_target_value(&ev)));
                    }
                />
                <div class="chip-row">
                    {move || chips().into_iter().map(|cat| {
                        let label = cat.clone();
                        let cat_for_active = cat.clone();
                        view! {
                            <button
                                class="chip"
                                class:is-active=move || state.get().filter == cat_for_active
                                on:click=move |_| {
                                    state.update(|s| s.on_filter_changed(cat.clone()));
                                }
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="card-grid">
                {move || {
                    state
                        .get()
                        .visible()
                        .iter()
                        .cloned()
                        .map(|article| view! { <ArticleCard article=article /> })
                        .collect_view()
                }}
            </div>

            <Show when=move || {
                !loading.get() && error.get().is_none() && state.get().visible().is_empty()
            }>
                <p class="list-empty">"No articles match your search."</p>
            </Show>

            <Show when=move || state.get().has_more()>
                <button
                    class="load-more"
                    on:click=move |_| state.update(|s| s.on_page_advance())
                >
                    "Load more"
                </button>
            </Show>
        </section>
    }
}
