pub mod body;

use self::body::article_body_html;
use crate::domain::articles::api::fetch_articles;
use crate::shared::components::article_card::ArticleCard;
use crate::shared::date_utils::format_date;
use crate::shared::document::set_document_title;
use contracts::domain::articles::{find_by_key, related_articles, Article};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Article view state. `MissingParam` and `NotFound` are distinct
/// terminal states: the first is decided before any fetch, the second
/// only after a successful fetch found no matching record.
#[derive(Clone)]
enum ArticleView {
    Loading,
    MissingParam,
    NotFound,
    Failed(String),
    Ready {
        article: Article,
        related: Vec<Article>,
    },
}

/// First non-empty of `slug` then `id`.
fn resolve_key(slug: Option<String>, id: Option<String>) -> Option<String> {
    slug.filter(|s| !s.is_empty())
        .or_else(|| id.filter(|s| !s.is_empty()))
}

/// Project a fetched set onto the view for one lookup key.
fn resolve_view(articles: &[Article], key: &str) -> ArticleView {
    match find_by_key(articles, key) {
        Some(article) => {
            let related: Vec<Article> = related_articles(articles, article)
                .into_iter()
                .cloned()
                .collect();
            ArticleView::Ready {
                article: article.clone(),
                related,
            }
        }
        None => ArticleView::NotFound,
    }
}

#[component]
pub fn ArticleDetails() -> impl IntoView {
    let query = leptos_router::hooks::use_query_map();
    let key = Memo::new(move |_| query.with(|q| resolve_key(q.get("slug"), q.get("id"))));

    let (view_state, set_view_state) = signal(ArticleView::Loading);

    // Related-article clicks land on /article again without a remount,
    // so the resolve/fetch/find pass is keyed on the query map and
    // re-runs on every same-route navigation.
    Effect::new(move |_| match key.get() {
        None => set_view_state.set(ArticleView::MissingParam),
        Some(current) => {
            set_view_state.set(ArticleView::Loading);
            spawn_local(async move {
                let next = match fetch_articles().await {
                    Ok(articles) => resolve_view(&articles, &current),
                    Err(e) => {
                        log::error!("article load failed: {}", e);
                        ArticleView::Failed(e)
                    }
                };
                // A newer navigation wins over a slow response.
                if key.get_untracked().as_deref() != Some(current.as_str()) {
                    return;
                }
                if let ArticleView::Ready { article, .. } = &next {
                    set_document_title(Some(&article.title));
                }
                set_view_state.set(next);
            });
        }
    });

    move || match view_state.get() {
        ArticleView::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
        ArticleView::MissingParam => view! {
            <article class="post">
                <h1>"Article Not Found"</h1>
                <p>"Missing ?slug= in the URL. Go back and choose an article."</p>
            </article>
        }
        .into_any(),
        ArticleView::NotFound => view! {
            <article class="post">
                <h1>"Article Not Found"</h1>
                <p>"We couldn\u{2019}t find that article."</p>
            </article>
        }
        .into_any(),
        ArticleView::Failed(e) => view! { <p class="error">{e}</p> }.into_any(),
        ArticleView::Ready { article, related } => {
            view! { <ArticleContent article=article related=related /> }.into_any()
        }
    }
}

#[component]
fn ArticleContent(article: Article, related: Vec<Article>) -> impl IntoView {
    let date = article.date.map(format_date);
    let read_time = article.read_time.as_ref().map(|rt| rt.label());
    let body = article_body_html(&article);
    let author = article.author.clone();
    let author_name = author.name.clone();
    let avatar_alt = author.name.clone();

    view! {
        <article class="post">
            <header class="post-header">
                <h1 class="post-title">{article.title.clone()}</h1>
                <div class="post-meta">
                    <span class="post-author">{author_name}</span>
                    {date.map(|d| view! { <span class="post-date">{d}</span> })}
                    {read_time.map(|rt| view! { <span class="post-readtime">{rt}</span> })}
                </div>
            </header>

            <div class="post-content" inner_html=body></div>

            <aside class="author-panel">
                {author
                    .avatar
                    .clone()
                    .map(|src| view! { <img class="author-avatar" src=src alt=avatar_alt /> })}
                <div>
                    <p class="author-name">{author.name.clone()}</p>
                    {author
                        .bio
                        .clone()
                        .map(|bio| view! { <p class="author-bio">{bio}</p> })}
                </div>
            </aside>

            <section class="related">
                <h2>"Related articles"</h2>
                {if related.is_empty() {
                    view! { <p class="related-empty">"No related articles found."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {related
                                .into_iter()
                                .map(|a| view! { <ArticleCard article=a /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </section>
        </article>
    }
}
