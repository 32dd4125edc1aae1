//! Recipe match results screen
//!
//! One request per entry with the exact ingredient list from the route;
//! the service's ranking is rendered as-is. Loading, failure, confirmed-
//! empty and success all render distinctly.

use crate::api::backend;
use crate::route::Route;
use fridge_ai_common::{display_name, RecipeMatch, Retrieval};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn RecipesPage<F>(ingredients: Vec<String>, on_navigate: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Clone + Send,
{
    // None while the request is in flight
    let (state, set_state) = signal(None::<Retrieval<Vec<RecipeMatch>>>);

    let load = {
        let ingredients = ingredients.clone();
        move || {
            if ingredients.is_empty() {
                set_state.set(Some(Retrieval::Empty));
                return;
            }
            let ingredients = ingredients.clone();
            set_state.set(None);
            spawn_local(async move {
                let outcome = backend::match_recipes(&ingredients).await;
                set_state.set(Some(outcome));
            });
        }
    };
    load();

    let user_ingredients = ingredients;

    view! {
        <div class="page recipes-page">
            {move || match state.get() {
                None => view! {
                    <div class="loading">
                        <div class="spinner">"🔄"</div>
                        <p>"Finding recipes..."</p>
                    </div>
                }.into_any(),

                Some(Retrieval::Failed(err)) => {
                    let on_retry = load.clone();
                    let back = on_navigate.clone();
                    view! {
                        <div class="card status-card">
                            <div class="status-icon">"❌"</div>
                            <h2>"Something Went Wrong"</h2>
                            <p class="text-muted">{err.to_string()}</p>
                            <button class="btn btn-primary" on:click=move |_| on_retry()>
                                "Retry"
                            </button>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| back(Route::Detect)
                            >
                                "← Back to Detection"
                            </button>
                        </div>
                    }.into_any()
                }

                Some(Retrieval::Empty) => {
                    let back = on_navigate.clone();
                    view! {
                        <div class="card status-card">
                            <div class="status-icon">"😔"</div>
                            <h2>"No Recipes Found"</h2>
                            <p class="text-muted">
                                "We couldn't find any recipes with these ingredients. \
                                 Try adding more items!"
                            </p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| back(Route::Detect)
                            >
                                "Try Again"
                            </button>
                        </div>
                    }.into_any()
                }

                Some(Retrieval::Success(matches)) => {
                    let back = on_navigate.clone();
                    let on_view = on_navigate.clone();
                    let chips = user_ingredients.clone();
                    let entries =
                        move || matches.clone().into_iter().enumerate().collect::<Vec<_>>();
                    view! {
                        <header class="page-head">
                            <button
                                class="btn btn-link"
                                on:click=move |_| back(Route::Detect)
                            >
                                "← Back to Detection"
                            </button>
                            <h1>"🍳 Recipe Suggestions"</h1>
                            <Show when={
                                let chips = chips.clone();
                                move || !chips.is_empty()
                            }>
                                <div class="card user-ingredients">
                                    <p class="text-muted">"Your ingredients:"</p>
                                    <div class="chip-list">
                                        {chips
                                            .iter()
                                            .map(|id| view! {
                                                <span class="chip chip-detected">
                                                    {display_name(id)}
                                                </span>
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </Show>
                        </header>
                        <div class="match-list">
                            <For
                                each=entries
                                key=|(index, entry)| (*index, entry.recipe.id.clone())
                                children=move |(_, entry): (usize, RecipeMatch)| {
                                    let on_view = on_view.clone();
                                    view! { <MatchCard entry=entry on_view=on_view /> }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// One ranked recipe suggestion
#[component]
fn MatchCard<F>(entry: RecipeMatch, on_view: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Clone + Send,
{
    let pct = entry.match_percentage;
    let tier = if pct >= 75.0 {
        "high"
    } else if pct >= 50.0 {
        "medium"
    } else {
        "low"
    };
    let stars = match entry.recipe.difficulty.as_str() {
        "easy" => "⭐",
        "intermediate" => "⭐⭐",
        _ => "⭐⭐⭐",
    };
    let has = entry
        .has_ingredients
        .iter()
        .map(|id| display_name(id))
        .collect::<Vec<_>>()
        .join(", ");
    let missing = entry
        .missing_ingredients
        .iter()
        .map(|id| display_name(id))
        .collect::<Vec<_>>()
        .join(", ");
    let recipe_id = entry.recipe.id.clone();

    view! {
        <article class="card match-card">
            <div class="match-head">
                <div>
                    <h2>{entry.recipe.name.clone()}</h2>
                    <p class="text-muted" dir="rtl">{entry.recipe.name_urdu.clone()}</p>
                </div>
                <div class="match-score">
                    <span class="match-pct">{format!("{:.0}%", pct)}</span>
                    <span class="text-muted">"match"</span>
                </div>
            </div>

            <div class="match-bar">
                <div
                    class=format!("match-fill match-{}", tier)
                    style=format!("width: {:.0}%", pct)
                ></div>
            </div>

            <Show when={
                let has = has.clone();
                move || !has.is_empty()
            }>
                <p class="have-line">
                    <strong>"✅ You have: "</strong>
                    {has.clone()}
                </p>
            </Show>
            <Show when={
                let missing = missing.clone();
                move || !missing.is_empty()
            }>
                <p class="missing-line">
                    <strong>"⚠️ Missing: "</strong>
                    {missing.clone()}
                </p>
            </Show>

            <div class="match-meta">
                <span>{format!("⏱️ {} mins", entry.recipe.cook_time)}</span>
                <span>{format!("🔥 {:.0} cal", entry.recipe.nutrition.calories)}</span>
                <span>{stars}</span>
                <span>{format!("🍽️ {} servings", entry.recipe.servings)}</span>
            </div>

            <button
                class="btn btn-view"
                on:click=move |_| on_view(Route::RecipeDetail { id: recipe_id.clone() })
            >
                "👉 View Full Recipe"
            </button>
        </article>
    }
}
