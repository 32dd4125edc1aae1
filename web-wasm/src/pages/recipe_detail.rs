//! Recipe detail screen
//!
//! Fetches one recipe by route id. A confirmed 404 renders "Recipe Not
//! Found"; any other failure shows the transport reason. Both offer a way
//! back.

use crate::api::backend;
use crate::route::Route;
use fridge_ai_common::{display_name, ApiError, Recipe};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn go_back() {
    if let Ok(history) = web_sys::window().unwrap().history() {
        let _ = history.back();
    }
}

#[component]
pub fn RecipeDetailPage<F>(recipe_id: String, on_navigate: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Clone + Send,
{
    // None while the request is in flight
    let (state, set_state) = signal(None::<Result<Recipe, ApiError>>);

    {
        let recipe_id = recipe_id.clone();
        spawn_local(async move {
            set_state.set(Some(backend::fetch_recipe(&recipe_id).await));
        });
    }

    view! {
        <div class="page recipe-detail-page">
            {move || match state.get() {
                None => view! {
                    <div class="loading">
                        <div class="spinner">"🔄"</div>
                        <p>"Loading recipe..."</p>
                    </div>
                }.into_any(),

                Some(Err(err)) => {
                    let back = on_navigate.clone();
                    let detail = if err.is_not_found() {
                        "The recipe you are looking for does not exist.".to_string()
                    } else {
                        err.to_string()
                    };
                    let title = if err.is_not_found() {
                        "Recipe Not Found"
                    } else {
                        "Failed to Load Recipe"
                    };
                    view! {
                        <div class="card status-card">
                            <div class="status-icon">"⚠️"</div>
                            <h2>{title}</h2>
                            <p class="text-muted">{detail}</p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| back(Route::Detect)
                            >
                                "← Back to Detection"
                            </button>
                        </div>
                    }.into_any()
                }

                Some(Ok(recipe)) => {
                    let find_more = on_navigate.clone();
                    view! { <RecipeDetail recipe=recipe on_find_more=find_more /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn RecipeDetail<F>(recipe: Recipe, on_find_more: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Clone + Send,
{
    let difficulty_class = match recipe.difficulty.as_str() {
        "easy" => "badge badge-easy",
        "intermediate" => "badge badge-intermediate",
        "hard" => "badge badge-hard",
        _ => "badge",
    };

    let main_ingredients: Vec<String> = recipe
        .ingredients
        .detectable
        .iter()
        .chain(recipe.ingredients.non_detectable.iter())
        .cloned()
        .collect();
    let pantry = recipe.ingredients.pantry.clone();
    let optional = recipe.ingredients.optional.clone();
    let allergens = recipe.allergens.join(", ");

    view! {
        <header class="detail-nav">
            <button class="btn btn-link" on:click=move |_| go_back()>"← Back"</button>
        </header>

        <section class="card detail-head">
            <div class="detail-title">
                <div>
                    <h1>{recipe.name.clone()}</h1>
                    <p class="name-urdu" dir="rtl">{recipe.name_urdu.clone()}</p>
                </div>
                <span class=difficulty_class>{recipe.difficulty.clone()}</span>
            </div>

            <div class="meta-grid">
                <div class="meta-item">
                    <span class="meta-label">"Total Time"</span>
                    <span class="meta-value">{format!("{} min", recipe.total_time())}</span>
                </div>
                <div class="meta-item">
                    <span class="meta-label">"Servings"</span>
                    <span class="meta-value">{recipe.servings}</span>
                </div>
                <div class="meta-item">
                    <span class="meta-label">"Calories"</span>
                    <span class="meta-value">{format!("{:.0}", recipe.nutrition.calories)}</span>
                </div>
                <div class="meta-item">
                    <span class="meta-label">"Cook Time"</span>
                    <span class="meta-value">{format!("{} min", recipe.cook_time)}</span>
                </div>
            </div>

            <div class="nutrition">
                <h3>"Nutrition per serving"</h3>
                <div class="nutrition-grid">
                    <div>
                        <span class="nutrition-value">{format!("{:.0}g", recipe.nutrition.protein)}</span>
                        <span class="nutrition-label">"Protein"</span>
                    </div>
                    <div>
                        <span class="nutrition-value">{format!("{:.0}g", recipe.nutrition.carbs)}</span>
                        <span class="nutrition-label">"Carbs"</span>
                    </div>
                    <div>
                        <span class="nutrition-value">{format!("{:.0}g", recipe.nutrition.fat)}</span>
                        <span class="nutrition-label">"Fat"</span>
                    </div>
                    <div>
                        <span class="nutrition-value">{format!("{:.0}g", recipe.nutrition.fiber)}</span>
                        <span class="nutrition-label">"Fiber"</span>
                    </div>
                </div>
            </div>

            <Show when={
                let allergens = allergens.clone();
                move || !allergens.is_empty()
            }>
                <div class="allergen-warning">
                    <strong>"Allergen Warning"</strong>
                    <p>{format!("Contains: {}", allergens)}</p>
                </div>
            </Show>
        </section>

        <section class="card">
            <h2>"Ingredients"</h2>
            <Show when={
                let empty = main_ingredients.is_empty();
                move || !empty
            }>
                <h3>"Main Ingredients"</h3>
                <ul class="ingredient-list">
                    {main_ingredients
                        .iter()
                        .map(|id| view! { <li>{display_name(id)}</li> })
                        .collect_view()}
                </ul>
            </Show>
            <Show when={
                let empty = pantry.is_empty();
                move || !empty
            }>
                <h3>"Pantry Staples"</h3>
                <div class="chip-list">
                    {pantry
                        .iter()
                        .map(|id| view! { <span class="chip chip-pantry">{display_name(id)}</span> })
                        .collect_view()}
                </div>
            </Show>
            <Show when={
                let empty = optional.is_empty();
                move || !empty
            }>
                <h3>"Optional"</h3>
                <div class="chip-list">
                    {optional
                        .iter()
                        .map(|id| view! { <span class="chip chip-optional">{display_name(id)}</span> })
                        .collect_view()}
                </div>
            </Show>
        </section>

        <section class="card">
            <h2>"Instructions"</h2>
            <ol class="instruction-list">
                {recipe
                    .instructions
                    .iter()
                    .map(|step| view! { <li>{step.clone()}</li> })
                    .collect_view()}
            </ol>
        </section>

        <div class="detail-footer">
            <button
                class="btn btn-primary"
                on:click=move |_| on_find_more(Route::Detect)
            >
                "Find More Recipes"
            </button>
        </div>
    }
}
