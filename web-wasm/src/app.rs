//! Application shell and client-side navigation
//!
//! The current route lives in a signal. Navigating pushes a history entry
//! and swaps the page; browser back/forward re-parses the location. Each
//! page's state is local and dropped on navigation; only the ingredient
//! list travels through the route.

use crate::pages::detect::DetectPage;
use crate::pages::home::HomePage;
use crate::pages::recipe_detail::RecipeDetailPage;
use crate::pages::recipes::RecipesPage;
use crate::route::Route;
use fridge_ai_common::IngredientCatalog;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// The route the browser location currently points at
fn current_route() -> Route {
    let location = web_sys::window().unwrap().location();
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

fn push_route(route: &Route) {
    let window = web_sys::window().unwrap();
    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.to_url()));
    }
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(current_route());

    let navigate = move |target: Route| {
        push_route(&target);
        set_route.set(target);
    };

    // Browser back/forward re-parses the location
    let on_popstate = Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
        set_route.set(current_route());
    }) as Box<dyn FnMut(_)>);
    let _ = web_sys::window()
        .unwrap()
        .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    on_popstate.forget();

    view! {
        <main class="app">
            {move || match route.get() {
                Route::Home => view! { <HomePage on_navigate=navigate /> }.into_any(),
                Route::Detect => view! {
                    <DetectPage
                        catalog=IngredientCatalog::pakistani_pantry()
                        on_navigate=navigate
                    />
                }.into_any(),
                Route::Recipes { ingredients } => view! {
                    <RecipesPage ingredients=ingredients on_navigate=navigate />
                }.into_any(),
                Route::RecipeDetail { id } => view! {
                    <RecipeDetailPage recipe_id=id on_navigate=navigate />
                }.into_any(),
            }}
        </main>
    }
}
