//! Landing page

use crate::route::Route;
use leptos::prelude::*;

#[component]
pub fn HomePage<F>(on_navigate: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Clone + Send,
{
    view! {
        <div class="page home-page">
            <div class="hero">
                <div class="hero-icon">"🥘"</div>
                <h1>"My Fridge AI"</h1>
                <p class="tagline">
                    "Detect Pakistani Foods with AI & Get Authentic Desi Recipes"
                </p>
                <button
                    class="btn btn-cta"
                    on:click=move |_| on_navigate(Route::Detect)
                >
                    "📸 Scan Your Fridge"
                </button>
            </div>

            <div class="feature-grid">
                <div class="feature">
                    <div class="feature-icon">"✨"</div>
                    <h3>"AI-Powered"</h3>
                    <p>"Detection model trained on Pakistani foods"</p>
                </div>
                <div class="feature">
                    <div class="feature-icon">"🇵🇰"</div>
                    <h3>"Authentic Recipes"</h3>
                    <p>"Curated collection of traditional desi dishes"</p>
                </div>
                <div class="feature">
                    <div class="feature-icon">"📊"</div>
                    <h3>"Nutritious"</h3>
                    <p>"Complete nutritional information for every recipe"</p>
                </div>
            </div>
        </div>
    }
}
