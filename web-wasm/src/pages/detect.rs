//! Ingredient detection screen
//!
//! Owns the ingredient selection state machine: image intake, detection
//! ingestion, manual edits, and the recipe query dispatch. The catalog is
//! passed in at construction rather than read from a global.

use crate::api::backend;
use crate::components::ingredient_chips::IngredientChips;
use crate::components::upload_area::UploadArea;
use crate::route::Route;
use fridge_ai_common::{display_name, IngredientCatalog, IngredientSelection, Retrieval};
use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// The photo picked for detection
#[derive(Clone, PartialEq)]
struct SelectedImage {
    file_name: String,
    data_url: String,
}

#[component]
pub fn DetectPage<F>(catalog: IngredientCatalog, on_navigate: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Clone + Send,
{
    let (image, set_image) = signal(None::<SelectedImage>);
    let selection = RwSignal::new(IngredientSelection::new());
    let (is_detecting, set_is_detecting) = signal(false);
    let (show_selector, set_show_selector) = signal(false);
    let (search_query, set_search_query) = signal(String::new());
    let (notice, set_notice) = signal(None::<String>);

    let detected = Signal::derive(move || selection.with(|s| s.detected().to_vec()));
    let manual = Signal::derive(move || selection.with(|s| s.manual().to_vec()));
    let total = move || selection.with(|s| s.total());
    let filtered = {
        let catalog = catalog.clone();
        Signal::derive(move || {
            search_query.with(|query| selection.with(|s| catalog.search(query, s)))
        })
    };

    let on_image_selected = move |file_name: String, data_url: String| {
        set_image.set(Some(SelectedImage { file_name, data_url }));
        // A new image invalidates any previous or in-flight detection; the
        // superseded request no longer owns the spinner.
        selection.update(|s| s.select_image());
        set_is_detecting.set(false);
        set_notice.set(None);
    };

    let on_remove_image = move |_| {
        set_image.set(None);
        selection.update(|s| s.select_image());
        set_is_detecting.set(false);
    };

    let on_detect = move |_| {
        let Some(img) = image.get_untracked() else {
            return;
        };
        let token = selection
            .try_update(|s| s.begin_detection())
            .unwrap_or_default();
        set_is_detecting.set(true);
        set_notice.set(None);

        spawn_local(async move {
            let outcome = backend::detect_ingredients(&img.file_name, &img.data_url).await;
            match &outcome {
                Retrieval::Success(names) => {
                    console::log!(format!("detected {} item(s)", names.len()));
                }
                Retrieval::Failed(err) => {
                    console::log!(format!("detection failed: {}", err));
                }
                Retrieval::Empty => {}
            }
            finish_detection(selection, set_is_detecting, set_notice, token, outcome);
        });
    };

    let on_add_manual = move |id: String| {
        selection.update(|s| {
            s.add_manual(&id);
        });
        set_search_query.set(String::new());
    };

    let on_remove_detected = move |id: String| {
        selection.update(|s| s.remove_detected(&id));
    };

    let on_remove_manual = move |id: String| {
        selection.update(|s| s.remove_manual(&id));
    };

    let on_find_recipes = {
        let on_navigate = on_navigate.clone();
        move |_| {
            let combined = selection.with_untracked(|s| s.combined());
            if combined.is_empty() {
                set_notice.set(Some(
                    "Please detect or add some ingredients first!".to_string(),
                ));
                return;
            }
            console::log!(format!("finding recipes for: {}", combined.join(",")));
            on_navigate(Route::Recipes { ingredients: combined });
        }
    };

    view! {
        <div class="page detect-page">
            <header class="page-head">
                <h1>"Ingredient Detection"</h1>
                <p class="text-muted">"Upload an image or manually select your ingredients"</p>
            </header>

            <Show when=move || notice.get().is_some()>
                <div class="notice">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <section class="card">
                <h2>"📸 Step 1: Upload Image (Optional)"</h2>
                <Show
                    when=move || image.get().is_some()
                    fallback=move || view! { <UploadArea on_image_selected=on_image_selected /> }
                >
                    <div class="image-preview">
                        <img
                            src=move || image.get().map(|img| img.data_url).unwrap_or_default()
                            alt="Selected food"
                        />
                        <button class="btn btn-remove" on:click=on_remove_image>"×"</button>
                    </div>
                    <button
                        class="btn btn-primary btn-detect"
                        disabled=move || is_detecting.get()
                        on:click=on_detect
                    >
                        {move || if is_detecting.get() {
                            "Detecting..."
                        } else {
                            "Detect Ingredients"
                        }}
                    </button>
                </Show>
            </section>

            <Show when=move || !detected.get().is_empty()>
                <section class="card">
                    <h2>
                        <span class="count-badge badge-detected">
                            {move || detected.get().len()}
                        </span>
                        " Detected from Image"
                    </h2>
                    <IngredientChips items=detected tone="detected" on_remove=on_remove_detected />
                </section>
            </Show>

            <section class="card">
                <div class="section-head">
                    <h2>"✋ Step 2: Add Manually"</h2>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| set_show_selector.update(|shown| *shown = !*shown)
                    >
                        "+ Add Ingredient"
                    </button>
                </div>

                <Show when=move || !manual.get().is_empty()>
                    <span class="count-badge badge-manual">{move || manual.get().len()}</span>
                    <span class="text-muted">" Manually Added"</span>
                    <IngredientChips items=manual tone="manual" on_remove=on_remove_manual />
                </Show>

                <Show when=move || show_selector.get()>
                    <div class="ingredient-selector">
                        <input
                            type="text"
                            class="ingredient-search"
                            placeholder="Search ingredients..."
                            prop:value=move || search_query.get()
                            on:input=move |ev| set_search_query.set(event_target_value(&ev))
                        />
                        <div class="ingredient-grid">
                            <For
                                each=move || filtered.get()
                                key=|id| id.clone()
                                children=move |id: String| {
                                    let label = display_name(&id);
                                    view! {
                                        <button
                                            class="ingredient-option"
                                            on:click={
                                                let id = id.clone();
                                                move |_| on_add_manual(id.clone())
                                            }
                                        >
                                            {label}
                                        </button>
                                    }
                                }
                            />
                        </div>
                        <Show when=move || filtered.get().is_empty()>
                            <p class="text-muted">"No ingredients found"</p>
                        </Show>
                    </div>
                </Show>
            </section>

            <section class="card submit-card">
                <p>
                    "Total ingredients selected: "
                    <strong>{total}</strong>
                </p>
                <button
                    class="btn btn-find"
                    disabled=move || total() == 0
                    on:click=on_find_recipes
                >
                    {move || format!("🔍 Find Recipes ({} ingredients)", total())}
                </button>
            </section>
        </div>
    }
}

/// Fold a resolved detection outcome into the page state.
///
/// The token guards every write: a response superseded by a newer image or
/// request changes nothing, including the spinner and the notice. All
/// accesses go through the fallible signal methods so a response arriving
/// after the user navigated off the page is a no-op instead of a panic.
fn finish_detection(
    selection: RwSignal<IngredientSelection>,
    set_is_detecting: WriteSignal<bool>,
    set_notice: WriteSignal<Option<String>>,
    token: u64,
    outcome: Retrieval<Vec<String>>,
) {
    match outcome {
        Retrieval::Success(names) => {
            selection.try_update(|s| {
                s.apply_detection(token, names);
            });
        }
        Retrieval::Empty => {
            let applied = selection
                .try_update(|s| s.apply_detection(token, Vec::new()))
                .unwrap_or(false);
            if applied {
                set_notice.try_set(Some(
                    "No ingredients detected in the image. Try adding them manually \
                     or upload a clearer image."
                        .to_string(),
                ));
            }
        }
        Retrieval::Failed(_) => {
            // Prior detected set stays untouched; stale failures say nothing.
            let live = selection
                .try_with_untracked(|s| s.is_current(token))
                .unwrap_or(false);
            if live {
                set_notice.try_set(Some(
                    "Failed to detect ingredients. Please try again or add \
                     ingredients manually."
                        .to_string(),
                ));
            }
        }
    }

    let live = selection
        .try_with_untracked(|s| s.is_current(token))
        .unwrap_or(false);
    if live {
        set_is_detecting.try_set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fridge_ai_common::ApiError;

    struct PageState {
        selection: RwSignal<IngredientSelection>,
        is_detecting: ReadSignal<bool>,
        set_is_detecting: WriteSignal<bool>,
        notice: ReadSignal<Option<String>>,
        set_notice: WriteSignal<Option<String>>,
    }

    fn page_state() -> PageState {
        let selection = RwSignal::new(IngredientSelection::new());
        let (is_detecting, set_is_detecting) = signal(true);
        let (notice, set_notice) = signal(None::<String>);
        PageState {
            selection,
            is_detecting,
            set_is_detecting,
            notice,
            set_notice,
        }
    }

    #[test]
    fn test_live_resolution_applies_and_clears_spinner() {
        let owner = Owner::new();
        let state = owner.with(page_state);
        let token = state
            .selection
            .try_update(|s| s.begin_detection())
            .expect("live signal");

        finish_detection(
            state.selection,
            state.set_is_detecting,
            state.set_notice,
            token,
            Retrieval::Success(vec!["Tamatar".to_string()]),
        );

        assert_eq!(
            state.selection.with_untracked(|s| s.detected().to_vec()),
            ["tamatar"]
        );
        assert!(!state.is_detecting.get_untracked());
        assert_eq!(state.notice.get_untracked(), None);
    }

    #[test]
    fn test_superseded_resolution_changes_nothing() {
        let owner = Owner::new();
        let state = owner.with(page_state);
        let token = state
            .selection
            .try_update(|s| s.begin_detection())
            .expect("live signal");
        // A new image arrives while the request is in flight.
        state.selection.update(|s| s.select_image());

        finish_detection(
            state.selection,
            state.set_is_detecting,
            state.set_notice,
            token,
            Retrieval::Success(vec!["tamatar".to_string()]),
        );
        assert!(state.selection.with_untracked(|s| s.detected().is_empty()));
        // The spinner now belongs to the superseding interaction, not this
        // resolution; the image handlers reset it themselves.
        assert!(state.is_detecting.get_untracked());

        finish_detection(
            state.selection,
            state.set_is_detecting,
            state.set_notice,
            token,
            Retrieval::Failed(ApiError::Status(500)),
        );
        assert_eq!(state.notice.get_untracked(), None);
    }

    #[test]
    fn test_empty_resolution_notices_only_when_applied() {
        let owner = Owner::new();
        let state = owner.with(page_state);

        let stale = state
            .selection
            .try_update(|s| s.begin_detection())
            .expect("live signal");
        let live = state
            .selection
            .try_update(|s| s.begin_detection())
            .expect("live signal");

        finish_detection(
            state.selection,
            state.set_is_detecting,
            state.set_notice,
            stale,
            Retrieval::Empty,
        );
        assert_eq!(state.notice.get_untracked(), None);

        finish_detection(
            state.selection,
            state.set_is_detecting,
            state.set_notice,
            live,
            Retrieval::Empty,
        );
        assert!(state.notice.get_untracked().is_some());
        assert!(!state.is_detecting.get_untracked());
    }

    #[test]
    fn test_resolution_after_page_disposal_is_a_noop() {
        let owner = Owner::new();
        let state = owner.with(page_state);
        let token = state
            .selection
            .try_update(|s| s.begin_detection())
            .expect("live signal");

        // Navigating away drops the page and its signals.
        owner.cleanup();

        // Every outcome must land without panicking on the dead signals.
        finish_detection(
            state.selection,
            state.set_is_detecting,
            state.set_notice,
            token,
            Retrieval::Success(vec!["tamatar".to_string()]),
        );
        finish_detection(
            state.selection,
            state.set_is_detecting,
            state.set_notice,
            token,
            Retrieval::Failed(ApiError::Network("timeout".to_string())),
        );
        finish_detection(
            state.selection,
            state.set_is_detecting,
            state.set_notice,
            token,
            Retrieval::Empty,
        );
    }
}
