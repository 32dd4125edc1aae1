//! Removable ingredient chip list

use fridge_ai_common::display_name;
use leptos::prelude::*;

/// Chips for one selection set with a remove button per entry.
///
/// Keys are positional: the detected set may legitimately hold the same id
/// more than once (two tomatoes in one photo).
#[component]
pub fn IngredientChips<F>(
    items: Signal<Vec<String>>,
    tone: &'static str,
    on_remove: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let entries = move || items.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="chip-list">
            <For
                each=entries
                key=|(index, id)| (*index, id.clone())
                children=move |(_, id): (usize, String)| {
                    let on_remove = on_remove.clone();
                    let label = display_name(&id);
                    view! {
                        <span class=format!("chip chip-{}", tone)>
                            {label}
                            <button
                                class="chip-remove"
                                on:click={
                                    let id = id.clone();
                                    move |_| on_remove(id.clone())
                                }
                            >
                                "×"
                            </button>
                        </span>
                    }
                }
            />
        </div>
    }
}
