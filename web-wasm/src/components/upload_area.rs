//! Image upload area

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

/// Click-or-drop intake for a single food photo.
///
/// The file is read into a data URL and handed to the parent as
/// `(file_name, data_url)`; nothing leaves the browser until the user asks
/// for detection.
#[component]
pub fn UploadArea<F>(on_image_selected: F) -> impl IntoView
where
    F: Fn(String, String) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_image_selected = on_image_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                read_file(file, on_image_selected.clone());
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_image_selected = on_image_selected.clone();
        move |_| {
            // Open the file picker
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let on_image_selected = on_image_selected.clone();
            let input_for_change = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = input_for_change.files().and_then(|files| files.get(0)) {
                    read_file(file, on_image_selected.clone());
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <label
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p><strong>"Click to upload"</strong>" or drag and drop"</p>
            <p class="text-muted">"PNG, JPG up to 10MB"</p>
        </label>
    }
}

fn read_file<F>(file: File, on_image_selected: F)
where
    F: Fn(String, String) + 'static,
{
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_image_selected(file_name.clone(), data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
