//! Detection and recipe service calls
//!
//! Every failure is converted to an `ApiError` here; the pages decide how
//! to message the user. The list-returning calls come back as a tagged
//! `Retrieval` so a confirmed-empty result never masquerades as an error.

use base64::Engine as _;
use fridge_ai_common::{
    ApiError, DetectionResponse, Recipe, RecipeMatch, RecipeMatchRequest, RecipeMatchResponse,
    Retrieval,
};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Service base URL, fixed at build time via `FRIDGE_API_URL`
pub fn api_base() -> &'static str {
    option_env!("FRIDGE_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// POST the selected image to `/api/detect` as a multipart file field.
///
/// Returns the lower-cased names of the detected items; zero items is a
/// confirmed-empty outcome, not a failure.
pub async fn detect_ingredients(file_name: &str, data_url: &str) -> Retrieval<Vec<String>> {
    match detect_request(file_name, data_url).await {
        Ok(names) if names.is_empty() => Retrieval::Empty,
        Ok(names) => Retrieval::Success(names),
        Err(err) => Retrieval::Failed(err),
    }
}

/// POST the combined selection to `/api/recipes/match`, order preserved,
/// duplicates untouched.
pub async fn match_recipes(ingredients: &[String]) -> Retrieval<Vec<RecipeMatch>> {
    match match_request(ingredients).await {
        Ok(matches) if matches.is_empty() => Retrieval::Empty,
        Ok(matches) => Retrieval::Success(matches),
        Err(err) => Retrieval::Failed(err),
    }
}

/// GET `/api/recipes/{id}`
pub async fn fetch_recipe(id: &str) -> Result<Recipe, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/recipes/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

    let json = send(request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn detect_request(file_name: &str, data_url: &str) -> Result<Vec<String>, ApiError> {
    let blob = blob_from_data_url(data_url)?;
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &blob, file_name)
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    // Content-Type is left to the browser so the multipart boundary is set.
    let url = format!("{}/api/detect", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

    let json = send(request).await?;
    let response: DetectionResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(response
        .detected_items
        .into_iter()
        .map(|item| item.name.to_lowercase())
        .collect())
}

async fn match_request(ingredients: &[String]) -> Result<Vec<RecipeMatch>, ApiError> {
    let payload = RecipeMatchRequest {
        ingredients: ingredients.to_vec(),
    };
    let body = serde_json::to_string(&payload).map_err(|e| ApiError::Decode(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{}/api/recipes/match", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let json = send(request).await?;
    let response: RecipeMatchResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(response.recipes)
}

/// Run a fetch and return the parsed JSON body, mapping non-2xx statuses
/// and transport failures to `ApiError`
async fn send(request: Request) -> Result<JsValue, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    let json_promise = resp.json().map_err(js_error)?;
    JsFuture::from(json_promise).await.map_err(js_error)
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Split a data URL into its MIME type and decoded bytes
pub(crate) fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), ApiError> {
    let mime = data_url
        .split(':')
        .nth(1)
        .and_then(|rest| rest.split(';').next())
        .unwrap_or("image/jpeg")
        .to_string();
    let encoded = data_url
        .split(',')
        .nth(1)
        .ok_or_else(|| ApiError::Decode("not a data URL".to_string()))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok((mime, bytes))
}

fn blob_from_data_url(data_url: &str) -> Result<Blob, ApiError> {
    let (mime, bytes) = decode_data_url(data_url)?;
    let parts = Array::of1(&Uint8Array::from(bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&mime);
    Blob::new_with_u8_array_sequence_and_options(parts.as_ref(), &options)
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))
}
