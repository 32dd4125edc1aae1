//! Client-side routes
//!
//! Navigation contract:
//! - `/` landing page
//! - `/detect` ingredient detection
//! - `/recipes?ingredients=a,b,c` match results (comma-joined, ids contain
//!   no commas so nothing is escaped)
//! - `/recipe/{id}` single recipe

use fridge_ai_common::split_ingredients_param;

/// One screen of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Detect,
    Recipes { ingredients: Vec<String> },
    RecipeDetail { id: String },
}

impl Route {
    /// Parse a location into a route. Unknown paths fall back to the
    /// landing page.
    pub fn parse(path: &str, query: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/detect" => Route::Detect,
            "/recipes" => Route::Recipes {
                ingredients: ingredients_from_query(query),
            },
            other => match other.strip_prefix("/recipe/") {
                Some(id) if !id.is_empty() => Route::RecipeDetail { id: id.to_string() },
                _ => Route::Home,
            },
        }
    }

    /// The URL pushed onto the browser history for this route
    pub fn to_url(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Detect => "/detect".to_string(),
            Route::Recipes { ingredients } if ingredients.is_empty() => "/recipes".to_string(),
            Route::Recipes { ingredients } => {
                format!("/recipes?ingredients={}", ingredients.join(","))
            }
            Route::RecipeDetail { id } => format!("/recipe/{}", id),
        }
    }
}

fn ingredients_from_query(query: &str) -> Vec<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "ingredients")
        .map(|(_, value)| split_ingredients_param(value))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("", ""), Route::Home);
    }

    #[test]
    fn test_parse_detect() {
        assert_eq!(Route::parse("/detect", ""), Route::Detect);
        assert_eq!(Route::parse("/detect/", ""), Route::Detect);
    }

    #[test]
    fn test_parse_recipes_with_ingredients() {
        let route = Route::parse("/recipes", "?ingredients=tamatar,chicken,aloo");
        assert_eq!(
            route,
            Route::Recipes {
                ingredients: vec![
                    "tamatar".to_string(),
                    "chicken".to_string(),
                    "aloo".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_parse_recipes_without_query() {
        assert_eq!(
            Route::parse("/recipes", ""),
            Route::Recipes { ingredients: Vec::new() }
        );
    }

    #[test]
    fn test_parse_recipes_other_params_ignored() {
        let route = Route::parse("/recipes", "?sort=asc&ingredients=dahi");
        assert_eq!(
            route,
            Route::Recipes { ingredients: vec!["dahi".to_string()] }
        );
    }

    #[test]
    fn test_parse_recipe_detail() {
        assert_eq!(
            Route::parse("/recipe/chicken_karahi", ""),
            Route::RecipeDetail { id: "chicken_karahi".to_string() }
        );
    }

    #[test]
    fn test_parse_unknown_falls_back_to_home() {
        assert_eq!(Route::parse("/nope", ""), Route::Home);
        assert_eq!(Route::parse("/recipe/", ""), Route::Home);
    }

    #[test]
    fn test_url_round_trip() {
        let routes = [
            Route::Home,
            Route::Detect,
            Route::Recipes { ingredients: vec!["tamatar".to_string(), "dahi".to_string()] },
            Route::Recipes { ingredients: Vec::new() },
            Route::RecipeDetail { id: "aloo_palak".to_string() },
        ];
        for route in routes {
            let url = route.to_url();
            let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
            assert_eq!(Route::parse(path, query), route, "url {:?}", url);
        }
    }

    #[test]
    fn test_duplicate_ids_survive_the_url() {
        let route = Route::Recipes {
            ingredients: vec!["tamatar".to_string(), "tamatar".to_string()],
        };
        assert_eq!(route.to_url(), "/recipes?ingredients=tamatar,tamatar");
        let parsed = Route::parse("/recipes", "?ingredients=tamatar,tamatar");
        assert_eq!(parsed, route);
    }
}
