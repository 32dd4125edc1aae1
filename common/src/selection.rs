//! Ingredient selection state machine
//!
//! Tracks the union of image-detected and manually-added ingredient ids for
//! the current session. The detected set is populated wholesale by one
//! detection response; the manual set is user-driven and has an independent
//! lifecycle. The combined list handed to the recipe service is the plain
//! concatenation of the two and is deliberately NOT deduplicated across
//! them.
//!
//! Detection responses are applied through a generation token so that a
//! stale in-flight response can never overwrite state that a newer image or
//! a newer request has since invalidated.

/// Session-local ingredient selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSelection {
    detected: Vec<String>,
    manual: Vec<String>,
    generation: u64,
}

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingredients taken from the last applied detection response
    pub fn detected(&self) -> &[String] {
        &self.detected
    }

    /// Ingredients the user added by hand
    pub fn manual(&self) -> &[String] {
        &self.manual
    }

    /// A new image invalidates any prior detection result: the detected set
    /// is cleared unconditionally and in-flight responses become stale. The
    /// manual set is untouched.
    pub fn select_image(&mut self) {
        self.detected.clear();
        self.generation += 1;
    }

    /// Issue a token for a detection request about to be sent. A later
    /// request supersedes an earlier one.
    pub fn begin_detection(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether `token` still belongs to the live detection generation
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    /// Replace the detected set with the response behind `token`, lower-
    /// casing the names. Zero names is a valid application. Returns false
    /// and leaves state untouched when the token is stale.
    pub fn apply_detection<I>(&mut self, token: u64, names: I) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        if !self.is_current(token) {
            return false;
        }
        self.detected = names.into_iter().map(|name| name.to_lowercase()).collect();
        true
    }

    /// Insert into the manual set unless already there. Presence in the
    /// detected set is deliberately not checked: the same id may live in
    /// both sets.
    pub fn add_manual(&mut self, id: &str) -> bool {
        if self.manual.iter().any(|existing| existing == id) {
            return false;
        }
        self.manual.push(id.to_string());
        true
    }

    /// Remove every occurrence of `id` from the detected set; no-op if absent
    pub fn remove_detected(&mut self, id: &str) {
        self.detected.retain(|existing| existing != id);
    }

    /// Remove `id` from the manual set; no-op if absent
    pub fn remove_manual(&mut self, id: &str) {
        self.manual.retain(|existing| existing != id);
    }

    /// True when `id` is present in either set
    pub fn contains(&self, id: &str) -> bool {
        self.detected.iter().any(|existing| existing == id)
            || self.manual.iter().any(|existing| existing == id)
    }

    /// Detected then manual, order preserved, duplicates across the sets
    /// kept as-is
    pub fn combined(&self) -> Vec<String> {
        let mut all = self.detected.clone();
        all.extend(self.manual.iter().cloned());
        all
    }

    pub fn is_empty(&self) -> bool {
        self.detected.is_empty() && self.manual.is_empty()
    }

    pub fn total(&self) -> usize {
        self.detected.len() + self.manual.len()
    }

    /// Comma-joined combined list for the `/recipes?ingredients=` parameter
    pub fn ingredients_param(&self) -> String {
        self.combined().join(",")
    }
}

/// Parse a comma-joined ingredients parameter back into a list. Identifiers
/// contain no commas, so no unescaping is needed.
pub fn split_ingredients_param(param: &str) -> Vec<String> {
    param
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_add_remove_sequences() {
        let mut selection = IngredientSelection::new();
        assert!(selection.add_manual("chicken"));
        assert!(selection.add_manual("aloo"));
        assert!(selection.add_manual("dahi"));
        selection.remove_manual("aloo");
        assert_eq!(selection.manual(), &["chicken", "dahi"]);
    }

    #[test]
    fn test_manual_add_is_idempotent() {
        let mut selection = IngredientSelection::new();
        assert!(selection.add_manual("chicken"));
        assert!(!selection.add_manual("chicken"));
        assert_eq!(selection.manual().len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut selection = IngredientSelection::new();
        selection.add_manual("chicken");
        selection.remove_manual("tamatar");
        selection.remove_detected("tamatar");
        assert_eq!(selection.manual(), &["chicken"]);
    }

    #[test]
    fn test_apply_detection_lowercases_names() {
        let mut selection = IngredientSelection::new();
        let token = selection.begin_detection();
        assert!(selection.apply_detection(token, vec!["Tamatar".to_string()]));
        assert_eq!(selection.detected(), &["tamatar"]);
    }

    #[test]
    fn test_select_image_always_clears_detected() {
        let mut selection = IngredientSelection::new();
        let token = selection.begin_detection();
        selection.apply_detection(token, vec!["tamatar".to_string(), "gajar".to_string()]);
        selection.add_manual("chicken");

        selection.select_image();
        assert!(selection.detected().is_empty());
        assert_eq!(selection.manual(), &["chicken"]);

        // Also from an already-empty state
        selection.select_image();
        assert!(selection.detected().is_empty());
    }

    #[test]
    fn test_stale_detection_is_discarded() {
        let mut selection = IngredientSelection::new();
        let first = selection.begin_detection();
        let second = selection.begin_detection();

        // The older request resolves last and must not win.
        assert!(selection.apply_detection(second, vec!["gajar".to_string()]));
        assert!(!selection.apply_detection(first, vec!["tamatar".to_string()]));
        assert_eq!(selection.detected(), &["gajar"]);
    }

    #[test]
    fn test_new_image_invalidates_in_flight_detection() {
        let mut selection = IngredientSelection::new();
        let token = selection.begin_detection();
        selection.select_image();
        assert!(!selection.is_current(token));
        assert!(!selection.apply_detection(token, vec!["tamatar".to_string()]));
        assert!(selection.detected().is_empty());
    }

    #[test]
    fn test_zero_detections_is_a_valid_application() {
        let mut selection = IngredientSelection::new();
        let token = selection.begin_detection();
        selection.apply_detection(token, vec!["tamatar".to_string()]);

        let token = selection.begin_detection();
        assert!(selection.apply_detection(token, Vec::new()));
        assert!(selection.detected().is_empty());
    }

    #[test]
    fn test_duplicate_across_sets_is_preserved() {
        let mut selection = IngredientSelection::new();
        let token = selection.begin_detection();
        selection.apply_detection(token, vec!["tamatar".to_string()]);
        selection.add_manual("tamatar");

        assert_eq!(selection.combined(), &["tamatar", "tamatar"]);
        assert_eq!(selection.total(), 2);
    }

    #[test]
    fn test_remove_detected_by_value() {
        let mut selection = IngredientSelection::new();
        let token = selection.begin_detection();
        selection.apply_detection(
            token,
            vec![
                "tamatar".to_string(),
                "gajar".to_string(),
                "tamatar".to_string(),
            ],
        );
        selection.remove_detected("tamatar");
        assert_eq!(selection.detected(), &["gajar"]);
    }

    #[test]
    fn test_empty_selection() {
        let selection = IngredientSelection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.total(), 0);
        assert!(selection.combined().is_empty());
        assert_eq!(selection.ingredients_param(), "");
    }

    #[test]
    fn test_contains_checks_both_sets() {
        let mut selection = IngredientSelection::new();
        let token = selection.begin_detection();
        selection.apply_detection(token, vec!["tamatar".to_string()]);
        selection.add_manual("chicken");

        assert!(selection.contains("tamatar"));
        assert!(selection.contains("chicken"));
        assert!(!selection.contains("gajar"));
    }

    #[test]
    fn test_ingredients_param_round_trip() {
        let mut selection = IngredientSelection::new();
        let token = selection.begin_detection();
        selection.apply_detection(token, vec!["tamatar".to_string()]);
        selection.add_manual("chicken");
        selection.add_manual("aloo");

        let param = selection.ingredients_param();
        assert_eq!(param, "tamatar,chicken,aloo");
        assert_eq!(
            split_ingredients_param(&param),
            vec!["tamatar", "chicken", "aloo"]
        );
    }

    #[test]
    fn test_split_ingredients_param_empty() {
        assert!(split_ingredients_param("").is_empty());
        assert!(split_ingredients_param(",,").is_empty());
    }
}
