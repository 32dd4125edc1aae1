//! Ingredient catalog for manual entry
//!
//! A static reference list of known ingredient ids, partitioned into the
//! classes the detector was trained on, common ingredients (proteins,
//! dairy, vegetables, grains) and pantry staples. The catalog is a plain
//! value handed to the detection screen at construction so tests can
//! substitute a smaller one.

use crate::selection::IngredientSelection;
use serde::{Deserialize, Serialize};

/// Ingredient id rendered for display: underscores become spaces
pub fn display_name(id: &str) -> String {
    id.replace('_', " ")
}

/// Known ingredient ids, grouped by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientCatalog {
    pub detectable: Vec<String>,
    pub proteins: Vec<String>,
    pub dairy: Vec<String>,
    pub vegetables: Vec<String>,
    pub grains: Vec<String>,
    pub pantry: Vec<String>,
}

impl IngredientCatalog {
    /// The Pakistani kitchen catalog used by the app
    pub fn pakistani_pantry() -> Self {
        fn ids(names: &[&str]) -> Vec<String> {
            names.iter().map(|name| name.to_string()).collect()
        }

        Self {
            detectable: ids(&[
                "tamatar",
                "gajar",
                "gobi",
                "anday",
                "hari_mirch",
                "shimla_mirch",
                "kela",
                "seb",
                "hari_piyaaz",
                "maalta",
                "kheera",
                "palak",
                "baingan",
                "bhindi",
                "arvi",
                "karela",
                "kaddu",
                "tori",
                "methi",
                "saag",
                "narangi",
                "angoor",
                "anar",
                "aam",
                "tarbuz",
            ]),
            proteins: ids(&[
                "chicken", "beef", "mutton", "fish", "keema", "prawns", "machli", "gosht", "murgh",
            ]),
            dairy: ids(&[
                "dahi", "doodh", "paneer", "makhan", "cream", "cheese", "lassi", "malai", "khoya",
            ]),
            vegetables: ids(&[
                "aloo",
                "palak",
                "baingan",
                "piyaaz",
                "adrak",
                "lehsun",
                "matar",
                "sem",
                "lobia",
                "chana",
                "rajma",
                "moong",
                "masoor",
                "urad",
                "channe_ki_daal",
                "moong_ki_daal",
            ]),
            grains: ids(&[
                "chawal",
                "daal",
                "aata",
                "maida",
                "sooji",
                "besan",
                "daliya",
                "oats",
                "quinoa",
                "basmati",
                "brown_rice",
            ]),
            pantry: ids(&[
                "namak",
                "tel",
                "ghee",
                "haldi",
                "laal_mirch",
                "dhania_powder",
                "zeera",
                "garam_masala",
                "kali_mirch",
                "elaichi",
                "laung",
                "dalchini",
                "tej_patta",
                "saunf",
                "rai",
                "methi_dana",
                "ajwain",
                "kalonji",
                "sirka",
                "soya_sauce",
                "tomato_paste",
                "chilli_sauce",
            ]),
        }
    }

    /// All categories flattened, first occurrence wins for ids that appear
    /// in more than one category
    pub fn all(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for id in self
            .detectable
            .iter()
            .chain(self.proteins.iter())
            .chain(self.dairy.iter())
            .chain(self.vegetables.iter())
            .chain(self.grains.iter())
            .chain(self.pantry.iter())
        {
            if !seen.contains(&id.as_str()) {
                seen.push(id);
            }
        }
        seen
    }

    /// The manual-entry candidates for `query`: ids containing the query as
    /// a case-insensitive substring and not already present in either
    /// selection set. An empty query yields the full remaining catalog.
    ///
    /// Pure function of the current query and selection; recomputed on every
    /// keystroke.
    pub fn search(&self, query: &str, selection: &IngredientSelection) -> Vec<String> {
        let needle = query.to_lowercase();
        self.all()
            .into_iter()
            .filter(|id| id.to_lowercase().contains(&needle))
            .filter(|id| !selection.contains(id))
            .map(|id| id.to_string())
            .collect()
    }
}
