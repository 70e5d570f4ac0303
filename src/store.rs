//! In-memory recipe store: most-recent-first ordering plus substring search.

use crate::seed;
use crate::types::Recipe;

/// Ordered collection of recipe records, newest first.
///
/// Records are only ever inserted fully assembled (the workflow's commit step)
/// and never mutated, so readers never see partial state.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the static sample recipes.
    pub fn with_sample_recipes() -> Self {
        Self {
            recipes: seed::sample_recipes(),
        }
    }

    /// Insert a record at the front. The caller guarantees a well-formed
    /// record; no validation happens here.
    pub fn prepend(&mut self, recipe: Recipe) {
        self.recipes.insert(0, recipe);
    }

    /// All records in store order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Case-insensitive substring search against title, any ingredient, or
    /// any tag. Preserves store order; an empty query matches everything.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Recipe> + 'a {
        let needle = query.to_lowercase();
        self.recipes
            .iter()
            .filter(move |recipe| Self::matches(recipe, &needle))
    }

    fn matches(recipe: &Recipe, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        recipe.title.to_lowercase().contains(needle)
            || recipe
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(needle))
            || recipe.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, RecipeContent};

    fn recipe(title: &str, ingredients: &[&str], tags: &[&str]) -> Recipe {
        Recipe::assemble(
            RecipeContent {
                title: title.to_string(),
                description: "test".to_string(),
                ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
                instructions: vec!["Cook it.".to_string()],
                cooking_time: "10 mins".to_string(),
                difficulty: Difficulty::Easy,
                chef_notes: "none".to_string(),
                tags: tags.iter().map(|s| s.to_string()).collect(),
            },
            "https://example.com/img.png".to_string(),
        )
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut store = RecipeStore::new();
        store.prepend(recipe("First", &[], &[]));
        store.prepend(recipe("Second", &[], &[]));

        let titles: Vec<_> = store.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn empty_query_matches_everything_in_store_order() {
        let store = RecipeStore::with_sample_recipes();
        let all: Vec<_> = store.search("").collect();
        assert_eq!(all.len(), store.len());
        assert_eq!(all[0].title, store.recipes()[0].title);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let store = RecipeStore::with_sample_recipes();
        let hits: Vec<_> = store.search("scallops").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Pan-Seared Scallops with Lemon Butter");

        let hits: Vec<_> = store.search("SCALLOPS").collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn search_matches_tags() {
        let store = RecipeStore::with_sample_recipes();
        let hits: Vec<_> = store.search("Italian").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Rustic Truffle Mushroom Risotto");
    }

    #[test]
    fn search_matches_ingredient_buried_in_one_record() {
        let mut store = RecipeStore::new();
        store.prepend(recipe("A", &["2 cups flour"], &[]));
        store.prepend(recipe("B", &["1 tsp saffron", "salt"], &[]));

        let hits: Vec<_> = store.search("saffron").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "B");
    }

    #[test]
    fn search_preserves_store_order() {
        let mut store = RecipeStore::new();
        store.prepend(recipe("Older Soup", &[], &["soup"]));
        store.prepend(recipe("Newer Soup", &[], &["soup"]));

        let titles: Vec<_> = store.search("soup").map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer Soup", "Older Soup"]);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let store = RecipeStore::with_sample_recipes();
        assert_eq!(store.search("zzzzz").count(), 0);
    }
}
