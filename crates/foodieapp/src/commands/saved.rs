use crate::model::Recipe;

/// Find a recipe by id, built-in catalog first, then created recipes.
///
/// The lists are not de-duplicated here; the first match wins.
pub fn find<'a>(builtin: &'a [Recipe], created: &'a [Recipe], id: &str) -> Option<&'a Recipe> {
    builtin.iter().chain(created.iter()).find(|r| r.id == id)
}

pub fn contains(saved: &[Recipe], id: &str) -> bool {
    saved.iter().any(|r| r.id == id)
}

/// Append `recipe` unless a recipe with the same id is already saved.
/// Returns whether the list changed.
pub fn add(saved: &mut Vec<Recipe>, recipe: &Recipe) -> bool {
    if contains(saved, &recipe.id) {
        return false;
    }
    saved.push(recipe.clone());
    true
}

/// Remove every entry with `id`. Returns whether the list changed.
pub fn remove(saved: &mut Vec<Recipe>, id: &str) -> bool {
    let before = saved.len();
    saved.retain(|r| r.id != id);
    saved.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ids, recipe};

    #[test]
    fn find_prefers_builtin() {
        let builtin = vec![recipe("1", "Built-in")];
        let created = vec![recipe("1", "Created"), recipe("created-2", "Mine")];

        assert_eq!(find(&builtin, &created, "1").unwrap().title, "Built-in");
        assert_eq!(find(&builtin, &created, "created-2").unwrap().title, "Mine");
        assert!(find(&builtin, &created, "missing").is_none());
    }

    #[test]
    fn add_is_idempotent() {
        let mut saved = Vec::new();
        let toast = recipe("1", "Toast");

        assert!(add(&mut saved, &toast));
        assert!(!add(&mut saved, &toast));
        assert_eq!(ids(&saved), vec!["1"]);
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut saved = Vec::new();
        add(&mut saved, &recipe("2", "B"));
        add(&mut saved, &recipe("1", "A"));
        assert_eq!(ids(&saved), vec!["2", "1"]);
    }

    #[test]
    fn remove_missing_is_a_no_op() {
        let mut saved = vec![recipe("1", "Toast")];
        assert!(!remove(&mut saved, "nope"));
        assert!(remove(&mut saved, "1"));
        assert!(saved.is_empty());
    }
}
