use crate::model::Recipe;
use std::collections::HashSet;

/// Merge created and built-in recipes into the searchable universe.
///
/// Created recipes whose id collides with a built-in id are dropped, so the
/// built-in entry always wins. Created recipes come first, in their stored
/// (newest-first) order, followed by the built-in catalog.
pub fn merge(builtin: &[Recipe], created: &[Recipe]) -> Vec<Recipe> {
    let builtin_ids: HashSet<&str> = builtin.iter().map(|r| r.id.as_str()).collect();

    created
        .iter()
        .filter(|r| !builtin_ids.contains(r.id.as_str()))
        .chain(builtin.iter())
        .cloned()
        .collect()
}
