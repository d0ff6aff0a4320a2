//! Pure derivation of the visible page from a fetched list.
//!
//! The view is recomputed from `(items, query)` on every read; nothing here
//! holds state between calls.

use std::cmp::Ordering;

/// Search, sort and page selection for one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery<S> {
    /// Case-insensitive substring filter. Blank matches everything.
    pub search: String,
    pub sort: S,
    /// 1-based page number.
    pub page: usize,
}

impl<S: Default> Default for ViewQuery<S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: S::default(),
            page: 1,
        }
    }
}

/// One page of a filtered, sorted list.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPage<T> {
    pub items: Vec<T>,
    /// The page actually shown, after clamping.
    pub page: usize,
    /// Always at least 1, even when nothing matches.
    pub total_pages: usize,
    /// Number of items that passed the filter, across all pages.
    pub total_matches: usize,
}

/// Filter, sort and paginate `items`.
///
/// `matches` receives each item and the lower-cased, trimmed search term; it
/// is not called when the term is blank. Sorting is stable, so items that
/// compare equal keep their fetched order. The requested page is clamped to
/// `[1, total_pages]`.
pub fn derive_view<T, M, C>(
    items: &[T],
    search: &str,
    page: usize,
    page_size: usize,
    matches: M,
    compare: C,
) -> ViewPage<T>
where
    T: Clone,
    M: Fn(&T, &str) -> bool,
    C: Fn(&T, &T) -> Ordering,
{
    let needle = search.trim().to_lowercase();
    let mut filtered: Vec<T> = if needle.is_empty() {
        items.to_vec()
    } else {
        items
            .iter()
            .filter(|item| matches(item, &needle))
            .cloned()
            .collect()
    };
    filtered.sort_by(|a, b| compare(a, b));

    let page_size = page_size.max(1);
    let total_matches = filtered.len();
    let total_pages = total_matches.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    ViewPage {
        items,
        page,
        total_pages,
        total_matches,
    }
}

/// Whether any of `fields` contains `needle` (already lower-cased).
pub fn any_field_contains<'a>(fields: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive text ordering with a case-sensitive tie-break, so the
/// result is total and deterministic.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
