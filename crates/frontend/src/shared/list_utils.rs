/// List helpers shared by table views (client-side search)

/// Types whose rows can be matched against a free-text query
pub trait Searchable {
    /// Whether the row matches an already lower-cased, non-empty query
    fn matches_filter(&self, query_lower: &str) -> bool;
}

/// Case-insensitive substring match
pub fn contains_ignore_case(haystack: &str, query_lower: &str) -> bool {
    haystack.to_lowercase().contains(query_lower)
}

/// Rows matching the query, in their original order.
///
/// A blank query returns every row.
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, query_lower: &str) -> bool {
            contains_ignore_case(self.0, query_lower)
        }
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let rows = vec![Row("Ana"), Row("Luis")];
        assert_eq!(filter_list(&rows, ""), rows);
        assert_eq!(filter_list(&rows, "   "), rows);
    }

    #[test]
    fn test_filter_preserves_order_and_ignores_case() {
        let rows = vec![Row("Mariana"), Row("Luis"), Row("ANA")];
        assert_eq!(filter_list(&rows, "Ana"), vec![Row("Mariana"), Row("ANA")]);
    }
}
