//! Dashboard search and category filtering.

use crate::models::Post;

/// Search box text plus an optional category selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub search: String,
    pub category: Option<String>,
}

impl PostFilter {
    pub fn new(search: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Case-insensitive substring match on title, content or author, and an
    /// exact category match when one is selected.
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(category) = &self.category {
            if post.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        post.title.to_lowercase().contains(&needle)
            || post
                .content
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
            || post.author.to_lowercase().contains(&needle)
    }

    /// The matching posts, in list order.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Sorted, de-duplicated categories present in `posts`.
pub fn categories(posts: &[Post]) -> Vec<String> {
    let mut categories: Vec<String> = posts.iter().filter_map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, author: &str, content: Option<&str>, category: Option<&str>) -> Post {
        Post {
            id,
            title: title.into(),
            author: author.into(),
            content: content.map(Into::into),
            category: category.map(Into::into),
            ..Post::default()
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post(1, "Rust Ownership", "Ada", Some("Borrowing rules"), Some("tech")),
            post(2, "Travel notes", "Grace", None, Some("travel")),
            post(3, "Cooking", "ADA L.", Some("Pasta and RUST-coloured sauce"), Some("food")),
        ]
    }

    fn ids(posts: &[&Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let posts = sample();
        assert_eq!(ids(&PostFilter::default().apply(&posts)), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let posts = sample();
        assert_eq!(ids(&PostFilter::new("rust", None).apply(&posts)), vec![1, 3]);
        assert_eq!(ids(&PostFilter::new("ada", None).apply(&posts)), vec![1, 3]);
        assert_eq!(ids(&PostFilter::new("NOTES", None).apply(&posts)), vec![2]);
        assert!(PostFilter::new("zzz", None).apply(&posts).is_empty());
    }

    #[test]
    fn test_missing_content_does_not_match_or_panic() {
        let posts = sample();
        assert!(PostFilter::new("borrowing", None).apply(&posts[1..2]).is_empty());
    }

    #[test]
    fn test_category_is_exact() {
        let posts = sample();
        assert_eq!(ids(&PostFilter::new("", Some("tech".into())).apply(&posts)), vec![1]);
        assert!(PostFilter::new("", Some("Tech".into())).apply(&posts).is_empty());
        assert_eq!(ids(&PostFilter::new("ada", Some("food".into())).apply(&posts)), vec![3]);
    }

    #[test]
    fn test_categories_sorted_and_unique() {
        let mut posts = sample();
        posts.push(post(4, "More tech", "Ada", None, Some("tech")));
        posts.push(post(5, "Uncategorised", "Ada", None, None));
        assert_eq!(categories(&posts), vec!["food", "tech", "travel"]);
    }
}
