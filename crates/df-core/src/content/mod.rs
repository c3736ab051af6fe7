//! Static site content and its client-side filtering
//!
//! The FAQ, news and landing data are bundled with the app. Filtering is a
//! case-insensitive substring match on text and tags, intersected with exact
//! category (and, for news, type) equality.

pub mod faq;
pub mod landing;
pub mod news;

pub use faq::{Faq, FaqExpansion, FaqQuery};
pub use landing::{Feature, Stat, StatRotator};
pub use news::{NewsArticle, NewsQuery};

/// Filter id that matches every category or type
pub const ALL: &str = "all";

/// A filter chip: id used for matching, name shown on the button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub(crate) fn filter_matches(selected: &str, value: &str) -> bool {
    selected == ALL || selected == value
}

/// Case-insensitive substring search over text fields and tags.
/// An empty term matches everything.
pub(crate) fn term_matches(term: &str, fields: &[&str], tags: &[&str]) -> bool {
    let needle = term.to_lowercase();
    fields
        .iter()
        .chain(tags.iter())
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_matches() {
        assert!(term_matches("", &["anything"], &[]));
        assert!(term_matches("HEAT", &["no"], &["heatmap"]));
        assert!(!term_matches("zebra", &["no"], &["heatmap"]));
    }

    #[test]
    fn test_filter_matches() {
        assert!(filter_matches(ALL, "tech"));
        assert!(filter_matches("tech", "tech"));
        assert!(!filter_matches("tech", "global"));
    }
}
