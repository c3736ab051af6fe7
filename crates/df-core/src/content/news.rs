//! News page articles

use super::{filter_matches, term_matches, Category, ALL};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsArticle {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub kind: &'static str,
    pub date: NaiveDate,
    pub read_time: &'static str,
    pub featured: bool,
    pub tags: &'static [&'static str],
}

pub const CATEGORIES: [Category; 5] = [
    Category { id: ALL, name: "All News" },
    Category { id: "tech", name: "Tech Updates" },
    Category { id: "global", name: "Global News" },
    Category { id: "research", name: "Research Papers" },
    Category { id: "security", name: "Security Alerts" },
];

pub const TYPES: [Category; 5] = [
    Category { id: ALL, name: "All Types" },
    Category { id: "breaking", name: "Breaking News" },
    Category { id: "analysis", name: "Analysis" },
    Category { id: "tutorial", name: "Tutorial" },
    Category { id: "case-study", name: "Case Study" },
];

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The bundled articles, newest first
pub fn articles() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: 1,
            title: "Major Deepfake Scam Caught by AI Detector – $2M Prevented",
            excerpt: "Our platform successfully identified a sophisticated deepfake video used in a corporate fraud attempt, preventing a $2 million loss.",
            category: "global",
            kind: "breaking",
            date: day(2025, 1, 15),
            read_time: "3 min read",
            featured: true,
            tags: &["Fraud Prevention", "Corporate Security", "AI Detection"],
        },
        NewsArticle {
            id: 2,
            title: "New Model Update v2.1: 10% Boost in Accuracy",
            excerpt: "Latest update to our detection algorithms shows significant improvements in identifying subtle manipulation techniques.",
            category: "tech",
            kind: "analysis",
            date: day(2025, 1, 12),
            read_time: "5 min read",
            featured: false,
            tags: &["Model Update", "Accuracy", "AI Research"],
        },
        NewsArticle {
            id: 3,
            title: "Exploring Legal Implications of Deepfake Content",
            excerpt: "Comprehensive analysis of current legal frameworks and proposed regulations for AI-generated content.",
            category: "research",
            kind: "analysis",
            date: day(2025, 1, 10),
            read_time: "8 min read",
            featured: false,
            tags: &["Legal Analysis", "Regulation", "AI Ethics"],
        },
        NewsArticle {
            id: 4,
            title: "How to Spot Deepfakes: A Complete Guide",
            excerpt: "Learn the telltale signs of manipulated content and how to protect yourself from misinformation.",
            category: "tech",
            kind: "tutorial",
            date: day(2025, 1, 8),
            read_time: "6 min read",
            featured: false,
            tags: &["Tutorial", "Education", "Detection Tips"],
        },
        NewsArticle {
            id: 5,
            title: "Deepfake Detection in Political Campaigns",
            excerpt: "Case study examining the role of AI detection in maintaining electoral integrity during the 2024 elections.",
            category: "global",
            kind: "case-study",
            date: day(2025, 1, 5),
            read_time: "7 min read",
            featured: false,
            tags: &["Politics", "Elections", "Case Study"],
        },
        NewsArticle {
            id: 6,
            title: "Security Alert: New Deepfake Generation Techniques",
            excerpt: "Researchers identify emerging methods used to create more convincing deepfakes and our response strategies.",
            category: "security",
            kind: "breaking",
            date: day(2025, 1, 3),
            read_time: "4 min read",
            featured: false,
            tags: &["Security Alert", "New Techniques", "Threat Analysis"],
        },
    ]
}

/// Search box plus category and type chips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub term: String,
    pub category: String,
    pub kind: String,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: ALL.to_string(),
            kind: ALL.to_string(),
        }
    }
}

impl NewsQuery {
    pub fn matches(&self, article: &NewsArticle) -> bool {
        term_matches(&self.term, &[article.title, article.excerpt], article.tags)
            && filter_matches(&self.category, article.category)
            && filter_matches(&self.kind, article.kind)
    }

    pub fn apply<'a>(&self, articles: &'a [NewsArticle]) -> Vec<&'a NewsArticle> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }

    /// The hero article, shown only while no category is selected.
    /// It ignores the search term and type filter.
    pub fn featured<'a>(&self, articles: &'a [NewsArticle]) -> Option<&'a NewsArticle> {
        if self.category != ALL {
            return None;
        }
        articles.iter().find(|a| a.featured)
    }
}

/// Grid entries: the filtered list minus the featured article
pub fn regular<'a>(filtered: &[&'a NewsArticle]) -> Vec<&'a NewsArticle> {
    filtered.iter().copied().filter(|a| !a.featured).collect()
}

/// `January 15, 2025`
pub fn format_news_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// First two tags and how many more were hidden
pub fn tag_preview(tags: &'static [&'static str]) -> (&'static [&'static str], usize) {
    let shown = tags.len().min(2);
    (&tags[..shown], tags.len() - shown)
}

/// Display name of a category id
pub fn category_name(id: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name)
        .unwrap_or("News")
}

pub fn category_class(id: &str) -> &'static str {
    match id {
        "global" => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
        "tech" => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
        "research" => "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200",
        "security" => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
        _ => "bg-gray-100 text-gray-800 dark:bg-gray-900 dark:text-gray-200",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(term: &str, category: &str, kind: &str) -> NewsQuery {
        NewsQuery {
            term: term.to_string(),
            category: category.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_search_title_excerpt_and_tags() {
        assert_eq!(query("legal", ALL, ALL).apply(&articles())[0].id, 3);
        assert_eq!(query("electoral", ALL, ALL).apply(&articles())[0].id, 5);
        assert_eq!(query("threat analysis", ALL, ALL).apply(&articles())[0].id, 6);
        assert!(query("cryptocurrency", ALL, ALL).apply(&articles()).is_empty());
    }

    #[test]
    fn test_category_and_type_intersect() {
        let ids: Vec<_> = query("", "tech", ALL).apply(&articles()).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 4]);
        let ids: Vec<_> = query("", ALL, "breaking").apply(&articles()).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 6]);
        assert!(query("", "research", "tutorial").apply(&articles()).is_empty());
    }

    #[test]
    fn test_featured_only_for_all_categories() {
        let all = articles();
        assert_eq!(NewsQuery::default().featured(&all).map(|a| a.id), Some(1));
        assert!(query("", "tech", ALL).featured(&all).is_none());

        let filtered = NewsQuery::default().apply(&all);
        let grid = regular(&filtered);
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|a| !a.featured));
    }

    #[test]
    fn test_format_and_tags() {
        assert_eq!(format_news_date(articles()[0].date), "January 15, 2025");
        assert_eq!(format_news_date(articles()[5].date), "January 3, 2025");
        let (shown, hidden) = tag_preview(articles()[0].tags);
        assert_eq!(shown, &["Fraud Prevention", "Corporate Security"]);
        assert_eq!(hidden, 1);
        assert_eq!(category_name("security"), "Security Alerts");
    }
}
