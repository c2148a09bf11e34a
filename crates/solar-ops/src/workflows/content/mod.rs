mod slug;

pub use slug::{derive_slug, is_valid_slug};

use serde::{Deserialize, Serialize};

/// Editorial content families managed by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    CaseStudy,
    NewsArticle,
    Event,
}

impl ContentKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::CaseStudy, Self::NewsArticle, Self::Event]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CaseStudy => "Case Study",
            Self::NewsArticle => "News Article",
            Self::Event => "Event",
        }
    }

    /// Path segment the published site serves this family under.
    pub const fn url_prefix(self) -> &'static str {
        match self {
            Self::CaseStudy => "case-studies",
            Self::NewsArticle => "news",
            Self::Event => "events",
        }
    }
}

/// Title paired with its derived slug, ready for the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentDraft {
    pub kind: ContentKind,
    pub title: String,
    pub slug: String,
}

impl ContentDraft {
    pub fn new(kind: ContentKind, title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = derive_slug(&title);
        Self { kind, title, slug }
    }

    pub fn permalink(&self) -> String {
        format!("/{}/{}", self.kind.url_prefix(), self.slug)
    }
}
