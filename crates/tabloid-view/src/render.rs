//! Text rendering of an [`ArticleView`].
//!
//! [`Screen::of`] captures what a front end should show; its `Display` impl
//! lays it out for a terminal.

use std::fmt;

use tabloid_client::ArticleApi;
use tabloid_core::{ArticleId, display::format_created};

use crate::ArticleView;

pub const HEADING: &str = "Tabloid Articles";
pub const LOADING: &str = "Loading...";
pub const EMPTY_STATE: &str = "No articles found. Create your first article!";

/// One rendered article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBlock {
    pub id: Option<ArticleId>,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, or `unknown`.
    pub created: String,
}

/// The open form, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBlock {
    pub heading: &'static str,
    pub title: String,
    pub description: String,
}

/// Main area below the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    Empty,
    Articles(Vec<ArticleBlock>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub search_term: String,
    pub error: Option<String>,
    pub form: Option<FormBlock>,
    pub body: Body,
}

impl Screen {
    #[must_use]
    pub fn of<A: ArticleApi>(view: &ArticleView<A>) -> Self {
        let form = view.form().map(|form| FormBlock {
            heading: if form.is_editing() {
                "Edit Article"
            } else {
                "Add New Article"
            },
            title: form.draft.title.clone(),
            description: form.draft.description.clone(),
        });

        // Loading suppresses the list entirely.
        let body = if view.is_loading() {
            Body::Loading
        } else if view.articles().is_empty() {
            Body::Empty
        } else {
            Body::Articles(
                view.articles()
                    .iter()
                    .map(|a| ArticleBlock {
                        id: a.id,
                        title: a.title.clone(),
                        description: a.description.clone(),
                        created: format_created(a.created_at.as_deref()),
                    })
                    .collect(),
            )
        };

        Self {
            search_term: view.search_term().to_string(),
            error: view.error().map(str::to_string),
            form,
            body,
        }
    }

    /// Number of article blocks shown.
    #[must_use]
    pub fn article_count(&self) -> usize {
        match &self.body {
            Body::Articles(blocks) => blocks.len(),
            Body::Loading | Body::Empty => 0,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADING}")?;
        writeln!(f, "{}", "=".repeat(HEADING.len()))?;
        if !self.search_term.is_empty() {
            writeln!(f, "Search: {}", self.search_term)?;
        }
        if let Some(error) = &self.error {
            writeln!(f)?;
            writeln!(f, "! {error}")?;
        }
        if let Some(form) = &self.form {
            writeln!(f)?;
            writeln!(f, "-- {} --", form.heading)?;
            writeln!(f, "Title:       {}", form.title)?;
            writeln!(f, "Description: {}", form.description)?;
        }
        writeln!(f)?;
        match &self.body {
            Body::Loading => writeln!(f, "{LOADING}"),
            Body::Empty => writeln!(f, "{EMPTY_STATE}"),
            Body::Articles(blocks) => {
                for (index, block) in blocks.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    let id = block
                        .id
                        .map_or_else(|| "-".to_string(), |id| id.to_string());
                    writeln!(f, "[{id}] {}", block.title)?;
                    if !block.description.is_empty() {
                        writeln!(f, "    {}", block.description)?;
                    }
                    writeln!(f, "    Created: {}", block.created)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: i64, title: &str) -> ArticleBlock {
        ArticleBlock {
            id: Some(id),
            title: title.to_string(),
            description: format!("{title} details"),
            created: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn loading_screen_has_no_empty_state() {
        let screen = Screen {
            search_term: String::new(),
            error: None,
            form: None,
            body: Body::Loading,
        };
        let text = screen.to_string();
        assert!(text.contains(LOADING));
        assert!(!text.contains(EMPTY_STATE));
        assert_eq!(screen.article_count(), 0);
    }

    #[test]
    fn articles_render_title_description_and_date() {
        let screen = Screen {
            search_term: "cat".to_string(),
            error: Some("Failed to search articles".to_string()),
            form: None,
            body: Body::Articles(vec![block(1, "Cat mayor"), block(2, "Dog judge")]),
        };
        let text = screen.to_string();
        assert!(text.starts_with(HEADING));
        assert!(text.contains("Search: cat"));
        assert!(text.contains("! Failed to search articles"));
        assert!(text.contains("[1] Cat mayor"));
        assert!(text.contains("    Dog judge details"));
        assert!(text.contains("Created: 2024-01-15"));
        assert_eq!(screen.article_count(), 2);
    }

    #[test]
    fn form_block_is_rendered_above_list() {
        let screen = Screen {
            search_term: String::new(),
            error: None,
            form: Some(FormBlock {
                heading: "Add New Article",
                title: "Draft".to_string(),
                description: String::new(),
            }),
            body: Body::Empty,
        };
        let text = screen.to_string();
        let form_at = text.find("-- Add New Article --").unwrap();
        let empty_at = text.find(EMPTY_STATE).unwrap();
        assert!(form_at < empty_at);
    }
}
