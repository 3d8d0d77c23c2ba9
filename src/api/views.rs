//! HTML views rendered with askama templates from `templates/`.

use askama::Template;
use axum::response::Html;

use crate::error::Result;
use crate::store::Fruit;

/// Render a template into an HTML response body.
pub trait RenderHtml: Template {
    /// Render into [`Html`], mapping template failures to `AppError::Render`.
    fn render_html(&self) -> Result<Html<String>> {
        Ok(Html(self.render()?))
    }
}

impl<T: Template> RenderHtml for T {}

/// List of every fruit, linked by position.
#[derive(Template)]
#[template(path = "fruits/index.html")]
pub struct IndexView {
    pub fruits: Vec<Fruit>,
}

/// Empty creation form.
#[derive(Template, Default)]
#[template(path = "fruits/new.html")]
pub struct NewView;

/// A single fruit.
#[derive(Template)]
#[template(path = "fruits/show.html")]
pub struct ShowView {
    pub fruit: Fruit,
    pub id: usize,
}

/// Edit form pre-filled with the current record.
#[derive(Template)]
#[template(path = "fruits/edit.html")]
pub struct EditView {
    pub fruit: Fruit,
    pub id: usize,
}

/// Page shown for an id with no record behind it.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundView {
    pub id: usize,
}

impl NotFoundView {
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_links_each_fruit_by_position() {
        let view = IndexView {
            fruits: vec![Fruit::new("apple", "red", true), Fruit::new("pear", "green", false)],
        };

        let html = view.render().unwrap();

        assert!(html.contains(r#"href="/fruits/0""#));
        assert!(html.contains(r#"href="/fruits/1""#));
        assert!(html.contains("pear"));
    }

    #[test]
    fn edit_form_overrides_to_put_and_prechecks_ready() {
        let view = EditView {
            fruit: Fruit::new("apple", "red", true),
            id: 4,
        };

        let html = view.render().unwrap();

        assert!(html.contains(r#"action="/fruits/4?_method=PUT""#));
        assert!(html.contains("checked"));
        assert!(html.contains(r#"value="apple""#));
    }

    #[test]
    fn edit_form_leaves_unready_unchecked() {
        let view = EditView {
            fruit: Fruit::new("pear", "green", false),
            id: 0,
        };

        assert!(!view.render().unwrap().contains("checked"));
    }

    #[test]
    fn show_offers_delete_override() {
        let view = ShowView {
            fruit: Fruit::new("banana", "yellow", true),
            id: 2,
        };

        let html = view.render().unwrap();

        assert!(html.contains(r#"action="/fruits/2?_method=DELETE""#));
        assert!(html.contains("is ready to eat"));
    }

    #[test]
    fn names_are_escaped() {
        let view = ShowView {
            fruit: Fruit::new("<script>", "red", false),
            id: 0,
        };

        let html = view.render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
