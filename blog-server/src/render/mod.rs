//! Server-side HTML rendering
//!
//! Templates are compiled into the binary and autoescaped (`.html` suffix).

use tera::{Context, Tera};

use crate::db::{Comment, Post};

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("post.html", include_str!("../../templates/post.html")),
    ("comments.html", include_str!("../../templates/comments.html")),
];

/// Compiled page templates
#[derive(Debug, Clone)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parse the embedded templates.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Front page: every post with its comment count.
    pub fn index(&self, posts: &[Post]) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("posts", posts);
        self.tera.render("index.html", &ctx)
    }

    /// Detail page: one post, its comments and the comment form.
    pub fn post(&self, post: &Post) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("post", post);
        self.tera.render("post.html", &ctx)
    }

    /// Comment overview across all posts.
    pub fn comments(&self, comments: &[Comment]) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("comments", comments);
        self.tera.render("comments.html", &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: 7,
            title: "Hello <world>".into(),
            content: "Body".into(),
            comments: vec![Comment {
                id: 11,
                post_id: 7,
                content: "<script>alert(1)</script>".into(),
            }],
        }
    }

    #[test]
    fn templates_parse() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn index_links_posts() {
        let templates = Templates::new().unwrap();
        let html = templates.index(&[sample_post()]).unwrap();

        assert!(html.contains(r#"href="/7/""#));
        assert!(html.contains("1 comment"));
        assert!(!html.contains("No posts yet."));
    }

    #[test]
    fn index_empty_state() {
        let templates = Templates::new().unwrap();
        let html = templates.index(&[]).unwrap();
        assert!(html.contains("No posts yet."));
    }

    #[test]
    fn post_escapes_user_content() {
        let templates = Templates::new().unwrap();
        let html = templates.post(&sample_post()).unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("Hello &lt;world&gt;"));
        assert!(html.contains(r#"action="/comments/11/delete""#));
        assert!(html.contains(r#"action="/7/""#));
    }

    #[test]
    fn comments_link_back_to_owner() {
        let templates = Templates::new().unwrap();
        let comments = sample_post().comments;
        let html = templates.comments(&comments).unwrap();

        assert!(html.contains(r#"href="/7/""#));
        assert!(html.contains("on post #7"));
    }
}
