use crate::id::Id;

/// A named grouping of streamers.
#[rustfmt::skip]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub id        : Id,
    pub name      : String,
    pub slug      : String,
    pub image_url : Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, image_url: Option<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: Id::new(),
            name,
            slug,
            image_url,
        }
    }
}

/// Derive a URL-safe slug from a category name.
///
/// Lowercases the name and collapses every run of non-alphanumeric
/// characters into a single dash. The slug is fixed once at creation time
/// and never recomputed, even if the name changes later.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_names() {
        assert_eq!(slugify("Just Chatting"), "just-chatting");
        assert_eq!(slugify("FPS"), "fps");
        assert_eq!(slugify("  Retro   Games!! "), "retro-games");
        assert_eq!(slugify("rögue-like"), "rögue-like");
    }

    #[test]
    fn new_category_is_slugged() {
        let category = Category::new("Real Time Strategy", None);
        assert_eq!(category.slug, "real-time-strategy");
    }
}
