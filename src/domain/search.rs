//! Pure query predicates over post records.
//!
//! Everything here is plain string logic so both the bundled in-memory
//! repositories and any future datastore adapter share one definition of
//! "matches". Tag comparison is case-insensitive throughout; the catalog
//! does not keep a case-sensitive variant.

use crate::domain::entities::PostRecord;

/// Split a free-text query into lowercased terms on whitespace.
///
/// An empty or all-whitespace query yields no terms.
pub fn split_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|term| term.to_lowercase())
        .collect()
}

/// Free-text match with OR semantics: the post matches when any term is a
/// substring of the lowercased title, the lowercased body, or any
/// lowercased tag. Adding terms can only grow the result set.
pub fn matches_terms(post: &PostRecord, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }

    let title = post.title.to_lowercase();
    let body = post.body_markdown.to_lowercase();

    terms.iter().any(|term| {
        title.contains(term)
            || body.contains(term)
            || post
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(term))
    })
}

/// Case-insensitive exact tag comparison.
pub fn tag_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Whether the post carries `tag`, compared case-insensitively.
pub fn has_tag(post: &PostRecord, tag: &str) -> bool {
    post.tags.iter().any(|candidate| tag_eq(candidate, tag))
}

/// Whether the post shares at least one tag with `tags`.
pub fn shares_tag(post: &PostRecord, tags: &[String]) -> bool {
    post.tags
        .iter()
        .any(|candidate| tags.iter().any(|tag| tag_eq(candidate, tag)))
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use url::Url;

    use super::*;
    use crate::domain::types::{AuthorId, PostId};

    fn post(title: &str, body: &str, tags: &[&str]) -> PostRecord {
        PostRecord {
            id: PostId::from("post-test"),
            title: title.to_string(),
            excerpt: String::new(),
            body_markdown: body.to_string(),
            cover_image_url: Url::parse("https://images.example.com/cover").unwrap(),
            published_on: date!(2023 - 05 - 15),
            author_id: AuthorId::from("author-test"),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            featured: false,
            trending: false,
        }
    }

    #[test]
    fn split_terms_lowercases_and_drops_blanks() {
        assert_eq!(split_terms("  NextJS   TypeScript "), ["nextjs", "typescript"]);
        assert!(split_terms("   ").is_empty());
        assert!(split_terms("").is_empty());
    }

    #[test]
    fn empty_term_list_matches_nothing() {
        let record = post("Anything", "at all", &["tag"]);
        assert!(!matches_terms(&record, &[]));
    }

    #[test]
    fn terms_are_or_ed_across_title_body_and_tags() {
        let record = post(
            "Getting Started with Next.js and TypeScript",
            "Server-side rendering in practice.",
            &["React", "Web Development"],
        );

        // One matching term is enough, wherever it lands.
        assert!(matches_terms(&record, &split_terms("typescript")));
        assert!(matches_terms(&record, &split_terms("rendering")));
        assert!(matches_terms(&record, &split_terms("react")));
        assert!(matches_terms(&record, &split_terms("nonsense typescript")));
        assert!(!matches_terms(&record, &split_terms("elixir")));
    }

    #[test]
    fn adding_terms_never_shrinks_the_match() {
        let record = post("CSS Grid Layout", "rows and columns", &["CSS"]);
        let narrow = split_terms("grid");
        let wide = split_terms("grid unrelated words");

        assert!(matches_terms(&record, &narrow));
        assert!(matches_terms(&record, &wide));
    }

    #[test]
    fn tag_matching_ignores_case() {
        let record = post("Hooks", "", &["React", "JavaScript"]);
        assert!(has_tag(&record, "react"));
        assert!(has_tag(&record, "REACT"));
        assert!(!has_tag(&record, "reacting"));
    }

    #[test]
    fn shares_tag_requires_one_overlap() {
        let record = post("Hooks", "", &["React", "Hooks"]);
        assert!(shares_tag(&record, &["hooks".to_string()]));
        assert!(!shares_tag(
            &record,
            &["css".to_string(), "backend".to_string()]
        ));
    }
}
