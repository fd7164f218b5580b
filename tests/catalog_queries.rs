use std::sync::Arc;

use foglio::application::catalog::{CatalogService, LatencyProfile, QueryLimits};
use foglio::domain::entities::PostRecord;
use foglio::domain::types::{AuthorId, PostId};
use foglio::infra::memory::MemoryCatalog;

fn catalog() -> CatalogService {
    let store = Arc::new(MemoryCatalog::seeded());
    CatalogService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        LatencyProfile::disabled(),
        QueryLimits::default(),
    )
}

fn ids(posts: &[PostRecord]) -> Vec<&str> {
    posts.iter().map(|post| post.id.as_str()).collect()
}

#[tokio::test]
async fn list_posts_returns_the_catalog_in_fixture_order() {
    let posts = catalog().list_posts().await.expect("list posts");

    insta::assert_snapshot!(ids(&posts).join("\n"), @r"
    post-1
    post-2
    post-3
    post-4
    post-5
    post-6
    ");
}

#[tokio::test]
async fn post_lookup_finds_exactly_the_matching_post() {
    let catalog = catalog();

    let post = catalog
        .post_by_id(&PostId::from("post-4"))
        .await
        .expect("lookup")
        .expect("post-4 exists");
    assert_eq!(post.title, "Building a RESTful API with Node.js and Express");

    let absent = catalog
        .post_by_id(&PostId::from("post-404"))
        .await
        .expect("lookup");
    assert!(absent.is_none());
}

#[tokio::test]
async fn tag_filter_is_a_subset_relation() {
    let catalog = catalog();

    let tagged = catalog.posts_by_tag("React").await.expect("tag query");
    assert_eq!(ids(&tagged), ["post-1", "post-3", "post-5"]);

    // Every returned post carries the tag, and no carrying post is missing.
    let all = catalog.list_posts().await.expect("list posts");
    for post in &all {
        let carries = post.tags.iter().any(|tag| tag.eq_ignore_ascii_case("react"));
        let returned = tagged.iter().any(|candidate| candidate.id == post.id);
        assert_eq!(carries, returned, "subset relation broken for {}", post.id);
    }
}

#[tokio::test]
async fn tag_filter_ignores_case() {
    let catalog = catalog();

    let lower = catalog.posts_by_tag("react").await.expect("tag query");
    let shouting = catalog.posts_by_tag("REACT").await.expect("tag query");

    assert_eq!(ids(&lower), ["post-1", "post-3", "post-5"]);
    assert_eq!(ids(&lower), ids(&shouting));
}

#[tokio::test]
async fn empty_tag_degrades_to_an_empty_result() {
    let posts = catalog().posts_by_tag("").await.expect("tag query");
    assert!(posts.is_empty());
}

#[tokio::test]
async fn related_posts_exclude_the_source_and_honor_the_limit() {
    let catalog = catalog();
    let source = PostId::from("post-1");
    let tags: Vec<String> = ["Next.js", "TypeScript", "React", "Web Development"]
        .iter()
        .map(|tag| (*tag).to_string())
        .collect();

    let related = catalog
        .related_posts(&source, &tags, None)
        .await
        .expect("related query");
    assert_eq!(ids(&related), ["post-3", "post-5"]);
    assert!(related.iter().all(|post| post.id != source));
    assert!(related.len() <= 3);

    let capped = catalog
        .related_posts(&source, &tags, Some(1))
        .await
        .expect("related query");
    assert_eq!(ids(&capped), ["post-3"]);
}

#[tokio::test]
async fn flag_queries_filter_and_truncate() {
    let catalog = catalog();

    let featured = catalog.featured_posts(None).await.expect("featured");
    assert_eq!(ids(&featured), ["post-1", "post-2", "post-5"]);
    assert!(featured.iter().all(|post| post.featured));

    let trending = catalog.trending_posts(None).await.expect("trending");
    assert_eq!(ids(&trending), ["post-1", "post-3", "post-4", "post-6"]);
    assert!(trending.iter().all(|post| post.trending));

    let capped = catalog.trending_posts(Some(2)).await.expect("trending");
    assert_eq!(ids(&capped), ["post-1", "post-3"]);
}

#[tokio::test]
async fn search_terms_are_or_ed() {
    let catalog = catalog();

    // "nextjs" matches nothing by itself ("Next.js" has a dot), but the
    // second term carries the query.
    let posts = catalog
        .search_posts("nextjs typescript")
        .await
        .expect("search");
    assert_eq!(ids(&posts), ["post-1"]);

    // Terms landing in different posts union the results.
    let posts = catalog.search_posts("grid express").await.expect("search");
    assert_eq!(ids(&posts), ["post-2", "post-4"]);
}

#[tokio::test]
async fn search_is_monotonic_in_term_count() {
    let catalog = catalog();

    let narrow = catalog.search_posts("react").await.expect("search");
    let wide = catalog
        .search_posts("react tailwind")
        .await
        .expect("search");

    for post in &narrow {
        assert!(
            wide.iter().any(|candidate| candidate.id == post.id),
            "adding a term dropped {}",
            post.id
        );
    }
    assert!(wide.len() >= narrow.len());
}

#[tokio::test]
async fn empty_search_matches_nothing() {
    let posts = catalog().search_posts("   ").await.expect("search");
    assert!(posts.is_empty());
}

#[tokio::test]
async fn all_tags_come_back_distinct_in_first_appearance_order() {
    let tags = catalog().all_tags().await.expect("tags");

    insta::assert_snapshot!(tags.join("\n"), @r"
    Next.js
    TypeScript
    React
    Web Development
    CSS
    Web Design
    Layout
    Frontend
    Animation
    Framer Motion
    Node.js
    Express
    API
    Backend
    Hooks
    JavaScript
    TailwindCSS
    ");
}

#[tokio::test]
async fn author_queries_resolve_or_signal_absence() {
    let catalog = catalog();

    let authors = catalog.list_authors().await.expect("authors");
    assert_eq!(authors.len(), 3);

    let author = catalog
        .author_by_id(&AuthorId::from("author-2"))
        .await
        .expect("lookup")
        .expect("author-2 exists");
    assert_eq!(author.name, "Jane Smith");

    let absent = catalog
        .author_by_id(&AuthorId::from("author-99"))
        .await
        .expect("lookup");
    assert!(absent.is_none());
}

#[tokio::test]
async fn author_filter_narrows_the_listing() {
    let posts = catalog()
        .posts_by_author(&AuthorId::from("author-2"))
        .await
        .expect("author posts");
    assert_eq!(ids(&posts), ["post-2", "post-5"]);
}

#[tokio::test]
async fn comment_threads_keep_insertion_order_and_parents() {
    let catalog = catalog();

    let thread = catalog
        .comments_for_post(&PostId::from("post-1"))
        .await
        .expect("comments");
    let comment_ids: Vec<&str> = thread.iter().map(|comment| comment.id.as_str()).collect();
    assert_eq!(comment_ids, ["comment-1", "comment-2", "comment-3"]);

    let reply = &thread[2];
    assert_eq!(
        reply.parent_id.as_ref().map(|parent| parent.as_str()),
        Some("comment-2")
    );

    let quiet = catalog
        .comments_for_post(&PostId::from("post-2"))
        .await
        .expect("comments");
    assert!(quiet.is_empty());
}
