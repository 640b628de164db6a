use blog_api::domain::comment::NewComment;
use blog_api::domain::post::PostListQuery;
use blog_api::domain::types::{AuthorName, CommentBody, PostId};
use blog_api::pagination::{PageRequest, paginate};
use blog_api::repository::{CommentReader, CommentWriter, PostReader, PostWriter};

mod common;

#[test]
fn test_post_repository_create_and_get() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let created = repo
        .create_post(&common::new_post("Hello", "ann"))
        .unwrap();
    assert_eq!(created.title.as_str(), "Hello");

    let fetched = repo.get_post_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let missing = repo.get_post_by_id(PostId::new(999).unwrap()).unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_post_listing_respects_offset_and_filters() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    common::seed_posts(&repo, 7);

    let all = PostListQuery::new();
    assert_eq!(repo.count_posts(&all).unwrap(), 7);

    let slice = repo.list_posts(&all, 2, 3).unwrap();
    let titles: Vec<&str> = slice.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Post 3", "Post 4", "Post 5"]);

    assert!(repo.list_posts(&all, 50, 10).unwrap().is_empty());

    let by_bob = PostListQuery::new().author("bob");
    assert_eq!(repo.count_posts(&by_bob).unwrap(), 3);
    assert!(
        repo.list_posts(&by_bob, 0, 10)
            .unwrap()
            .iter()
            .all(|p| p.author.as_str() == "bob")
    );

    let search = PostListQuery::new().search("Post 7");
    assert_eq!(repo.count_posts(&search).unwrap(), 1);

    let wildcard = PostListQuery::new().search("%");
    assert_eq!(repo.count_posts(&wildcard).unwrap(), 0);
    assert!(repo.list_posts(&wildcard, 0, 10).unwrap().is_empty());

    let single_char = PostListQuery::new().search("Post _");
    assert_eq!(repo.count_posts(&single_char).unwrap(), 0);
}

#[test]
fn test_paginate_against_sqlite() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    common::seed_posts(&repo, 7);

    let query = PostListQuery::new();
    let page = PageRequest::new(4, 2).unwrap();
    let result = paginate(
        &page,
        || repo.count_posts(&query),
        |offset, limit| repo.list_posts(&query, offset, limit),
    )
    .unwrap();

    assert_eq!(result.total_items, 7);
    assert_eq!(result.total_pages, 4);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].title.as_str(), "Post 7");
    assert_eq!(result.navigation.next, 4);
}

#[test]
fn test_comment_repository_lists_per_post() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let first = repo.create_post(&common::new_post("First", "ann")).unwrap();
    let second = repo.create_post(&common::new_post("Second", "ann")).unwrap();

    for n in 1..=3 {
        repo.create_comment(&NewComment {
            post_id: first.id,
            author: AuthorName::new("bob").unwrap(),
            body: CommentBody::new(format!("comment {n}")).unwrap(),
        })
        .unwrap();
    }

    assert_eq!(repo.count_comments(first.id).unwrap(), 3);
    assert_eq!(repo.count_comments(second.id).unwrap(), 0);

    let page = repo.list_comments(first.id, 1, 5).unwrap();
    let bodies: Vec<&str> = page.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["comment 2", "comment 3"]);
}

#[test]
fn test_comment_on_missing_post_violates_foreign_key() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let result = repo.create_comment(&NewComment {
        post_id: PostId::new(42).unwrap(),
        author: AuthorName::new("bob").unwrap(),
        body: CommentBody::new("orphan").unwrap(),
    });
    assert!(result.is_err());
}
