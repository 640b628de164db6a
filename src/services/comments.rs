use crate::domain::comment::Comment;
use crate::domain::types::PostId;
use crate::forms::comments::NewCommentForm;
use crate::pagination::{PageRequest, PageResult, paginate};
use crate::repository::{CommentReader, CommentWriter, PostReader};
use crate::services::{ServiceError, ServiceResult};

fn ensure_post_exists<R>(repo: &R, post_id: PostId) -> ServiceResult<()>
where
    R: PostReader + ?Sized,
{
    match repo.get_post_by_id(post_id)? {
        Some(_) => Ok(()),
        None => Err(ServiceError::NotFound),
    }
}

/// Loads one page of comments for an existing post.
pub fn list_comments<R>(
    repo: &R,
    post_id: PostId,
    page: &PageRequest,
) -> ServiceResult<PageResult<Comment>>
where
    R: PostReader + CommentReader + ?Sized,
{
    ensure_post_exists(repo, post_id)?;

    paginate(
        page,
        || repo.count_comments(post_id),
        |offset, limit| repo.list_comments(post_id, offset, limit),
    )
    .map_err(|err| {
        log::error!("Failed to list comments for post {post_id}: {err}");
        ServiceError::from(err)
    })
}

pub fn create_comment<R>(repo: &R, post_id: PostId, form: NewCommentForm) -> ServiceResult<Comment>
where
    R: PostReader + CommentWriter + ?Sized,
{
    let new_comment = form.into_new_comment(post_id)?;
    ensure_post_exists(repo, post_id)?;

    repo.create_comment(&new_comment).map_err(|err| {
        log::error!("Failed to add comment to post {post_id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::post::Post;
    use crate::domain::types::{AuthorName, CommentBody, CommentId, PostBody, PostTitle};
    use crate::repository::mock::MockRepository;

    fn post(id: PostId) -> Post {
        Post {
            id,
            title: PostTitle::new("Title").unwrap(),
            body: PostBody::new("Body").unwrap(),
            author: AuthorName::new("ann").unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn comment(id: i32, post_id: PostId) -> Comment {
        Comment {
            id: CommentId::new(id).unwrap(),
            post_id,
            author: AuthorName::new("bob").unwrap(),
            body: CommentBody::new("hi").unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn unknown_post_is_not_found_without_listing() {
        let mut repo = MockRepository::new();
        repo.expect_get_post_by_id().returning(|_| Ok(None));
        repo.expect_count_comments().never();
        repo.expect_list_comments().never();

        let err = list_comments(&repo, PostId::new(5).unwrap(), &PageRequest::default())
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let post_id = PostId::new(2).unwrap();
        let mut repo = MockRepository::new();
        repo.expect_get_post_by_id()
            .returning(|id| Ok(Some(post(id))));
        repo.expect_count_comments().returning(|_| Ok(5));
        repo.expect_list_comments()
            .withf(|_, offset, limit| *offset == 990 && *limit == 10)
            .returning(|_, _, _| Ok(vec![]));

        let page = PageRequest::new(100, 10).unwrap();
        let result = list_comments(&repo, post_id, &page).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.navigation.next, 1);
        assert_eq!(result.navigation.previous, 1);
    }

    #[test]
    fn create_comment_on_existing_post() {
        let post_id = PostId::new(3).unwrap();
        let mut repo = MockRepository::new();
        repo.expect_get_post_by_id()
            .returning(|id| Ok(Some(post(id))));
        repo.expect_create_comment()
            .withf(move |c| c.post_id == post_id && c.author.as_str() == "bob")
            .returning(move |_| Ok(comment(1, post_id)));

        let form = NewCommentForm {
            author: "bob".into(),
            body: "hi".into(),
        };
        let created = create_comment(&repo, post_id, form).unwrap();
        assert_eq!(created.post_id, post_id);
    }
}
