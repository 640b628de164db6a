use crate::domain::post::{NewPost, Post, PostListQuery};
use crate::domain::types::PostId;
use crate::forms::posts::NewPostForm;
use crate::pagination::{PageRequest, PageResult, paginate};
use crate::repository::{PostReader, PostWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of posts matching `query`.
pub fn list_posts<R>(
    repo: &R,
    query: &PostListQuery,
    page: &PageRequest,
) -> ServiceResult<PageResult<Post>>
where
    R: PostReader + ?Sized,
{
    paginate(
        page,
        || repo.count_posts(query),
        |offset, limit| repo.list_posts(query, offset, limit),
    )
    .map_err(|err| {
        log::error!("Failed to list posts: {err}");
        ServiceError::from(err)
    })
}

pub fn get_post<R>(repo: &R, id: PostId) -> ServiceResult<Post>
where
    R: PostReader + ?Sized,
{
    repo.get_post_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates the payload and stores a new post.
pub fn create_post<R>(repo: &R, form: NewPostForm) -> ServiceResult<Post>
where
    R: PostWriter + ?Sized,
{
    let new_post = NewPost::try_from(form)?;

    let post = repo.create_post(&new_post).map_err(|err| {
        log::error!("Failed to create post: {err}");
        err
    })?;
    log::info!("Created post {} by {}", post.id, post.author);

    Ok(post)
}
