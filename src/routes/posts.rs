use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::domain::post::PostListQuery;
use crate::domain::types::PostId;
use crate::forms::posts::NewPostForm;
use crate::pagination::{PageQuery, PageRequest, PaginationConfig};
use crate::repository::DieselRepository;
use crate::routes::{error_response, link_base};
use crate::services::posts as posts_service;

/// Filters accepted next to the pagination parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PostFilterQuery {
    pub author: Option<String>,
    pub search: Option<String>,
}

impl From<PostFilterQuery> for PostListQuery {
    fn from(filter: PostFilterQuery) -> Self {
        let clean = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            author: clean(filter.author),
            search: clean(filter.search),
        }
    }
}

#[get("/posts")]
pub async fn list_posts(
    req: HttpRequest,
    page: web::Query<PageQuery>,
    filter: web::Query<PostFilterQuery>,
    repo: web::Data<DieselRepository>,
    config: web::Data<PaginationConfig>,
) -> impl Responder {
    let page = match PageRequest::from_query(&page, &config) {
        Ok(page) => page,
        Err(err) => return error_response(err.into()),
    };
    let query = PostListQuery::from(filter.into_inner());

    match posts_service::list_posts(repo.get_ref(), &query, &page) {
        Ok(result) => HttpResponse::Ok().json(result.into_response(&link_base(&req))),
        Err(err) => error_response(err),
    }
}

#[get("/posts/{id}")]
pub async fn show_post(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = match PostId::new(id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(err.into()),
    };

    match posts_service::get_post(repo.get_ref(), id) {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_response(err),
    }
}

#[post("/posts")]
pub async fn create_post(
    form: web::Json<NewPostForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match posts_service::create_post(repo.get_ref(), form.into_inner()) {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => error_response(err),
    }
}
