use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::domain::types::PostId;
use crate::forms::comments::NewCommentForm;
use crate::pagination::{PageQuery, PageRequest, PaginationConfig};
use crate::repository::DieselRepository;
use crate::routes::{error_response, link_base};
use crate::services::comments as comments_service;

#[get("/posts/{id}/comments")]
pub async fn list_comments(
    req: HttpRequest,
    id: web::Path<i32>,
    page: web::Query<PageQuery>,
    repo: web::Data<DieselRepository>,
    config: web::Data<PaginationConfig>,
) -> impl Responder {
    let post_id = match PostId::new(id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(err.into()),
    };
    let page = match PageRequest::from_query(&page, &config) {
        Ok(page) => page,
        Err(err) => return error_response(err.into()),
    };

    match comments_service::list_comments(repo.get_ref(), post_id, &page) {
        Ok(result) => HttpResponse::Ok().json(result.into_response(&link_base(&req))),
        Err(err) => error_response(err),
    }
}

#[post("/posts/{id}/comments")]
pub async fn create_comment(
    id: web::Path<i32>,
    form: web::Json<NewCommentForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let post_id = match PostId::new(id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(err.into()),
    };

    match comments_service::create_comment(repo.get_ref(), post_id, form.into_inner()) {
        Ok(comment) => HttpResponse::Created().json(comment),
        Err(err) => error_response(err),
    }
}
