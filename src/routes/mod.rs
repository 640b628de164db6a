//! Actix-web handlers for the JSON API.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::pagination::PageLinkBase;
use crate::services::ServiceError;

pub mod comments;
pub mod posts;

/// Registers every API route under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .service(
            web::scope("/api/v1")
                .service(posts::list_posts)
                .service(posts::create_post)
                .service(posts::show_post)
                .service(comments::list_comments)
                .service(comments::create_comment),
        );
}

/// Captures scheme, host, path and query of `req` for navigation links.
pub fn link_base(req: &HttpRequest) -> PageLinkBase {
    let info = req.connection_info();
    PageLinkBase::new(info.scheme(), info.host(), req.path(), req.query_string())
}

pub fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message.to_string() }))
}

/// Maps a service failure onto the HTTP status a client should see.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": "not found" })),
        ServiceError::Form(_) | ServiceError::Pagination(_) | ServiceError::TypeConstraint(_) => {
            bad_request(err)
        }
        ServiceError::Repository(err) => {
            log::error!("Repository failure: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal error" }))
        }
    }
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(&err);
    InternalError::from_response(err, response).into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(&err);
    InternalError::from_response(err, response).into()
}
