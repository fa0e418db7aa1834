//! HTTP inbound adapter exposing REST endpoints.

pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod error;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod topics;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the welcome route and every `/api` route.
///
/// Callers add the [`endpoints::not_found`] default service and the
/// [`state::HttpState`] app data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use newsdesk::inbound::http::{configure, endpoints::not_found};
///
/// let app = App::new().configure(configure).default_service(web::to(not_found));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(endpoints::welcome)
        .service(endpoints::describe_api)
        .service(
            web::scope("/api")
                .service(topics::list_topics)
                .service(topics::list_articles_by_topic)
                .service(topics::create_article)
                .service(articles::list_articles)
                .service(articles::get_article)
                .service(articles::vote_article)
                .service(articles::list_comments_by_article)
                .service(articles::create_comment)
                .service(comments::list_comments)
                .service(comments::get_comment)
                .service(comments::vote_comment)
                .service(comments::delete_comment)
                .service(users::list_users)
                .service(users::get_user),
        );
}
