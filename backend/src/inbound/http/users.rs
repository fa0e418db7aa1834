//! User HTTP handlers.
//!
//! ```text
//! GET /api/users
//! GET /api/users/{username}
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use newsdesk::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list_users().await?;
    Ok(HttpResponse::Ok().json(json!({ "users": users })))
}

/// Fetch a user by username.
#[get("/users/{username}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user = state.users.get_user(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}
