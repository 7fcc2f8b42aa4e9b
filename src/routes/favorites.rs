//! Routes mutating the favorites cookie.
//!
//! Only POST changes anything. Other verbs are routed to
//! [`back_to_referer`] / [`back_to_favorites`] by the resource defaults.

use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::favorites::FavoriteUpdate;
use crate::forms::favorites::FavoriteForm;
use crate::routes::{
    favorites_cookie, favorites_from_request, favorites_removal_cookie, query_params, redirect,
    referer_or, see_other,
};
use crate::services::favorites as favorites_service;

const DEFAULT_REDIRECT: &str = "/";
const FAVORITES_PAGE: &str = "/favorites";

/// Reads `club_id` from the urlencoded body, then from the query string.
fn posted_form(req: &HttpRequest, body: &[u8]) -> FavoriteForm {
    let posted = serde_html_form::from_bytes::<FavoriteForm>(body).unwrap_or_default();
    posted.or(query_params::<FavoriteForm>(req))
}

fn respond(location: &str, update: FavoriteUpdate) -> HttpResponse {
    let mut response = see_other(location);
    match update {
        FavoriteUpdate::Unchanged => {}
        FavoriteUpdate::Persist(favorites) => {
            response.cookie(favorites_cookie(&favorites));
        }
        FavoriteUpdate::Expire => {
            response.cookie(favorites_removal_cookie());
        }
    }
    response.finish()
}

pub async fn add_favorite(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let form = posted_form(&req, &body);
    let update = favorites_service::add_favorite(favorites_from_request(&req), form.club_id());
    respond(&referer_or(&req, DEFAULT_REDIRECT), update)
}

pub async fn remove_favorite(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let form = posted_form(&req, &body);
    let update = favorites_service::remove_favorite(favorites_from_request(&req), form.club_id());
    respond(&referer_or(&req, DEFAULT_REDIRECT), update)
}

pub async fn clear_favorites() -> HttpResponse {
    respond(FAVORITES_PAGE, favorites_service::clear_favorites())
}

pub async fn back_to_referer(req: HttpRequest) -> HttpResponse {
    redirect(&referer_or(&req, DEFAULT_REDIRECT))
}

pub async fn back_to_favorites() -> HttpResponse {
    redirect(FAVORITES_PAGE)
}
