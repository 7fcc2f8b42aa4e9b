//! HTTP routes and the helpers they share.

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, web};
use serde::de::DeserializeOwned;
use tera::{Context, Tera};

use crate::domain::favorites::{FAVORITES_COOKIE, FAVORITES_MAX_AGE_DAYS, FavoriteSet};
use crate::dto::main::PageData;

pub mod api;
pub mod favorites;
pub mod main;

/// Registers every application route except static files.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_index)
        .service(main::show_favorites)
        .service(main::show_about)
        .service(main::show_contact)
        .service(main::send_contact)
        .service(web::scope("/api").service(api::api_clubs))
        .service(
            web::resource("/add-favorite")
                .route(web::post().to(favorites::add_favorite))
                .default_service(web::to(favorites::back_to_referer)),
        )
        .service(
            web::resource("/remove-favorite")
                .route(web::post().to(favorites::remove_favorite))
                .default_service(web::to(favorites::back_to_referer)),
        )
        .service(
            web::resource("/clear-favorites")
                .route(web::post().to(favorites::clear_favorites))
                .default_service(web::to(favorites::back_to_favorites)),
        );
}

/// Parses the query string, falling back to `T::default()` when it is malformed.
pub fn query_params<T>(req: &HttpRequest) -> T
where
    T: DeserializeOwned + Default,
{
    serde_html_form::from_str(req.query_string()).unwrap_or_else(|err| {
        log::debug!("Ignoring malformed query {:?}: {err}", req.query_string());
        T::default()
    })
}

/// Renders `template`, turning any failure into a logged 500 response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err:?}");
            HttpResponse::InternalServerError().body(format!("template render error: {err}"))
        }
    }
}

/// Renders a page from its view-model.
pub fn render_page(tera: &Tera, template: &str, data: &PageData) -> HttpResponse {
    match Context::from_serialize(data) {
        Ok(context) => render_template(tera, template, &context),
        Err(err) => {
            log::error!("Failed to build context for {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// 303 response builder pointing at `location`.
pub fn see_other(location: &str) -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location.to_string()));
    builder
}

pub fn redirect(location: &str) -> HttpResponse {
    see_other(location).finish()
}

/// Location of the page the request came from, or `default`.
pub fn referer_or(req: &HttpRequest, default: &str) -> String {
    req.headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Favorites carried by the request cookie.
pub fn favorites_from_request(req: &HttpRequest) -> FavoriteSet {
    req.cookie(FAVORITES_COOKIE)
        .map(|cookie| FavoriteSet::parse(cookie.value()))
        .unwrap_or_default()
}

/// Cookie storing `favorites` for the whole site.
pub fn favorites_cookie(favorites: &FavoriteSet) -> Cookie<'static> {
    Cookie::build(FAVORITES_COOKIE, favorites.serialize())
        .path("/")
        .max_age(Duration::days(FAVORITES_MAX_AGE_DAYS))
        .http_only(false)
        .finish()
}

/// Cookie instructing the client to drop its favorites.
pub fn favorites_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FAVORITES_COOKIE, "")
        .path("/")
        .http_only(false)
        .finish();
    cookie.make_removal();
    cookie
}
