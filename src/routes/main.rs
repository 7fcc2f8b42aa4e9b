use actix_web::{HttpRequest, Responder, get, post, route, web};
use tera::Tera;

use crate::forms::contact::ContactForm;
use crate::repository::JsonClubRepository;
use crate::routes::{favorites_from_request, query_params, render_page};
use crate::services::main::{self as main_service, IndexQuery};

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    repo: web::Data<JsonClubRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let favorites = favorites_from_request(&req);
    let data = main_service::load_index_page(
        repo.get_ref(),
        query_params::<IndexQuery>(&req),
        &favorites,
    );
    render_page(&tera, "main/index.html", &data)
}

#[get("/favorites")]
pub async fn show_favorites(
    req: HttpRequest,
    repo: web::Data<JsonClubRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let favorites = favorites_from_request(&req);
    let data = main_service::load_favorites_page(repo.get_ref(), &favorites);
    render_page(&tera, "main/favorites.html", &data)
}

#[route("/about", method = "GET", method = "POST")]
pub async fn show_about(tera: web::Data<Tera>) -> impl Responder {
    render_page(&tera, "main/about.html", &main_service::about_page())
}

#[get("/contact")]
pub async fn show_contact(tera: web::Data<Tera>) -> impl Responder {
    render_page(&tera, "main/contact.html", &main_service::contact_page(None))
}

#[post("/contact")]
pub async fn send_contact(tera: web::Data<Tera>, body: web::Bytes) -> impl Responder {
    let form = serde_html_form::from_bytes::<ContactForm>(&body).unwrap_or_default();
    render_page(&tera, "main/contact.html", &main_service::contact_page(Some(form)))
}
