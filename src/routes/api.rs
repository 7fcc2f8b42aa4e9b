use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::repository::JsonClubRepository;
use crate::routes::query_params;
use crate::services::api::{self as api_service, ClubsQuery};

#[get("/clubs")]
pub async fn api_clubs(
    req: HttpRequest,
    repo: web::Data<JsonClubRepository>,
) -> impl Responder {
    let response = api_service::list_clubs(repo.get_ref(), query_params::<ClubsQuery>(&req));
    HttpResponse::Ok().json(response)
}
