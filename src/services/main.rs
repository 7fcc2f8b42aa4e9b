use crate::domain::club::Club;
use crate::domain::favorites::FavoriteSet;
use crate::domain::filter::ClubFilter;
pub use crate::dto::main::IndexQuery;
use crate::dto::main::PageData;
use crate::forms::contact::ContactForm;
use crate::repository::ClubReader;
use crate::services::load_clubs;

/// Merges the club list, an optional filter and the favorites into `data`.
///
/// Without a filter no club listing is produced. Favorites are matched by the
/// decimal string form of [`Club::id`].
pub fn compose_page(
    mut data: PageData,
    clubs: &[Club],
    filter: Option<&ClubFilter>,
    favorites: &FavoriteSet,
) -> PageData {
    data.clubs = filter.map(|filter| filter.apply(clubs));
    data.favorites = clubs
        .iter()
        .filter(|club| favorites.contains(&club.favorite_key()))
        .cloned()
        .collect();
    data.favorite_ids = favorites.to_lookup();
    data
}

/// Loads the clubs list and favorites for the home page.
pub fn load_index_page<R>(repo: &R, query: IndexQuery, favorites: &FavoriteSet) -> PageData
where
    R: ClubReader + ?Sized,
{
    let clubs = load_clubs(repo);
    let filter = ClubFilter::from_params(
        query.search.as_deref(),
        query.min_year.as_deref(),
        query.max_year.as_deref(),
    );

    let mut data = PageData::new("Accueil", "Bienvenue sur la page d'accueil");
    data.search_query = query.search.unwrap_or_default();
    data.min_year = query.min_year.unwrap_or_default();
    data.max_year = query.max_year.unwrap_or_default();

    compose_page(data, &clubs, Some(&filter), favorites)
}

/// Loads the favorite clubs only.
pub fn load_favorites_page<R>(repo: &R, favorites: &FavoriteSet) -> PageData
where
    R: ClubReader + ?Sized,
{
    let clubs = load_clubs(repo);
    let data = PageData::new("Mes Favoris", "Vos clubs favoris");
    compose_page(data, &clubs, None, favorites)
}

pub fn about_page() -> PageData {
    PageData::new("À propos", "Ceci est la page à propos")
}

/// Contact page, thanking the sender when a form was posted.
pub fn contact_page(form: Option<ContactForm>) -> PageData {
    match form {
        Some(form) => PageData::new(
            "Contact",
            format!("Merci {} pour ton message : {}", form.name, form.msg),
        ),
        None => PageData::new("Contact", "Envoie-nous un message"),
    }
}
