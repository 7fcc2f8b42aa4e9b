use crate::domain::filter::ClubFilter;
pub use crate::dto::api::{ClubsQuery, ClubsResponse};
use crate::pagination::{PageRequest, paginate};
use crate::repository::ClubReader;
use crate::services::load_clubs;

/// Returns one page of the filtered club list.
pub fn list_clubs<R>(repo: &R, params: ClubsQuery) -> ClubsResponse
where
    R: ClubReader + ?Sized,
{
    let clubs = load_clubs(repo);

    let filter = ClubFilter::from_params(
        params.search.as_deref(),
        params.min_year.as_deref(),
        params.max_year.as_deref(),
    );
    let request = PageRequest::from_params(params.page.as_deref(), params.page_size.as_deref());

    let page = paginate(filter.apply(&clubs), request);

    ClubsResponse {
        clubs: page.items,
        total: page.total,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::club::Club;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn repo() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_list_clubs().times(1).returning(|| {
            Ok(vec![
                Club::new(1, "Arsenal", "Arsenal").founded(1886),
                Club::new(2, "Chelsea", "Chelsea").founded(1905),
            ])
        });
        repo
    }

    #[test]
    fn search_narrows_results() {
        let response = list_clubs(
            &repo(),
            ClubsQuery {
                search: Some("arsenal".into()),
                ..Default::default()
            },
        );

        assert_eq!(response.total, 1);
        assert_eq!(response.clubs[0].id, 1);
        assert_eq!(response.page, 1);
        assert_eq!(response.page_size, 6);
        assert_eq!(response.total_pages, 1);
    }

    #[test]
    fn min_year_excludes_older_clubs() {
        let response = list_clubs(
            &repo(),
            ClubsQuery {
                min_year: Some("1900".into()),
                ..Default::default()
            },
        );

        assert_eq!(response.clubs.len(), 1);
        assert_eq!(response.clubs[0].id, 2);
    }

    #[test]
    fn second_page_of_size_one() {
        let response = list_clubs(
            &repo(),
            ClubsQuery {
                page: Some("2".into()),
                page_size: Some("1".into()),
                ..Default::default()
            },
        );

        assert_eq!(response.clubs.len(), 1);
        assert_eq!(response.clubs[0].id, 2);
        assert_eq!(response.total, 2);
        assert_eq!(response.total_pages, 2);
    }

    #[test]
    fn invalid_paging_falls_back_to_defaults() {
        let response = list_clubs(
            &repo(),
            ClubsQuery {
                page: Some("zero".into()),
                page_size: Some("500".into()),
                ..Default::default()
            },
        );

        assert_eq!(response.page, 1);
        assert_eq!(response.page_size, 6);
        assert_eq!(response.clubs.len(), 2);
    }

    #[test]
    fn malformed_dataset_yields_empty_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_clubs()
            .times(1)
            .returning(|| Err(RepositoryError::DatasetMalformed("expected array".into())));

        let response = list_clubs(&repo, ClubsQuery::default());

        assert!(response.clubs.is_empty());
        assert_eq!(response.total, 0);
        assert_eq!(response.total_pages, 0);
    }
}
