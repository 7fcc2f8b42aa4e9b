#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod locator;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{load_templates, run};

#[cfg(feature = "server")]
mod server {
    use std::path::{Path, PathBuf};

    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::locator::{DEFAULT_SEARCH_DEPTH, ResourceLocator, display_paths};
    use crate::models::config::ServerConfig;
    use crate::repository::JsonClubRepository;

    /// Directory looked up from the working directory when no static dir is configured.
    const STATIC_DIR: &str = "data/static";

    /// Parses every `*.html` template under `dir`.
    pub fn load_templates(dir: &Path) -> Result<Tera, tera::Error> {
        Tera::new(&format!("{}/**/*.html", dir.display()))
    }

    fn find_static_dir(locator: &ResourceLocator, server_config: &ServerConfig) -> Option<PathBuf> {
        if let Some(dir) = &server_config.static_dir {
            return locator.find_dir(dir).ok();
        }
        let cwd = std::env::current_dir().ok()?;
        locator.find_dir_upwards(&cwd, STATIC_DIR, DEFAULT_SEARCH_DEPTH)
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let locator = ResourceLocator::new();

        let templates_dir = locator
            .find_dir(&server_config.templates_dir)
            .map_err(|tried| {
                std::io::Error::other(format!(
                    "Templates directory missing; tried: {}",
                    display_paths(&tried)
                ))
            })?;
        let tera = load_templates(&templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
        log::info!("Loaded templates from {}", templates_dir.display());

        let static_dir = find_static_dir(&locator, &server_config);
        match &static_dir {
            Some(dir) => log::info!("Serving static files from {} at /static/", dir.display()),
            None => log::warn!("Static directory not found; static files won't be served"),
        }

        let repo = JsonClubRepository::new(server_config.dataset_path.clone());

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Listening on http://{}:{}",
            server_config.address,
            server_config.port
        );

        HttpServer::new(move || {
            let static_dir = static_dir.clone();
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .configure(move |cfg| {
                    if let Some(dir) = static_dir {
                        cfg.service(Files::new("/static", dir));
                    }
                })
                .configure(crate::routes::configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
