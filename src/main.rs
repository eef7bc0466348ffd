use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use paginate_route::config::CONFIG;
use paginate_route::paginate::{BaseUrlResolver, PageUrlRewriter};
use paginate_route::routes;
use paginate_route::services::ItemService;
use paginate_route::translation::{Catalog, PageKeyword};

/// Size of the demo catalogue.
const SEEDED_ITEMS: u64 = 95;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Page keyword is fixed for the lifetime of the process
    let catalog = Catalog::load(&CONFIG.lang_dir, &CONFIG.locale, &CONFIG.fallback_locale)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let keyword = PageKeyword::from_catalog(&catalog);
    info!(
        "Using page keyword '{}' for locale '{}'",
        keyword,
        catalog.locale()
    );

    let rewriter = web::Data::new(PageUrlRewriter::new(
        keyword,
        BaseUrlResolver::new(CONFIG.app_url.clone()),
    ));
    let item_service = web::Data::new(ItemService::seeded(SEEDED_ITEMS, CONFIG.default_per_page));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        let keyword = rewriter.keyword().clone();
        App::new()
            .wrap(Logger::default())
            .app_data(rewriter.clone())
            .app_data(item_service.clone())
            .configure(move |cfg| routes::configure_routes(cfg, &keyword))
    })
    .bind(&server_addr)?
    .run()
    .await
}
