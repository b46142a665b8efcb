use actix_web::{App, HttpServer, middleware, web};

use uew_claims::config::AppConfig;
use uew_claims::routes;
use uew_claims::store::Store;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let store = Store::load(config.seed_file.as_deref()).map_err(std::io::Error::other)?;
    let store = web::Data::new(store);

    // Session signing key; load SESSION_KEY for sessions that survive restarts
    let secret_key = config.cookie_key();

    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);
    log::info!("Starting {} at http://{}", config.app_name, bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(config.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
