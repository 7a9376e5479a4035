use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use employee_manager::config::Settings;
use employee_manager::db::{self, EmployeeStore, PgEmployeeStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    // Initialize the database pool
    let pool = db::create_pool(&settings)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, err))?;
    db::ensure_schema(&pool)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool));

    let cors_origin = settings.cors_allowed_origin.clone();
    match &cors_origin {
        Some(origin) => info!("Allowing cross-origin requests from {}", origin),
        None => info!("Allowing cross-origin requests from any origin"),
    }

    info!("Starting server at {}", settings.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(employee_manager::cors(cors_origin.as_deref()))
            .wrap(Logger::default())
            .app_data(web::Data::from(store.clone()))
            .configure(employee_manager::routes)
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
