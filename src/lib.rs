pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod utils;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web;
use errors::AppError;

/// Cross-origin policy for the browser form. With no origin configured every
/// origin is allowed.
pub fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

/// Registers the employee API on an app or scope.
///
/// The caller supplies the store as `web::Data<dyn db::EmployeeStore>`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/")
            .route(web::get().to(handlers::employee::get_employees)),
    )
    .service(
        web::resource("/api/employees")
            .route(web::post().to(handlers::employee::create_employee)),
    )
    .service(
        web::resource("/api/employees/{employee_id}")
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    );
}
