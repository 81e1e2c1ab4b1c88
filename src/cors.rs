use actix_cors::Cors;
use actix_web::http::header;

/// Any origin may call the API; preflight `OPTIONS` requests are answered by
/// the middleware without reaching a handler.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}
