use crate::error::{Result, StoreError};
use crate::movie::Movie;
use crate::store::MovieStore;
use actix_web::{web, HttpResponse};
use serde_json::json;

const INSTRUCTIONS: &str = "Use /movies (GET) to list, /movies/{id} (GET) to fetch one, \
/movies (POST) to create, /movies/{id} (PUT) to update, /movies/{id} (DELETE) to remove.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/movies", web::get().to(list_movies))
        .route("/movies", web::post().to(create_movie))
        .route("/movies/{id}", web::get().to(get_movie))
        .route("/movies/{id}", web::put().to(update_movie))
        .route("/movies/{id}", web::delete().to(delete_movie));
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Movies API is up and running!",
        "instructions": INSTRUCTIONS,
    }))
}

async fn list_movies(store: web::Data<MovieStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.list().await)
}

async fn get_movie(store: web::Data<MovieStore>, id: web::Path<String>) -> Result<HttpResponse> {
    let movie = store.get(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(movie))
}

async fn create_movie(store: web::Data<MovieStore>, body: web::Bytes) -> Result<HttpResponse> {
    let draft = Movie::from_json(&body)?;
    let movie = store.create(draft).await?;
    Ok(HttpResponse::Created().json(movie))
}

async fn update_movie(
    store: web::Data<MovieStore>,
    id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let draft = Movie::from_json(&body)?;
    let movie = store.update(parse_id(&id)?, draft).await?;
    Ok(HttpResponse::Ok().json(movie))
}

async fn delete_movie(store: web::Data<MovieStore>, id: web::Path<String>) -> Result<HttpResponse> {
    store.delete(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "movie removed" })))
}

// A path segment that is not an integer can never name a stored movie.
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| StoreError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_keeps_the_raw_segment() {
        assert_eq!(parse_id("12").unwrap(), 12);
        match parse_id("abc") {
            Err(StoreError::InvalidId(raw)) => assert_eq!(raw, "abc"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
