use actix_web::{middleware::Logger as ActixLogger, web, App, HttpServer};
use log::{error, info};
use movies_api::{
    config::{load_env_file, local_ip, Settings},
    cors::cors_policy,
    handlers,
    logger::{setup_logger, VERSION},
    MovieStore,
};
use std::{
    io::{Error as IOError, ErrorKind},
    process::id as process_id,
};

const NAME: &str = env!("CARGO_PKG_NAME");

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup_logger();
    load_env_file();

    let settings = Settings::from_env().map_err(|e| {
        error!("{}", e);
        IOError::new(ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("{} {} starting with PID: {}", NAME, VERSION, process_id());

    let store = MovieStore::open(&settings.movies_file).await;
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(ActixLogger::default())
            .wrap(cors_policy())
            .configure(handlers::configure)
    })
    .bind(settings.bind_addr())?
    .run();

    info!("Movies API running at: {}:{}", local_ip(), settings.port);

    let execution = server.await;
    info!("Worker stopped with PID: {}", process_id());

    if let Err(e) = execution {
        error!("Failed to start the server: {:?}", e);
        return Err(e);
    }

    Ok(())
}
