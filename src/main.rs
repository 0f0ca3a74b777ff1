mod api;
mod config;
mod datastore;
mod metrics;
mod twoface;

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate guard;

use crate::config::Config;
use crate::datastore::memory::MemoryStore;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{middleware, web, App, HttpServer};
use futures::future::{self, FutureExt};
use std::sync::Arc;
use tracing::{info, Level};

#[actix_rt::main]
async fn main() {
    let args: Vec<_> = std::env::args().collect();
    guard!(let [_, config_file_path, ..] = &args[..] else {
        eprintln!("First argument should be path to config file");
        return
    });

    let config = Config::from_file(config_file_path);

    // Set up logger output
    let subscriber_builder = tracing_subscriber::fmt().with_max_level(Level::DEBUG);
    if config.human_logs {
        subscriber_builder.init();
    } else {
        subscriber_builder.json().init();
    }

    info!("starting blogling");

    // Build the post store. Posts live in memory only, so a restart wipes them.
    let store = MemoryStore::new().expect("couldn't build the post store");
    prometheus::register(Box::new(store.clone())).expect("couldn't register store metrics");

    let state = api::State {
        ds: Arc::new(store),
    };

    // Start the blog server
    info!(addr = &config.listen_address[..], "starting blog server");
    let max_body_size = config.max_body_size;
    let blog_server = HttpServer::new(move || {
        App::new()
            // Middleware for Prometheus
            .wrap_fn(|request, srv| srv.call(request).map(increment_response_metrics))
            .app_data(web::Data::new(state.clone()))
            // enable logger
            .wrap(middleware::Logger::default())
            // limit size of form submissions (global configuration)
            .app_data(web::FormConfig::default().limit(max_body_size))
            .configure(api::userfacing::configure::<MemoryStore>)
            .default_service(web::to(api::assets::serve))
    })
    .bind(config.listen_address.clone())
    .expect("couldn't start blog HTTP server")
    .run();

    // Start the metrics server
    info!(addr = &config.metrics_address[..], "starting metrics server");
    let metrics_server = HttpServer::new(|| {
        App::new().service(
            web::scope("/metrics")
                .service(web::resource("/").route(web::get().to(metrics::endpoint::gather)))
                .service(web::resource("").route(web::get().to(metrics::endpoint::gather))),
        )
    })
    .bind(config.metrics_address)
    .expect("couldn't start metrics server")
    .run();

    future::try_join(blog_server, metrics_server)
        .await
        .expect("actix runtime terminated");
}

/// If response is OK, increment the metrics for HTTP statuses.
fn increment_response_metrics<E, B>(
    response: Result<ServiceResponse<B>, E>,
) -> Result<ServiceResponse<B>, E> {
    match response {
        Ok(response) => {
            metrics::HTTP_RESPONSES
                .with_label_values(&[response.status().as_str()])
                .inc();
            Ok(response)
        }
        other => other,
    }
}
