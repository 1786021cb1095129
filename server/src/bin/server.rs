use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::http::Method;
use camino::Utf8PathBuf as PathBuf;
use clap::Parser;
use eyre::{self, Context, Result};
use shiki::{
    app_state::{AppState, SharedState},
    log_filter, routes,
};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

use shiki_core::{
    catalog,
    config::{self, DEFAULT_ADDRESS, DEFAULT_PORT},
    timeline,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    config: String,
    #[cfg(feature = "opentelemetry")]
    #[arg(long)]
    otel_endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1")
    }
    if std::env::var("RUST_SPANTRACE").is_err() {
        std::env::set_var("RUST_SPANTRACE", "1");
    }
    color_eyre::install()?;
    let tracing = tracing_subscriber::registry()
        .with(log_filter::env_filter("SHIKI_LOG"))
        .with(ErrorLayer::default())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    #[cfg(feature = "opentelemetry")]
    {
        use opentelemetry_otlp::WithExportConfig;
        let telemetry = args
            .otel_endpoint
            .as_ref()
            .map(|otel_endpoint| {
                let tracer = opentelemetry_otlp::new_pipeline()
                    .tracing()
                    .with_exporter(
                        opentelemetry_otlp::new_exporter()
                            .tonic()
                            .with_endpoint(otel_endpoint),
                    )
                    .with_trace_config(opentelemetry_sdk::trace::config().with_resource(
                        opentelemetry_sdk::Resource::new(vec![opentelemetry::KeyValue::new(
                            opentelemetry_semantic_conventions::resource::SERVICE_NAME,
                            "shiki",
                        )]),
                    ))
                    .install_batch(opentelemetry_sdk::runtime::Tokio)?;
                Ok::<_, eyre::Report>(tracing_opentelemetry::layer().with_tracer(tracer))
            })
            .transpose()
            .wrap_err("error setting up OpenTelemetry exporter")?;
        tracing.with(telemetry).init();
    }
    #[cfg(not(feature = "opentelemetry"))]
    {
        tracing.init();
    }

    let config_path = PathBuf::from(&args.config);
    // relative paths in the config are resolved against the config file's directory
    let config = config::read_config(&config_path).await?;

    let addr: IpAddr = config
        .address
        .as_deref()
        .unwrap_or(DEFAULT_ADDRESS)
        .parse()
        .wrap_err("error parsing listening address")?;
    let port = config.port.unwrap_or(DEFAULT_PORT);

    info!("Starting up...");
    let catalog = catalog::read_catalog(&config.catalog_path).await?;
    let shared_state: SharedState = Arc::new(AppState {
        catalog,
        events: timeline::timeline_events(),
        photo_dir: config.photo_dir,
        static_dir: config.static_dir.unwrap_or(PathBuf::from("./static")),
    });
    let cors = CorsLayer::new()
        // front-end only reads
        .allow_methods([Method::GET])
        .allow_origin(Any);
    let app = routes::app_router(shared_state)
        .layer(
            ServiceBuilder::new()
                .set_x_request_id(MakeRequestUuid)
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().include_headers(true))
                        .on_response(DefaultOnResponse::new().include_headers(true)),
                ),
        )
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(SocketAddr::new(addr, port))
        .await
        .wrap_err("Error binding socket")?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")?;
    info!("Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Unable to listen for shutdown signal: {}", err);
            std::process::exit(1);
            // we also shut down in case of error
        }
    }
}
