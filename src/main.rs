use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use blog_service::{auth, db, handlers, middleware, Config};
use sqlx::PgPool;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn health_summary(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "blog-service"
        })),
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

/// Blog Service
///
/// REST API for posts, groups, comments, and follow relationships.
///
/// # Routes
///
/// - `/api/v1/posts/*` - Posts and their comments (reads public, writes
///   authenticated and author-only)
/// - `/api/v1/groups/*` - Read-only groups
/// - `/api/v1/follow` - Follow edges (fully authenticated)
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    match auth::load_validation_key() {
        Ok(public_key) => {
            if let Err(err) = auth::initialize_validation_key(&public_key) {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to initialize JWT keys: {err}"),
                ));
            }
        }
        Err(err) => {
            tracing::warn!(
                "JWT public key not configured ({err}); authenticated requests will be rejected"
            );
        }
    }

    let db_pool = match db::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Connected to database");

    db::MIGRATOR
        .run(&db_pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Migration failed: {e}")))?;

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            // Health check endpoints
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::list_posts))
                                    .route(web::post().to(handlers::create_post)),
                            )
                            .service(
                                web::scope("/{post_id}/comments")
                                    .service(
                                        web::resource("")
                                            .route(web::get().to(handlers::list_comments))
                                            .route(web::post().to(handlers::create_comment)),
                                    )
                                    .service(
                                        web::resource("/{comment_id}")
                                            .route(web::get().to(handlers::get_comment))
                                            .route(web::put().to(handlers::update_comment))
                                            .route(web::patch().to(handlers::update_comment))
                                            .route(web::delete().to(handlers::delete_comment)),
                                    ),
                            )
                            .service(
                                web::resource("/{post_id}")
                                    .route(web::get().to(handlers::get_post))
                                    .route(web::put().to(handlers::update_post))
                                    .route(web::patch().to(handlers::update_post))
                                    .route(web::delete().to(handlers::delete_post)),
                            ),
                    )
                    .service(
                        web::scope("/groups")
                            .service(web::resource("").route(web::get().to(handlers::list_groups)))
                            .service(
                                web::resource("/{group_id}")
                                    .route(web::get().to(handlers::get_group)),
                            ),
                    )
                    // Follow endpoints require authentication even for reads
                    .service(
                        web::scope("/follow")
                            .wrap(middleware::JwtAuthMiddleware)
                            .service(
                                web::resource("")
                                    .route(web::get().to(handlers::list_follows))
                                    .route(web::post().to(handlers::create_follow)),
                            ),
                    ),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await?;

    tracing::info!("blog-service shutting down");

    Ok(())
}
