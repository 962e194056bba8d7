use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use hiring_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::{auth, cors::permissive_cors, rate_limit},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route(
            "/api/public/applications",
            post(routes::public::submit_application),
        )
        .route(
            "/api/public/applications/:token",
            get(routes::public::get_application_status),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.public_rps),
            rate_limit::rps_middleware,
        ));

    let hr_api = Router::new()
        .route(
            "/api/hr/candidates",
            get(routes::candidate_routes::list_candidates),
        )
        .route(
            "/api/hr/candidates/:id",
            get(routes::candidate_routes::get_candidate),
        )
        .route(
            "/api/hr/candidates/:id/history",
            get(routes::candidate_routes::get_candidate_history),
        )
        .route(
            "/api/hr/candidates/:id/status",
            post(routes::candidate_routes::update_candidate_status),
        )
        .route(
            "/api/hr/candidates/:id/shortlist",
            post(routes::workflow_routes::shortlist_candidate),
        )
        .route(
            "/api/hr/candidates/:id/schedule-interview",
            post(routes::workflow_routes::schedule_interview),
        )
        .route(
            "/api/hr/candidates/:id/offer",
            post(routes::workflow_routes::send_offer),
        )
        .route(
            "/api/hr/proposals",
            get(routes::workflow_routes::list_proposals),
        )
        .route(
            "/api/hr/proposals/:id",
            get(routes::workflow_routes::get_proposal),
        )
        .route(
            "/api/hr/proposals/:id/resubmit",
            post(routes::workflow_routes::resubmit_offer),
        )
        .route(
            "/api/hr/feedback/:id/offer-fields",
            patch(routes::workflow_routes::update_feedback_offer_fields),
        )
        .route(
            "/api/hr/dashboard/stats",
            get(routes::candidate_routes::dashboard_stats),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_hr,
        ))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.integration_rps),
            rate_limit::rps_middleware,
        ));

    let manager_api = Router::new()
        .route(
            "/api/manager/proposals/:id/decision",
            post(routes::workflow_routes::manager_decision),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_manager,
        ));

    let interviewer_api = Router::new()
        .route(
            "/api/interviewer/interviews",
            get(routes::workflow_routes::list_my_interviews),
        )
        .route(
            "/api/interviewer/interviews/:id/feedback",
            post(routes::workflow_routes::submit_feedback),
        )
        .route(
            "/api/interviewer/proposals/:id/acknowledge",
            post(routes::workflow_routes::acknowledge_offer),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_interviewer,
        ));

    let notifications_api = Router::new()
        .route(
            "/api/notifications",
            get(routes::notification_routes::list_notifications),
        )
        .route(
            "/api/notifications/unread-count",
            get(routes::notification_routes::unread_count),
        )
        .route(
            "/api/notifications/:id/read",
            post(routes::notification_routes::mark_read),
        )
        .route(
            "/api/notifications/read-all",
            post(routes::notification_routes::mark_all_read),
        )
        .route(
            "/api/functions/send-email-notification",
            post(routes::email_function::send_email_notification),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_active,
        ));

    let admin_api = Router::new()
        .route("/api/admin/users", get(routes::user_routes::list_users))
        .route(
            "/api/admin/users/:id",
            patch(routes::user_routes::update_user),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_admin,
        ));

    let upload_path = config.uploads_dir.clone();
    info!("Serving uploads from: {}", upload_path);

    let app = base_routes
        .merge(public_api)
        .merge(hr_api)
        .merge(manager_api)
        .merge(interviewer_api)
        .merge(notifications_api)
        .merge(admin_api)
        .nest_service("/uploads", tower_http::services::ServeDir::new(upload_path))
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
