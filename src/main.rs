use dotenvy::dotenv;

use insurai_backend::logging::init_tracing;
use insurai_backend::router::init_router;
use insurai_backend::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state();
    let app = init_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    println!("🚀 Insurai backend running on http://localhost:{}", port);
    println!(
        "📚 Swagger UI available at http://localhost:{}/swagger-ui",
        port
    );
    println!(
        "📖 Scalar UI available at http://localhost:{}/scalar",
        port
    );
    axum::serve(listener, app).await.unwrap();
}
