use actix_web::{middleware, web, App, HttpServer};
use recaptcha_validator::api::{configure_routes, cors_policy, AppState};
use recaptcha_validator::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    // A missing .env is fine as long as the variables come from the environment
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Make sure RECAPTCHA_SECRET_KEY is set in your environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            log::error!("Failed to load app configuration: {}", e);
            std::process::exit(1);
        }
    };
    println!("✅ RECAPTCHA_SECRET_KEY loaded");

    let port = app_config.port;
    let state = AppState::new(&app_config);

    banner::print_server_info(port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors_policy())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
