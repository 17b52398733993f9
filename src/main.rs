use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizcraft_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let frontend_url = config.frontend_url.clone();

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("QuizCraft API running at http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:5500")
            .allowed_origin("http://localhost:5500")
            .allow_any_method()
            .allow_any_header();
        if let Some(origin) = &frontend_url {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::index)
            .service(handlers::verify_token)
            .service(handlers::list_quizzes)
            .service(handlers::my_quizzes)
            .service(handlers::get_quiz)
            .service(handlers::create_quiz)
            .service(handlers::update_quiz)
            .service(handlers::delete_quiz)
            .service(handlers::record_play)
            .service(handlers::get_stats)
    })
    .bind(bind_addr)?
    .run()
    .await
}
