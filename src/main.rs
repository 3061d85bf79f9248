#[macro_use]
extern crate rocket;

use log::{error, info};
use rocket::fairing::AdHoc;
use std::env;
use std::process;

use battlesnake_snacks::bot::Bot;
use battlesnake_snacks::config::Config;

mod handler;

#[launch]
fn rocket() -> _ {
    // Lots of web hosting services expect you to bind to the port specified by the `PORT`
    // environment variable. However, Rocket looks at the `ROCKET_PORT` environment variable.
    // If we find a value for `PORT`, we set `ROCKET_PORT` to that value.
    if let Ok(port) = env::var("PORT") {
        env::set_var("ROCKET_PORT", &port);
    }

    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    // Already initialized when the routes are exercised from tests
    let _ = env_logger::try_init();

    info!("Starting Battlesnake Server...");

    // Load configuration once at startup; SNAKE picks the personality
    let mut config = Config::load_or_default();
    if let Ok(personality) = env::var("SNAKE") {
        config.snake.personality = personality;
    }

    let bot = match Bot::new(config) {
        Ok(bot) => bot,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    info!("Running '{}'", bot.personality().name());

    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/github/battlesnake-snacks");
            })
        }))
        .mount(
            "/",
            routes![handler::index, handler::start, handler::get_move, handler::end],
        )
}
