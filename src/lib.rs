use rocket::{routes, Build, Rocket};

pub mod error;
pub mod response;
pub mod routes;
pub mod templates;

pub fn rocket() -> Rocket<Build> {
    rocket::build()
        .attach(templates::TemplateEngine::fairing())
        .mount("/", routes![routes::home::index])
}
