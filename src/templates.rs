//! Page template loading and rendering.
//!
//! The compiled tera engine is built once at ignite from a configurable
//! glob and managed as Rocket state. Handlers depend on the [`Renderer`]
//! capability rather than on the engine itself, so tests can substitute
//! a fake without any template files on disk.

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::providers::Serialized;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::{Build, Rocket};
use serde::{Deserialize, Serialize};
use tera::Tera;

use crate::error;

/// Where page templates live unless the figment says otherwise.
const DEFAULT_TEMPLATES_GLOB: &str = "templates/**/*.html";

/// The rendering collaborator behind page handlers: look up a named
/// template, substitute the context values, produce the body.
pub trait Renderer: Send + Sync {
    fn render(&self, template_name: &str, context: &tera::Context) -> error::Result<String>;
}

/// Production [`Renderer`] backed by a compiled tera engine.
pub struct TeraTemplates {
    engine: Arc<RwLock<Tera>>,
}

impl TeraTemplates {
    pub fn new(engine: Tera) -> Self {
        TeraTemplates {
            engine: Arc::new(RwLock::new(engine)),
        }
    }
}

impl Renderer for TeraTemplates {
    fn render(&self, template_name: &str, context: &tera::Context) -> error::Result<String> {
        let engine = self
            .engine
            .read()
            .map_err(|e| anyhow!("error acquiring template read lock: {:?}", e))?;

        engine
            .render(template_name, context)
            .map_err(|e| error::Error::from(anyhow!(e.to_string())))
    }
}

/// Cloneable handle to the renderer, managed as Rocket state and pulled
/// into handlers as a request guard.
#[derive(Clone)]
pub struct Templates(Arc<dyn Renderer>);

impl Templates {
    pub fn new<R: Renderer + 'static>(renderer: R) -> Self {
        Templates(Arc::new(renderer))
    }

    pub fn render(&self, template_name: &str, context: &tera::Context) -> error::Result<String> {
        self.0.render(template_name, context)
    }
}

/// Template configuration, read from the figment under "templates".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateConfig {
    /// Glob naming the template files to compile at boot.
    pub glob: String,
}

fn load_templates(rocket: &Rocket<Build>) -> error::Result<TeraTemplates> {
    let figment = rocket
        .figment()
        .focus("templates")
        .merge(Serialized::default("glob", DEFAULT_TEMPLATES_GLOB));
    let config = figment.extract::<TemplateConfig>()?;

    let tera = Tera::new(&config.glob)
        .map_err(|e| error::Error::from(anyhow!("failed to compile templates {}", e)))?;
    log::info!(
        "{} page templates loaded from {}",
        tera.get_template_names().count(),
        config.glob
    );

    Ok(TeraTemplates::new(tera))
}

#[derive(Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn fairing() -> impl Fairing {
        TemplateEngine::default()
    }
}

#[rocket::async_trait]
impl Fairing for TemplateEngine {
    fn info(&self) -> Info {
        Info {
            name: "Page Templates",
            kind: Kind::Ignite,
        }
    }

    /// Compiles the engine and manages the [`Templates`] handle. A glob
    /// that does not compile aborts ignition.
    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        match load_templates(&rocket) {
            Ok(renderer) => Ok(rocket.manage(Templates::new(renderer))),
            Err(e) => {
                log::error!("page templates failed to load: {}", e);
                Err(rocket)
            }
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Templates {
    type Error = error::Error;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match req.rocket().state::<Templates>() {
            Some(templates) => Outcome::Success(templates.clone()),
            None => {
                rocket::error!("could not fetch template engine");
                Outcome::Error((
                    Status::InternalServerError,
                    error::Error::from(anyhow!("could not fetch template engine")),
                ))
            }
        }
    }
}
