//! Home routes, mounted at "/"

use rocket::get;
use rocket::response::content::RawHtml;

use crate::error;
use crate::response::greeting_context;
use crate::templates::Templates;

/// Show the index page. Rendering failures are not handled here; they
/// surface through [`error::Error`] as the framework's default error
/// response.
#[get("/")]
pub async fn index(templates: Templates) -> error::Result<RawHtml<String>> {
    let context = greeting_context();
    let body = templates.render("myapp/index.html", &context)?;
    Ok(RawHtml(body))
}
