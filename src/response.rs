//! Helpers for building template render contexts.

use tera::Context;

/// Builds the render context for the index page: the single
/// `context_text` value holding the greeting. Allocated fresh on every
/// call; nothing here is shared between requests.
pub fn greeting_context() -> Context {
    let text = "Hello World!";
    let mut context = Context::new();
    context.insert("context_text", &text);
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_context_holds_exactly_the_greeting() {
        let context = greeting_context();
        assert_eq!(
            context.into_json(),
            serde_json::json!({ "context_text": "Hello World!" })
        );
    }
}
