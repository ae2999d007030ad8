//! Prompt builder for rendering the user message.

use crate::templates::{BARE_QUESTION_TEMPLATE, CONTEXT_TEMPLATE, SYSTEM_PROMPT};
use crate::types::BuiltPrompt;
use handlebars::Handlebars;
use infohub_core::{AppError, AppResult};
use std::collections::HashMap;

/// Build the system and user messages for a question.
///
/// With `Some(context)` the user message carries the document context and an
/// instruction to cite sources. With `None` (or an empty context) it is the
/// bare question.
///
/// # Example
/// ```
/// use infohub_prompt::build_prompt;
///
/// let built = build_prompt("რა არის დღგ?", None).unwrap();
/// assert_eq!(built.user, "შეკითხვა: რა არის დღგ?");
/// ```
pub fn build_prompt(question: &str, context: Option<&str>) -> AppResult<BuiltPrompt> {
    let mut variables = HashMap::new();
    variables.insert("question".to_string(), question.to_string());

    let context = context.filter(|c| !c.is_empty());

    let template = match context {
        Some(ctx) => {
            variables.insert("context".to_string(), ctx.to_string());
            CONTEXT_TEMPLATE
        }
        None => BARE_QUESTION_TEMPLATE,
    };

    let user = render_template(template, &variables)?;

    tracing::debug!(
        context_chars = context.map(|c| c.chars().count()).unwrap_or(0),
        user_chars = user.chars().count(),
        "Built prompt"
    );

    Ok(BuiltPrompt::new(
        SYSTEM_PROMPT.to_string(),
        user,
        context.map(|c| c.chars().count()),
    ))
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping for plain text
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", &variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}
