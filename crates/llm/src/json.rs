//! Locating the JSON payload inside a model reply.

/// Extract a JSON object from an LLM response.
///
/// Handles bare objects, ```json fenced blocks, plain ``` fences, and objects
/// embedded in surrounding prose. Falls back to the trimmed input.
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if let Some(inner) = fenced_block(trimmed) {
        return inner;
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Contents of the first ``` fence, skipping any language tag on the opening line.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_ticks = &text[open + 3..];
    let body_start = after_ticks.find('\n').map_or(0, |n| n + 1);
    let body = &after_ticks[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}
