//! Link preview page
//!
//! Every shared link lands here first: an interstitial showing where the
//! visitor is about to go, with a confirm button that registers the
//! click. This path counts clicks, not views, so rendering the page
//! touches no counter.

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::debug;

use crate::services::LinkService;
use crate::utils::escape_html;

const PREVIEW_TEMPLATE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/preview.html"));
const NOT_FOUND_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/preview_not_found.html"
));

/// GET /preview/{id}
///
/// Missing links get an HTML error page with a 404 status, never a JSON
/// error body.
pub async fn preview_page(
    id: web::Path<String>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let link = match links.peek_link(&id).await {
        Ok(link) => link,
        Err(_) => {
            debug!("Preview requested for missing link: {}", id);
            return Ok(HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(NOT_FOUND_TEMPLATE));
        }
    };

    let description_block = if link.description.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"link-description\">{}</div>",
            escape_html(&link.description)
        )
    };

    // The inline script needs proper JSON string literals, not
    // HTML-escaped text.
    let id_json = script_literal(&link.id);
    let url_json = script_literal(&link.url);

    let html = PREVIEW_TEMPLATE
        .replace("%LINK_TITLE%", &escape_html(&link.title))
        .replace("%LINK_URL%", &escape_html(&link.url))
        .replace("%LINK_DESCRIPTION%", &description_block)
        .replace("%LINK_USER%", &escape_html(&link.user))
        .replace("%LINK_ID_JSON%", &id_json)
        .replace("%LINK_URL_JSON%", &url_json);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// JSON string literal safe inside a script element. `serde_json`
/// leaves `<` alone, and a raw `</script>` in the value would end the
/// element early, so angle brackets become unicode escapes.
fn script_literal(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_default()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}
