//! Telegram HTML rendering of status payloads.

use relay_models::{PayloadField, StatusPayload, StatusReport};
use teloxide::utils::html::escape;

/// Bot short description shown for each availability state.
pub fn presence_text(is_online: bool) -> &'static str {
    if is_online {
        "Service: 🟢 Online"
    } else {
        "Service: 🔴 Offline"
    }
}

/// Renders a notification payload as Telegram HTML.
pub fn payload_html(payload: &StatusPayload) -> String {
    let mut out = format!("<b>{}</b>", escape(&payload.title));
    push_fields(&mut out, &payload.fields);
    out
}

/// Renders the `/status` report as Telegram HTML.
pub fn report_html(report: &StatusReport) -> String {
    let mut out = format!(
        "<b>{}</b>\n<b>{}</b>",
        escape(&report.title),
        escape(&report.headline)
    );
    push_fields(&mut out, &report.fields);
    out
}

/// Renders the `/user` card.
pub fn user_card_html(username: &str, id: u64) -> String {
    format!(
        "<b>User Information</b>\n\n<b>Username</b>\n{}\n\n<b>User ID</b>\n<code>{}</code>",
        escape(username),
        id
    )
}

fn push_fields(out: &mut String, fields: &[PayloadField]) {
    for field in fields {
        out.push_str("\n\n<b>");
        out.push_str(&escape(&field.name));
        out.push_str("</b>");
        if !field.value.is_empty() {
            out.push('\n');
            out.push_str(&escape(&field.value));
        }
    }
}
