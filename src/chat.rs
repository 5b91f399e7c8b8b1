use crate::constants::ID_MESSAGES;
use calm_core::{parse_reply, ChatError, ChatMessage, MESSAGE_FIELD};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn network(e: JsValue) -> ChatError {
    ChatError::Network(format!("{:?}", e))
}

/// POST the message as a form and decode the `{reply}` JSON.
pub async fn ask_backend(endpoint: &str, text: &str) -> Result<String, ChatError> {
    let window = web::window().ok_or_else(|| ChatError::Network("no window".into()))?;

    let params = web::UrlSearchParams::new().map_err(network)?;
    params.append(MESSAGE_FIELD, text);
    let headers = web::Headers::new().map_err(network)?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(network)?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from(params));
    opts.set_headers(&JsValue::from(headers));

    let resp = JsFuture::from(window.fetch_with_str_and_init(endpoint, &opts))
        .await
        .map_err(network)?;
    let resp: web::Response = resp.dyn_into().map_err(network)?;
    if !resp.ok() {
        log::warn!("[chat] backend answered {}", resp.status());
    }
    let body = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .ok_or_else(|| ChatError::Network("body is not text".into()))?;
    parse_reply(&body)
}

/// Render one message bubble and keep the log scrolled to the newest entry.
pub fn append_message(document: &web::Document, msg: &ChatMessage) {
    let Some(log_el) = document.get_element_by_id(ID_MESSAGES) else {
        return;
    };
    let Ok(m) = document.create_element("div") else {
        return;
    };
    m.set_class_name(&format!("msg {}", msg.author.css_class()));
    m.set_text_content(Some(&msg.text));
    _ = log_el.append_child(&m);
    log_el.set_scroll_top(log_el.scroll_height());
}
