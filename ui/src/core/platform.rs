//! Platform glue: clipboard writes and blocking notices.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(String);

pub fn copy_to_clipboard(payload: &str) -> Result<(), ClipboardError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let fail = |msg: &str| ClipboardError(msg.to_string());
        let window = web_sys::window().ok_or_else(|| fail("window unavailable"))?;
        let document = window.document().ok_or_else(|| fail("document unavailable"))?;
        let body = document.body().ok_or_else(|| fail("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| fail("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| fail("textarea cast failed"))?;
        textarea.set_value(payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(fail("copy blocked by the browser"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| ClipboardError(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ClipboardError(err.to_string()))
    }
}

/// Show `message` in a modal the user has to dismiss.
pub fn notify(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                tracing::warn!(?err, "alert failed");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Lychee")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
