//! DOM helpers shared by the admin pages: blocking dialogs, transient
//! toasts, and display formatting.

use num_format::{Locale, ToFormattedString};
use web_sys::HtmlElement;

/// Blocking confirmation dialog. Falls back to "no" when the window is not
/// available (non-browser contexts).
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking alert used for submit and delete failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Displays a temporary notification at the bottom of the screen and
/// removes it after a few seconds. Non-blocking, used for success feedback.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = wasm_bindgen::JsCast::unchecked_into(toast);
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Formats a price for the list table: thousands separators, decimals only
/// when present ("1,299" / "1,299.50").
pub fn format_price(value: f64) -> String {
    // Round to cents first so a fraction like .999 carries into the whole
    // part instead of rendering as ".100".
    let cents = (value * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = (cents % 100).abs();
    if fraction == 0 {
        whole.to_formatted_string(&Locale::en)
    } else {
        format!("{}.{:02}", whole.to_formatted_string(&Locale::en), fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn formats_whole_prices_without_decimals() {
        assert_eq!(format_price(1299.0), "1,299");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn keeps_two_decimals_when_fractional() {
        assert_eq!(format_price(1299.5), "1,299.50");
        assert_eq!(format_price(8.25), "8.25");
    }

    #[test]
    fn fraction_rounding_carries_into_the_whole_part() {
        assert_eq!(format_price(1.999), "2");
        assert_eq!(format_price(0.995), "1");
        assert_eq!(format_price(2.004), "2");
    }
}
