use once_cell::sync::Lazy;
use regex::Regex;
use web_sys::window;

static MOBILE_USER_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini|mobile|tablet")
        .expect("mobile user agent pattern is valid")
});

/// Phones and tablets, including iPads that report a desktop Safari user agent
/// but expose touch points.
pub fn is_mobile_user_agent(user_agent: &str, max_touch_points: i32) -> bool {
    MOBILE_USER_AGENT.is_match(user_agent) || (user_agent.contains("Macintosh") && max_touch_points > 1)
}

pub fn is_mobile_device() -> bool {
    window()
        .map(|w| w.navigator())
        .map(|navigator| {
            let user_agent = navigator.user_agent().unwrap_or_default();
            is_mobile_user_agent(&user_agent, navigator.max_touch_points())
        })
        .unwrap_or(false)
}

pub fn is_landscape() -> bool {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };

    window()
        .map(|w| dimension(w.inner_width()) > dimension(w.inner_height()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_phones_and_tablets() {
        let android = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36";
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        assert!(is_mobile_user_agent(android, 5));
        assert!(is_mobile_user_agent(iphone, 5));
    }

    #[test]
    fn test_ipad_with_desktop_user_agent() {
        let ipad = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15";
        assert!(is_mobile_user_agent(ipad, 5));
        assert!(!is_mobile_user_agent(ipad, 0));
    }

    #[test]
    fn test_desktop_is_not_mobile() {
        let desktop = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
        assert!(!is_mobile_user_agent(desktop, 0));
    }
}
