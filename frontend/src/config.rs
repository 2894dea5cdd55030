use web_sys::window;

const DEV_API_BASE_URL: &str = "http://127.0.0.1:3000";
// `trunk serve` port; the API lives on the backend instead
const DEV_SERVER_PORT: &str = "8080";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) {
            return api_base_url_for(&protocol, &host);
        }
    }

    DEV_API_BASE_URL.to_string()
}

/// Same origin when served by the backend, the local backend otherwise.
fn api_base_url_for(protocol: &str, host: &str) -> String {
    if host.is_empty() || host.rsplit(':').next() == Some(DEV_SERVER_PORT) {
        return DEV_API_BASE_URL.to_string();
    }
    format!("{}//{}", protocol, host)
}
