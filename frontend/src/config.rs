// Debug builds talk to the quote intake service running next to `trunk serve`.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"
}

// Release builds are served by the same host that accepts `/api/quote`, so
// requests stay relative to the page origin.
#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""
}

const QUOTE_PATH: &str = "/api/quote";

pub fn quote_endpoint() -> String {
    format!("{}{}", get_backend_url(), QUOTE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_endpoint_targets_the_intake_path() {
        let endpoint = quote_endpoint();
        assert!(endpoint.starts_with(get_backend_url()));
        assert!(endpoint.ends_with("/api/quote"));
        assert!(!endpoint.ends_with("//api/quote"));
    }
}
