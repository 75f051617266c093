//! Decorative header banner. The banner is an animation document fetched over
//! HTTP; the TUI cannot play it, so only its name and a couple of facts are
//! shown. Any failure along the way means "no banner" and nothing more.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);
const FALLBACK_NAME: &str = "Library";

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub name: String,
    pub frame_rate: Option<f64>,
    pub layers: usize,
}

impl Banner {
    /// Pull the interesting bits out of an animation document. Missing keys
    /// fall back to neutral values.
    pub fn from_document(document: &Value) -> Self {
        let name = document
            .get("nm")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME)
            .to_string();
        let frame_rate = document.get("fr").and_then(Value::as_f64);
        let layers = document
            .get("layers")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0);

        Self {
            name,
            frame_rate,
            layers,
        }
    }

    /// Text shown in the header next to the application title.
    pub fn headline(&self) -> String {
        match self.frame_rate {
            Some(fps) => format!("{} · {} layers @ {:.0} fps", self.name, self.layers, fps),
            None => self.name.clone(),
        }
    }
}

/// Fetch and decode the banner document at `url`. Transport errors, non-200
/// responses and bodies that are not JSON all yield `None`.
pub fn fetch_banner(url: &str) -> Option<Banner> {
    let client = match Client::builder().timeout(FETCH_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            debug!(error = %err, "failed to build banner client");
            return None;
        }
    };

    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(err) => {
            debug!(url, error = %err, "banner fetch failed");
            return None;
        }
    };

    if response.status() != StatusCode::OK {
        debug!(url, status = %response.status(), "banner fetch returned non-success status");
        return None;
    }

    match response.json::<Value>() {
        Ok(document) => {
            let banner = Banner::from_document(&document);
            info!(url, name = %banner.name, "loaded banner");
            Some(banner)
        }
        Err(err) => {
            debug!(url, error = %err, "banner document is not JSON");
            None
        }
    }
}
