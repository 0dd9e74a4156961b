use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;

use crate::scroll::gesture::DEFAULT_THRESHOLD_PX;
use crate::scroll::transition_lock::DEFAULT_SCROLL_DURATION_MS;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Global a page can define before the bundle loads to tune navigation.
const NAV_CONFIG_GLOBAL: &str = "__WASTEWISE_NAV__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Minimum gesture size in px before it counts as navigation.
    pub threshold_px: f64,
    pub scroll_duration_ms: f64,
    /// Hold time after a carousel step.
    pub step_duration_ms: f64,
    /// Viewports at or below this width use the touch policy.
    pub mobile_breakpoint_px: f64,
    /// Minimum spacing between layout reads on `scroll`.
    pub scroll_read_interval_ms: f64,
    pub intro_duration_ms: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_THRESHOLD_PX,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            step_duration_ms: 600.0,
            mobile_breakpoint_px: 768.0,
            scroll_read_interval_ms: 100.0,
            intro_duration_ms: 2_400,
        }
    }
}

/// Reads `window.__WASTEWISE_NAV__` if present, falling back to defaults.
pub fn load_navigator_config() -> NavigatorConfig {
    let Some(window) = web_sys::window() else {
        return NavigatorConfig::default();
    };
    let value = match Reflect::get(window.as_ref(), &JsValue::from_str(NAV_CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return NavigatorConfig::default(),
    };
    match serde_wasm_bindgen::from_value::<NavigatorConfig>(value) {
        Ok(config) => {
            info!("Using navigator overrides from window.{}", NAV_CONFIG_GLOBAL);
            config
        }
        Err(e) => {
            warn!("Ignoring malformed window.{}: {}", NAV_CONFIG_GLOBAL, e);
            NavigatorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = NavigatorConfig::default();
        assert_eq!(config.threshold_px, 40.0);
        assert_eq!(config.scroll_duration_ms, 800.0);
        assert_eq!(config.mobile_breakpoint_px, 768.0);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config: NavigatorConfig =
            serde_json::from_str(r#"{ "threshold_px": 30, "scroll_duration_ms": 1000 }"#).unwrap();
        assert_eq!(config.threshold_px, 30.0);
        assert_eq!(config.scroll_duration_ms, 1000.0);
        assert_eq!(config.step_duration_ms, 600.0);
        assert_eq!(config.intro_duration_ms, 2_400);
    }
}
