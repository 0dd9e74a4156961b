//! Preloads the animation data used by decorative sections. Any failure
//! replaces the page with a list of the paths that could not be loaded.

use gloo_console::error;
use gloo_net::http::Request;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetFailure {
    pub path: String,
    pub reason: String,
}

#[derive(Clone, PartialEq)]
enum AssetStatus {
    Loading,
    Ready,
    Failed(Vec<AssetFailure>),
}

/// Animation files are JSON objects with a `layers` array.
pub fn validate_animation(text: &str) -> Result<(), String> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| format!("invalid JSON: {}", e))?;
    match value.get("layers") {
        Some(serde_json::Value::Array(_)) => Ok(()),
        _ => Err("missing animation layers".to_string()),
    }
}

pub fn collect_failures(results: Vec<(String, Result<(), String>)>) -> Vec<AssetFailure> {
    results
        .into_iter()
        .filter_map(|(path, result)| result.err().map(|reason| AssetFailure { path, reason }))
        .collect()
}

async fn load_animation(path: &str) -> Result<(), String> {
    let response = Request::get(path).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let text = response.text().await.map_err(|e| e.to_string())?;
    validate_animation(&text)
}

#[derive(Properties, PartialEq)]
pub struct AssetGateProps {
    pub paths: Vec<&'static str>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AssetGate)]
pub fn asset_gate(props: &AssetGateProps) -> Html {
    let status = use_state(|| AssetStatus::Loading);

    {
        let status = status.clone();
        use_effect_with_deps(
            move |paths: &Vec<&'static str>| {
                let paths = paths.clone();
                spawn_local(async move {
                    let mut results = Vec::with_capacity(paths.len());
                    for path in paths {
                        results.push((path.to_string(), load_animation(path).await));
                    }
                    let failures = collect_failures(results);
                    if failures.is_empty() {
                        info!("Animation assets loaded");
                        status.set(AssetStatus::Ready);
                    } else {
                        for failure in &failures {
                            error!(format!("Failed to load {}: {}", failure.path, failure.reason));
                        }
                        status.set(AssetStatus::Failed(failures));
                    }
                });
                || ()
            },
            props.paths.clone(),
        );
    }

    match &*status {
        AssetStatus::Ready => html! { <>{ for props.children.iter() }</> },
        AssetStatus::Loading => html! {
            <div class="asset-loading"><span class="loading-spinner"></span></div>
        },
        AssetStatus::Failed(failures) => html! {
            <div class="asset-error">
                <style>
                    {r#"
                        .asset-error {
                            position: fixed;
                            inset: 0;
                            background: #1a1a1a;
                            color: #fff;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            padding: 2rem;
                            z-index: 300;
                        }
                        .asset-error ul {
                            list-style: none;
                            padding: 0;
                            font-family: monospace;
                            color: #e57373;
                        }
                    "#}
                </style>
                <h1>{"Something went wrong loading this page"}</h1>
                <p>{"These files could not be loaded:"}</p>
                <ul>
                    { for failures.iter().map(|f| html! {
                        <li>{format!("{} ({})", f.path, f.reason)}</li>
                    }) }
                </ul>
            </div>
        },
    }
}
