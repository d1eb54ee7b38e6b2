//! Binding to the JS chart surface.
//!
//! The chart renderer is an external collaborator: the host page exposes a
//! `renderChart(containerId, config)` function and this module marshals the
//! aggregated series into it.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = renderChart, catch)]
    fn render_chart_js(container_id: &str, config: JsValue) -> Result<(), JsValue>;
}

/// One plotted series: which bucket field to draw and how.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "xKey")]
    pub x_key: &'static str,
    #[serde(rename = "yKey")]
    pub y_key: &'static str,
    #[serde(rename = "yName")]
    pub y_name: &'static str,
    pub fill: &'static str,
}

impl ChartSeries {
    pub fn bar(y_key: &'static str, y_name: &'static str, fill: &'static str) -> Self {
        Self {
            kind: "bar",
            x_key: "week",
            y_key,
            y_name,
            fill,
        }
    }

    pub fn line(y_key: &'static str, y_name: &'static str, fill: &'static str) -> Self {
        Self {
            kind: "line",
            x_key: "week",
            y_key,
            y_name,
            fill,
        }
    }
}

/// Full chart configuration handed to the surface.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig<T: Serialize> {
    pub title: String,
    pub data: Vec<T>,
    pub series: Vec<ChartSeries>,
}

pub fn render_chart<T: Serialize>(
    container_id: &str,
    config: &ChartConfig<T>,
) -> Result<(), String> {
    let value = config
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    render_chart_js(container_id, value).map_err(|e| format!("chart render failed: {e:?}"))
}
