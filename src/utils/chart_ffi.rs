// ============================================================================
// CHART FFI - wrappers around the Chart.js bridge in index.html
// ============================================================================
// No state, no logic: configs are built in viewmodels::charts.
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = renderChart)]
    fn render_chart_js(canvas_id: &str, config: JsValue);

    #[wasm_bindgen(js_name = destroyChart)]
    fn destroy_chart_js(canvas_id: &str);
}

/// Draws (or redraws) a chart on the canvas with the given id.
pub fn render_chart<C: Serialize>(canvas_id: &str, config: &C) -> Result<(), String> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let value = config
        .serialize(&serializer)
        .map_err(|e| format!("Chart config serialization error: {}", e))?;
    render_chart_js(canvas_id, value);
    Ok(())
}

pub fn destroy_chart(canvas_id: &str) {
    destroy_chart_js(canvas_id);
}
