use std::rc::Rc;

use yew::prelude::*;

use crate::utils::chart_ffi::{destroy_chart, render_chart};
use crate::viewmodels::ChartConfig;

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub canvas_id: AttrValue,
    pub config: Rc<ChartConfig>,
}

/// Canvas handed to Chart.js; redrawn only when the config changes.
#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    use_effect_with(
        (props.canvas_id.clone(), props.config.clone()),
        |(canvas_id, config)| {
            if let Err(e) = render_chart(canvas_id, &**config) {
                log::error!("❌ Chart {} failed to render: {}", canvas_id, e);
            }
            let canvas_id = canvas_id.clone();
            move || destroy_chart(&canvas_id)
        },
    );

    html! {
        <div class="chart-container">
            <canvas id={props.canvas_id.clone()}></canvas>
        </div>
    }
}
