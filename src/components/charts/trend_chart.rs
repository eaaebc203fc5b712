use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line},
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::PALETTE;
use crate::utils::chart::SeriesPoint;

const SCOPE_NAMES: [&str; 3] = ["Scope 1", "Scope 2", "Scope 3"];

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    /// Element id the chart renders into; must be unique on the page.
    pub id: AttrValue,
    /// Points carrying `[scope1, scope2, scope3, total]`.
    pub data: Rc<Vec<SeriesPoint>>,
    #[prop_or_else(|| AttrValue::from("Emissions by Scope"))]
    pub title: AttrValue,
}

/// Stacked per-scope bars with a total line, rendered by ECharts.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let (data, id, title) = chart_inputs(props);

        use_effect_with(
            (data, id, title, container_ref),
            move |(data, id, title, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, id, title, data);

                    let (data, id, title) = (data.clone(), id.clone(), title.clone());
                    web_sys::window().map(|window| {
                        EventListener::new(&window, "resize", move |_| {
                            render_chart(&container, &id, &title, &data);
                        })
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

/// Everything the rendered chart depends on; a change to any of it redraws.
fn chart_inputs(props: &TrendChartProps) -> (Rc<Vec<SeriesPoint>>, AttrValue, AttrValue) {
    (props.data.clone(), props.id.clone(), props.title.clone())
}

fn render_chart(container: &HtmlElement, id: &str, title: &str, data: &[SeriesPoint]) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(title, data);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

pub fn build_chart(title: &str, data: &[SeriesPoint]) -> CharmingChart {
    let (title_color, axis_color, grid_color) = ("#1f2937", "#6b7280", "#e5e7eb");

    let labels: Vec<String> = data.iter().map(|p| p.label.clone()).collect();
    let totals: Vec<f64> = data.iter().map(|p| round1(p.value(3))).collect();

    let mut chart = CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .color(PALETTE.iter().map(|c| Color::from(*c)).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().bottom("0"))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("16%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().rotate(30).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("tCO₂e")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    for (index, name) in SCOPE_NAMES.iter().enumerate() {
        let values: Vec<f64> = data.iter().map(|p| round1(p.value(index))).collect();
        chart = chart.series(Bar::new().name(*name).stack("scopes").data(values));
    }

    chart.series(Line::new().name("Total").data(totals))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(id: &'static str, title: &'static str, data: &Rc<Vec<SeriesPoint>>) -> TrendChartProps {
        TrendChartProps {
            id: id.into(),
            data: data.clone(),
            title: title.into(),
        }
    }

    #[test]
    fn test_id_and_title_changes_redraw() {
        let data = Rc::new(vec![SeriesPoint::new("Q1", vec![1.0, 2.0, 3.0, 6.0])]);
        let base = chart_inputs(&props("trend", "Emissions by Scope", &data));

        assert_eq!(base, chart_inputs(&props("trend", "Emissions by Scope", &data)));
        assert_ne!(base, chart_inputs(&props("trend", "Quarterly Emissions", &data)));
        assert_ne!(base, chart_inputs(&props("trend-2", "Emissions by Scope", &data)));
    }
}
