pub mod bar_chart;
pub mod donut_chart;
pub mod line_chart;
pub mod trend_chart;

/// Series colors shared by the SVG charts and legends.
pub const PALETTE: [&str; 7] = [
    "#10b981", "#3b82f6", "#f59e0b", "#8b5cf6", "#ef4444", "#14b8a6", "#64748b",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
