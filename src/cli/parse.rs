use graphlab_core::format::OutputFormat;
use graphlab_core::search::{Order, Selection};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse Dijkstra selection strategy from string
pub fn parse_selection(s: &str) -> std::result::Result<Selection, String> {
    s.parse::<Selection>().map_err(|e| e.to_string())
}

/// Parse traversal order from string
pub fn parse_order(s: &str) -> std::result::Result<Order, String> {
    s.parse::<Order>().map_err(|e| e.to_string())
}
