use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors, stroke widths and text used when building a trend frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendStyle {
    pub background_color: Color,
    pub background_corner_radius: f64,
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub marker_radius: f64,
    pub grid_line_color: Color,
    pub axis_line_color: Color,
    pub tick_label_color: Color,
    pub tick_font_size_px: f64,
    pub axis_title_color: Color,
    pub axis_title_font_size_px: f64,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub hover_guide_color: Color,
    /// Dash and gap length of the hover guide line.
    pub hover_guide_dash: u8,
    pub hover_marker_radius: f64,
    pub tooltip_fill_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub notice_fill_color: Color,
    pub notice_text_color: Color,
    pub no_data_text: String,
    pub too_small_text: String,
}

impl Default for TrendStyle {
    fn default() -> Self {
        let ink = Color::rgb8(15, 23, 42);
        let slate_100 = Color::rgb8(241, 245, 249);
        let slate_400 = Color::rgb8(148, 163, 184);
        let slate_500 = Color::rgb8(100, 116, 139);
        Self {
            background_color: Color::WHITE,
            background_corner_radius: 12.0,
            series_line_color: ink,
            series_line_width: 2.0,
            marker_radius: 2.5,
            grid_line_color: slate_100,
            axis_line_color: slate_400,
            tick_label_color: slate_500,
            tick_font_size_px: 10.0,
            axis_title_color: Color::rgb8(51, 65, 85),
            axis_title_font_size_px: 11.0,
            x_axis_title: "Date".to_owned(),
            y_axis_title: "Count".to_owned(),
            hover_guide_color: slate_400,
            hover_guide_dash: 3,
            hover_marker_radius: 4.0,
            tooltip_fill_color: Color::WHITE,
            tooltip_border_color: Color::rgb8(203, 213, 225),
            tooltip_text_color: ink,
            tooltip_font_size_px: 11.0,
            notice_fill_color: slate_100,
            notice_text_color: slate_400,
            no_data_text: "No data".to_owned(),
            too_small_text: "Chart area too small".to_owned(),
        }
    }
}

impl TrendStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.background_color,
            self.series_line_color,
            self.grid_line_color,
            self.axis_line_color,
            self.tick_label_color,
            self.axis_title_color,
            self.hover_guide_color,
            self.tooltip_fill_color,
            self.tooltip_border_color,
            self.tooltip_text_color,
            self.notice_fill_color,
            self.notice_text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("series line width", self.series_line_width),
            ("marker radius", self.marker_radius),
            ("tick font size", self.tick_font_size_px),
            ("axis title font size", self.axis_title_font_size_px),
            ("hover marker radius", self.hover_marker_radius),
            ("tooltip font size", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        if !self.background_corner_radius.is_finite() || self.background_corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "background corner radius must be finite and >= 0".to_owned(),
            ));
        }
        if self.no_data_text.is_empty() || self.too_small_text.is_empty() {
            return Err(ChartError::InvalidData(
                "notice texts must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
