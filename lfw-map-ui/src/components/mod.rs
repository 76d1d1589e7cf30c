//! Reusable Dioxus RSX components for the Firewatch dashboard.

mod error_display;
mod loading_spinner;
mod map_view;
mod month_buttons;
mod raster_panel;
mod risk_panel;
mod search_box;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_view::MapView;
pub use month_buttons::MonthButtons;
pub use raster_panel::RasterPanel;
pub use risk_panel::RiskPanel;
pub use search_box::SearchBox;
