use egui::{Color32, Visuals};

pub const BACKGROUND_DARK: Color32 = Color32::from_rgb(30, 30, 30);
pub const PANEL_LIGHT: Color32 = Color32::from_rgb(45, 45, 45);
pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(224, 224, 224);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(158, 158, 158);
pub const PRIMARY_RED: Color32 = Color32::from_rgb(229, 57, 53);

pub fn visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.widgets.noninteractive.bg_fill = BACKGROUND_DARK;
    visuals.override_text_color = Some(TEXT_LIGHT);
    visuals
}
