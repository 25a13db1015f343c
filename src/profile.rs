use chrono::NaiveDate;
use egui::{pos2, vec2, Button, Color32, Frame, Pos2, Rect, RichText, Sense, Shape, Stroke, Ui};

use crate::theme::{BORDER, PANEL_LIGHT, PRIMARY_RED, TEXT_LIGHT, TEXT_MUTED};

const AVATAR_SIZE: f32 = 120.0;
const ELLIPSE_POINTS: usize = 64;

pub const EDIT_NOT_READY: &str = "Edit profile functionality is not yet implemented.";

/// Fixed profile shown on the profile tab.
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub member_since: Option<NaiveDate>,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Demo User",
            email: "demo.user@example.com",
            member_since: NaiveDate::from_ymd_opt(2024, 1, 1),
        }
    }
}

impl Profile {
    pub fn member_since_label(&self) -> String {
        match self.member_since {
            Some(date) => format!("Member Since: {}", date.format("%B %Y")),
            None => String::from("Member Since: unknown"),
        }
    }
}

/// Head and shoulders silhouette inside a circular avatar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarGeometry {
    pub background: Rect,
    pub head: Rect,
    pub shoulders: Rect,
}

impl AvatarGeometry {
    pub fn new(rect: Rect) -> Self {
        let width = rect.width().floor();
        let height = rect.height().floor();

        let background = Rect::from_min_size(rect.min, vec2(width - 1.0, height - 1.0));

        let head_diameter = (width / 3.0).floor();
        let head_x = ((width - head_diameter) / 2.0).floor();
        let head_y = (height / 4.0).floor();
        let head = Rect::from_min_size(
            rect.min + vec2(head_x, head_y),
            vec2(head_diameter, head_diameter),
        );

        let shoulder_width = (width * 2.0 / 3.0).floor();
        let shoulder_height = (height / 3.0).floor();
        let shoulder_x = ((width - shoulder_width) / 2.0).floor();
        let shoulder_y = head_y + head_diameter - 5.0;
        let shoulders = Rect::from_min_size(
            rect.min + vec2(shoulder_x, shoulder_y),
            vec2(shoulder_width, shoulder_height),
        );

        AvatarGeometry { background, head, shoulders }
    }
}

fn ellipse(rect: Rect, fill: Color32) -> Shape {
    let center = rect.center();
    let radius = rect.size() / 2.0;

    let points: Vec<Pos2> = (0..ELLIPSE_POINTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_POINTS as f32 * std::f32::consts::TAU;
            pos2(center.x + radius.x * angle.cos(), center.y + radius.y * angle.sin())
        })
        .collect();

    Shape::convex_polygon(points, fill, Stroke::none())
}

fn avatar(ui: &mut Ui) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::hover());

    if ui.is_rect_visible(rect) {
        let geometry = AvatarGeometry::new(rect);
        let painter = ui.painter();

        painter.add(ellipse(geometry.background, BORDER));
        painter.add(ellipse(geometry.head, TEXT_MUTED));
        painter.add(ellipse(geometry.shoulders, TEXT_MUTED));
    }

    response
}

pub struct ProfileView {
    profile: Profile,
    edit_notice_open: bool,
}

impl ProfileView {
    pub fn new(profile: Profile) -> Self {
        ProfileView {
            profile,
            edit_notice_open: false,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, ui: &mut Ui) {
        Frame::none()
            .fill(PANEL_LIGHT)
            .stroke(Stroke::new(1.0, BORDER))
            .inner_margin(egui::style::Margin::same(25.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    avatar(ui);
                    ui.add_space(20.0);

                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(self.profile.name)
                                .size(24.0)
                                .strong()
                                .color(TEXT_LIGHT),
                        );
                        ui.add_space(15.0);
                        ui.label(
                            RichText::new(format!("\u{2709}  {}", self.profile.email))
                                .size(14.0)
                                .color(TEXT_MUTED),
                        );
                        ui.add_space(8.0);
                        let member_since = self.profile.member_since_label();
                        ui.label(
                            RichText::new(format!("\u{1F4C5}  {}", member_since))
                                .size(14.0)
                                .color(TEXT_MUTED),
                        );
                        ui.add_space(15.0);

                        let caption = RichText::new("Edit Profile").strong().color(Color32::BLACK);
                        let edit = Button::new(caption).fill(PRIMARY_RED);
                        if ui.add(edit).clicked() {
                            log::info!("Edit profile requested");
                            self.edit_notice_open = true;
                        }
                    });
                });
            });

        egui::Window::new("In Progress")
            .open(&mut self.edit_notice_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(EDIT_NOT_READY);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_fields() {
        let profile = Profile::default();
        assert_eq!(profile.name, "Demo User");
        assert_eq!(profile.email, "demo.user@example.com");
        assert_eq!(profile.member_since_label(), "Member Since: January 2024");
    }

    #[test]
    fn avatar_head_sits_above_shoulders() {
        let area = Rect::from_min_size(pos2(10.0, 20.0), vec2(120.0, 120.0));
        let geometry = AvatarGeometry::new(area);

        let background = Rect::from_min_size(pos2(10.0, 20.0), vec2(119.0, 119.0));
        assert_eq!(geometry.background, background);
        assert_eq!(geometry.head, Rect::from_min_size(pos2(50.0, 50.0), vec2(40.0, 40.0)));
        assert_eq!(geometry.shoulders, Rect::from_min_size(pos2(30.0, 85.0), vec2(80.0, 40.0)));
        assert!(geometry.shoulders.min.y < geometry.head.max.y);
    }
}
