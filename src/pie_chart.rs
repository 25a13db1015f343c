use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, Widget};

use crate::{
    ledger::Transaction,
    stats::{category_shares, total_expense, total_income, CategoryShare},
    theme::TEXT_LIGHT,
    utils::format_inr,
};

pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(229, 57, 53),
    Color32::from_rgb(26, 152, 219),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(52, 73, 94),
    Color32::from_rgb(149, 165, 166),
];

pub const TITLE: &str = "Expense Breakdown by Category";
pub const NO_DATA: &str = "No expense data to display.";

const TITLE_POS: Vec2 = Vec2::new(20.0, 30.0);
const CHART_OFFSET: Vec2 = Vec2::new(50.0, 80.0);
const CHART_MARGIN: f32 = 100.0;
const LEGEND_GAP: f32 = 50.0;
const LEGEND_ROW: f32 = 25.0;
const SWATCH: f32 = 15.0;
const LEGEND_TEXT_OFFSET: f32 = 25.0;

// Largest sweep painted as one polygon; a pie slice wider than 180° is not convex.
const MAX_SEGMENT_DEGREES: f32 = 90.0;

/// Color for the category at `index` in sorted order. Wraps around once the
/// palette runs out.
pub fn palette_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// One pie slice, angles in degrees with 0° at three o'clock going
/// counter-clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub category: String,
    pub start_angle: f64,
    pub arc_angle: f64,
    pub color: Color32,
}

impl Slice {
    /// Start angle as painted, truncated to a whole degree.
    pub fn draw_start(&self) -> i32 {
        self.start_angle as i32
    }

    /// Sweep as painted, rounded up to a whole degree. Summed over many
    /// slices this can overshoot 360°; later slices paint over the excess.
    pub fn draw_sweep(&self) -> i32 {
        self.arc_angle.ceil() as i32
    }
}

pub fn layout_slices(shares: &[CategoryShare]) -> Vec<Slice> {
    let mut start_angle = 0.0;

    shares
        .iter()
        .enumerate()
        .map(|(index, share)| {
            let arc_angle = share.percentage / 100.0 * 360.0;
            let slice = Slice {
                category: share.category.clone(),
                start_angle,
                arc_angle,
                color: palette_color(index),
            };
            start_angle += arc_angle;
            slice
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub color: Color32,
    pub category: String,
    pub percentage: f64,
    pub amount: f64,
}

impl LegendEntry {
    pub fn label(&self) -> String {
        format!("{} ({:.1}%) - {}", self.category, self.percentage, format_inr(self.amount))
    }
}

pub fn legend_entries(shares: &[CategoryShare]) -> Vec<LegendEntry> {
    shares
        .iter()
        .enumerate()
        .map(|(index, share)| LegendEntry {
            color: palette_color(index),
            category: share.category.clone(),
            percentage: share.percentage,
            amount: share.total_amount,
        })
        .collect()
}

/// Where the chart and its legend go inside the available area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub chart: Rect,
    pub legend_origin: Pos2,
}

impl ChartLayout {
    pub fn new(area: Rect) -> Self {
        let diameter = (area.width() / 2.0)
            .floor()
            .min(area.height() - CHART_MARGIN)
            .max(0.0);

        let chart = Rect::from_min_size(area.min + CHART_OFFSET, Vec2::splat(diameter));
        let legend_origin = pos2(chart.max.x + LEGEND_GAP, chart.min.y);

        ChartLayout { chart, legend_origin }
    }

    pub fn diameter(&self) -> f32 {
        self.chart.width()
    }

    pub fn swatch(&self, row: usize) -> Rect {
        Rect::from_min_size(
            self.legend_origin + vec2(0.0, row as f32 * LEGEND_ROW),
            Vec2::splat(SWATCH),
        )
    }

    pub fn label_pos(&self, row: usize) -> Pos2 {
        self.swatch(row).left_center() + vec2(LEGEND_TEXT_OFFSET, 0.0)
    }
}

/// Slice whose exact arc contains `angle` (degrees, any range).
pub fn slice_at(slices: &[Slice], angle: f64) -> Option<&Slice> {
    let angle = angle.rem_euclid(360.0);
    slices
        .iter()
        .find(|s| angle >= s.start_angle && angle < s.start_angle + s.arc_angle)
}

/// Angle of `point` around `center` in the slice convention, or `None`
/// outside the circle.
pub fn angle_at(center: Pos2, radius: f32, point: Pos2) -> Option<f64> {
    let offset = point - center;
    if offset.length() > radius {
        return None;
    }
    Some(f64::from((-offset.y).atan2(offset.x).to_degrees()).rem_euclid(360.0))
}

/// Convex polygons covering a slice of the circle at `center`. The sweep is
/// limited to one full turn, whatever the data says.
pub fn slice_shapes(
    center: Pos2,
    radius: f32,
    start: i32,
    sweep: i32,
    color: Color32,
) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let start = start.rem_euclid(360);
    let sweep = sweep.clamp(0, 360);
    let end = start.saturating_add(sweep) as f32;
    let mut from = start as f32;

    while from < end {
        let to = (from + MAX_SEGMENT_DEGREES).min(end);
        let steps = ((to - from).ceil() as usize).max(1);

        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for step in 0..=steps {
            let angle = (from + (to - from) * step as f32 / steps as f32).to_radians();
            points.push(center + radius * vec2(angle.cos(), -angle.sin()));
        }

        shapes.push(Shape::convex_polygon(points, color, Stroke::none()));
        from = to;
    }

    shapes
}

pub struct PieChart {
    shares: Vec<CategoryShare>,
}

impl PieChart {
    pub fn new(shares: Vec<CategoryShare>) -> Self {
        PieChart { shares }
    }
}

impl Widget for PieChart {
    fn ui(self, ui: &mut Ui) -> egui::Response {
        let desired_size = ui.available_size();

        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter_at(rect);

        painter.text(
            rect.min + TITLE_POS,
            Align2::LEFT_BOTTOM,
            TITLE,
            FontId::proportional(18.0),
            TEXT_LIGHT,
        );

        if self.shares.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                NO_DATA,
                FontId::proportional(14.0),
                TEXT_LIGHT,
            );
            return response;
        }

        let layout = ChartLayout::new(rect);
        let center = layout.chart.center();
        let radius = 0.5 * layout.diameter();

        let slices = layout_slices(&self.shares);
        for slice in &slices {
            painter.extend(slice_shapes(
                center,
                radius,
                slice.draw_start(),
                slice.draw_sweep(),
                slice.color,
            ));
        }

        for (row, entry) in legend_entries(&self.shares).iter().enumerate() {
            painter.rect_filled(layout.swatch(row), 0.0, entry.color);
            painter.text(
                layout.label_pos(row),
                Align2::LEFT_CENTER,
                entry.label(),
                FontId::proportional(14.0),
                TEXT_LIGHT,
            );
        }

        let hovered = ui
            .input()
            .pointer
            .hover_pos()
            .and_then(|pos| angle_at(center, radius, pos))
            .and_then(|angle| slice_at(&slices, angle));

        match hovered {
            Some(slice) => response.on_hover_text(format!(
                "{} ({:.1}%)",
                slice.category,
                slice.arc_angle / 3.6
            )),
            None => response,
        }
    }
}

/// Expense chart tab. Holds only the most recent transaction list handed to it.
pub struct ExpenseChartPanel {
    transactions: Vec<Transaction>,
}

impl ExpenseChartPanel {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        ExpenseChartPanel { transactions }
    }

    /// Replaces the data wholesale. The caller is expected to request a
    /// repaint afterwards.
    pub fn update_data(&mut self, transactions: Vec<Transaction>) {
        log::info!(
            "Chart data replaced: {} -> {} transactions",
            self.transactions.len(),
            transactions.len()
        );
        self.transactions = transactions;
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn shares(&self) -> Vec<CategoryShare> {
        category_shares(&self.transactions)
    }

    pub fn show(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Expenses: {}", format_inr(total_expense(&self.transactions))));
            ui.separator();
            ui.label(format!("Income: {}", format_inr(total_income(&self.transactions))));
        });

        ui.add(PieChart::new(self.shares()));
    }
}
