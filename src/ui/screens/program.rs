//! Program screen.
//!
//! Shows the selected week's prescription for every lift, with buttons to
//! step between weeks.

use egui::{Button, RichText, Ui};

use crate::lifts::LiftEntry;
use crate::program::{program_table, WeekCursor};
use crate::ui::theme::ActionColors;

/// Program screen state.
#[derive(Debug, Default)]
pub struct ProgramScreen {
    cursor: WeekCursor,
}

impl ProgramScreen {
    /// Create a program screen starting at the first week.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a program screen starting at a configured week.
    pub fn starting_at(week_index: u8) -> Self {
        Self {
            cursor: WeekCursor::starting_at(week_index),
        }
    }

    /// Currently selected week.
    pub fn cursor(&self) -> &WeekCursor {
        &self.cursor
    }

    /// Render the program table and week navigation.
    pub fn show(&mut self, ui: &mut Ui, lifts: &[LiftEntry]) {
        let lines = program_table(lifts, self.cursor.week());

        egui::Grid::new("program_table")
            .num_columns(6)
            .striped(true)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for header in ["Lift", "Sets", "Reps", "Percentage", "Weight", "Total"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for line in &lines {
                    ui.label(RichText::new(&line.name).strong());
                    ui.label(line.row.sets.to_string());
                    ui.label(line.row.reps.to_string());
                    ui.label(line.row.percentage_label());
                    ui.label(line.row.weight_label());
                    ui.label(line.row.total.to_string());
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        self.render_week_navigation(ui);
    }

    /// Render the `<<` / `Week N` / `>>` row.
    fn render_week_navigation(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    self.cursor.can_retreat(),
                    Button::new("<<").fill(ActionColors::PRIMARY),
                )
                .clicked()
            {
                let week = self.cursor.retreat();
                tracing::debug!("Selected {}", week);
            }

            ui.label(RichText::new(self.cursor.label()).weak());

            if ui
                .add_enabled(
                    self.cursor.can_advance(),
                    Button::new(">>").fill(ActionColors::PRIMARY),
                )
                .clicked()
            {
                let week = self.cursor.advance();
                tracing::debug!("Selected {}", week);
            }
        });
    }
}
