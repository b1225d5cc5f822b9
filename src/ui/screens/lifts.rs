//! Lifts screen.
//!
//! Editable table of lift names and their 1RM. Edits are handed back to the
//! caller as actions; the caller applies them to the registry and reports
//! the outcome through [`LiftsScreen::handle_result`].

use std::ops::RangeInclusive;

use egui::{Button, DragValue, RichText, Ui};

use crate::lifts::{LiftEntry, RegistryError};
use crate::ui::theme::ActionColors;

/// Values the 1RM editor accepts: any non-negative finite weight.
fn max_input_range() -> RangeInclusive<f64> {
    0.0..=f64::MAX
}

/// Lifts screen actions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiftsAction {
    /// Add a new lift.
    Add { name: String, max: f64 },
    /// Save changes to an existing lift.
    Update {
        old_name: String,
        name: String,
        max: f64,
    },
    /// Delete a lift.
    Delete { name: String },
}

/// An in-progress row edit.
#[derive(Debug, Clone, PartialEq)]
struct RowEdit {
    /// Name of the lift being edited, as stored
    original: String,
    name: String,
    max: f64,
}

/// A lift being added.
#[derive(Debug, Clone, Default, PartialEq)]
struct NewLift {
    name: String,
    max: f64,
}

/// Lifts screen state.
#[derive(Debug, Default)]
pub struct LiftsScreen {
    editing: Option<RowEdit>,
    adding: Option<NewLift>,
    error: Option<String>,
}

impl LiftsScreen {
    /// Create a new lifts screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a row is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Whether the new-lift row is open.
    pub fn is_adding(&self) -> bool {
        self.adding.is_some()
    }

    /// Last rejected edit, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Put a row into edit mode.
    pub fn start_editing(&mut self, lift: &LiftEntry) {
        self.editing = Some(RowEdit {
            original: lift.name.clone(),
            name: lift.name.clone(),
            max: lift.max,
        });
        self.error = None;
    }

    /// Open the new-lift row.
    pub fn start_adding(&mut self) {
        self.adding = Some(NewLift::default());
        self.error = None;
    }

    /// Report the outcome of the last action.
    ///
    /// Success closes the open row. A rejected edit keeps it open so the
    /// user can correct and retry.
    pub fn handle_result(&mut self, action: &LiftsAction, result: &Result<(), RegistryError>) {
        match result {
            Ok(()) => {
                match action {
                    LiftsAction::Add { .. } => self.adding = None,
                    LiftsAction::Update { .. } | LiftsAction::Delete { .. } => self.editing = None,
                }
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Render the lifts table.
    pub fn show(&mut self, ui: &mut Ui, lifts: &[LiftEntry]) -> Option<LiftsAction> {
        let mut action = None;

        egui::Grid::new("lifts_table")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 8.0])
            .min_col_width(120.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Lift").strong());
                ui.label(RichText::new("1RM").strong());
                ui.label(RichText::new("Actions").strong());
                ui.end_row();

                for lift in lifts {
                    if let Some(a) = self.show_row(ui, lift) {
                        action = Some(a);
                    }
                    ui.end_row();
                }

                if let Some(a) = self.show_new_row(ui) {
                    action = Some(a);
                }
                ui.end_row();
            });

        if let Some(error) = &self.error {
            ui.add_space(6.0);
            ui.colored_label(ActionColors::ERROR_TEXT, error);
        }

        action
    }

    /// Render one lift row, read-only or in edit mode.
    fn show_row(&mut self, ui: &mut Ui, lift: &LiftEntry) -> Option<LiftsAction> {
        let mut action = None;

        let editing_this = self
            .editing
            .as_ref()
            .is_some_and(|edit| edit.original == lift.name);

        if !editing_this {
            ui.label(&lift.name);
            ui.label(format_max(lift.max));
            if ui
                .add_enabled(
                    self.editing.is_none(),
                    Button::new("Edit").fill(ActionColors::PRIMARY),
                )
                .clicked()
            {
                self.start_editing(lift);
            }
            return None;
        }

        let mut cancel = false;
        if let Some(edit) = self.editing.as_mut() {
            ui.text_edit_singleline(&mut edit.name);
            ui.add(DragValue::new(&mut edit.max).range(max_input_range()).speed(2.5));
            ui.horizontal(|ui| {
                if ui.add(Button::new("Save").fill(ActionColors::SAVE)).clicked() {
                    action = Some(LiftsAction::Update {
                        old_name: edit.original.clone(),
                        name: edit.name.clone(),
                        max: edit.max,
                    });
                }
                if ui.add(Button::new("Cancel").fill(ActionColors::CANCEL)).clicked() {
                    cancel = true;
                }
                if ui.add(Button::new("Delete").fill(ActionColors::DELETE)).clicked() {
                    action = Some(LiftsAction::Delete {
                        name: edit.original.clone(),
                    });
                }
            });
        }

        if cancel {
            self.editing = None;
            self.error = None;
        }

        action
    }

    /// Render the trailing row: either the "+" button or the new-lift editor.
    fn show_new_row(&mut self, ui: &mut Ui) -> Option<LiftsAction> {
        let mut action = None;

        if self.adding.is_none() {
            ui.label("");
            ui.label("");
            if ui.add(Button::new("+").fill(ActionColors::PRIMARY)).clicked() {
                self.start_adding();
            }
            return None;
        }
        let Some(new_lift) = self.adding.as_mut() else {
            return None;
        };

        let mut cancel = false;
        ui.add(egui::TextEdit::singleline(&mut new_lift.name).hint_text("Lift name"));
        ui.add(DragValue::new(&mut new_lift.max).range(max_input_range()).speed(2.5));
        ui.horizontal(|ui| {
            if ui.add(Button::new("Save").fill(ActionColors::SAVE)).clicked() {
                action = Some(LiftsAction::Add {
                    name: new_lift.name.clone(),
                    max: new_lift.max,
                });
            }
            if ui.add(Button::new("Cancel").fill(ActionColors::CANCEL)).clicked() {
                cancel = true;
            }
        });

        if cancel {
            self.adding = None;
            self.error = None;
        }

        action
    }
}

/// Format a 1RM without a trailing `.0`.
fn format_max(max: f64) -> String {
    if max.fract() == 0.0 {
        format!("{:.0}", max)
    } else {
        format!("{}", max)
    }
}
