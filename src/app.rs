//! Main application state and egui integration.
//!
//! Owns the single lift registry for the process and wires the two screens
//! to it. Lifts are re-read from the registry every frame, so the program
//! table always reflects the latest edits.

use anyhow::Context;
use eframe::egui;

use liftplan::lifts::{default_lifts, LiftRegistry};
use liftplan::storage::config::{load_config, save_config, AppConfig};
use liftplan::storage::{Database, KeyValueStore, MemoryStore};
use liftplan::ui::screens::{LiftsAction, LiftsScreen, ProgramScreen};
use liftplan::ui::theme::{ActionColors, Theme};

type AppRegistry = LiftRegistry<Box<dyn KeyValueStore>>;

/// Open the on-disk registry described by `config`.
fn open_registry(config: &AppConfig) -> anyhow::Result<AppRegistry> {
    let path = config.database_path();
    let db = Database::open(&path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;

    let store: Box<dyn KeyValueStore> = Box::new(db);
    LiftRegistry::open(store, config.registry.on_rename_collision).context("Failed to load lifts")
}

/// Session-only registry used when durable storage is unavailable.
fn session_registry(config: &AppConfig) -> AppRegistry {
    let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    LiftRegistry::with_lifts(store, default_lifts(), config.registry.on_rename_collision)
}

/// Main application state.
pub struct LiftPlanApp {
    /// Lift registry
    registry: AppRegistry,
    /// UI theme
    theme: Theme,
    /// Lifts table state
    lifts_screen: LiftsScreen,
    /// Program table state
    program_screen: ProgramScreen,
    /// Persistent warning shown in the status bar
    status: Option<String>,
    /// Loaded configuration, written back when UI preferences change
    config: AppConfig,
}

impl LiftPlanApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig {
                data_dir: liftplan::storage::config::get_data_dir(),
                ..Default::default()
            }
        });

        let theme = Theme::from_dark(config.ui.dark_theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        let (registry, status) = match open_registry(&config) {
            Ok(registry) => (registry, None),
            Err(e) => {
                tracing::error!("{:#}", e);
                (
                    session_registry(&config),
                    Some(format!("Storage unavailable, changes will not be saved: {:#}", e)),
                )
            }
        };

        Self {
            registry,
            theme,
            lifts_screen: LiftsScreen::new(),
            program_screen: ProgramScreen::starting_at(config.ui.start_week),
            status,
            config,
        }
    }

    /// Apply a lifts-screen action to the registry.
    fn apply(&mut self, action: LiftsAction) {
        let result = match &action {
            LiftsAction::Add { name, max } => self.registry.add(name, *max),
            LiftsAction::Update {
                old_name,
                name,
                max,
            } => self.registry.rename(old_name, name, *max),
            LiftsAction::Delete { name } => self.registry.remove(name).map(|_| ()),
        };

        if let Err(e) = &result {
            if e.is_validation() {
                tracing::info!("Rejected edit: {}", e);
            } else {
                tracing::error!("Failed to apply edit: {}", e);
                self.status = Some(e.to_string());
            }
        }

        self.lifts_screen.handle_result(&action, &result);
    }

    /// Toggle the theme between dark and light and remember the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.dark_theme = self.theme.is_dark();
        if let Err(e) = save_config(&self.config) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }
}

impl eframe::App for LiftPlanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("LiftPlan");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme.icon()).clicked() {
                        self.toggle_theme(ctx);
                    }
                    ui.label(format!("{} lifts", self.registry.len()));
                });
            });
        });

        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.colored_label(ActionColors::ERROR_TEXT, status);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let lifts = self.registry.snapshot();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("One-Rep Maxes");
                ui.add_space(8.0);
                let action = self.lifts_screen.show(ui, &lifts);

                ui.add_space(24.0);
                ui.separator();
                ui.heading("Program");
                ui.add_space(8.0);
                self.program_screen.show(ui, &lifts);

                if let Some(action) = action {
                    self.apply(action);
                }
            });
        });
    }
}
