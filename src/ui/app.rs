//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel};
use tracing::trace;

use super::board_view::BoardView;
use super::theme::*;
use crate::config::AppConfig;
use crate::game::{GameState, Intent, Status};

/// Main tic-tac-toe application.
///
/// Holds the latest published `GameState` and replaces it with whatever
/// the engine returns for each intent.
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: GameState::with_order(config.ascending),
            board_view: BoardView::default(),
        }
    }

    /// Latest published state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Forward one intent to the engine and publish the result
    pub fn dispatch(&mut self, intent: Intent) {
        let next = self.state.dispatch(intent);
        if next == self.state {
            trace!(?intent, "intent had no effect");
        }
        self.state = next;
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with status, sort toggle and move list
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_history_card(ui);
            });
    }

    /// Render status header and sort button
    fn render_status_card(&mut self, ui: &mut egui::Ui) {
        let status = self.state.status();
        let color = match status {
            Status::Winner(_) => STATUS_WINNER,
            Status::Draw => STATUS_DRAW,
            Status::NextPlayer(_) => TEXT_PRIMARY,
        };

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(status.to_string()).size(18.0).strong().color(color));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.state.sort_label()).clicked() {
                        self.dispatch(Intent::ToggleSort);
                    }
                });
            });
        });
    }

    /// Render the move list, one button per history entry
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let mut selected = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                for entry in self.state.move_list() {
                    let text = if entry.is_current {
                        RichText::new(&entry.label).strong().color(TEXT_PRIMARY)
                    } else {
                        RichText::new(&entry.label).color(TEXT_SECONDARY)
                    };
                    if ui.selectable_label(entry.is_current, text).clicked() {
                        selected = Some(entry.step);
                    }
                }
            });
        });

        if let Some(step) = selected {
            self.dispatch(Intent::JumpTo(step));
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let current = self.state.current();
            let clicked = ui
                .vertical_centered(|ui| {
                    ui.add_space(10.0);
                    self.board_view.show(
                        ui,
                        &current.board,
                        self.state.next_player(),
                        current.outcome.winning_line(),
                        self.state.is_over(),
                    )
                })
                .inner;

            if let Some(idx) = clicked {
                self.dispatch(Intent::ClickCell(idx));
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let step = self.state.current_step();
        let last = self.state.len() - 1;

        let intents: Vec<Intent> = ctx.input(|i| {
            let mut intents = Vec::new();

            // S - Toggle move-list order
            if i.key_pressed(egui::Key::S) {
                intents.push(Intent::ToggleSort);
            }

            // Left/Right - Step through history
            if i.key_pressed(egui::Key::ArrowLeft) && step > 0 {
                intents.push(Intent::JumpTo(step - 1));
            }
            if i.key_pressed(egui::Key::ArrowRight) && step < last {
                intents.push(Intent::JumpTo(step + 1));
            }

            intents
        });

        for intent in intents {
            self.dispatch(intent);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellIndex;

    #[test]
    fn test_dispatch_publishes_new_state() {
        let mut app = TicTacToeApp::default();
        app.dispatch(Intent::ClickCell(CellIndex::new(4).unwrap()));
        assert_eq!(app.state().current_step(), 1);

        app.dispatch(Intent::JumpTo(0));
        assert_eq!(app.state().current_step(), 0);
        assert_eq!(app.state().len(), 2);
    }

    #[test]
    fn test_config_sets_initial_order() {
        let config = AppConfig {
            ascending: false,
            ..AppConfig::default()
        };
        assert!(!TicTacToeApp::with_config(&config).state().is_ascending());
    }
}
