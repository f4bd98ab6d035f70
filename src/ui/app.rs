//! Main application for the Mancala GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::config::AppConfig;
use crate::game::{GameOutcome, Player, Winner};
use super::board_view::{BoardInput, BoardView};
use super::game_state::GameState;
use super::theme::*;

/// Main Mancala application
pub struct MancalaApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl MancalaApp {
    /// Create the app from loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            state: GameState::new(&config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn new_game(&mut self) {
        tracing::info!("new game");
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "You: {}  |  Depth {}",
                        self.state.game.human_side(),
                        self.state.game.depth()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_scores_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game.outcome() {
                    ui.add_space(10.0);
                    if self.render_game_over_card(ui, &outcome) {
                        self.new_game();
                    }
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("MANCALA").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Kalah, 6 pits x 4 seeds").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Turn banner
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let game = &self.state.game;
            let (title, accent) = match game.player(game.current_side()) {
                Player::Human => ("Human's Turn", HUMAN_COLOR),
                Player::Computer => ("Computer's Turn", COMPUTER_COLOR),
            };

            ui.label(RichText::new(title).size(18.0).strong().color(accent));

            let status = if self.state.is_ai_thinking() {
                let secs = self
                    .state
                    .ai_thinking_elapsed()
                    .map_or(0.0, |d| d.as_secs_f32());
                (format!("Computer thinking... {secs:.1}s"), TIMER_WARNING)
            } else if game.is_over() {
                ("Game Over".to_string(), WIN_HIGHLIGHT)
            } else {
                let secs = self.state.move_timer.elapsed().as_secs_f32();
                (format!("Pick a pit ({secs:.0}s)"), TIMER_NORMAL)
            };
            ui.label(RichText::new(status.0).size(12.0).color(status.1));
        });
    }

    fn render_scores_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let game = &self.state.game;
            let board = game.board();
            for side in [game.human_side(), game.computer_side()] {
                let (name, color) = match game.player(side) {
                    Player::Human => ("Human", HUMAN_COLOR),
                    Player::Computer => ("Computer", COMPUTER_COLOR),
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).size(14.0).strong().color(color));
                    ui.label(
                        RichText::new(format!("store {}", side.store_number()))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(board.store(side).to_string())
                                .size(20.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
                ui.label(
                    RichText::new(format!("{} seeds in pits", board.side_seeds(side)))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(4.0);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("New Game").clicked() {
                    self.new_game();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                ui.label(
                    RichText::new(format!("Score: {}  Depth: {}", result.score, result.depth))
                        .size(11.0)
                        .color(TIMER_NORMAL),
                );
                ui.label(
                    RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                if let Some(pit) = result.best_move {
                    ui.label(
                        RichText::new(format!("-> {pit}"))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Returns `true` when New Game is clicked
    fn render_game_over_card(&self, ui: &mut egui::Ui, outcome: &GameOutcome) -> bool {
        let accent = match outcome.winner {
            Winner::Human => HUMAN_COLOR,
            Winner::Computer => COMPUTER_COLOR,
            Winner::Tie => TEXT_PRIMARY,
        };
        let mut clicked = false;

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(outcome.announcement()).size(14.0).strong().color(accent));
                    ui.add_space(12.0);
                    clicked = ui.button("New Game").clicked();
                });
            });
        clicked
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let game = &self.state.game;
            let clickable = if game.is_human_turn() && !self.state.is_ai_thinking() {
                game.legal_moves()
            } else {
                Vec::new()
            };
            let input = BoardInput {
                board: game.board(),
                human_side: game.human_side(),
                clickable: &clickable,
                last_landing: game.last_landing(),
            };

            ui.add_space(20.0);
            let clicked = ui
                .vertical_centered(|ui| self.board_view.show(ui, &input))
                .inner;

            if let Some(pit) = clicked {
                if let Err(msg) = self.state.try_sow(pit) {
                    tracing::warn!(pit = %pit, error = %msg, "click rejected");
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, undo, debug) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::D),
            )
        });
        if debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for MancalaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.game.is_computer_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || !self.state.game.is_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
