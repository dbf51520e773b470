use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Pos2};

use crate::board::{self, Board};

mod render_utils;
pub mod starfield;
mod ui;

use starfield::{FilterState, Playback};

pub struct StarboardApp {
    board_file: Option<PathBuf>,
    initial_window: (i32, i32),
    state: AppState,
    reload_rx: Option<Receiver<Result<Board, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Board, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Starfield,
    List,
    Companies,
}

struct ViewModel {
    board: Board,
    filters: FilterState,
    view_mode: ViewMode,
    search: String,
    search_match_cache: Option<SearchMatchCache>,
    selected: Option<String>,
    hovered: Option<String>,
    last_pointer: Option<Pos2>,
    playback: Playback,
    star_density: f32,
    trail_strength: f32,
    show_connections: bool,
    show_hud: bool,
    frame_entity_count: usize,
    frame_link_count: usize,
}

struct SearchMatchCache {
    query: String,
    matches: Arc<HashSet<usize>>,
}

impl StarboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        board_file: Option<PathBuf>,
        initial_window: (i32, i32),
    ) -> Self {
        let state = Self::start_load(board_file.clone());
        Self {
            board_file,
            initial_window,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(board_file: Option<PathBuf>) -> Receiver<Result<Board, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = match &board_file {
                Some(path) => board::load_board(path).map_err(|error| {
                    log::error!("board load failed: {error:#}");
                    error.to_string()
                }),
                None => Ok(board::sample_board()),
            };
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(board_file: Option<PathBuf>) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(board_file),
        }
    }
}

impl eframe::App for StarboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(loaded) => {
                            AppState::Ready(Box::new(ViewModel::new(loaded, self.initial_window)))
                        }
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading the board...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the board");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.board_file.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.board_file.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            transition = Some(match result {
                                Ok(loaded) => AppState::Ready(Box::new(ViewModel::new(
                                    loaded,
                                    self.initial_window,
                                ))),
                                Err(error) => AppState::Error(error),
                            });
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(AppState::Error("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
