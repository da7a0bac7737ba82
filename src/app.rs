//! The eframe application: one `update` call is one game frame

use anyhow::{Result, anyhow};
use egui::{Context, LayerId, ViewportCommand};

use crate::event::{self, Event};
use crate::renderer::{EguiRenderer, draw_frame, native_options};
use crate::sim::{GamePhase, GameState, TickInput, tick};

pub struct BricksApp {
    state: GameState,
    closing: bool,
}

impl BricksApp {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            closing: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one frame's event. Returns false once the loop should stop.
    pub fn step(&mut self, event: Event) -> bool {
        let input = match event {
            Event::Quit => {
                log::info!("Quit requested");
                return false;
            }
            Event::Key(direction) => TickInput {
                paddle: Some(direction),
            },
            Event::None => TickInput::default(),
        };
        tick(&mut self.state, &input);
        self.state.phase == GamePhase::Running
    }
}

impl eframe::App for BricksApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.closing {
            return;
        }

        let running = self.step(event::poll(ctx));

        let painter = ctx.layer_painter(LayerId::background());
        let mut renderer = EguiRenderer::new(painter, self.state.settings.font_size);
        draw_frame(&mut renderer, &self.state);

        if running {
            ctx.request_repaint();
        } else {
            self.closing = true;
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

/// Open the window and run until the game is lost or the player quits
pub fn run(state: GameState) -> Result<()> {
    let options = native_options(&state.settings);
    let title = state.settings.window_title.clone();
    log::info!("Starting with {} bricks, {} lives", state.level.len(), state.lives);
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(BricksApp::new(state)))),
    )
    .map_err(|e| anyhow!("failed to run window: {e}"))
}
