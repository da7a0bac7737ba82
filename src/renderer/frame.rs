//! Draws one frame of the game

use super::Renderer;
use crate::color::Color;
use crate::sim::GameState;

/// Clear, draw HUD, paddle, ball and bricks, present.
///
/// A HUD text failure is logged and the rest of the frame still draws.
pub fn draw_frame<R: Renderer>(ren: &mut R, state: &GameState) {
    ren.clear(Color::BLACK);

    let lives = format!("Lives: {}", state.lives);
    let (x, y) = (state.settings.hud_x, state.settings.hud_y);
    if let Err(e) = ren.draw_text(&lives, x, y, Color::WHITE) {
        log::warn!("Failed to draw HUD: {e:#}");
    }

    let paddle = &state.paddle;
    ren.draw_rect(
        paddle.pos.x,
        paddle.pos.y,
        paddle.size.x,
        paddle.size.y,
        paddle.color,
    );

    let ball = &state.ball;
    ren.draw_rect(ball.pos.x, ball.pos.y, ball.size.x, ball.size.y, ball.color);

    for brick in state.level.iter() {
        ren.draw_rect(brick.pos.x, brick.pos.y, brick.size.x, brick.size.y, brick.color);
    }

    ren.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Brick, Level};
    use anyhow::{Result, bail};

    #[derive(Debug, PartialEq)]
    enum Cmd {
        Clear(Color),
        Rect(i32, i32, i32, i32, Color),
        Text(String, i32, i32),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
        fail_text: bool,
    }

    impl Renderer for Recorder {
        fn clear(&mut self, color: Color) {
            self.cmds.push(Cmd::Clear(color));
        }

        fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
            self.cmds.push(Cmd::Rect(x, y, width, height, color));
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32, _color: Color) -> Result<()> {
            if self.fail_text {
                bail!("no font");
            }
            self.cmds.push(Cmd::Text(text.to_string(), x, y));
            Ok(())
        }

        fn present(&mut self) {
            self.cmds.push(Cmd::Present);
        }
    }

    fn state() -> GameState {
        let level = Level::from_bricks(vec![Brick::new(10, 50, 40, 10, 2, Color::BRICK_WEAK)]);
        GameState::new(Settings::default(), level)
    }

    #[test]
    fn test_draw_order() {
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &state());
        assert_eq!(
            rec.cmds,
            vec![
                Cmd::Clear(Color::BLACK),
                Cmd::Text("Lives: 10".to_string(), 10, 10),
                Cmd::Rect(350, 570, 100, 20, Color::WHITE),
                Cmd::Rect(395, 295, 10, 10, Color::WHITE),
                Cmd::Rect(10, 50, 40, 10, Color::BRICK_WEAK),
                Cmd::Present,
            ]
        );
    }

    #[test]
    fn test_hud_uses_configured_position() {
        let settings = Settings {
            hud_x: 700,
            hud_y: 580,
            ..Settings::default()
        };
        let mut rec = Recorder::default();
        draw_frame(&mut rec, &GameState::new(settings, Level::default()));
        assert_eq!(rec.cmds[1], Cmd::Text("Lives: 10".to_string(), 700, 580));
    }

    #[test]
    fn test_text_failure_keeps_frame() {
        let mut rec = Recorder {
            fail_text: true,
            ..Default::default()
        };
        draw_frame(&mut rec, &state());
        assert_eq!(rec.cmds.len(), 5);
        assert_eq!(rec.cmds.last(), Some(&Cmd::Present));
    }
}
