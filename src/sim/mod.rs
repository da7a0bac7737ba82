//! Simulation module
//!
//! All gameplay logic lives here: entities, levels, collisions and the
//! per-frame tick. Integer pixel coordinates, origin at the top-left, y
//! pointing down. No rendering or platform dependencies.

pub mod ball;
pub mod brick;
pub mod collision;
pub mod level;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use brick::Brick;
pub use collision::{ball_brick_collision, collide_with_bricks, collide_with_paddle};
pub use level::Level;
pub use paddle::{Direction, Paddle};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, tick};
