//! Brick layouts: loaded from a level file or generated as a grid
//!
//! Level files are plain text, one brick per line:
//!
//! ```text
//! x;y;life_count;
//! ```
//!
//! Anything after the third `;` is ignored. Blank lines are skipped.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::brick::Brick;
use crate::color::Color;
use crate::consts::{GRID_MAX_BRICKS, GRID_MAX_SEEDED_LIVES};
use crate::settings::Settings;

/// All bricks still in play, in load order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub bricks: Vec<Brick>,
}

impl Level {
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    /// Read and parse a level file
    pub fn load(path: &Path, settings: &Settings) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to open level file {}", path.display()))?;
        Self::parse(&text, settings)
            .with_context(|| format!("failed to parse level file {}", path.display()))
    }

    /// Parse level file contents. Bricks get the configured brick size.
    pub fn parse(text: &str, settings: &Settings) -> Result<Self> {
        let mut bricks = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let parsed = parse_line(line).with_context(|| format!("line {}", index + 1))?;
            if let Some((x, y, life_count)) = parsed {
                bricks.push(Brick::new(
                    x,
                    y,
                    settings.brick_width,
                    settings.brick_height,
                    life_count,
                    Color::WHITE,
                ));
            }
        }
        Ok(Self { bricks })
    }

    /// Lay bricks out in rows from the grid origin until the next row would
    /// reach past half the window height.
    ///
    /// Without a seed every brick gets `grid_brick_lives`; with one, life
    /// counts are drawn from `1..=GRID_MAX_SEEDED_LIVES`.
    pub fn generate(settings: &Settings, seed: Option<u64>) -> Self {
        let mut rng = seed.map(Pcg32::seed_from_u64);
        let width = settings.brick_width;
        let height = settings.brick_height;

        let mut bricks = Vec::new();
        let mut x = settings.grid_origin_x;
        let mut y = settings.grid_origin_y;
        while bricks.len() < GRID_MAX_BRICKS {
            let life_count = match rng.as_mut() {
                Some(rng) => rng.random_range(1..=GRID_MAX_SEEDED_LIVES),
                None => settings.grid_brick_lives,
            };
            bricks.push(Brick::new(x, y, width, height, life_count, Color::WHITE));

            x += width + settings.grid_spacing_x;
            if x + width > settings.window_width {
                x = settings.grid_origin_x;
                y += height + settings.grid_spacing_y;
            }
            if y + height > settings.window_height / 2 {
                break;
            }
        }
        Self { bricks }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// Drop bricks with no lives left, returning how many were removed
    pub fn remove_destroyed(&mut self) -> usize {
        let before = self.bricks.len();
        self.bricks.retain(|b| !b.is_destroyed());
        before - self.bricks.len()
    }
}

/// Parse one `x;y;life_count;` line. `Ok(None)` for blank lines.
fn parse_line(line: &str) -> Result<Option<(i32, i32, u32)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = trimmed.splitn(4, ';').collect();
    if fields.len() < 4 {
        bail!("expected `x;y;life_count;`, found {trimmed:?}");
    }
    let x = parse_field(fields[0], "x")?;
    let y = parse_field(fields[1], "y")?;
    let life_count = parse_field(fields[2], "life_count")?;
    Ok(Some((x, y, life_count)))
}

fn parse_field<T>(raw: &str, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = raw.trim();
    raw.parse()
        .with_context(|| format!("invalid {name} {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_parse_single_brick() {
        let level = Level::parse("10;20;3;\n", &Settings::default()).unwrap();
        assert_eq!(level.len(), 1);
        let brick = &level.bricks[0];
        assert_eq!(brick.pos, IVec2::new(10, 20));
        assert_eq!(brick.size, IVec2::new(40, 10));
        assert_eq!(brick.life_count, 3);
        assert_eq!(brick.color, Color::WHITE);
    }

    #[test]
    fn test_parse_ignores_trailing_content_and_blank_lines() {
        let text = "10;20;3;comment\r\n\n  60 ; 20 ; 1 ;\n";
        let level = Level::parse(text, &Settings::default()).unwrap();
        assert_eq!(level.len(), 2);
        assert_eq!(level.bricks[1].pos, IVec2::new(60, 20));
        assert_eq!(level.bricks[1].life_count, 1);
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let level = Level::parse("3;0;1;\n1;0;1;\n2;0;1;\n", &Settings::default()).unwrap();
        let xs: Vec<i32> = level.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_rejects_non_numeric_field() {
        let err = Level::parse("10;20;3;\n10;abc;3;\n", &Settings::default()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("invalid y"), "{msg}");
    }

    #[test]
    fn test_parse_rejects_missing_terminator() {
        let err = Level::parse("10;20;3\n", &Settings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("line 1"));
    }

    #[test]
    fn test_parse_rejects_negative_lives() {
        assert!(Level::parse("10;20;-1;\n", &Settings::default()).is_err());
    }

    #[test]
    fn test_parse_empty_file() {
        let level = Level::parse("", &Settings::default()).unwrap();
        assert!(level.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Level::load(Path::new("/nonexistent/level.txt"), &Settings::default()).unwrap_err();
        assert!(format!("{err}").contains("failed to open level file"));
    }

    #[test]
    fn test_generate_default_grid() {
        let settings = Settings::default();
        let level = Level::generate(&settings, None);
        // 16 bricks per row, 13 rows in the top half of an 800x600 window
        assert_eq!(level.len(), 208);
        assert_eq!(level.bricks[0].pos, IVec2::new(10, 50));
        assert_eq!(level.bricks[16].pos, IVec2::new(10, 70));
        for brick in level.iter() {
            assert_eq!(brick.life_count, 2);
            assert!(brick.right() <= settings.window_width);
            assert!(brick.bottom() <= settings.window_height / 2);
        }
    }

    #[test]
    fn test_generate_caps_brick_count() {
        let settings = Settings {
            window_height: 100_000,
            ..Settings::default()
        };
        let level = Level::generate(&settings, None);
        assert_eq!(level.len(), GRID_MAX_BRICKS);
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let settings = Settings::default();
        let a = Level::generate(&settings, Some(42));
        let b = Level::generate(&settings, Some(42));
        assert_eq!(a, b);
        assert!(
            a.iter()
                .all(|brick| (1..=GRID_MAX_SEEDED_LIVES).contains(&brick.life_count))
        );
    }

    #[test]
    fn test_remove_destroyed_keeps_order() {
        let mut level = Level::from_bricks(vec![
            Brick::new(0, 0, 40, 10, 1, Color::WHITE),
            Brick::new(50, 0, 40, 10, 0, Color::WHITE),
            Brick::new(100, 0, 40, 10, 2, Color::WHITE),
        ]);
        assert_eq!(level.remove_destroyed(), 1);
        let xs: Vec<i32> = level.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![0, 100]);
    }
}
