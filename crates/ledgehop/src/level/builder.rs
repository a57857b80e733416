use glam::Vec2;

use crate::components::enemy::Enemy;
use crate::components::platform::{Coin, Goal, Platform};
use crate::components::Facing;
use crate::config::GameConfig;
use crate::core::geometry::Aabb;
use crate::level::error::LevelError;
use crate::level::grid::{Tile, TileGrid};
use crate::level::Level;

impl Level {
    /// Turn a validated grid into level geometry and entities.
    ///
    /// The bottom grid row rests on the bottom edge of the viewport and the level
    /// extends up and to the right from there. Collections are filled in row-major
    /// grid order, which is also the collision tie-break order. The result depends only
    /// on `grid` and `config`, so rebuilding reproduces the initial state exactly.
    pub fn build(grid: &TileGrid, config: &GameConfig) -> Result<Level, LevelError> {
        let (goal_row, goal_col) = grid.goal().ok_or(LevelError::MissingGoal)?;

        let tw = config.tile_width;
        let th = config.tile_height;
        let rows = grid.rows();
        let cell = |row: usize, col: usize| {
            Aabb::new(
                col as f32 * tw,
                config.viewport_height - (rows - row) as f32 * th,
                tw,
                th,
            )
        };

        let mut platforms = Vec::new();
        let mut enemies = Vec::new();
        let mut coins = Vec::new();

        for (row, col, tile) in grid.iter() {
            let rect = cell(row, col);
            match tile {
                Tile::Ground | Tile::Floating => platforms.push(Platform::solid(rect)),
                Tile::Breakable => platforms.push(Platform::breakable(rect)),
                Tile::EnemySpawn => {
                    let ec = &config.enemy;
                    // Feet on the cell's bottom edge, centered horizontally
                    let body = Aabb::new(
                        rect.left() + (tw - ec.width) / 2.0,
                        rect.bottom() - ec.height,
                        ec.width,
                        ec.height,
                    );
                    enemies.push(Enemy::new(body, ec.speed, Facing::Left));
                }
                Tile::CoinSpawn => {
                    coins.push(Coin::new(Aabb::centered_at(rect.center(), config.coin_size, config.coin_size)));
                }
                Tile::Goal | Tile::Empty => {}
            }
        }

        let goal_center: Vec2 = cell(goal_row, goal_col).center();
        let goal = Goal {
            rect: Aabb::centered_at(goal_center, config.goal_width, config.goal_height),
        };
        let level_width = grid.cols() as f32 * tw;
        let coins_total = coins.len() as u32;

        log::info!(
            "level built: {}x{} tiles, width {}, {} platforms, {} enemies, {} coins",
            grid.cols(),
            rows,
            level_width,
            platforms.len(),
            enemies.len(),
            coins_total,
        );

        Ok(Level {
            platforms,
            enemies,
            coins,
            goal,
            level_width,
            coins_total,
        })
    }
}
