#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Kaiju adapters.
//!
//! [`Scene::from_snapshot`] turns a round snapshot plus an optional sprite
//! catalog into flat presentation records; backends only draw what the scene
//! describes. Entities whose sheet is missing from the catalog fall back to
//! flat-color rectangles sized by their collision footprint.

pub mod audio;

use anyhow::Result as AnyResult;
use glam::Vec2;
use kaiju_core::{
    animation::{AnimationSet, EnemyAnimation, MonsterAnimation},
    geometry::{FrameSize, Rect},
    snapshot::{
        BuildingSnapshot, CivilianSnapshot, EnemySnapshot, MonsterSnapshot, ProjectileOrigin,
        ProjectileSnapshot, RoundSnapshot, SoldierSnapshot, SoldierState,
    },
    ActionKind, BuildingId, CivilianId, EnemyId, FacingDirection, InputEvent, MonsterId,
    ProjectileId, RoundState, SoldierId, SpriteFrames, Viewport,
};
use std::time::Duration;
use thiserror::Error;

const HEALTH_BAR_HEIGHT: f32 = 5.0;
const ENEMY_HEALTH_BAR_HEIGHT: f32 = 4.0;
const MONSTER_HEALTH_BAR_GAP: f32 = 2.0;
const BUILDING_HEALTH_BAR_GAP: f32 = 3.0;
const RIFLE_LENGTH_FACTOR: f32 = 0.75;
const RIFLE_LINE_WIDTH: f32 = 3.0;
/// Invulnerability flash toggles every six ticks.
const FLASH_PERIOD: u32 = 6;

const WHITE: Color = Color::from_rgb_u8(255, 255, 255);
const GREY: Color = Color::from_rgb_u8(128, 128, 128);
const BLACK: Color = Color::from_rgb_u8(0, 0, 0);
const HEALTH_HIGH: Color = Color::from_rgb_u8(0, 128, 0);
const HEALTH_MID: Color = Color::from_rgb_u8(255, 165, 0);
const HEALTH_LOW: Color = Color::from_rgb_u8(255, 0, 0);
const PLAYER_ONE_BODY: Color = Color::from_rgb_u8(128, 0, 128);
const PLAYER_TWO_BODY: Color = Color::from_rgb_u8(255, 0, 0);
const DEFEATED_MONSTER: Color = Color::new(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 0.5);
const FLASH_OVERLAY: Color = Color::new(1.0, 1.0, 1.0, 0.5);
const BUILDING_WORN: Color = Color::from_rgb_u8(210, 180, 140);
const BUILDING_CRITICAL: Color = Color::from_rgb_u8(165, 42, 42);
const BUILDING_RUBBLE: Color = Color::from_rgb_u8(85, 85, 85);
const ENEMY_BODY: Color = Color::from_rgb_u8(85, 107, 47);
const SOLDIER_BODY: Color = Color::from_rgb_u8(85, 107, 47);
const SOLDIER_FALLEN: Color = Color::from_rgb_u8(139, 0, 0);
const ENEMY_SHOT: Color = Color::from_rgb_u8(255, 255, 0);
const SOLDIER_SHOT: Color = Color::from_rgb_u8(255, 165, 0);
const GAME_OVER_BACKDROP: Color = Color::new(0.0, 0.0, 0.0, 0.75);
const FINAL_SCORE_TEXT: Color = Color::from_rgb_u8(255, 255, 0);

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Creates an opaque color from hue (degrees), saturation, and
    /// lightness, both in the range 0.0..=1.0.
    #[must_use]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue.rem_euclid(360.0) / 60.0;
        let secondary = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (red, green, blue) = match sector as u32 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };
        let offset = lightness - chroma / 2.0;
        Self::new(red + offset, green + offset, blue + offset, 1.0)
    }
}

/// Errors that can occur when constructing a sprite catalog.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CatalogError {
    /// Sprite frames need positive dimensions to produce source rectangles.
    #[error("sprite frames must have positive dimensions (received {width}x{height})")]
    InvalidFrame {
        /// Frame width that failed validation.
        width: f32,
        /// Frame height that failed validation.
        height: f32,
    },
    /// A sheet with no rows or columns holds no frames at all.
    #[error("sprite sheet needs at least one row and column (received {rows}x{columns})")]
    EmptySheet {
        /// Row count that failed validation.
        rows: u32,
        /// Column count that failed validation.
        columns: u32,
    },
}

/// Loaded sprite sheet: uniform frame dimensions on a row/column grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSheet {
    frame: FrameSize,
    rows: u32,
    columns: u32,
}

impl SpriteSheet {
    /// Creates a sheet descriptor, validating frame dimensions and grid
    /// extent.
    pub fn new(
        frame_width: f32,
        frame_height: f32,
        rows: u32,
        columns: u32,
    ) -> Result<Self, CatalogError> {
        let frame = FrameSize::new(frame_width, frame_height).ok_or(CatalogError::InvalidFrame {
            width: frame_width,
            height: frame_height,
        })?;
        if rows == 0 || columns == 0 {
            return Err(CatalogError::EmptySheet { rows, columns });
        }
        Ok(Self {
            frame,
            rows,
            columns,
        })
    }

    /// Frame dimensions shared by every cell of the sheet.
    #[must_use]
    pub const fn frame(&self) -> FrameSize {
        self.frame
    }

    /// Source rectangle of the frame at the given grid cell, clamped to the
    /// sheet extent.
    #[must_use]
    pub fn source_rect(&self, column: u32, row: u32) -> Rect {
        let column = column.min(self.columns - 1);
        let row = row.min(self.rows - 1);
        Rect::new(
            column as f32 * self.frame.width(),
            row as f32 * self.frame.height(),
            self.frame.width(),
            self.frame.height(),
        )
    }
}

/// Sprite sheets the backend managed to load, per entity kind. A `None`
/// entry selects the flat-color fallback for that kind.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SpriteCatalog {
    /// Monster sheet: one row per animation, columns are frames.
    pub monster: Option<SpriteSheet>,
    /// Flying enemy sheet: a single hover row.
    pub enemy: Option<SpriteSheet>,
    /// Projectile sheet: a single static frame.
    pub projectile: Option<SpriteSheet>,
    /// Building sheet: one damage frame per threshold cell.
    pub building: Option<SpriteSheet>,
}

impl SpriteCatalog {
    /// Frame dimensions to hand the world via `Command::ConfigureSprites`,
    /// so collision footprints match what is drawn.
    #[must_use]
    pub fn frames(&self) -> SpriteFrames {
        SpriteFrames {
            monster: self.monster.map(|sheet| sheet.frame()),
            enemy: self.enemy.map(|sheet| sheet.frame()),
            projectile: self.projectile.map(|sheet| sheet.frame()),
            building: self.building.map(|sheet| sheet.frame()),
        }
    }
}

/// Which catalog sheet a blit samples from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SheetKind {
    /// The monster animation sheet.
    Monster,
    /// The flying enemy sheet.
    Enemy,
    /// The projectile sheet.
    Projectile,
    /// The building damage-frame sheet.
    Building,
}

/// Axis-aligned filled rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidRect {
    /// Rectangle to fill, in world coordinates.
    pub rect: Rect,
    /// Fill color.
    pub color: Color,
}

/// Single sprite-sheet blit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteBlit {
    /// Sheet the source rectangle refers to.
    pub sheet: SheetKind,
    /// Source rectangle on the sheet, in texel coordinates.
    pub source: Rect,
    /// Destination rectangle in world coordinates.
    pub destination: Rect,
    /// Whether the frame is mirrored around its vertical axis.
    pub flip_horizontal: bool,
}

/// Body of an entity: a sheet frame when the catalog has one, a flat
/// rectangle otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyVisual {
    /// Frame sampled from a catalog sheet.
    Sprite(SpriteBlit),
    /// Flat-color fallback rectangle.
    Flat(SolidRect),
}

/// Two-layer health bar hovering above an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthBar {
    /// Full-width background track.
    pub background: Rect,
    /// Filled portion proportional to remaining health.
    pub fill: Rect,
    /// Fill color keyed to the remaining fraction.
    pub color: Color,
}

/// Aim indicator drawn from a soldier's center along the rifle angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RifleLine {
    /// Line origin at the soldier's center.
    pub from: Vec2,
    /// Line end along the aim angle.
    pub to: Vec2,
    /// Stroke width in world units.
    pub width: f32,
    /// Stroke color.
    pub color: Color,
}

/// Positioned text for score and overlay messages.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// Text content.
    pub text: String,
    /// Anchor position in world coordinates.
    pub position: Vec2,
    /// Font size in world units.
    pub size: f32,
    /// Text color.
    pub color: Color,
    /// Whether the anchor is the horizontal center rather than the left
    /// edge.
    pub centered: bool,
}

/// Heads-up layer drawn after every entity.
#[derive(Clone, Debug, PartialEq)]
pub enum HudPresentation {
    /// Nothing to draw while no round is active.
    Hidden,
    /// Running score in the top-left corner.
    Score(TextLabel),
    /// Full-screen backdrop with the game-over messages.
    GameOver {
        /// Translucent rectangle covering the viewport.
        backdrop: SolidRect,
        /// Centered message lines, in draw order.
        labels: Vec<TextLabel>,
    },
}

/// Everything needed to draw one monster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonsterPresentation {
    /// Identifier of the presented monster.
    pub id: MonsterId,
    /// Body frame or fallback rectangle.
    pub body: BodyVisual,
    /// Invulnerability flash overlaid on the sprite body.
    pub flash: Option<SolidRect>,
    /// Health bar; absent once the monster is defeated.
    pub health_bar: Option<HealthBar>,
}

/// Everything needed to draw one building.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildingPresentation {
    /// Identifier of the presented building.
    pub id: BuildingId,
    /// Damage frame or fallback rectangle.
    pub body: BodyVisual,
    /// Health bar; absent once the building is destroyed.
    pub health_bar: Option<HealthBar>,
}

/// Everything needed to draw one flying enemy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyPresentation {
    /// Identifier of the presented enemy.
    pub id: EnemyId,
    /// Hover frame or fallback rectangle.
    pub body: BodyVisual,
    /// Health bar; hidden at zero health.
    pub health_bar: Option<HealthBar>,
}

/// Everything needed to draw one soldier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoldierPresentation {
    /// Identifier of the presented soldier.
    pub id: SoldierId,
    /// Body rectangle; defeated soldiers collapse to a low rubble strip.
    pub body: SolidRect,
    /// Aim line; absent once the soldier is defeated.
    pub rifle: Option<RifleLine>,
}

/// Everything needed to draw one civilian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CivilianPresentation {
    /// Identifier of the presented civilian.
    pub id: CivilianId,
    /// Body rectangle colored from the civilian's spawn hue.
    pub body: SolidRect,
}

/// Everything needed to draw one projectile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectilePresentation {
    /// Identifier of the presented projectile.
    pub id: ProjectileId,
    /// Sheet frame for enemy shots, flat color otherwise.
    pub body: BodyVisual,
}

/// Scene description for one frame. Vectors are listed in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Playfield bounds the backend should letterbox to.
    pub viewport: Viewport,
    /// City skyline, drawn first.
    pub buildings: Vec<BuildingPresentation>,
    /// Monsters, drawn over the skyline.
    pub monsters: Vec<MonsterPresentation>,
    /// Flying enemies.
    pub enemies: Vec<EnemyPresentation>,
    /// Projectiles in flight.
    pub projectiles: Vec<ProjectilePresentation>,
    /// Ground soldiers.
    pub soldiers: Vec<SoldierPresentation>,
    /// Civilians, drawn over everything but the HUD.
    pub civilians: Vec<CivilianPresentation>,
    /// Heads-up layer.
    pub hud: HudPresentation,
}

impl Scene {
    /// Composes the scene for one captured round state.
    #[must_use]
    pub fn from_snapshot(snapshot: &RoundSnapshot, catalog: &SpriteCatalog) -> Self {
        Self {
            viewport: snapshot.viewport,
            buildings: snapshot
                .buildings
                .iter()
                .map(|building| present_building(building, catalog))
                .collect(),
            monsters: snapshot
                .monsters
                .iter()
                .enumerate()
                .map(|(index, monster)| present_monster(index, monster, catalog))
                .collect(),
            enemies: snapshot
                .enemies
                .iter()
                .map(|enemy| present_enemy(enemy, catalog))
                .collect(),
            projectiles: snapshot
                .projectiles
                .iter()
                .map(|projectile| present_projectile(projectile, catalog))
                .collect(),
            soldiers: snapshot.soldiers.iter().map(present_soldier).collect(),
            civilians: snapshot.civilians.iter().map(present_civilian).collect(),
            hud: present_hud(snapshot),
        }
    }
}

fn health_fraction(current: f32, initial: f32) -> f32 {
    if initial <= 0.0 {
        return 0.0;
    }
    (current / initial).clamp(0.0, 1.0)
}

fn health_color(fraction: f32) -> Color {
    if fraction < 0.3 {
        HEALTH_LOW
    } else if fraction < 0.6 {
        HEALTH_MID
    } else {
        HEALTH_HIGH
    }
}

fn health_bar(anchor: Rect, height: f32, gap: f32, fraction: f32) -> HealthBar {
    let y = anchor.y() - height - gap;
    HealthBar {
        background: Rect::new(anchor.x(), y, anchor.width(), height),
        fill: Rect::new(anchor.x(), y, anchor.width() * fraction, height),
        color: health_color(fraction),
    }
}

fn monster_is_flashing(monster: &MonsterSnapshot) -> bool {
    monster.invulnerable_ticks > 0 && (monster.invulnerable_ticks / FLASH_PERIOD) % 2 == 0
}

fn monster_blit(monster: &MonsterSnapshot, sheet: &SpriteSheet) -> SpriteBlit {
    let spec = monster.animation.spec();
    SpriteBlit {
        sheet: SheetKind::Monster,
        source: sheet.source_rect(monster.animation_frame, spec.row),
        destination: monster.footprint,
        flip_horizontal: monster.facing == FacingDirection::Left,
    }
}

fn present_monster(
    index: usize,
    monster: &MonsterSnapshot,
    catalog: &SpriteCatalog,
) -> MonsterPresentation {
    let fallback = if index == 0 {
        PLAYER_ONE_BODY
    } else {
        PLAYER_TWO_BODY
    };

    if monster.defeated {
        let body = match catalog.monster {
            Some(sheet) if monster.animation == MonsterAnimation::Defeated => {
                BodyVisual::Sprite(monster_blit(monster, &sheet))
            }
            _ => BodyVisual::Flat(SolidRect {
                rect: monster.footprint,
                color: DEFEATED_MONSTER,
            }),
        };
        return MonsterPresentation {
            id: monster.id,
            body,
            flash: None,
            health_bar: None,
        };
    }

    let flashing = monster_is_flashing(monster);
    let (body, flash) = match catalog.monster {
        Some(sheet) => {
            let overlay = flashing.then_some(SolidRect {
                rect: monster.footprint,
                color: FLASH_OVERLAY,
            });
            (BodyVisual::Sprite(monster_blit(monster, &sheet)), overlay)
        }
        None => {
            let color = if flashing { WHITE } else { fallback };
            (
                BodyVisual::Flat(SolidRect {
                    rect: monster.footprint,
                    color,
                }),
                None,
            )
        }
    };

    let fraction = health_fraction(monster.current_health, monster.initial_health);
    MonsterPresentation {
        id: monster.id,
        body,
        flash,
        health_bar: Some(health_bar(
            monster.footprint,
            HEALTH_BAR_HEIGHT,
            MONSTER_HEALTH_BAR_GAP,
            fraction,
        )),
    }
}

fn present_building(building: &BuildingSnapshot, catalog: &SpriteCatalog) -> BuildingPresentation {
    let fraction = health_fraction(building.current_health, building.initial_health);
    let body = match catalog.building {
        Some(sheet) => BodyVisual::Sprite(SpriteBlit {
            sheet: SheetKind::Building,
            source: Rect::new(
                building.damage_frame.source_x,
                building.damage_frame.source_y,
                sheet.frame().width(),
                sheet.frame().height(),
            ),
            destination: building.footprint,
            flip_horizontal: false,
        }),
        None => {
            let color = if building.destroyed {
                BUILDING_RUBBLE
            } else if fraction < 0.3 {
                BUILDING_CRITICAL
            } else if fraction < 0.7 {
                BUILDING_WORN
            } else {
                GREY
            };
            BodyVisual::Flat(SolidRect {
                rect: building.footprint,
                color,
            })
        }
    };

    BuildingPresentation {
        id: building.id,
        body,
        health_bar: (!building.destroyed).then(|| {
            health_bar(
                building.footprint,
                HEALTH_BAR_HEIGHT,
                BUILDING_HEALTH_BAR_GAP,
                fraction,
            )
        }),
    }
}

fn present_enemy(enemy: &EnemySnapshot, catalog: &SpriteCatalog) -> EnemyPresentation {
    // The sheet carries no mirrored row; both patrol directions share the
    // same frames.
    let body = match catalog.enemy {
        Some(sheet) => BodyVisual::Sprite(SpriteBlit {
            sheet: SheetKind::Enemy,
            source: sheet.source_rect(enemy.animation_frame, EnemyAnimation::Hover.spec().row),
            destination: enemy.footprint,
            flip_horizontal: false,
        }),
        None => BodyVisual::Flat(SolidRect {
            rect: enemy.footprint,
            color: ENEMY_BODY,
        }),
    };

    let fraction = health_fraction(enemy.current_health, enemy.initial_health);
    EnemyPresentation {
        id: enemy.id,
        body,
        health_bar: (enemy.current_health > 0.0).then(|| {
            health_bar(
                enemy.footprint,
                ENEMY_HEALTH_BAR_HEIGHT,
                MONSTER_HEALTH_BAR_GAP,
                fraction,
            )
        }),
    }
}

fn present_soldier(soldier: &SoldierSnapshot) -> SoldierPresentation {
    let rect = soldier.footprint;
    if soldier.state == SoldierState::Defeated {
        return SoldierPresentation {
            id: soldier.id,
            body: SolidRect {
                rect: Rect::new(
                    rect.x(),
                    rect.y() + rect.height() * 0.6,
                    rect.width(),
                    rect.height() * 0.4,
                ),
                color: SOLDIER_FALLEN,
            },
            rifle: None,
        };
    }

    let (center_x, center_y) = rect.center();
    let from = Vec2::new(center_x, center_y);
    let reach = rect.width() * RIFLE_LENGTH_FACTOR;
    let to = from + Vec2::new(soldier.rifle_angle.cos(), soldier.rifle_angle.sin()) * reach;
    SoldierPresentation {
        id: soldier.id,
        body: SolidRect {
            rect,
            color: SOLDIER_BODY,
        },
        rifle: Some(RifleLine {
            from,
            to,
            width: RIFLE_LINE_WIDTH,
            color: BLACK,
        }),
    }
}

fn present_civilian(civilian: &CivilianSnapshot) -> CivilianPresentation {
    CivilianPresentation {
        id: civilian.id,
        body: SolidRect {
            rect: civilian.footprint,
            color: Color::from_hsl(civilian.hue, 0.7, 0.7),
        },
    }
}

fn present_projectile(
    projectile: &ProjectileSnapshot,
    catalog: &SpriteCatalog,
) -> ProjectilePresentation {
    let body = match (projectile.origin, catalog.projectile) {
        (ProjectileOrigin::Enemy, Some(sheet)) => BodyVisual::Sprite(SpriteBlit {
            sheet: SheetKind::Projectile,
            source: sheet.source_rect(0, 0),
            destination: projectile.footprint,
            flip_horizontal: false,
        }),
        (ProjectileOrigin::Enemy, None) => BodyVisual::Flat(SolidRect {
            rect: projectile.footprint,
            color: ENEMY_SHOT,
        }),
        (ProjectileOrigin::Soldier, _) => BodyVisual::Flat(SolidRect {
            rect: projectile.footprint,
            color: SOLDIER_SHOT,
        }),
    };
    ProjectilePresentation {
        id: projectile.id,
        body,
    }
}

fn present_hud(snapshot: &RoundSnapshot) -> HudPresentation {
    match snapshot.state {
        RoundState::Idle => HudPresentation::Hidden,
        RoundState::Playing => HudPresentation::Score(TextLabel {
            text: format!("Score: {}", snapshot.score),
            position: Vec2::new(10.0, 25.0),
            size: 20.0,
            color: WHITE,
            centered: false,
        }),
        RoundState::Over => {
            let center_x = snapshot.viewport.width() / 2.0;
            let center_y = snapshot.viewport.height() / 2.0;
            HudPresentation::GameOver {
                backdrop: SolidRect {
                    rect: Rect::new(0.0, 0.0, snapshot.viewport.width(), snapshot.viewport.height()),
                    color: GAME_OVER_BACKDROP,
                },
                labels: vec![
                    TextLabel {
                        text: String::from("Game Over"),
                        position: Vec2::new(center_x, center_y - 40.0),
                        size: 48.0,
                        color: WHITE,
                        centered: true,
                    },
                    TextLabel {
                        text: String::from("Press R to Restart"),
                        position: Vec2::new(center_x, center_y + 20.0),
                        size: 24.0,
                        color: WHITE,
                        centered: true,
                    },
                    TextLabel {
                        text: format!("Final Score: {}", snapshot.score),
                        position: Vec2::new(center_x, center_y + 60.0),
                        size: 28.0,
                        color: FINAL_SCORE_TEXT,
                        centered: true,
                    },
                ],
            }
        }
    }
}

/// One action-key transition captured by the backend during a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionInput {
    /// Action the key maps to.
    pub action: ActionKind,
    /// Press, release, or one-shot trigger.
    pub input: InputEvent,
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Key transitions bound to the first player's monster.
    pub player_one: Vec<ActionInput>,
    /// Key transitions bound to the second player's monster.
    pub player_two: Vec<ActionInput>,
    /// Whether the adapter detected a restart request on this frame.
    pub restart: bool,
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Kaiju scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the simulated frame
    /// delta and the per-frame input captured by the adapter, and may
    /// replace the scene before it is rendered, allowing adapters to
    /// recompose world snapshots deterministically.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}
