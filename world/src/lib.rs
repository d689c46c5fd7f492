#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state for the Kaiju rampage game.
//!
//! The [`World`] owns every entity collection and is mutated exclusively
//! through [`apply`], which executes one [`Command`] and appends the
//! resulting [`Event`]s. Systems and adapters never touch the state
//! directly; they observe it through the [`query`] module.

use kaiju_core::{
    geometry::{Footprint, FrameSize, Rect},
    health::DamageOutcome,
    snapshot::ProjectileOrigin,
    ActionKind, BuildingId, CivilianId, Command, ControlKind, EnemyId, Event, GameMode,
    InputEvent, Intent, MonsterId, ProjectileId, RoundState, SoldierId, SpriteFrames, Viewport,
};

mod building;
mod civilian;
mod enemy;
mod monster;
mod projectile;
mod soldier;

pub mod query;
#[cfg(any(test, feature = "scenario_scaffolding"))]
pub mod scaffolding;

use building::Building;
use civilian::Civilian;
use enemy::Enemy;
use monster::Monster;
use projectile::{Projectile, ProjectileSeed};
use soldier::Soldier;

const MONSTER_SPAWN_MARGIN: f32 = 50.0;
const BUILDING_WIDTH: f32 = 120.0;
/// City layout: x position, height, and health per building.
const BUILDING_LAYOUT: [(f32, f32, f32); 4] = [
    (150.0, 400.0, 200.0),
    (320.0, 550.0, 300.0),
    (490.0, 450.0, 250.0),
    (660.0, 500.0, 280.0),
];
const ENEMY_COUNT: u32 = 2;
const SOLDIER_SPAWN_XS: [f32; 2] = [250.0, 620.0];
const CIVILIAN_COUNT: u32 = 5;
const BUILDING_SCORE: u32 = 100;
const ENEMY_SCORE: u32 = 50;
const ENEMY_PROJECTILE_SIZE: f32 = 8.0;
const ENEMY_PROJECTILE_SPEED: f32 = 4.0;
const ENEMY_PROJECTILE_DAMAGE: f32 = 10.0;

/// Authoritative game state. All mutation flows through [`apply`].
#[derive(Clone, Debug)]
pub struct World {
    pub(crate) viewport: Viewport,
    pub(crate) sprites: SpriteFrames,
    pub(crate) round: RoundState,
    pub(crate) mode: GameMode,
    pub(crate) score: u32,
    pub(crate) tick_index: u64,
    pub(crate) monsters: Vec<Monster>,
    pub(crate) buildings: Vec<Building>,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) soldiers: Vec<Soldier>,
    pub(crate) civilians: Vec<Civilian>,
    pub(crate) projectiles: Vec<Projectile>,
    next_monster: u32,
    next_building: u32,
    next_enemy: u32,
    next_soldier: u32,
    next_civilian: u32,
    next_projectile: u32,
    rng_state: u64,
}

impl World {
    /// Creates an idle world with the default viewport and no entities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            sprites: SpriteFrames::default(),
            round: RoundState::Idle,
            mode: GameMode::Solo,
            score: 0,
            tick_index: 0,
            monsters: Vec::new(),
            buildings: Vec::new(),
            enemies: Vec::new(),
            soldiers: Vec::new(),
            civilians: Vec::new(),
            projectiles: Vec::new(),
            next_monster: 0,
            next_building: 0,
            next_enemy: 0,
            next_soldier: 0,
            next_civilian: 0,
            next_projectile: 0,
            rng_state: 0,
        }
    }

    fn rng_next(&mut self) -> u32 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.rng_state >> 33) as u32
    }

    fn rng_fraction(&mut self) -> f32 {
        const RANGE: f32 = (1_u64 << 31) as f32;
        self.rng_next() as f32 / RANGE
    }

    pub(crate) fn clear_entities(&mut self) {
        self.monsters.clear();
        self.buildings.clear();
        self.enemies.clear();
        self.soldiers.clear();
        self.civilians.clear();
        self.projectiles.clear();
    }

    pub(crate) fn spawn_monster(&mut self, control: ControlKind, x: f32, y: f32) -> MonsterId {
        let id = MonsterId::new(self.next_monster);
        self.next_monster += 1;
        self.monsters
            .push(Monster::new(id, control, x, y, self.sprites.monster));
        id
    }

    pub(crate) fn spawn_building(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        health: f32,
    ) -> BuildingId {
        let id = BuildingId::new(self.next_building);
        self.next_building += 1;
        self.buildings
            .push(Building::new(id, x, y, width, height, health, self.sprites.building));
        id
    }

    pub(crate) fn spawn_enemy(&mut self, x: f32, y: f32) -> EnemyId {
        let id = EnemyId::new(self.next_enemy);
        self.next_enemy += 1;
        self.enemies.push(Enemy::new(id, x, y, self.sprites.enemy));
        id
    }

    pub(crate) fn spawn_soldier(
        &mut self,
        x: f32,
        y: f32,
        initial_cooldown: f32,
    ) -> SoldierId {
        let id = SoldierId::new(self.next_soldier);
        self.next_soldier += 1;
        self.soldiers.push(Soldier::new(id, x, y, initial_cooldown));
        id
    }

    pub(crate) fn spawn_civilian_at(
        &mut self,
        x: f32,
        y: f32,
        walk_direction: i8,
        hue: f32,
    ) -> CivilianId {
        let id = CivilianId::new(self.next_civilian);
        self.next_civilian += 1;
        self.civilians
            .push(Civilian::new(id, x, y, walk_direction, hue));
        id
    }

    pub(crate) fn spawn_projectile(
        &mut self,
        seed: ProjectileSeed,
        frame: Option<FrameSize>,
    ) -> ProjectileId {
        let id = ProjectileId::new(self.next_projectile);
        self.next_projectile += 1;
        self.projectiles.push(Projectile::from_seed(id, seed, frame));
        id
    }

    /// Spawns a civilian at the ground line: half the time at a viewport
    /// edge, otherwise at a random building's base.
    fn spawn_civilian(&mut self) {
        let ground = self.viewport.height() - civilian::CIVILIAN_HEIGHT;
        let hue = self.rng_fraction() * 360.0;
        let x = if self.rng_fraction() < 0.5 {
            if self.rng_fraction() < 0.5 {
                -civilian::CIVILIAN_WIDTH
            } else {
                self.viewport.width() + civilian::CIVILIAN_WIDTH
            }
        } else if self.buildings.is_empty() {
            self.rng_fraction() * self.viewport.width()
        } else {
            let pick = self.rng_next() as usize % self.buildings.len();
            let base = self.buildings[pick].footprint();
            base.x() + base.width() / 2.0 - civilian::CIVILIAN_WIDTH / 2.0
        };
        let x = x.clamp(-10.0, self.viewport.width() + 10.0);
        let walk_direction = if self.rng_fraction() < 0.5 { -1 } else { 1 };
        let _ = self.spawn_civilian_at(x, ground, walk_direction, hue);
    }

    fn start_round(&mut self, mode: GameMode, seed: u64, out: &mut Vec<Event>) {
        self.clear_entities();
        self.mode = mode;
        self.score = 0;
        self.tick_index = 0;
        self.rng_state = seed;
        self.round = RoundState::Playing;

        let ground = self.viewport.height() - monster::MONSTER_SIZE;
        let _ = self.spawn_monster(ControlKind::Human, MONSTER_SPAWN_MARGIN, ground);
        let second_x = self.viewport.width() - monster::MONSTER_SIZE - MONSTER_SPAWN_MARGIN;
        match mode {
            GameMode::Solo => {}
            GameMode::VersusAi => {
                let _ = self.spawn_monster(ControlKind::Scripted, second_x, ground);
            }
            GameMode::TwoPlayer => {
                let _ = self.spawn_monster(ControlKind::Human, second_x, ground);
            }
        }

        for (x, height, health) in BUILDING_LAYOUT {
            if x + BUILDING_WIDTH > self.viewport.width() {
                continue;
            }
            let y = self.viewport.height() - height;
            let _ = self.spawn_building(x, y, BUILDING_WIDTH, height, health);
        }

        for index in 0..ENEMY_COUNT {
            let x = 100.0 + index as f32 * (self.viewport.width() / (ENEMY_COUNT + 1) as f32);
            let y = 50.0 + if index % 2 == 0 { 0.0 } else { 30.0 };
            let _ = self.spawn_enemy(x, y);
        }

        for x in SOLDIER_SPAWN_XS {
            let cooldown = self.rng_fraction() * soldier::FIRE_COOLDOWN;
            let ground = self.viewport.height() - soldier::SOLDIER_HEIGHT;
            let _ = self.spawn_soldier(x, ground, cooldown);
        }

        for _ in 0..CIVILIAN_COUNT {
            self.spawn_civilian();
        }

        out.push(Event::RoundStarted { mode });
    }

    fn reset_round(&mut self, out: &mut Vec<Event>) {
        self.clear_entities();
        self.score = 0;
        self.tick_index = 0;
        self.round = RoundState::Idle;
        out.push(Event::RoundReset);
    }

    fn perform_action(&mut self, monster: MonsterId, action: ActionKind, input: InputEvent) {
        match self.monsters.iter_mut().find(|m| m.id() == monster) {
            Some(target) => {
                if !target.apply_input(action, input) {
                    log::warn!(
                        "rejecting keyboard input for scripted monster {}",
                        monster.get()
                    );
                }
            }
            None => log::warn!("ignoring input for unknown monster {}", monster.get()),
        }
    }

    fn set_monster_intent(&mut self, monster: MonsterId, intent: Intent) {
        match self.monsters.iter_mut().find(|m| m.id() == monster) {
            Some(target) => {
                if !target.set_intent(intent) {
                    log::warn!(
                        "rejecting scripted intent for keyboard monster {}",
                        monster.get()
                    );
                }
            }
            None => log::warn!("ignoring intent for unknown monster {}", monster.get()),
        }
    }

    fn add_score(&mut self, amount: u32, out: &mut Vec<Event>) {
        self.score += amount;
        out.push(Event::ScoreChanged { total: self.score });
    }

    pub(crate) fn damage_building_at(
        &mut self,
        index: usize,
        amount: f32,
        out: &mut Vec<Event>,
    ) -> DamageOutcome {
        let building = self.buildings[index].id();
        let outcome = self.buildings[index].take_damage(amount);
        match outcome {
            DamageOutcome::Damaged => out.push(Event::BuildingDamaged { building }),
            DamageOutcome::Destroyed => {
                out.push(Event::BuildingDestroyed { building });
                self.add_score(BUILDING_SCORE, out);
            }
            DamageOutcome::Rejected => {}
        }
        outcome
    }

    pub(crate) fn damage_enemy_at(
        &mut self,
        index: usize,
        amount: f32,
        out: &mut Vec<Event>,
    ) -> DamageOutcome {
        let enemy = self.enemies[index].id();
        let outcome = self.enemies[index].take_damage(amount);
        match outcome {
            DamageOutcome::Damaged => {}
            DamageOutcome::Destroyed => {
                out.push(Event::EnemyDestroyed { enemy });
                self.add_score(ENEMY_SCORE, out);
            }
            DamageOutcome::Rejected => {}
        }
        outcome
    }

    pub(crate) fn damage_soldier_at(
        &mut self,
        index: usize,
        amount: f32,
        out: &mut Vec<Event>,
    ) -> DamageOutcome {
        let soldier = self.soldiers[index].id();
        let outcome = self.soldiers[index].take_damage(amount);
        if outcome == DamageOutcome::Destroyed {
            out.push(Event::SoldierDefeated { soldier });
        }
        outcome
    }

    pub(crate) fn damage_monster_at(
        &mut self,
        index: usize,
        amount: f32,
        out: &mut Vec<Event>,
    ) -> DamageOutcome {
        let monster = self.monsters[index].id();
        let outcome = self.monsters[index].take_damage(amount);
        match outcome {
            DamageOutcome::Damaged => out.push(Event::MonsterDamaged { monster }),
            DamageOutcome::Destroyed => out.push(Event::MonsterDefeated { monster }),
            DamageOutcome::Rejected => {}
        }
        outcome
    }

    /// One punch activation damages every overlapping non-destroyed
    /// building, flying enemy, and soldier at the monster's current
    /// position.
    fn resolve_punch(&mut self, index: usize, out: &mut Vec<Event>) {
        let hitbox = self.monsters[index].footprint();
        let power = self.monsters[index].punch_power();

        for target in 0..self.buildings.len() {
            if self.buildings[target].is_destroyed()
                || !self.buildings[target].footprint().overlaps(&hitbox)
            {
                continue;
            }
            let _ = self.damage_building_at(target, power, out);
        }

        for target in 0..self.enemies.len() {
            if self.enemies[target].is_destroyed()
                || !self.enemies[target].footprint().overlaps(&hitbox)
            {
                continue;
            }
            let _ = self.damage_enemy_at(target, power, out);
        }

        for target in 0..self.soldiers.len() {
            if self.soldiers[target].is_defeated()
                || !self.soldiers[target].footprint().overlaps(&hitbox)
            {
                continue;
            }
            let _ = self.damage_soldier_at(target, power, out);
        }
    }

    fn tick(&mut self, out: &mut Vec<Event>) {
        self.tick_index += 1;
        let viewport = self.viewport;

        for index in 0..self.monsters.len() {
            let intent = self.monsters[index].resolve_intent();
            let punched = self.monsters[index].update(intent, &self.buildings, viewport);
            if punched {
                out.push(Event::MonsterPunched {
                    monster: self.monsters[index].id(),
                });
                self.resolve_punch(index, out);
            }
        }

        let all_defeated =
            !self.monsters.is_empty() && self.monsters.iter().all(Monster::is_defeated);
        if all_defeated {
            self.round = RoundState::Over;
            out.push(Event::RoundEnded { score: self.score });
            return;
        }

        for index in 0..self.enemies.len() {
            if !self.enemies[index].update(viewport) {
                continue;
            }
            let muzzle = self.enemies[index].footprint();
            let width = self
                .sprites
                .projectile
                .map_or(ENEMY_PROJECTILE_SIZE, |frame| frame.width());
            let seed = ProjectileSeed {
                origin: ProjectileOrigin::Enemy,
                x: muzzle.center().0 - width / 2.0,
                y: muzzle.bottom(),
                velocity_x: 0.0,
                velocity_y: ENEMY_PROJECTILE_SPEED,
                damage: ENEMY_PROJECTILE_DAMAGE,
                size: ENEMY_PROJECTILE_SIZE,
            };
            let projectile = self.spawn_projectile(seed, self.sprites.projectile);
            out.push(Event::EnemyFired {
                enemy: self.enemies[index].id(),
                projectile,
            });
        }
        self.enemies.retain(|enemy| !enemy.is_destroyed());

        let mut index = self.projectiles.len();
        while index > 0 {
            index -= 1;
            self.projectiles[index].advance();
            let footprint = self.projectiles[index].footprint();
            let damage = self.projectiles[index].damage();
            let id = self.projectiles[index].id();

            let mut consumed = false;
            for target in 0..self.monsters.len() {
                if self.monsters[target].is_defeated()
                    || !self.monsters[target].footprint().overlaps(&footprint)
                {
                    continue;
                }
                out.push(Event::ProjectileHit {
                    projectile: id,
                    monster: self.monsters[target].id(),
                });
                let _ = self.damage_monster_at(target, damage, out);
                consumed = true;
                break;
            }

            if consumed {
                let _ = self.projectiles.remove(index);
            } else if self.projectiles[index].is_off_screen(viewport) {
                out.push(Event::ProjectileExpired { projectile: id });
                let _ = self.projectiles.remove(index);
            }
        }

        let living: Vec<Rect> = self
            .monsters
            .iter()
            .filter(|monster| !monster.is_defeated())
            .map(Footprint::footprint)
            .collect();

        for index in 0..self.soldiers.len() {
            if let Some(seed) = self.soldiers[index].update(&living, viewport) {
                let projectile = self.spawn_projectile(seed, None);
                out.push(Event::SoldierFired {
                    soldier: self.soldiers[index].id(),
                    projectile,
                });
            }
        }

        let mut index = self.civilians.len();
        while index > 0 {
            index -= 1;
            if self.civilians[index].update(&living, viewport) {
                out.push(Event::CivilianDespawned {
                    civilian: self.civilians[index].id(),
                });
                let _ = self.civilians.remove(index);
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes a command against the world, appending the resulting events.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureViewport { width, height } => {
            world.viewport = Viewport::new(width, height);
        }
        Command::ConfigureSprites { frames } => world.sprites = frames,
        Command::StartRound { mode, seed } => world.start_round(mode, seed, out_events),
        Command::PerformAction {
            monster,
            action,
            input,
        } => world.perform_action(monster, action, input),
        Command::SetMonsterIntent { monster, intent } => {
            world.set_monster_intent(monster, intent);
        }
        Command::Tick => {
            if world.round == RoundState::Playing {
                world.tick(out_events);
            } else {
                log::debug!("ignoring tick outside an active round");
            }
        }
        Command::ResetRound => world.reset_round(out_events),
    }
}
