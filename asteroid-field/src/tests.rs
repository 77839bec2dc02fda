//! Simulation tests: field stepping, splitting, collisions, round flow and the star field.

use sprite_blit::rendering::Rgba;
use sprite_blit::rendering::blittable::BufferProvider;
use sprite_blit::window::{BlitContext, KeyCode, KeyboardState, WindowMode};

use crate::assets::Sprites;
use crate::components::*;
use crate::config::GameConfig;
use crate::constants::*;
use crate::game_mode::{GameMode, Level};
use crate::subsystems::game_flow::TickOutcome;
use crate::AsteroidGame;

fn seeded_game(seed: u64) -> AsteroidGame {
    seeded_game_with(GameConfig { seed: Some(seed), star_count: 32, ..Default::default() })
}

fn seeded_game_with(config: GameConfig) -> AsteroidGame {
    AsteroidGame::new(config, Sprites::placeholders())
}

/// A game in `Playing` mode with a ship and no asteroids.
fn empty_round(seed: u64) -> AsteroidGame {
    let mut game = seeded_game(seed);
    game.start_new_round(Level::One);
    let asteroids = game.ecs_world
        .query::<&Asteroid>()
        .iter()
        .map(|(entity, _)| entity)
        .collect::<Vec<_>>();
    for entity in asteroids {
        game.ecs_world.despawn(entity).unwrap();
    }
    game
}

fn place_asteroid(
    game: &mut AsteroidGame,
    class: AsteroidClass,
    (x, y): (f32, f32),
    (vx, vy): (f32, f32),
    angle: u16
) -> hecs::Entity {
    game.ecs_world.spawn((
        Asteroid { class },
        Position { x, y },
        Velocity { x: vx, y: vy },
        Rotation { angle }
    ))
}

fn fire_projectile_at(game: &mut AsteroidGame, x: f32, y: f32) {
    let projectile_entity = game.projectile_entity.unwrap();
    let (projectile, position) = game.ecs_world
        .query_one_mut::<(&mut Projectile, &mut Position)>(projectile_entity)
        .unwrap();
    projectile.in_flight = true;
    *position = Position { x, y };
}

fn projectile_state(game: &AsteroidGame) -> (bool, Position) {
    let projectile_entity = game.projectile_entity.unwrap();
    let projectile = *game.ecs_world.get::<Projectile>(projectile_entity).unwrap();
    let position = *game.ecs_world.get::<Position>(projectile_entity).unwrap();
    (projectile.in_flight, position)
}

fn keys(pressed: &[KeyCode]) -> KeyboardState {
    let mut keyboard = KeyboardState::default();
    for &key_code in pressed {
        keyboard.press(key_code, false);
    }
    keyboard
}

fn component<T: hecs::Component + Copy>(game: &AsteroidGame, entity: hecs::Entity) -> T {
    *game.ecs_world.get::<T>(entity).unwrap()
}

// ---- Field stepping ----

#[test]
fn test_free_flight_is_linear() {
    let mut game = empty_round(1);
    let entity = place_asteroid(&mut game, AsteroidClass::Large, (300.0, 200.0), (1.0, -1.0), 0);

    for _ in 0..25 {
        game.step_field();
    }

    assert_eq!(component::<Position>(&game, entity), Position { x: 325.0, y: 175.0 });
    assert_eq!(component::<Velocity>(&game, entity), Velocity { x: 1.0, y: -1.0 });
}

#[test]
fn test_reflection_at_far_border() {
    let mut game = empty_round(2);
    let entity = place_asteroid(&mut game, AsteroidClass::Large, (798.0, 100.0), (1.0, 1.0), 0);

    game.step_field();

    // 2 * (800 - 100) - 799
    assert_eq!(component::<Position>(&game, entity), Position { x: 601.0, y: 101.0 });
    assert_eq!(component::<Velocity>(&game, entity), Velocity { x: -1.0, y: 1.0 });
}

#[test]
fn test_reflection_at_near_border() {
    let mut game = empty_round(3);
    let entity = place_asteroid(&mut game, AsteroidClass::Small, (10.0, 0.0), (1.0, -1.0), 0);

    game.step_field();

    assert_eq!(component::<Position>(&game, entity), Position { x: 11.0, y: 1.0 });
    assert_eq!(component::<Velocity>(&game, entity), Velocity { x: 1.0, y: 1.0 });
}

#[test]
fn test_small_asteroids_bounce_off_their_own_limit() {
    let mut game = empty_round(4);
    let limit = WINDOW_HEIGHT - SMALL_ASTEROID_HEIGHT;
    let entity = place_asteroid(&mut game, AsteroidClass::Small, (100.0, limit - 0.5), (1.0, 1.0), 0);

    game.step_field();

    let position = component::<Position>(&game, entity);
    assert_eq!(position.y, limit - 0.5);
    assert_eq!(component::<Velocity>(&game, entity).y, -1.0);
}

#[test]
fn test_rotation_wraps_after_full_turn() {
    let mut game = empty_round(5);
    let from_zero = place_asteroid(&mut game, AsteroidClass::Large, (300.0, 200.0), (1.0, 1.0), 0);
    let from_phase = place_asteroid(&mut game, AsteroidClass::Small, (100.0, 100.0), (1.0, 1.0), 200);

    for step in 1..=MAX_ANGLE {
        game.step_field();
        let angle = component::<Rotation>(&game, from_zero).angle;
        assert!(angle < MAX_ANGLE);
        assert_eq!(angle, step % MAX_ANGLE);
        if step == MAX_ANGLE - 200 {
            assert_eq!(component::<Rotation>(&game, from_phase).angle, 0);
        }
    }

    assert_eq!(component::<Rotation>(&game, from_zero).angle, 0);
    assert_eq!(component::<Rotation>(&game, from_phase).angle, 200);
}

#[test]
fn test_step_counts_updates() {
    let mut game = empty_round(6);
    place_asteroid(&mut game, AsteroidClass::Large, (300.0, 200.0), (1.0, 1.0), 0);
    place_asteroid(&mut game, AsteroidClass::Small, (100.0, 100.0), (1.0, 1.0), 0);

    game.step_field();
    game.step_field();

    assert_eq!(game.diagnostics.updated, 4);
}

// ---- Generation and splitting ----

#[test]
fn test_generated_field_starts_in_upper_half() {
    let mut game = seeded_game(7);
    game.start_new_round(Level::Three);

    assert_eq!(game.count_asteroids(AsteroidClass::Large), 20);
    assert_eq!(game.count_asteroids(AsteroidClass::Small), 0);
    assert_eq!(game.diagnostics.generated, 20);
    for (_, (_, position, velocity, rotation)) in game.ecs_world
        .query::<(&Asteroid, &Position, &Velocity, &Rotation)>()
        .iter() {
        assert!((0.0..WINDOW_WIDTH - LARGE_ASTEROID_WIDTH).contains(&position.x));
        assert!((0.0..(WINDOW_HEIGHT - LARGE_ASTEROID_HEIGHT) / 2.0).contains(&position.y));
        assert_eq!(velocity.x.abs(), 1.0);
        assert_eq!(velocity.y.abs(), 1.0);
        assert!(rotation.angle < MAX_ANGLE);
    }
}

#[test]
fn test_split_spawns_two_small_asteroids_near_hit() {
    let mut game = empty_round(8);
    let hit = Position { x: 200.0, y: 100.0 };

    assert_eq!(game.split_asteroid(hit), 2);

    assert_eq!(game.count_asteroids(AsteroidClass::Small), 2);
    for (_, (asteroid, position, velocity)) in game.ecs_world
        .query::<(&Asteroid, &Position, &Velocity)>()
        .iter() {
        assert_eq!(asteroid.class, AsteroidClass::Small);
        assert!((hit.x..hit.x + SPLIT_JITTER).contains(&position.x));
        assert!((hit.y..hit.y + SPLIT_JITTER).contains(&position.y));
        assert_eq!(velocity.x.abs(), 1.0);
        assert_eq!(velocity.y.abs(), 1.0);
    }
}

#[test]
fn test_split_respects_capacity() {
    let mut game = seeded_game_with(GameConfig {
        seed: Some(9),
        star_count: 8,
        small_asteroid_capacity: 3,
        ..Default::default()
    });
    game.start_new_round(Level::One);
    let hit = Position { x: 300.0, y: 300.0 };

    assert_eq!(game.split_asteroid(hit), 2);
    assert_eq!(game.split_asteroid(hit), 1);
    assert_eq!(game.split_asteroid(hit), 0);
    assert_eq!(game.count_asteroids(AsteroidClass::Small), 3);
}

// ---- Collisions ----

#[test]
fn test_projectile_destroys_large_asteroid_and_splits_it() {
    let mut game = empty_round(10);
    place_asteroid(&mut game, AsteroidClass::Large, (350.0, 100.0), (1.0, 1.0), 0);
    fire_projectile_at(&mut game, 398.5, 150.0);

    let destroyed_at = game.update_projectile_collisions();

    assert_eq!(destroyed_at, Some(Position { x: 350.0, y: 100.0 }));
    assert_eq!(game.count_asteroids(AsteroidClass::Large), 0);
    assert_eq!(game.count_asteroids(AsteroidClass::Small), 2);

    let (in_flight, position) = projectile_state(&game);
    assert!(!in_flight);
    assert_eq!(position, launch_position(&game.ship_position().unwrap()));
}

#[test]
fn test_parked_projectile_rams_asteroid() {
    let mut game = empty_round(11);
    let launch = launch_position(&game.ship_position().unwrap());
    // covers the parked projectile at 398.5..400.5 x 480..490
    place_asteroid(&mut game, AsteroidClass::Large, (launch.x - 50.0, launch.y - 40.0), (1.0, 1.0), 0);

    assert_eq!(game.tick(&KeyboardState::default()), TickOutcome::Continue);

    assert_eq!(game.count_asteroids(AsteroidClass::Large), 0);
    assert_eq!(game.count_asteroids(AsteroidClass::Small), 2);
    assert_eq!(game.mode, GameMode::Playing);
    assert_eq!(projectile_state(&game), (false, launch));
}

#[test]
fn test_large_asteroids_are_hit_before_small_ones() {
    let mut game = empty_round(12);
    place_asteroid(&mut game, AsteroidClass::Small, (380.0, 130.0), (1.0, 1.0), 0);
    place_asteroid(&mut game, AsteroidClass::Large, (350.0, 100.0), (1.0, 1.0), 0);
    fire_projectile_at(&mut game, 398.5, 150.0);

    assert_eq!(game.update_projectile_collisions(), Some(Position { x: 350.0, y: 100.0 }));
    assert_eq!(game.count_asteroids(AsteroidClass::Large), 0);
    assert_eq!(game.count_asteroids(AsteroidClass::Small), 3);
}

#[test]
fn test_small_asteroid_hit_does_not_split() {
    let mut game = empty_round(13);
    place_asteroid(&mut game, AsteroidClass::Small, (380.0, 130.0), (1.0, 1.0), 0);
    fire_projectile_at(&mut game, 398.5, 150.0);

    assert_eq!(game.update_projectile_collisions(), Some(Position { x: 380.0, y: 130.0 }));
    assert_eq!(game.count_asteroids(AsteroidClass::Small), 0);
}

#[test]
fn test_touching_boxes_do_not_collide() {
    let mut game = empty_round(14);
    // right edge of the asteroid exactly on the projectile's left edge
    place_asteroid(&mut game, AsteroidClass::Large, (298.5, 100.0), (1.0, 1.0), 0);
    fire_projectile_at(&mut game, 398.5, 150.0);

    assert_eq!(game.update_projectile_collisions(), None);
}

#[test]
fn test_ship_takes_damage_per_overlapping_asteroid() {
    let mut game = empty_round(15);
    let ship = game.ship_position().unwrap();
    place_asteroid(&mut game, AsteroidClass::Large, (ship.x - 10.0, ship.y), (1.0, 1.0), 0);
    place_asteroid(&mut game, AsteroidClass::Small, (ship.x + 10.0, ship.y + 10.0), (1.0, 1.0), 0);
    place_asteroid(&mut game, AsteroidClass::Small, (0.0, 0.0), (1.0, 1.0), 0);

    game.update_ship_collisions();

    assert_eq!(game.health, game.config.starting_health - 2);
}

#[test]
fn test_ship_damage_scales_with_configured_damage() {
    let mut game = seeded_game_with(GameConfig {
        seed: Some(25),
        star_count: 8,
        collision_damage: 3,
        ..Default::default()
    });
    game.start_new_round(Level::One);
    let asteroids = game.ecs_world
        .query::<&Asteroid>()
        .iter()
        .map(|(entity, _)| entity)
        .collect::<Vec<_>>();
    for entity in asteroids {
        game.ecs_world.despawn(entity).unwrap();
    }
    let ship = game.ship_position().unwrap();
    place_asteroid(&mut game, AsteroidClass::Small, (ship.x - 20.0, ship.y), (1.0, 1.0), 0);
    place_asteroid(&mut game, AsteroidClass::Small, (ship.x + 20.0, ship.y + 50.0), (1.0, 1.0), 0);

    game.update_ship_collisions();
    assert_eq!(game.health, game.config.starting_health - 6);

    game.update_ship_collisions();
    assert_eq!(game.health, game.config.starting_health - 12);
    assert_eq!(game.count_asteroids(AsteroidClass::Small), 2);
}

// ---- Ship and projectile control ----

#[test]
fn test_ship_is_clamped_into_window() {
    let mut game = empty_round(16);
    let keyboard = keys(&[KeyCode::A, KeyCode::Up]);
    for _ in 0..200 {
        game.update_player_controls(&keyboard);
    }
    assert_eq!(game.ship_position(), Some(Position { x: 0.0, y: 0.0 }));

    let keyboard = keys(&[KeyCode::Right, KeyCode::S]);
    for _ in 0..200 {
        game.update_player_controls(&keyboard);
    }
    assert_eq!(
        game.ship_position(),
        Some(Position { x: WINDOW_WIDTH - SHIP_WIDTH, y: WINDOW_HEIGHT - SHIP_HEIGHT })
    );
}

#[test]
fn test_ship_moves_slower_upwards() {
    let mut game = empty_round(17);
    let start = game.ship_position().unwrap();

    game.update_player_controls(&keys(&[KeyCode::W, KeyCode::D]));

    assert_eq!(
        game.ship_position(),
        Some(Position { x: start.x + SHIP_HORIZONTAL_SPEED, y: start.y - SHIP_UP_SPEED })
    );
}

#[test]
fn test_projectile_flies_and_returns_to_ship() {
    let mut game = empty_round(18);
    let launch = launch_position(&game.ship_position().unwrap());

    game.update_player_controls(&keys(&[KeyCode::Space]));
    game.update_projectile();
    assert_eq!(projectile_state(&game), (true, Position { x: launch.x, y: launch.y - PROJECTILE_SPEED }));

    let idle = KeyboardState::default();
    let mut ticks = 1;
    while projectile_state(&game).0 {
        game.update_player_controls(&idle);
        game.update_projectile();
        ticks += 1;
        assert!(ticks < 100);
    }
    assert_eq!(projectile_state(&game), (false, launch));
}

#[test]
fn test_idle_projectile_follows_ship() {
    let mut game = empty_round(19);
    let keyboard = keys(&[KeyCode::Left]);

    game.update_player_controls(&keyboard);
    game.update_projectile();

    let (in_flight, position) = projectile_state(&game);
    assert!(!in_flight);
    assert_eq!(position, launch_position(&game.ship_position().unwrap()));
}

#[test]
fn test_projectile_in_flight_moves_with_ship() {
    let mut game = empty_round(26);
    fire_projectile_at(&mut game, 400.0, 200.0);

    game.update_player_controls(&keys(&[KeyCode::D, KeyCode::W]));

    let (in_flight, position) = projectile_state(&game);
    assert!(in_flight);
    assert_eq!(position, Position { x: 400.0 + SHIP_HORIZONTAL_SPEED, y: 200.0 - SHIP_UP_SPEED });
}

#[test]
fn test_window_edge_snaps_projectile_back_to_ship() {
    let mut game = empty_round(27);
    let ship_entity = game.ship_entity.unwrap();
    *game.ecs_world.get_mut::<Position>(ship_entity).unwrap() = Position { x: 5.0, y: 300.0 };
    fire_projectile_at(&mut game, 28.5, 100.0);

    game.update_player_controls(&keys(&[KeyCode::Left]));

    let ship = game.ship_position().unwrap();
    assert_eq!(ship, Position { x: 0.0, y: 300.0 });
    assert_eq!(projectile_state(&game), (true, launch_position(&ship)));

    game.update_projectile();
    let (in_flight, position) = projectile_state(&game);
    assert!(in_flight);
    assert_eq!(position.y, launch_position(&ship).y - PROJECTILE_SPEED);
}

// ---- Round flow ----

#[test]
fn test_health_never_increases() {
    let mut game = seeded_game(20);
    game.start_new_round(Level::Three);
    let keyboard = keys(&[KeyCode::Space, KeyCode::Left]);

    let mut previous = game.health;
    for _ in 0..2000 {
        game.tick(&keyboard);
        assert!(game.health <= previous);
        previous = game.health;
    }
}

#[test]
fn test_depleted_health_ends_round() {
    let mut game = empty_round(21);
    let ship = game.ship_position().unwrap();
    // overlaps the ship, clear of the parked projectile
    place_asteroid(&mut game, AsteroidClass::Large, (ship.x - 75.0, ship.y - 60.0), (1.0, 1.0), 0);
    game.health = 1;

    assert_eq!(game.tick(&KeyboardState::default()), TickOutcome::Continue);

    assert_eq!(game.health, 0);
    assert_eq!(game.mode, GameMode::Over);
}

#[test]
fn test_clearing_the_field_wins() {
    let mut game = empty_round(22);

    game.tick(&KeyboardState::default());

    assert_eq!(game.mode, GameMode::Won);
}

#[test]
fn test_last_hit_on_final_tick_wins_over_loss() {
    let mut game = empty_round(23);
    game.health = 0;

    game.tick(&KeyboardState::default());

    assert_eq!(game.mode, GameMode::Won);
}

#[test]
fn test_level_one_population_is_stable_without_hits() {
    let mut game = seeded_game(24);
    game.start_new_round(Level::One);
    // with no ship on the field there is nothing to run into
    for entity in [game.ship_entity.take(), game.projectile_entity.take()].into_iter().flatten() {
        game.ecs_world.despawn(entity).unwrap();
    }
    let idle = KeyboardState::default();

    for _ in 0..1500 {
        game.tick(&idle);
        assert_eq!(game.count_asteroids(AsteroidClass::Large), 5);
        assert_eq!(game.count_asteroids(AsteroidClass::Small), 0);
        assert_eq!(game.mode, GameMode::Playing);
    }
}

#[test]
fn test_same_seed_same_round() {
    fn snapshot(game: &AsteroidGame) -> Vec<(f32, f32, u16)> {
        game.ecs_world
            .query::<(&Asteroid, &Position, &Rotation)>()
            .iter()
            .map(|(_, (_, position, rotation))| (position.x, position.y, rotation.angle))
            .collect()
    }

    let mut game_a = seeded_game(12345);
    let mut game_b = seeded_game(12345);
    game_a.start_new_round(Level::Two);
    game_b.start_new_round(Level::Two);

    let keyboard = keys(&[KeyCode::Space, KeyCode::Right]);
    for _ in 0..300 {
        game_a.tick(&keyboard);
        game_b.tick(&keyboard);
        assert_eq!(snapshot(&game_a), snapshot(&game_b));
        assert_eq!(game_a.health, game_b.health);
    }
}

#[test]
fn test_mode_walkthrough() {
    let mut game = seeded_game(25);
    assert_eq!(game.mode, GameMode::Start);

    game.tick(&keys(&[KeyCode::Space]));
    assert_eq!(game.mode, GameMode::LevelSelect);

    game.tick(&keys(&[KeyCode::Key2]));
    assert_eq!(game.mode, GameMode::Playing);
    assert_eq!(game.count_asteroids(AsteroidClass::Large), 10);
    assert_eq!(game.health, 100);

    game.tick(&keys(&[KeyCode::P]));
    assert_eq!(game.mode, GameMode::Paused);

    let frozen = game.diagnostics;
    for _ in 0..10 {
        game.tick(&KeyboardState::default());
    }
    assert_eq!(game.diagnostics, frozen);

    game.tick(&keys(&[KeyCode::R]));
    assert_eq!(game.mode, GameMode::Playing);

    game.tick(&keys(&[KeyCode::P]));
    game.tick(&keys(&[KeyCode::M]));
    assert_eq!(game.mode, GameMode::Start);
}

#[test]
fn test_restart_keys_after_round_end() {
    let mut game = empty_round(26);
    game.mode = GameMode::Over;
    game.tick(&keys(&[KeyCode::P]));
    assert_eq!(game.mode, GameMode::Over);
    game.tick(&keys(&[KeyCode::R]));
    assert_eq!(game.mode, GameMode::LevelSelect);

    game.mode = GameMode::Won;
    game.tick(&keys(&[KeyCode::P]));
    assert_eq!(game.mode, GameMode::Start);
}

#[test]
fn test_new_round_resets_state() {
    let mut game = seeded_game(27);
    game.start_new_round(Level::Three);
    game.health = 3;
    game.split_asteroid(Position { x: 10.0, y: 10.0 });

    game.start_new_round(Level::One);

    assert_eq!(game.health, 100);
    assert_eq!(game.count_asteroids(AsteroidClass::Large), 5);
    assert_eq!(game.count_asteroids(AsteroidClass::Small), 0);
    assert_eq!(game.diagnostics.generated, 5);
    assert_eq!(game.diagnostics.updated, 0);
    assert!(!projectile_state(&game).0);
}

#[test]
fn test_held_keys_do_not_retrigger_transitions() {
    let mut game = seeded_game(28);
    let mut keyboard = keys(&[KeyCode::Space]);
    game.tick(&keyboard);
    keyboard.end_tick();

    game.tick(&keyboard);
    assert_eq!(game.mode, GameMode::LevelSelect);
}

#[test]
fn test_quit_from_any_mode() {
    for mode in [GameMode::Start, GameMode::LevelSelect, GameMode::Paused, GameMode::Won] {
        let mut game = seeded_game(29);
        game.mode = mode;
        assert_eq!(game.tick(&keys(&[KeyCode::Q])), TickOutcome::Quit);
    }
}

// ---- Star field ----

#[test]
fn test_stars_stay_in_window_and_brighten() {
    let mut game = seeded_game(30);
    for _ in 0..500 {
        game.tick(&KeyboardState::default());
        for star in &game.stars {
            assert!(star.brightness <= 255.0);
            let (x, y) = star.from;
            assert!((0.0..=WINDOW_WIDTH * STAR_FIXED_POINT).contains(&x));
            assert!((0.0..=WINDOW_HEIGHT * STAR_FIXED_POINT).contains(&y));
        }
    }
}

#[test]
fn test_star_field_freezes_outside_menus_and_rounds() {
    let mut game = seeded_game(31);
    game.mode = GameMode::Paused;
    let before = game.stars.iter().map(|star| star.to).collect::<Vec<_>>();

    game.tick(&KeyboardState::default());

    assert_eq!(game.stars.iter().map(|star| star.to).collect::<Vec<_>>(), before);
    assert_eq!(game.star_focus(), None);
}

// ---- Rendering ----

#[test]
fn test_every_mode_renders() {
    let mut game = seeded_game(32);
    game.start_new_round(Level::One);
    let mut ctx = BlitContext::new(WindowMode::Svga);

    for mode in [
        GameMode::Start,
        GameMode::LevelSelect,
        GameMode::Playing,
        GameMode::Paused,
        GameMode::Over,
        GameMode::Won
    ] {
        game.mode = mode;
        game.render(&mut ctx);
        assert!(ctx.get_buffer().iter().any(|&pixel| pixel != Rgba::BLACK));
    }
}
