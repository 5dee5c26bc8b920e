//! End-to-end engine scenarios through the public API

use brickfall::GameConfig;
use brickfall::consts::*;
use brickfall::sim::{
    Ball, BrickDescriptor, BrickKind, GameEngine, GamePhase, LevelError, LevelLayout,
    LevelSource, TickInput, Vector2,
};

/// One tiny layout: a single brick straight above the paddle
struct SingleBrick;

impl LevelSource for SingleBrick {
    fn level_exists(&self, number: u32) -> bool {
        number == 1
    }

    fn level(&self, number: u32) -> Result<LevelLayout, LevelError> {
        if number != 1 {
            return Err(LevelError::NotFound(number));
        }
        Ok(LevelLayout {
            number,
            difficulty: 1,
            bricks: vec![BrickDescriptor {
                x: 36.0,
                y: 5.0,
                width: 8.0,
                height: 2.0,
                kind: BrickKind::Normal,
            }],
        })
    }

    fn level_count(&self) -> u32 {
        1
    }
}

fn run(engine: &mut GameEngine<impl LevelSource>, frames: u32, input: &TickInput) {
    for _ in 0..frames {
        engine.step(input, SIM_DT);
        engine.process_state_transitions();
    }
}

#[test]
fn straight_shot_clears_single_brick_level() {
    let config = GameConfig {
        power_ups_enabled: false,
        ..Default::default()
    };
    let mut engine = GameEngine::with_levels(config, SingleBrick);
    assert!(engine.start_new_game());
    assert_eq!(engine.bricks().len(), 1);

    let launch = TickInput {
        launch: true,
        ..Default::default()
    };
    // Ball travels 20 units up at 8 u/s; three seconds is plenty
    run(&mut engine, 180, &launch);

    assert!(engine.bricks().is_empty());
    assert_eq!(engine.score().score(), 10);
    assert_eq!(engine.state().phase(), GamePhase::Victory);
}

#[test]
fn idle_player_loses_every_life() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.start_new_game();

    let mut lost = 0;
    for _ in 0..20 {
        if engine.state().phase() == GamePhase::GameOver {
            break;
        }
        // Drop the ball beside the paddle, heading down
        *engine.ball_mut() = Ball::new(Vector2::new(5.0, 28.0), Vector2::new(0.0, 8.0), 0.5);
        run(&mut engine, 30, &TickInput::default());
        lost += 1;
    }

    assert_eq!(lost, INITIAL_LIVES);
    assert_eq!(engine.state().phase(), GamePhase::GameOver);
    assert_eq!(engine.state().lives(), 0);

    // A fresh game restores everything
    assert!(engine.start_new_game());
    assert_eq!(engine.state().lives(), INITIAL_LIVES);
    assert_eq!(engine.bricks().len(), 50);
    assert_eq!(engine.score().score(), 0);
}

#[test]
fn same_seed_same_game() {
    let config = GameConfig {
        seed: 42,
        ..Default::default()
    };
    let play = |config: GameConfig| {
        let mut engine = GameEngine::new(config);
        engine.start_new_game();
        let input = TickInput {
            launch: true,
            launch_angle: 0.4,
            ..Default::default()
        };
        run(&mut engine, 600, &input);
        serde_json::to_string(&engine.snapshot()).unwrap()
    };

    assert_eq!(play(config.clone()), play(config));
}

#[test]
fn pause_freezes_the_world() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.start_new_game();
    engine.launch_ball(0.2);
    run(&mut engine, 10, &TickInput::default());

    assert!(engine.pause());
    let frozen = serde_json::to_string(&engine.snapshot()).unwrap();
    let right = TickInput {
        direction: 1.0,
        launch: true,
        ..Default::default()
    };
    run(&mut engine, 30, &right);
    engine.update(0.05);
    let snap = engine.snapshot();
    assert_eq!(snap.phase, GamePhase::Paused);
    assert_eq!(serde_json::to_string(&snap).unwrap(), frozen);

    assert!(engine.resume());
    assert_eq!(engine.state().phase(), GamePhase::Playing);
}

#[test]
fn levels_advance_in_order() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.start_new_game();

    for level in 1..=3 {
        assert_eq!(engine.levels().current_level(), level);
        engine.bricks_mut().retain(|b| !b.kind.counts_for_clear());
        engine.update(SIM_DT);
        assert_eq!(engine.state().phase(), GamePhase::LevelComplete);
        engine.process_state_transitions();
    }

    assert_eq!(engine.state().phase(), GamePhase::Victory);
    assert!(!engine.launch_ball(0.0));
}

#[test]
fn unknown_level_is_rejected() {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.start_new_game();
    assert_eq!(engine.load_level(0), Err(LevelError::NotFound(0)));
    assert_eq!(engine.load_level(4), Err(LevelError::NotFound(4)));
    assert_eq!(engine.levels().current_level(), 1);
    assert!(engine.load_level(3).is_ok());
    assert_eq!(engine.bricks().len(), 70);
}
