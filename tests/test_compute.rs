use bug_crossing::compute::*;
use bug_crossing::constants::*;
use bug_crossing::controller::GameConfig;
use bug_crossing::entities::*;
use bug_crossing::input::Direction;
use bug_crossing::render::Scoreboard;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Keeps every value written to each readout, in order.
#[derive(Default)]
struct Displays {
    scores: Vec<u32>,
    levels: Vec<u32>,
}

impl Scoreboard for Displays {
    fn show_score(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn show_level(&mut self, level: u32) {
        self.levels.push(level);
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A fresh game with nothing on the board.
fn empty_board(rng: &mut StdRng) -> GameState {
    let mut state = GameState::new(rng);
    state.controller.enemies.clear();
    state.controller.treats.clear();
    state
}

const DT: f32 = 1.0 / 30.0;

// ── GameState::new ────────────────────────────────────────────────────────────

#[test]
fn new_game_spawns_one_enemy_per_lane() {
    let state = GameState::new(&mut seeded_rng());
    assert_eq!(state.controller.level, 1);
    assert_eq!(state.controller.score, 0);
    let mut ys: Vec<f32> = state.controller.enemies.iter().map(|e| e.y).collect();
    ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(ys, vec![row_y(1), row_y(2), row_y(3)]);
    assert_eq!(state.controller.treats.len(), 1);
    assert_eq!(state.player, Player::default());
    assert!(!state.debug);
}

#[test]
fn with_config_uses_starting_difficulty() {
    let config = GameConfig {
        enemy_count: 6,
        max_speed: 300.0,
        min_speed: 250.0,
        treat_count: 4,
    };
    let state = GameState::with_config(&config, &mut seeded_rng());
    assert_eq!(state.controller.enemies.len(), 6);
    assert_eq!(state.controller.treats.len(), 4);
    assert!(state
        .controller
        .enemies
        .iter()
        .all(|e| e.speed >= 250.0 && e.speed < 300.0));
}

#[test]
fn announce_shows_starting_readouts() {
    let state = GameState::new(&mut seeded_rng());
    let mut displays = Displays::default();
    state.announce(&mut displays);
    assert_eq!(displays.scores, vec![0]);
    assert_eq!(displays.levels, vec![1]);
}

// ── update — enemies ──────────────────────────────────────────────────────────

#[test]
fn update_moves_every_enemy() {
    let mut rng = seeded_rng();
    let mut state = GameState::new(&mut rng);
    state.controller.treats.clear();
    for e in state.controller.enemies.iter_mut() {
        e.x = 0.0;
    }
    state.update(0.5, &mut rng, &mut Displays::default());
    for e in &state.controller.enemies {
        assert_eq!(e.x, e.speed * 0.5);
    }
}

#[test]
fn enemy_contact_sends_player_home() {
    let mut rng = seeded_rng();
    let mut state = empty_board(&mut rng);
    state.player.y = row_y(2);
    state.player.goal_y = row_y(2);
    state
        .controller
        .enemies
        .push(Enemy::new(state.player.x, row_y(2), 10.0));

    state.update(DT, &mut rng, &mut Displays::default());
    assert_eq!(state.player, Player::default());
    assert_eq!(state.controller.level, 1);
}

#[test]
fn several_enemies_hitting_at_once_reset_once() {
    let mut rng = seeded_rng();
    let mut state = empty_board(&mut rng);
    state.player.y = row_y(3);
    state.player.goal_y = row_y(3);
    for dx in [-40.0, 0.0, 40.0] {
        state
            .controller
            .enemies
            .push(Enemy::new(state.player.x + dx, row_y(3), 10.0));
    }

    state.update(DT, &mut rng, &mut Displays::default());
    assert_eq!(state.player, Player::default());
    assert_eq!(state.controller.enemies.len(), 3);
}

#[test]
fn enemy_in_other_lane_leaves_player_alone() {
    let mut rng = seeded_rng();
    let mut state = empty_board(&mut rng);
    state.player.y = row_y(2);
    state.player.goal_y = row_y(2);
    state
        .controller
        .enemies
        .push(Enemy::new(state.player.x, row_y(1), 10.0));

    state.update(DT, &mut rng, &mut Displays::default());
    assert_eq!(state.player.y, row_y(2));
}

// ── update — player ───────────────────────────────────────────────────────────

#[test]
fn input_is_applied_on_next_update() {
    let mut rng = seeded_rng();
    let mut state = empty_board(&mut rng);
    state.handle_input(Some(Direction::Up));
    assert_eq!(state.player.y, row_y(PLAYER_START_ROW));
    state.update(DT, &mut rng, &mut Displays::default());
    assert_eq!(state.player.y, row_y(PLAYER_START_ROW - 1));
}

#[test]
fn reaching_water_levels_up_exactly_once() {
    let mut rng = seeded_rng();
    let mut state = empty_board(&mut rng);
    state.player.y = row_y(1);
    state.player.goal_y = row_y(1);
    let mut displays = Displays::default();

    state.handle_input(Some(Direction::Up));
    state.update(DT, &mut rng, &mut displays);
    assert_eq!(state.controller.level, 2);
    assert_eq!(state.player.x, state.player.start_x);
    assert_eq!(state.player.y, state.player.start_y);
    assert_eq!(displays.levels, vec![2]);

    // Further frames without input don't cross again
    for _ in 0..10 {
        state.controller.enemies.clear();
        state.update(DT, &mut rng, &mut displays);
    }
    assert_eq!(state.controller.level, 2);
    assert_eq!(displays.levels, vec![2]);
}

#[test]
fn level_up_regenerates_board_mid_frame() {
    let mut rng = seeded_rng();
    let mut state = empty_board(&mut rng);
    state.player.y = row_y(1);
    state.handle_input(Some(Direction::Up));
    state.update(DT, &mut rng, &mut Displays::default());
    assert_eq!(state.controller.enemies.len(), 3);
    assert_eq!(state.controller.treats.len(), 2); // level 2 adds a treat
}

// ── update — treats ───────────────────────────────────────────────────────────

#[test]
fn stepping_onto_treat_collects_it() {
    let mut rng = seeded_rng();
    let mut state = empty_board(&mut rng);
    let target = Treat::new(
        TreatId(1000),
        state.player.x,
        row_y(4),
        TreatKind::Gem(GemColor::Blue),
    );
    let other = Treat::new(TreatId(1001), column_x(0), row_y(4), TreatKind::Heart);
    state.controller.treats.push(target);
    state.controller.treats.push(other);
    let mut displays = Displays::default();

    state.handle_input(Some(Direction::Up));
    state.update(DT, &mut rng, &mut displays);
    assert_eq!(state.controller.score, 1);
    assert_eq!(displays.scores, vec![1]);
    assert_eq!(state.controller.treats.len(), 1);
    assert_eq!(state.controller.treats[0].id, TreatId(1001));

    // Standing on the empty tile scores nothing more
    state.update(DT, &mut rng, &mut displays);
    assert_eq!(state.controller.score, 1);
}

// ── Properties over long runs ─────────────────────────────────────────────────

#[test]
fn random_play_stays_on_grid_and_levels_at_most_once_per_frame() {
    let mut rng = seeded_rng();
    let mut state = GameState::new(&mut rng);
    let mut displays = Displays::default();
    let start = state.player.clone();

    for _ in 0..5000 {
        // Bias upward so crossings actually happen
        let direction = match rng.gen_range(0..8) {
            0 => Some(Direction::Left),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => None,
            _ => Some(Direction::Up),
        };
        state.handle_input(direction);

        let level_before = state.controller.level;
        state.update(DT, &mut rng, &mut displays);
        let gained = state.controller.level - level_before;
        assert!(gained <= 1);

        let p = &state.player;
        assert_eq!(((p.x - start.x) / COLUMN_WIDTH).fract(), 0.0);
        assert_eq!(((p.y - start.y) / ROW_HEIGHT).fract(), 0.0);
        assert!(!p.is_in_the_water());
        assert!(state.controller.treats.len() <= MAX_TREATS);
    }

    assert_eq!(displays.levels.len() as u32, state.controller.level - 1);
    assert_eq!(displays.scores.last().copied().unwrap_or(0), state.controller.score);
}

// ── End to end ────────────────────────────────────────────────────────────────

#[test]
fn first_crossing_reaches_level_two() {
    let mut rng = seeded_rng();
    let mut state = GameState::new(&mut rng);
    let mut displays = Displays::default();
    state.announce(&mut displays);

    // Three bugs, one per stone lane; player on column 2, row 5
    assert_eq!(state.controller.enemies.len(), 3);
    for row in 1..=3 {
        assert_eq!(
            state
                .controller
                .enemies
                .iter()
                .filter(|e| e.y == row_y(row))
                .count(),
            1
        );
    }
    assert_eq!(state.player.x, column_x(2));
    assert_eq!(state.player.y, row_y(5));

    // Clear the road so the walk is deterministic
    state.controller.enemies.clear();
    state.controller.treats.clear();

    for row in (1..PLAYER_START_ROW).rev() {
        state.handle_input(Some(Direction::Up));
        state.update(DT, &mut rng, &mut displays);
        assert_eq!(state.player.y, row_y(row));
        assert_eq!(state.controller.level, 1);
    }

    state.handle_input(Some(Direction::Up));
    state.update(DT, &mut rng, &mut displays);

    assert_eq!(state.controller.level, 2);
    assert_eq!(state.player, Player::default());
    assert_eq!(displays.levels, vec![1, 2]);
    assert_eq!(displays.scores.last(), Some(&1));
}
