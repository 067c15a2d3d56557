//! Property tests over random seeds and input streams

use std::collections::HashMap;

use arena_fps::consts::*;
use arena_fps::sim::{GameEvent, GameState, MoveKeys, TickInput, tick};
use glam::Vec2;
use proptest::prelude::*;

fn tick_input() -> impl Strategy<Value = TickInput> {
    let look = (-80.0f32..80.0, -80.0f32..80.0);
    (any::<u8>(), look, any::<bool>()).prop_map(|(keys, (dx, dy), fire)| TickInput {
        movement: MoveKeys {
            forward: keys & 1 != 0,
            back: keys & 2 != 0,
            left: keys & 4 != 0,
            right: keys & 8 != 0,
        },
        look_delta: Vec2::new(dx, dy),
        fire,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn gameplay_invariants_hold(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..400)
    ) {
        let mut state = GameState::new(seed);
        let mut ended = 0;

        for input in &inputs {
            let was_running = state.is_running();
            let score = state.score;
            let health = state.health;

            tick(&mut state, input);

            if !was_running {
                prop_assert_eq!(state.score, score);
                prop_assert_eq!(state.health, health);
                continue;
            }

            let defeats = state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::HostileDefeated { .. }))
                .count() as u64;
            prop_assert_eq!(state.score, score + defeats * HOSTILE_DEFEAT_SCORE);
            prop_assert!(state.health <= health);
            prop_assert!(state.hostiles.len() >= INITIAL_HOSTILE_COUNT);
            prop_assert!(state.player.pitch.abs() <= MAX_PITCH);
            prop_assert!(state.arena.contains(state.player.pos));

            ended += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::SessionEnded { .. }))
                .count();
            prop_assert_eq!(ended > 0, !state.is_running());
        }
        prop_assert!(ended <= 1);
    }

    #[test]
    fn projectile_lifetimes_strictly_decrease(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..250)
    ) {
        let mut state = GameState::new(seed);
        let mut seen: HashMap<u32, u32> = HashMap::new();

        for input in &inputs {
            tick(&mut state, input);
            for p in state.projectiles.iter() {
                prop_assert!(p.lifetime > 0);
                if let Some(&previous) = seen.get(&p.id) {
                    prop_assert!(p.lifetime < previous);
                }
                seen.insert(p.id, p.lifetime);
            }
        }
    }
}
