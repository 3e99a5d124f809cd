//! Property tests for the simulation invariants

use mob_shooter::sim::{Action, GameStatus, TickInput, TickOutcome, World, tick};
use mob_shooter::Settings;
use proptest::prelude::*;

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::None),
        Just(Action::Left),
        Just(Action::Right),
        Just(Action::Up),
        Just(Action::Down),
        Just(Action::Shoot),
    ]
}

fn frame_inputs(max_frames: usize) -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(
        prop::collection::vec(action(), 0..3).prop_map(TickInput::new),
        1..max_frames,
    )
}

fn settings(seed: u64) -> Settings {
    Settings {
        seed,
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn player_stays_inside_play_area(seed in any::<u64>(), inputs in frame_inputs(200)) {
        let settings = settings(seed);
        let area = settings.play_area();
        let mut world = World::new(settings).unwrap();

        for input in &inputs {
            tick(&mut world, input);
            prop_assert!(area.contains_rect(&world.player().body));
        }
    }

    #[test]
    fn frame_counter_increments_by_one(seed in any::<u64>(), inputs in frame_inputs(400)) {
        let mut world = World::new(settings(seed)).unwrap();

        for input in &inputs {
            let before = world.used_frame();
            tick(&mut world, input);
            prop_assert_eq!(world.used_frame(), before + 1);
        }
    }

    #[test]
    fn mobs_stay_inside_arena(seed in any::<u64>(), frames in 1usize..300) {
        let settings = settings(seed);
        let arena = settings.arena();
        let mut world = World::new(settings).unwrap();

        for _ in 0..frames {
            tick(&mut world, &TickInput::default());
            for mob in world.mobs() {
                prop_assert!(arena.contains_rect(&mob.body));
            }
        }
    }

    #[test]
    fn terminal_state_is_stable(
        seed in any::<u64>(),
        frame_limit in 1u32..40,
        inputs in frame_inputs(60),
        after in frame_inputs(20),
    ) {
        let settings = Settings { frame_limit, ..settings(seed) };
        let mut world = World::new(settings).unwrap();

        // Play until terminal; the frame limit guarantees it happens
        let mut frames = inputs.iter().cycle();
        while world.is_running() {
            let input = frames.next().cloned().unwrap_or_default();
            tick(&mut world, &input);
        }

        let status = world.status();
        let score = world.score();
        let lives = world.player().lives;
        let result = world.result();
        prop_assert!(status.is_terminal());
        prop_assert!(result.is_some());

        for input in &after {
            prop_assert_eq!(tick(&mut world, input), TickOutcome::Reset);
            prop_assert_eq!(world.status(), status);
            prop_assert_eq!(world.score(), score);
            prop_assert_eq!(world.player().lives, lives);
            prop_assert_eq!(world.result(), result);
        }
    }

    #[test]
    fn reset_restores_initial_state(seed in any::<u64>(), inputs in frame_inputs(100)) {
        let settings = settings(seed);
        let mut world = World::new(settings.clone()).unwrap();

        for input in &inputs {
            tick(&mut world, input);
        }
        world.reset();

        prop_assert_eq!(world.used_frame(), 0);
        prop_assert_eq!(world.score(), 0);
        prop_assert_eq!(world.player().lives, settings.player_lives);
        prop_assert_eq!(world.player().shield, settings.player_shield);
        prop_assert_eq!(world.status(), GameStatus::Alive);
        prop_assert_eq!(world.mobs().len(), settings.mob_count as usize);
        prop_assert!(world.bullets().is_empty());
    }
}
