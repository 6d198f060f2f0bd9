use bw_core::Configuration;
use bw_gen::UniformStateSampler;
use bw_world::BlocksWorld;
use proptest::prelude::*;

fn check_forest(config: &Configuration) {
    let supports = config.as_slice();
    let blocks = supports.len();
    let mut carried = vec![false; blocks];
    for (idx, &on) in supports.iter().enumerate() {
        assert!(on <= blocks);
        assert_ne!(on, idx + 1, "block {} on itself", idx + 1);
        if on > 0 {
            assert!(!carried[on - 1], "two blocks on block {on}");
            carried[on - 1] = true;
        }
    }
    for start in 0..blocks {
        let mut current = supports[start];
        let mut steps = 0;
        while current != 0 {
            steps += 1;
            assert!(steps <= blocks, "cycle through block {}", start + 1);
            current = supports[current - 1];
        }
    }
}

proptest! {
    #[test]
    fn generated_states_are_forests(seed in any::<u64>(), blocks in 1usize..40) {
        let mut sampler = UniformStateSampler::new(blocks, seed).unwrap();
        for _ in 0..8 {
            let state = sampler.next_state().unwrap();
            prop_assert_eq!(state.len(), blocks);
            check_forest(&state);
        }
    }

    #[test]
    fn world_model_accepts_generated_states(seed in any::<u64>(), blocks in 1usize..25) {
        let mut sampler = UniformStateSampler::new(blocks, seed).unwrap();
        let state = sampler.next_state().unwrap();
        let world = BlocksWorld::from_configuration(&state).unwrap();
        prop_assert_eq!(world.configuration().unwrap(), state);
    }
}

#[test]
fn large_worlds_stay_valid() {
    let mut sampler = UniformStateSampler::new(500, 31).unwrap();
    for _ in 0..5 {
        check_forest(&sampler.next_state().unwrap());
    }
}
