use bw_core::{BlockId, BwError, Configuration};
use bw_world::BlocksWorld;

fn block(n: usize) -> BlockId {
    BlockId::from_raw(n).unwrap()
}

fn config(text: &str) -> Configuration {
    text.parse().unwrap()
}

#[test]
fn reset_reproduces_six_block_example() {
    // 2 / 5 3 / 4 1 6
    let world = BlocksWorld::from_configuration(&config("0 5 1 0 4 0")).unwrap();
    assert_eq!(world.configuration().unwrap().to_string(), "0,5,1,0,4,0");
    assert_eq!(world.on(block(2)).unwrap(), Some(block(5)));
    assert_eq!(world.on(block(4)).unwrap(), None);
    assert!(world.is_clear(block(2)).unwrap());
    assert!(!world.is_clear(block(4)).unwrap());

    let towers: Vec<Vec<usize>> = world
        .towers()
        .into_iter()
        .map(|tower| tower.iter().map(BlockId::as_raw).collect())
        .collect();
    assert_eq!(towers, vec![vec![1, 3], vec![4, 5, 2], vec![6]]);
}

#[test]
fn stacked_blocks_share_their_base_stack() {
    let world = BlocksWorld::from_configuration(&config("0,1,2")).unwrap();
    let base = world.stack_number(block(1)).unwrap();
    assert_eq!(world.stack_number(block(2)).unwrap(), base);
    assert_eq!(world.stack_number(block(3)).unwrap(), base);
    assert_eq!(world.position(block(3)).unwrap(), world.position(block(1)).unwrap());
}

#[test]
fn loops_are_detected() {
    let err = BlocksWorld::from_configuration(&config("2,1,0")).unwrap_err();
    assert!(matches!(err, BwError::World(ref info) if info.code == "cycle"));
    assert_eq!(err.info().context.get("blocks").map(String::as_str), Some("1,2"));
}

#[test]
fn self_support_is_a_loop() {
    let err = BlocksWorld::from_configuration(&config("0,2")).unwrap_err();
    assert_eq!(err.code(), "cycle");
}

#[test]
fn two_blocks_on_one_support_are_rejected() {
    let err = BlocksWorld::from_configuration(&config("0,1,1")).unwrap_err();
    assert_eq!(err.code(), "target-not-clear");
}

#[test]
fn empty_world_is_rejected() {
    assert_eq!(BlocksWorld::new(0).unwrap_err().code(), "empty-world");
}

#[test]
fn moves_follow_clear_rules() {
    let mut world = BlocksWorld::new(3).unwrap();
    world.move_block(block(1), Some(block(2))).unwrap();
    assert_eq!(world.configuration().unwrap().to_string(), "2,0,0");

    let err = world.move_block(block(2), Some(block(3))).unwrap_err();
    assert_eq!(err.code(), "source-not-clear");
    let err = world.move_block(block(3), Some(block(2))).unwrap_err();
    assert_eq!(err.code(), "target-not-clear");
    let err = world.move_block(block(3), Some(block(3))).unwrap_err();
    assert_eq!(err.code(), "self-move");
    let err = world.move_block(block(9), None).unwrap_err();
    assert_eq!(err.code(), "unknown-block");

    world.move_block(block(1), None).unwrap();
    assert!(world.is_clear(block(2)).unwrap());
    assert_eq!(world.on(block(1)).unwrap(), None);
}

#[test]
fn table_moves_use_first_free_stack() {
    let mut world = BlocksWorld::new(3).unwrap();
    // Blocks start on stacks 1..=3, so stack 0 is free.
    assert_eq!(world.free_stack_number(), 0);
    world.move_block(block(2), None).unwrap();
    assert_eq!(world.stack_number(block(2)).unwrap(), 0);
    // Stacks 0, 1 and 3 are taken; 2 is the first gap.
    assert_eq!(world.free_stack_number(), 2);
    world.move_block(block(3), Some(block(1))).unwrap();
    assert_eq!(world.free_stack_number(), 2);
}

#[test]
fn reset_replaces_previous_arrangement() {
    let mut world = BlocksWorld::from_configuration(&config("0,1,2")).unwrap();
    world.reset(&config("0,0,0,3")).unwrap();
    assert_eq!(world.len(), 4);
    assert_eq!(world.block_ids().count(), 4);
    assert_eq!(world.configuration().unwrap().to_string(), "0,0,0,3");
}
