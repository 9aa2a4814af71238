//! End-to-end `World` scenario (spec.md §8, scenario 6: append ordering)
//! plus the projection style described in spec.md §4.3.

use lazc_core::{Choice, World};

#[test]
fn append_choice_is_queued_after_everything_already_pending() {
    // spec.md's literal scenario: cons_tag(0), then cons_choice(HEAD),
    // then append_choice(TAIL) — the appended choice must come out last.
    let world = World::new().cons_tag(0).cons_choice(Choice::Head).append_choice(Choice::Tail);

    let (tag, world) = world.uncons_tag();
    assert_eq!(tag, 0);

    let mut order = Vec::new();
    let mut cursor = world;
    while cursor.has_choices() {
        let (choice, rest) = cursor.uncons_choice();
        order.push(choice);
        cursor = rest;
    }

    assert_eq!(
        order,
        vec![Choice::Head, Choice::Tail],
        "append_choice must queue its choice after every choice already pending"
    );
}

#[test]
fn branching_a_world_does_not_mutate_the_shared_prefix() {
    let shared = World::new().cons_tag(1).cons_choice(Choice::Head);

    let left = shared.cons_choice(Choice::Tail);
    let right = shared.cons_choice(Choice::Head);

    let (c, _) = left.uncons_choice();
    assert_eq!(c, Choice::Tail);
    let (c, _) = right.uncons_choice();
    assert_eq!(c, Choice::Head);

    // the world both branches were built from is untouched
    let (c, _) = shared.uncons_choice();
    assert_eq!(c, Choice::Head);
    let (tag, _) = shared.uncons_tag();
    assert_eq!(tag, 1);
}

#[test]
fn a_projection_style_evaluation_consumes_one_choice_per_step() {
    // Models spec.md §4.3's world-as-continuation style: a function
    // consumes the front choice to decide which of two values it
    // projects, exactly as `result`/`concat` do in the reference
    // implementation's main.c.
    fn project(world: &World, on_head: i64, on_tail: i64) -> (i64, World) {
        let (choice, rest) = world.uncons_choice();
        match choice {
            Choice::Head => (on_head, rest),
            Choice::Tail => (on_tail, rest),
        }
    }

    let world = World::new().cons_choice(Choice::Tail).cons_choice(Choice::Head);
    let (first, world) = project(&world, 10, 20);
    assert_eq!(first, 10);
    let (second, world) = project(&world, 10, 20);
    assert_eq!(second, 20);
    assert!(!world.has_choices());
}
