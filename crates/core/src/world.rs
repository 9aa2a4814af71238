//! World: the choice-list mechanism behind the `world -> value` evaluation
//! style.
//!
//! A compiled program can evaluate an expression either by building a
//! thunk graph directly (the `Ar`/`Thunk` path in `crate::ar`) or by
//! threading a persistent `World` through a chain of projection functions,
//! each of which consumes one `Choice` (`Head`/`Tail`) to decide which
//! branch of a product value to compute. Both styles coexist in a single
//! runtime; `World` is pure, immutable data shared structurally via `Rc`,
//! never mutated in place.

use std::fmt;
use std::rc::Rc;

use crate::fatal::fatal;

/// Which projection of a product value a choice selects.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Head,
    Tail,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Head => write!(f, "HEAD"),
            Choice::Tail => write!(f, "TAIL"),
        }
    }
}

/// One node of the persistent tag list. Tags are opaque `u32` markers a
/// compiled program uses to identify which constructor produced a value;
/// their meaning is entirely up to the generated code.
struct TagNode {
    tag: u32,
    next: TagList,
}

type TagList = Option<Rc<TagNode>>;

/// One node of the persistent choice list.
struct ChoiceNode {
    choice: Choice,
    next: ChoiceList,
}

type ChoiceList = Option<Rc<ChoiceNode>>;

/// A persistent, structurally-shared pair of a tag list and a choice list.
///
/// `World` is cheap to clone (`Rc` bump) and cheap to extend (one new
/// node, sharing the old tail) — the whole point of a persistent list is
/// that branching evaluation paths never have to copy the world they
/// branched from.
#[derive(Clone)]
pub struct World {
    tags: TagList,
    choices: ChoiceList,
}

impl World {
    /// The empty world: no tags, no pending choices.
    pub fn new() -> World {
        World { tags: None, choices: None }
    }

    /// Push a tag onto the front of the tag list.
    pub fn cons_tag(&self, tag: u32) -> World {
        World {
            tags: Some(Rc::new(TagNode { tag, next: self.tags.clone() })),
            choices: self.choices.clone(),
        }
    }

    /// Pop the front tag, returning it and the remaining world.
    ///
    /// Fatal if the tag list is empty — a compiled program only calls this
    /// when it expects a tag to be there (spec.md §4.3).
    pub fn uncons_tag(&self) -> (u32, World) {
        match &self.tags {
            Some(node) => (
                node.tag,
                World { tags: node.next.clone(), choices: self.choices.clone() },
            ),
            None => fatal("world has no tags"),
        }
    }

    /// Push a choice onto the front of the choice list.
    pub fn cons_choice(&self, choice: Choice) -> World {
        World {
            tags: self.tags.clone(),
            choices: Some(Rc::new(ChoiceNode { choice, next: self.choices.clone() })),
        }
    }

    /// Pop the front choice, returning it and the remaining world.
    ///
    /// Fatal if the choice list is empty (spec.md §4.3).
    pub fn uncons_choice(&self) -> (Choice, World) {
        match &self.choices {
            Some(node) => (
                node.choice,
                World { tags: self.tags.clone(), choices: node.next.clone() },
            ),
            None => fatal("world has no choices"),
        }
    }

    /// A world identical to this one but with every pending choice
    /// discarded. Used when switching from the choice-driven projection
    /// style back to plain forcing (spec.md §4.3).
    pub fn drop_choices(&self) -> World {
        World { tags: self.tags.clone(), choices: None }
    }

    /// Whether there is at least one pending choice.
    pub fn has_choices(&self) -> bool {
        self.choices.is_some()
    }

    /// Append `c` to the *tail* of this world's choice list — the choice
    /// that will be consumed last, after everything already pending
    /// (spec.md §4.3: "`c` appended at the tail"). This is how a
    /// compiled program schedules a choice to be made only once every
    /// choice already queued has been consumed.
    ///
    /// Implemented iteratively rather than by the spec's naive inductive
    /// recursion on the list (spec.md §9 explicitly permits this):
    /// walking to the end of a long choice list recursively would blow
    /// the stack on a deeply threaded program, and the unfolded loop
    /// produces the identical list.
    pub fn append_choice(&self, c: Choice) -> World {
        let mut collected: Vec<Choice> = Vec::new();
        let mut cursor = self.choices.clone();
        while let Some(node) = cursor {
            collected.push(node.choice);
            cursor = node.next.clone();
        }

        let mut result = Some(Rc::new(ChoiceNode { choice: c, next: None }));
        for choice in collected.into_iter().rev() {
            result = Some(Rc::new(ChoiceNode { choice, next: result }));
        }

        World { tags: self.tags.clone(), choices: result }
    }
}

impl Default for World {
    fn default() -> World {
        World::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips() {
        let w = World::new().cons_tag(7).cons_tag(3);
        let (tag, w) = w.uncons_tag();
        assert_eq!(tag, 3);
        let (tag, _) = w.uncons_tag();
        assert_eq!(tag, 7);
    }

    #[test]
    fn choice_round_trips_lifo() {
        let w = World::new().cons_choice(Choice::Head).cons_choice(Choice::Tail);
        let (c, w) = w.uncons_choice();
        assert_eq!(c, Choice::Tail);
        let (c, _) = w.uncons_choice();
        assert_eq!(c, Choice::Head);
    }

    #[test]
    fn drop_choices_clears_only_choices() {
        let w = World::new().cons_tag(1).cons_choice(Choice::Head);
        let cleared = w.drop_choices();
        assert!(!cleared.has_choices());
        let (tag, _) = cleared.uncons_tag();
        assert_eq!(tag, 1);
    }

    #[test]
    fn branching_worlds_share_structure_and_stay_independent() {
        let base = World::new().cons_choice(Choice::Head);
        let left = base.cons_choice(Choice::Tail);
        let right = base.cons_choice(Choice::Head);

        let (c, _) = left.uncons_choice();
        assert_eq!(c, Choice::Tail);
        let (c, _) = right.uncons_choice();
        assert_eq!(c, Choice::Head);

        let (c, _) = base.uncons_choice();
        assert_eq!(c, Choice::Head);
    }

    #[test]
    fn append_choice_is_consumed_after_everything_already_pending() {
        let w = World::new().cons_choice(Choice::Tail).cons_choice(Choice::Head);
        let w = w.append_choice(Choice::Tail);

        let mut seen = Vec::new();
        let mut cur = w;
        while cur.has_choices() {
            let (c, next) = cur.uncons_choice();
            seen.push(c);
            cur = next;
        }
        assert_eq!(seen, vec![Choice::Head, Choice::Tail, Choice::Tail]);
    }

    #[test]
    fn append_choice_on_an_empty_choice_list() {
        let w = World::new().cons_tag(0).append_choice(Choice::Head);
        let (c, rest) = w.uncons_choice();
        assert_eq!(c, Choice::Head);
        assert!(!rest.has_choices());
    }

    #[test]
    fn uncons_tag_on_empty_world_is_fatal() {
        // fatal() calls process::exit, so this is exercised end-to-end via
        // the integration test `tests/world_properties.rs` instead of
        // being asserted here with catch_unwind.
    }
}
