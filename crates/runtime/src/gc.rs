//! Mark-and-sweep collection over the gc-list.
//!
//! Roots are every activation record with `on_stack` set. The mark phase
//! follows two kinds of edges out of a record: its parent chain (lexical
//! enclosure) and any already-forced pair slot (spec.md §4.2). The sweep
//! phase walks the gc-list once, freeing anything left unmarked and
//! unlinking it, then clears the mark bit on everything that survives so
//! the next cycle starts clean.
//!
//! The collector is non-moving: a surviving `Ar`'s address never changes,
//! so every `ArPtr` held anywhere in the thunk graph stays valid across a
//! collection.

use std::time::Instant;

use lazc_core::ar::{Ar, ArPtr};

use crate::runtime::Runtime;

/// Run one full mark-and-sweep cycle against `runtime`'s gc-list.
pub fn collect(runtime: &Runtime) {
    let start = Instant::now();

    let mut cursor = runtime.gc_list_head();
    while let Some(ar) = cursor {
        let node = unsafe { ar.as_ref() };
        if node.is_on_stack() {
            mark(ar);
        }
        cursor = node.gc_next();
    }

    sweep(runtime);

    runtime.add_gc_time(start.elapsed());
}

/// Mark `ar` and everything reachable from it that isn't already marked.
///
/// Two edge kinds, per spec.md §4.2: the parent link (always present, or
/// absent for a root frame) and any slot already forced to a `Pair`.
/// Thunked slots aren't followed — a thunk not yet invoked holds no
/// reference to an activation record yet, only a function pointer.
fn mark(ar: ArPtr) {
    let node = unsafe { ar.as_ref() };
    if node.is_marked() {
        return;
    }
    node.set_marked(true);

    if let Some(parent) = node.parent() {
        mark(parent);
    }
    for child in node.forced_pairs() {
        mark(child);
    }
}

/// Walk the gc-list once, freeing unmarked records and relinking the
/// survivors, then clear every survivor's mark bit for the next cycle.
fn sweep(runtime: &Runtime) {
    let mut new_head: Option<ArPtr> = None;
    let mut live = 0usize;
    let mut live_bytes = 0usize;

    let mut cursor = runtime.gc_list_head();
    while let Some(ar) = cursor {
        let node = unsafe { ar.as_ref() };
        let next = node.gc_next();

        if node.is_marked() {
            node.set_marked(false);
            node.set_gc_next(new_head);
            new_head = Some(ar);
            live += 1;
            live_bytes += node.heap_size();
        } else {
            unsafe { Ar::free(ar) };
        }

        cursor = next;
    }

    runtime.set_gc_list_head(new_head);
    runtime.set_live_count(live);
    runtime.set_current_alloc(live_bytes);
}
