//! End-to-end lazy-evaluation scenarios (spec.md §8, scenarios 1-2).

use std::sync::atomic::{AtomicUsize, Ordering};

use lazc_core::{ArPtr, Value};
use lazc_runtime::{AtomTable, Runtime};

fn runtime() -> Runtime {
    Runtime::new(AtomTable::new(vec![
        "nil".into(),
        "true".into(),
        "false".into(),
    ]))
}

#[test]
fn unused_slot_is_never_forced() {
    static INVOKED: AtomicUsize = AtomicUsize::new(0);

    fn never(_parent: Option<ArPtr>) -> Value {
        INVOKED.fetch_add(1, Ordering::SeqCst);
        Value::Integer(999)
    }
    fn used(_parent: Option<ArPtr>) -> Value {
        Value::Integer(1)
    }

    let rt = runtime();
    let ar = rt.ar_new(None, &[used, never]);

    let v = unsafe { lazc_core::ar::get_arg(ar, 0) };
    assert_eq!(v, Value::Integer(1));
    assert_eq!(
        INVOKED.load(Ordering::SeqCst),
        0,
        "a slot that is never read must never invoke its thunk"
    );
}

#[test]
fn forcing_a_slot_runs_its_thunk_exactly_once() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn side_effecting(_parent: Option<ArPtr>) -> Value {
        let n = CALLS.fetch_add(1, Ordering::SeqCst);
        Value::Integer(n as i64)
    }

    let rt = runtime();
    let ar = rt.ar_new(None, &[side_effecting]);

    let first = unsafe { lazc_core::ar::get_arg(ar, 0) };
    let second = unsafe { lazc_core::ar::get_arg(ar, 0) };
    let third = unsafe { lazc_core::ar::get_arg(ar, 0) };

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn thunk_sees_its_defining_frame_not_its_own_record() {
    fn home_marker(parent: Option<ArPtr>) -> Value {
        unsafe { lazc_core::ar::get_arg(parent.expect("thunk run without its defining frame"), 0) }
    }
    fn marker_value(_parent: Option<ArPtr>) -> Value {
        Value::Integer(42)
    }

    let rt = runtime();
    let home = rt.ar_new(None, &[marker_value]);
    let child = rt.ar_new(Some(home), &[home_marker]);

    assert_eq!(unsafe { lazc_core::ar::get_arg(child, 0) }, Value::Integer(42));
}
