//! The `extern "C"` surface a compiled lazc program links against.
//!
//! Every function here is a thin wrapper around the corresponding plain
//! Rust function elsewhere in this crate, named with the `lazc_` prefix
//! (SPEC_FULL.md §6.1) the way the teacher's runtime prefixes its own FFI
//! surface with `patch_seq_`. None of these functions can return an error
//! code: every failure path in this runtime is fatal (spec.md §7) and
//! exits the process directly, so there is nothing for a caller to check.

use std::ffi::{CStr, CString, c_char};
use std::ptr::NonNull;

use lazc_core::ar::{Ar, ThunkFn};
use lazc_core::{Choice, Value, World, fatal};

use crate::atoms::AtomTable;
use crate::primitives;
use crate::runtime::Runtime;

/// Build a `Runtime` from a C array of `name_count` NUL-terminated atom
/// names and hand ownership to the caller as a raw pointer.
///
/// # Safety
/// `names` must point to `name_count` valid, NUL-terminated C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_runtime_new(
    names: *const *const c_char,
    name_count: usize,
) -> *mut Runtime {
    let mut table = Vec::with_capacity(name_count);
    for i in 0..name_count {
        let raw = unsafe { *names.add(i) };
        let name = unsafe { CStr::from_ptr(raw) }
            .to_str()
            .unwrap_or_else(|e| fatal(format!("atom name {i} is not valid UTF-8: {e}")))
            .to_owned();
        table.push(name);
    }
    let runtime = Runtime::new(AtomTable::new(table));
    Box::into_raw(Box::new(runtime))
}

/// Drop a `Runtime` previously returned by [`lazc_runtime_new`], freeing
/// every activation record still on its gc-list.
///
/// # Safety
/// `runtime` must be a pointer previously returned by
/// [`lazc_runtime_new`] and not already freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_runtime_free(runtime: *mut Runtime) {
    if !runtime.is_null() {
        drop(unsafe { Box::from_raw(runtime) });
    }
}

/// Allocate a new activation record with `thunk_count` thunks, linking it
/// onto `runtime`'s gc-list (spec.md §4.1). Triggers a collection first
/// if the byte threshold has been crossed.
///
/// # Safety
/// `runtime` must be a live `Runtime` pointer. `parent` must be null (no
/// parent) or a live `Ar` pointer. `thunks` must point to `thunk_count`
/// valid [`ThunkFn`] values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_ar_new(
    runtime: *const Runtime,
    parent: *mut Ar,
    thunks: *const ThunkFn,
    thunk_count: usize,
) -> *mut Ar {
    let runtime = unsafe { runtime.as_ref() }.unwrap_or_else(|| fatal("null runtime pointer"));
    let parent = NonNull::new(parent);
    let thunk_slice = if thunk_count == 0 {
        &[][..]
    } else {
        unsafe { std::slice::from_raw_parts(thunks, thunk_count) }
    };
    runtime.ar_new(parent, thunk_slice).as_ptr()
}

/// Force argument slot `index` of `ar`, memoizing the result.
///
/// # Safety
/// `ar` must be a live `Ar` pointer and `index` must be `< arity`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_get_arg(ar: *mut Ar, index: usize) -> Value {
    let ptr = NonNull::new(ar).unwrap_or_else(|| fatal("null activation record pointer"));
    unsafe { lazc_core::ar::get_arg(ptr, index) }
}

/// Mark `ar` as a GC root.
///
/// # Safety
/// `ar` must be a live `Ar` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_push(ar: *mut Ar) {
    let ptr = NonNull::new(ar).unwrap_or_else(|| fatal("null activation record pointer"));
    unsafe { lazc_core::ar::push(ptr) };
}

/// Clear `ar`'s GC-root flag.
///
/// # Safety
/// `ar` must be a live `Ar` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_pop(ar: *mut Ar) {
    let ptr = NonNull::new(ar).unwrap_or_else(|| fatal("null activation record pointer"));
    unsafe { lazc_core::ar::pop(ptr) };
}

/// Run a collection cycle now, regardless of the byte threshold.
///
/// # Safety
/// `runtime` must be a live `Runtime` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_collect(runtime: *const Runtime) {
    let runtime = unsafe { runtime.as_ref() }.unwrap_or_else(|| fatal("null runtime pointer"));
    runtime.collect();
}

/// Free every activation record still on `runtime`'s gc-list,
/// unconditionally (`SPEC_FULL.md` §6.2).
///
/// # Safety
/// `runtime` must be a live `Runtime` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_mem_cleanup(runtime: *const Runtime) {
    let runtime = unsafe { runtime.as_ref() }.unwrap_or_else(|| fatal("null runtime pointer"));
    runtime.mem_cleanup();
}

macro_rules! binop {
    ($name:ident, $inner:path) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn $name(a: Value, b: Value) -> Value {
            $inner(a, b)
        }
    };
}

binop!(lazc_add, primitives::add);
binop!(lazc_sub, primitives::sub);
binop!(lazc_mul, primitives::mul);
binop!(lazc_eq, primitives::eq);
binop!(lazc_lt, primitives::lt);
binop!(lazc_le, primitives::le);
binop!(lazc_gt, primitives::gt);
binop!(lazc_ge, primitives::ge);

/// `car`. Fatal if `v` is not a `Pair`.
#[unsafe(no_mangle)]
pub extern "C" fn lazc_car(v: Value) -> Value {
    primitives::car(v)
}

/// `cdr`. Fatal if `v` is not a `Pair`.
#[unsafe(no_mangle)]
pub extern "C" fn lazc_cdr(v: Value) -> Value {
    primitives::cdr(v)
}

/// `true`/`false` atom for whether `v` is a `Pair`.
#[unsafe(no_mangle)]
pub extern "C" fn lazc_is_pair(v: Value) -> Value {
    primitives::is_pair(v)
}

/// Render `v` with [`primitives::show`], writing it to stdout and
/// handing the caller the same text as an owned, NUL-terminated C
/// string. Must be released with [`lazc_free_string`].
///
/// # Safety
/// `runtime` must be a live `Runtime` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_show(v: Value, runtime: *const Runtime, newline: bool) -> *mut c_char {
    let runtime = unsafe { runtime.as_ref() }.unwrap_or_else(|| fatal("null runtime pointer"));
    let text = primitives::show(v, runtime, newline);
    CString::new(text)
        .unwrap_or_else(|e| fatal(format!("show() produced an embedded NUL: {e}")))
        .into_raw()
}

/// Release a string previously returned by [`lazc_show`].
///
/// # Safety
/// `s` must be a pointer previously returned by [`lazc_show`] and not
/// already freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Result of [`lazc_uncons_tag`]: the popped tag plus the remaining
/// world, heap-allocated the same way every other `World`-returning FFI
/// function allocates its result.
#[repr(C)]
pub struct TagResult {
    pub tag: u32,
    pub world: *mut World,
}

/// Result of [`lazc_uncons_choice`]: the popped choice plus the
/// remaining world.
#[repr(C)]
pub struct ChoiceResult {
    pub choice: Choice,
    pub world: *mut World,
}

/// The empty world: no tags, no pending choices.
#[unsafe(no_mangle)]
pub extern "C" fn lazc_world_new() -> *mut World {
    Box::into_raw(Box::new(World::new()))
}

/// Drop a `World` previously returned by one of the `lazc_world_*`/
/// `lazc_*_choice`/`lazc_*_tag` functions.
///
/// # Safety
/// `world` must be null or a pointer returned by one of this module's
/// `World`-returning functions, not already freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_world_free(world: *mut World) {
    if !world.is_null() {
        drop(unsafe { Box::from_raw(world) });
    }
}

/// Push `tag` onto the front of `world`'s tag list, returning a new
/// world (the input is left unchanged — `World` is persistent).
///
/// # Safety
/// `world` must be a live `World` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_cons_tag(world: *const World, tag: u32) -> *mut World {
    let world = unsafe { world.as_ref() }.unwrap_or_else(|| fatal("null world pointer"));
    Box::into_raw(Box::new(world.cons_tag(tag)))
}

/// Pop the front tag off `world`. Fatal if the tag list is empty.
///
/// # Safety
/// `world` must be a live `World` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_uncons_tag(world: *const World) -> TagResult {
    let world = unsafe { world.as_ref() }.unwrap_or_else(|| fatal("null world pointer"));
    let (tag, rest) = world.uncons_tag();
    TagResult { tag, world: Box::into_raw(Box::new(rest)) }
}

/// Push `choice` onto the front of `world`'s choice list.
///
/// # Safety
/// `world` must be a live `World` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_cons_choice(world: *const World, choice: Choice) -> *mut World {
    let world = unsafe { world.as_ref() }.unwrap_or_else(|| fatal("null world pointer"));
    Box::into_raw(Box::new(world.cons_choice(choice)))
}

/// Pop the front choice off `world`. Fatal if the choice list is empty.
///
/// # Safety
/// `world` must be a live `World` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_uncons_choice(world: *const World) -> ChoiceResult {
    let world = unsafe { world.as_ref() }.unwrap_or_else(|| fatal("null world pointer"));
    let (choice, rest) = world.uncons_choice();
    ChoiceResult { choice, world: Box::into_raw(Box::new(rest)) }
}

/// `world` with every pending choice discarded.
///
/// # Safety
/// `world` must be a live `World` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_drop_choices(world: *const World) -> *mut World {
    let world = unsafe { world.as_ref() }.unwrap_or_else(|| fatal("null world pointer"));
    Box::into_raw(Box::new(world.drop_choices()))
}

/// Append `choice` to the tail of `world`'s choice list.
///
/// # Safety
/// `world` must be a live `World` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_append_choice(world: *const World, choice: Choice) -> *mut World {
    let world = unsafe { world.as_ref() }.unwrap_or_else(|| fatal("null world pointer"));
    Box::into_raw(Box::new(world.append_choice(choice)))
}

/// Whether `world` has at least one pending choice.
///
/// # Safety
/// `world` must be a live `World` pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lazc_has_choices(world: *const World) -> bool {
    let world = unsafe { world.as_ref() }.unwrap_or_else(|| fatal("null world pointer"));
    world.has_choices()
}
