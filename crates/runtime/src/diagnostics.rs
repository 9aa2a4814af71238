//! Optional SIGQUIT diagnostics dump.
//!
//! Grounded in the teacher's `crates/runtime/src/diagnostics.rs`: a
//! hung or misbehaving long-running process can be sent `SIGQUIT` (e.g.
//! `kill -QUIT <pid>`, or Ctrl-\\ at a terminal) to have it print a
//! snapshot of the runtime's counters to stderr without stopping it.
//! Gated behind the `diagnostics` feature since it pulls in
//! `signal-hook` and only makes sense on Unix.
//!
//! `signal_hook::low_level::register` requires the registered closure to
//! be `Fn() + Sync + Send + 'static`. `Runtime` holds its counters in
//! `Cell<T>`, which is `!Sync` by design (SPEC_FULL.md §5: the absence of
//! `Sync` is the enforcement mechanism for this runtime's single-threaded
//! contract) — so the closure can't capture a `&Runtime` directly. The
//! teacher's own `diagnostics.rs` sidesteps this the same way: the
//! installed closure captures nothing and reads a process-wide registry
//! instead. This module does the same with a single `AtomicPtr`, which
//! is `Sync` regardless of whether the type it points to is.

use std::ptr;
use std::sync::Once;
use std::sync::atomic::{AtomicPtr, Ordering};

use crate::runtime::Runtime;

static INSTALL: Once = Once::new();
static ACTIVE_RUNTIME: AtomicPtr<Runtime> = AtomicPtr::new(ptr::null_mut());

/// Install the SIGQUIT handler, if it hasn't been installed already in
/// this process, and point it at `runtime`.
///
/// # Safety
/// `runtime` must outlive the process (in practice: a process-lifetime
/// `'static` runtime, since there is no uninstall hook). Calling this
/// again with a different runtime repoints the handler at the new one;
/// it does not stack handlers.
pub unsafe fn install(runtime: &'static Runtime) {
    ACTIVE_RUNTIME.store(runtime as *const Runtime as *mut Runtime, Ordering::SeqCst);

    INSTALL.call_once(|| {
        let result = unsafe {
            signal_hook::low_level::register(signal_hook::consts::SIGQUIT, || {
                let ptr = ACTIVE_RUNTIME.load(Ordering::SeqCst);
                // Safety: only ever set to a `&'static Runtime` by `install`.
                if let Some(runtime) = unsafe { ptr.as_ref() } {
                    dump_diagnostics(runtime);
                }
            })
        };
        if let Err(e) = result {
            eprintln!("lazc runtime: failed to install SIGQUIT handler: {e}");
        }
    });
}

/// Write a snapshot of `runtime`'s counters to stderr.
pub fn dump_diagnostics(runtime: &Runtime) {
    use std::io::Write as _;
    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "lazc runtime diagnostics:");
    let _ = writeln!(stderr, "  live activation records: {}", runtime.live_count());
    let _ = writeln!(stderr, "  live bytes:              {}", runtime.current_alloc());
    let _ = writeln!(stderr, "  total bytes allocated:    {}", runtime.total_alloc());
    let _ = writeln!(stderr, "  cumulative GC time:       {:?}", runtime.gc_time());
}
