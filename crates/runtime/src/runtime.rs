//! The `Runtime` handle: one compiled program's GC-list, byte counters,
//! collection-time accumulator, GC threshold, and atom table.
//!
//! spec.md §9 leaves the choice between a threaded handle and a process
//! singleton open; this rewrite picks the handle (see SPEC_FULL.md §4.6).
//! `Runtime` is deliberately not `Send`/`Sync` — the single-threaded
//! contract (spec.md §5) is enforced by that absence, not by a runtime
//! check.

use std::cell::Cell;
use std::time::Duration;

use lazc_core::ar::{Ar, ArPtr, ThunkFn};

use crate::atoms::AtomTable;

/// Reference GC threshold from spec.md §4.2: trigger a collection once
/// live allocation crosses 4 MiB.
pub const DEFAULT_GC_THRESHOLD: usize = 4 * 1024 * 1024;

/// Tunables for a `Runtime`. Only the GC threshold is currently
/// adjustable; kept as its own struct (rather than a bare `usize`
/// parameter) so later knobs don't force a signature change, matching
/// how the teacher's `GcConfig`-style structs in the GC-adjacent example
/// crate are shaped.
pub struct RuntimeConfig {
    pub gc_threshold: usize,
}

impl Default for RuntimeConfig {
    fn default() -> RuntimeConfig {
        RuntimeConfig { gc_threshold: DEFAULT_GC_THRESHOLD }
    }
}

/// Owns everything global a single compiled program needs: the
/// intrusive GC list, the live/total byte counters, the cumulative GC
/// pause time, the configured threshold, and the atom-name table.
pub struct Runtime {
    gc_list_head: Cell<Option<ArPtr>>,
    live_count: Cell<usize>,
    current_alloc: Cell<usize>,
    total_alloc: Cell<u64>,
    gc_time: Cell<Duration>,
    gc_threshold: usize,
    atoms: AtomTable,
}

impl Runtime {
    /// Construct a runtime for a program whose atom names are `atoms`,
    /// using the default GC threshold.
    pub fn new(atoms: AtomTable) -> Runtime {
        Runtime::with_config(atoms, RuntimeConfig::default())
    }

    pub fn with_config(atoms: AtomTable, config: RuntimeConfig) -> Runtime {
        Runtime {
            gc_list_head: Cell::new(None),
            live_count: Cell::new(0),
            current_alloc: Cell::new(0),
            total_alloc: Cell::new(0),
            gc_time: Cell::new(Duration::ZERO),
            gc_threshold: config.gc_threshold,
            atoms,
        }
    }

    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    /// Allocate a new activation record, link it onto the head of the
    /// gc-list, and run a collection first if the configured threshold
    /// has been crossed (spec.md §4.1: "AR.new ... links the new AR onto
    /// the head of the global gc-list ... If current_alloc exceeds
    /// GC_LIMIT, a collection runs before the new AR is linked in").
    pub fn ar_new(&self, parent: Option<ArPtr>, thunks: &[ThunkFn]) -> ArPtr {
        if self.current_alloc.get() > self.gc_threshold {
            self.collect();
        }

        let ar = Ar::alloc(parent, thunks);
        let size = unsafe { ar.as_ref() }.heap_size();

        unsafe { ar.as_ref() }.set_gc_next(self.gc_list_head.get());
        self.gc_list_head.set(Some(ar));
        self.live_count.set(self.live_count.get() + 1);
        self.current_alloc.set(self.current_alloc.get() + size);
        self.total_alloc.set(self.total_alloc.get() + size as u64);

        ar
    }

    /// Run one mark-and-sweep collection cycle now, regardless of the
    /// threshold. Exposed directly so both the allocator's automatic
    /// trigger and a compiled program's explicit `lazc_gc()` call (if the
    /// generated code ever wants one) share one code path.
    pub fn collect(&self) {
        crate::gc::collect(self);
    }

    /// Unconditionally free every activation record still on the gc-list,
    /// live or not — used at process exit so a leak checker sees zero
    /// blocks held. Grounded in the reference implementation's
    /// `IC_mem_cleanup` (`original_source/runtime/source/lar.c`), which
    /// walks `IC_gc_first` freeing every node without consulting mark
    /// bits.
    pub fn mem_cleanup(&self) {
        let mut cursor = self.gc_list_head.take();
        while let Some(ar) = cursor {
            let next = unsafe { ar.as_ref() }.gc_next();
            unsafe { Ar::free(ar) };
            cursor = next;
        }
        self.live_count.set(0);
        self.current_alloc.set(0);
    }

    pub(crate) fn gc_list_head(&self) -> Option<ArPtr> {
        self.gc_list_head.get()
    }

    pub(crate) fn set_gc_list_head(&self, head: Option<ArPtr>) {
        self.gc_list_head.set(head);
    }

    pub(crate) fn set_live_count(&self, n: usize) {
        self.live_count.set(n);
    }

    pub(crate) fn set_current_alloc(&self, bytes: usize) {
        self.current_alloc.set(bytes);
    }

    pub(crate) fn add_gc_time(&self, elapsed: Duration) {
        self.gc_time.set(self.gc_time.get() + elapsed);
    }

    /// Number of activation records currently linked on the gc-list.
    pub fn live_count(&self) -> usize {
        self.live_count.get()
    }

    /// Bytes currently attributed to live activation records.
    pub fn current_alloc(&self) -> usize {
        self.current_alloc.get()
    }

    /// Bytes allocated over the runtime's whole lifetime, ignoring
    /// reclamation — monotonically increasing.
    pub fn total_alloc(&self) -> u64 {
        self.total_alloc.get()
    }

    /// Cumulative wall-clock time spent inside [`Runtime::collect`].
    pub fn gc_time(&self) -> Duration {
        self.gc_time.get()
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.mem_cleanup();
    }
}
