//! Primitive operations over `Value` (spec.md §4.4).
//!
//! Arithmetic is Integer-only and fatal on a type mismatch. Comparisons
//! produce boolean atoms (`Atom(1)` true, `Atom(2)` false) rather than a
//! native bool, since a compiled program only ever deals in `Value`.
//! `show` is the one operation that needs a [`Runtime`] (to resolve atom
//! names and to force pair slots through `get_arg`); everything else is a
//! pure function of its `Value` arguments.

use std::fmt::Write as _;

use lazc_core::ar::get_arg;
use lazc_core::{Value, fatal};

use crate::atoms::AtomTable;
use crate::runtime::Runtime;

fn expect_integer(v: Value, op: &str, other: Value) -> i64 {
    match v {
        Value::Integer(n) => n,
        other_kind => fatal(format!(
            "cannot {op} {} and {}",
            other_kind.kind_name(),
            other.kind_name()
        )),
    }
}

/// `a + b`. Fatal unless both are `Integer`.
pub fn add(a: Value, b: Value) -> Value {
    let x = expect_integer(a, "add", b);
    let y = expect_integer(b, "add", a);
    Value::Integer(x.wrapping_add(y))
}

/// `a - b`. Fatal unless both are `Integer`.
pub fn sub(a: Value, b: Value) -> Value {
    let x = expect_integer(a, "subtract", b);
    let y = expect_integer(b, "subtract", a);
    Value::Integer(x.wrapping_sub(y))
}

/// `a * b`. Fatal unless both are `Integer`.
pub fn mul(a: Value, b: Value) -> Value {
    let x = expect_integer(a, "multiply", b);
    let y = expect_integer(b, "multiply", a);
    Value::Integer(x.wrapping_mul(y))
}

/// Structural equality.
///
/// Resolves the open question from spec.md §9 in favor of the core's
/// documented behavior: fatal if either operand is a `Pair` (pairs are
/// never compared directly — a compiled program compares their
/// projections instead), `Atom(FALSE)` on an `Integer`/`Atom` tag
/// mismatch, otherwise the ordinary value comparison.
pub fn eq(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Pair(_), _) | (_, Value::Pair(_)) => {
            fatal(format!("cannot compare {} and {}", a.kind_name(), b.kind_name()))
        }
        (Value::Integer(x), Value::Integer(y)) => AtomTable::bool_value(x == y),
        (Value::Atom(x), Value::Atom(y)) => AtomTable::bool_value(x == y),
        _ => AtomTable::bool_value(false),
    }
}

fn integer_comparison(a: Value, b: Value, op: &str, cmp: impl Fn(i64, i64) -> bool) -> Value {
    let x = expect_integer(a, op, b);
    let y = expect_integer(b, op, a);
    AtomTable::bool_value(cmp(x, y))
}

/// `a < b`. Fatal unless both are `Integer`.
pub fn lt(a: Value, b: Value) -> Value {
    integer_comparison(a, b, "compare", |x, y| x < y)
}

/// `a <= b`. Fatal unless both are `Integer`.
pub fn le(a: Value, b: Value) -> Value {
    integer_comparison(a, b, "compare", |x, y| x <= y)
}

/// `a > b`. Fatal unless both are `Integer`.
pub fn gt(a: Value, b: Value) -> Value {
    integer_comparison(a, b, "compare", |x, y| x > y)
}

/// `a >= b`. Fatal unless both are `Integer`.
pub fn ge(a: Value, b: Value) -> Value {
    integer_comparison(a, b, "compare", |x, y| x >= y)
}

/// The first projection of a pair. Fatal if `v` is not a `Pair`.
///
/// Forcing is by need: if slot 0 hasn't been computed yet, this call is
/// what computes and memoizes it (`lazc_core::ar::get_arg`).
pub fn car(v: Value) -> Value {
    match v {
        Value::Pair(ar) => unsafe { get_arg(ar, 0) },
        other => fatal(format!("cannot take car of {}", other.kind_name())),
    }
}

/// The second projection of a pair. Fatal if `v` is not a `Pair`.
pub fn cdr(v: Value) -> Value {
    match v {
        Value::Pair(ar) => unsafe { get_arg(ar, 1) },
        other => fatal(format!("cannot take cdr of {}", other.kind_name())),
    }
}

/// `true` iff `v` is a `Pair`, as a boolean atom.
pub fn is_pair(v: Value) -> Value {
    AtomTable::bool_value(v.is_pair())
}

/// Render `v` to standard output — the runtime's only I/O channel
/// (spec.md §6) — and return the same text.
///
/// - `Integer(n)` prints as a decimal.
/// - `Atom(i)` prints as `'` followed by its name from `runtime`'s atom
///   table (spec.md §4.4).
/// - `Pair(ar)` prints as `(car . cdr)`, forcing both slots (by need —
///   each slot is still only ever forced once, same as any other
///   `get_arg` call).
///
/// `newline` controls whether a trailing newline is emitted after the
/// value; recursive sub-prints of a pair's car/cdr always pass `false`
/// (spec.md §4.4: "Recursive sub-prints pass `false`") — they're handled
/// by the private `write_value` helper below rather than by re-entering
/// `show`, so that only the outermost call touches stdout.
pub fn show(v: Value, runtime: &Runtime, newline: bool) -> String {
    let mut out = String::new();
    write_value(&mut out, v, runtime);
    if newline {
        out.push('\n');
    }
    print!("{out}");
    out
}

fn write_value(out: &mut String, v: Value, runtime: &Runtime) {
    match v {
        Value::Integer(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Atom(index) => {
            out.push('\'');
            out.push_str(runtime.atoms().name(index));
        }
        Value::Pair(ar) => {
            out.push('(');
            write_value(out, unsafe { get_arg(ar, 0) }, runtime);
            out.push_str(" . ");
            write_value(out, unsafe { get_arg(ar, 1) }, runtime);
            out.push(')');
        }
    }
}
