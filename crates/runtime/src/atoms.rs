//! The atom-name table.
//!
//! Atom *values* are bare indices (`Value::Atom(usize)`); their names live
//! in a table the compiled program supplies at startup. What the names
//! actually are is out of scope here (spec.md §1) — this module only
//! stores them and looks them up for `show` (spec.md §4.4).

use lazc_core::Value;
use lazc_core::fatal;

/// Atom index reserved by convention for `true` (spec.md §3).
pub const TRUE: usize = lazc_core::value::ATOM_TRUE;

/// Atom index reserved by convention for `false`.
pub const FALSE: usize = lazc_core::value::ATOM_FALSE;

/// The program-supplied table mapping atom index to display name.
pub struct AtomTable {
    names: Vec<String>,
}

impl AtomTable {
    /// Build a table from the given names, in index order (index 0 is
    /// `names[0]`, and so on).
    pub fn new(names: Vec<String>) -> AtomTable {
        AtomTable { names }
    }

    /// The display name for atom `index`.
    ///
    /// Fatal on an out-of-range index: the table is assumed complete for
    /// a well-formed compiled program, but an out-of-range lookup is a
    /// diagnosable bug rather than something to paper over with a
    /// placeholder string.
    pub fn name(&self, index: usize) -> &str {
        self.names
            .get(index)
            .map(String::as_str)
            .unwrap_or_else(|| fatal(format!("atom index {index} out of range")))
    }

    /// The boolean atom for `b`: [`TRUE`] or [`FALSE`].
    pub fn bool_value(b: bool) -> Value {
        Value::Atom(if b { TRUE } else { FALSE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AtomTable {
        AtomTable::new(vec![
            "nil".to_string(),
            "true".to_string(),
            "false".to_string(),
        ])
    }

    #[test]
    fn looks_up_by_index() {
        let t = table();
        assert_eq!(t.name(1), "true");
        assert_eq!(t.name(2), "false");
    }

    #[test]
    fn bool_value_uses_reserved_indices() {
        assert_eq!(AtomTable::bool_value(true), Value::Atom(TRUE));
        assert_eq!(AtomTable::bool_value(false), Value::Atom(FALSE));
    }
}
