//! Per-level dispatch decision threaded through a recursive traversal.
//!
//! A traversal starts from [Switch::initial] and derives a fresh [Switch] for every field or
//! element type it descends into. Because a collection's elements share one static type, the
//! engine derives once per element type and reuses the verdict for every element, instead of
//! asking the [Oracle] once per element.
//!
//! ```text
//!                 initial(true)              derive(child)
//!   Disabled <--- initial(false)   Check ---------------------> CheckOk | CheckFalse
//!      |                                                            |
//!      +--- derive(child) ---> Disabled         derive(child) <-----+
//! ```
//!
//! A verdict only speaks for the level it was derived at: the children of a `CheckFalse` value
//! each receive their own derived switch.

use crate::{Access, Oracle, TypeDescriptor};
use core::fmt;
use tracing::trace;

/// Cached capability verdict for the current nesting level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Switch {
    /// Capability dispatch is off for the whole sub-tree.
    Disabled,
    /// Dispatch is on but this level has not been resolved.
    Check,
    /// This level supplies its own codec.
    CheckOk,
    /// This level uses the structural codec.
    CheckFalse,
}

impl Switch {
    /// Returns the switch for a traversal root.
    pub const fn initial(enabled: bool) -> Self {
        if enabled {
            Self::Check
        } else {
            Self::Disabled
        }
    }

    /// Returns the switch for a child of type `child`.
    ///
    /// A disabled switch never consults `oracle`.
    pub fn derive<O: Oracle + ?Sized>(self, oracle: &O, child: &TypeDescriptor) -> Self {
        if !self.is_enabled() {
            return Self::Disabled;
        }
        let derived = self.resolve(oracle.query(child, Access::Deep));
        trace!(parent = %self, child = %child, derived = %derived, "derived switch");
        derived
    }

    /// Returns the switch for a child whose capability is already known.
    pub const fn resolve(self, capable: bool) -> Self {
        match (self, capable) {
            (Self::Disabled, _) => Self::Disabled,
            (_, true) => Self::CheckOk,
            (_, false) => Self::CheckFalse,
        }
    }

    /// Returns true unless dispatch is off.
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Returns true if the [Oracle] must be consulted before choosing a codec.
    pub const fn needs_check(self) -> bool {
        matches!(self, Self::Check)
    }

    pub const fn is_confirmed_capable(self) -> bool {
        matches!(self, Self::CheckOk)
    }

    pub const fn is_confirmed_incapable(self) -> bool {
        matches!(self, Self::CheckFalse)
    }

    /// Returns the name of the state.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Check => "Check",
            Self::CheckOk => "CheckOk",
            Self::CheckFalse => "CheckFalse",
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseKind, CapabilitySet, Reflect};
    use std::cell::Cell;
    use test_case::test_case;

    struct Node;

    impl Reflect for Node {
        const KIND: BaseKind = BaseKind::Struct;
    }

    /// Answers every query with a fixed set and counts lookups.
    struct Fixed {
        set: CapabilitySet,
        lookups: Cell<usize>,
    }

    impl Fixed {
        fn new(set: CapabilitySet) -> Self {
            Self {
                set,
                lookups: Cell::new(0),
            }
        }
    }

    impl Oracle for Fixed {
        fn capabilities(&self, _: &TypeDescriptor) -> CapabilitySet {
            self.lookups.set(self.lookups.get() + 1);
            self.set
        }
    }

    #[test_case(true, Switch::Check; "enabled")]
    #[test_case(false, Switch::Disabled; "disabled")]
    fn test_initial(enabled: bool, expected: Switch) {
        assert_eq!(Switch::initial(enabled), expected);
        assert_eq!(Switch::initial(enabled).is_enabled(), enabled);
        assert_eq!(Switch::initial(enabled).needs_check(), enabled);
    }

    #[test_case(Switch::Disabled, CapabilitySet::FULL, Switch::Disabled; "disabled full")]
    #[test_case(Switch::Disabled, CapabilitySet::EMPTY, Switch::Disabled; "disabled empty")]
    #[test_case(Switch::Check, CapabilitySet::FULL, Switch::CheckOk; "check full")]
    #[test_case(Switch::Check, CapabilitySet::SIZER, Switch::CheckFalse; "check partial")]
    #[test_case(Switch::CheckOk, CapabilitySet::EMPTY, Switch::CheckFalse; "ok empty")]
    #[test_case(Switch::CheckFalse, CapabilitySet::FULL, Switch::CheckOk; "false full")]
    fn test_derive(parent: Switch, set: CapabilitySet, expected: Switch) {
        let oracle = Fixed::new(set);
        assert_eq!(parent.derive(&oracle, &Node::descriptor()), expected);
    }

    #[test]
    fn test_disabled_skips_oracle() {
        let oracle = Fixed::new(CapabilitySet::FULL);
        assert_eq!(
            Switch::Disabled.derive(&oracle, &Node::descriptor()),
            Switch::Disabled
        );
        assert_eq!(oracle.lookups.get(), 0);
    }

    #[test]
    fn test_resolve() {
        for parent in [Switch::Check, Switch::CheckOk, Switch::CheckFalse] {
            assert_eq!(parent.resolve(true), Switch::CheckOk);
            assert_eq!(parent.resolve(false), Switch::CheckFalse);
        }
        assert_eq!(Switch::Disabled.resolve(true), Switch::Disabled);
        assert_eq!(Switch::Disabled.resolve(false), Switch::Disabled);
    }

    #[test]
    fn test_queries() {
        let all = [
            Switch::Disabled,
            Switch::Check,
            Switch::CheckOk,
            Switch::CheckFalse,
        ];
        for switch in all {
            assert_eq!(switch.is_enabled(), switch != Switch::Disabled);
            assert_eq!(switch.needs_check(), switch == Switch::Check);
            assert_eq!(switch.is_confirmed_capable(), switch == Switch::CheckOk);
            assert_eq!(switch.is_confirmed_incapable(), switch == Switch::CheckFalse);
        }
    }

    #[test]
    fn test_display_is_total() {
        assert_eq!(Switch::Disabled.to_string(), "Disabled");
        assert_eq!(Switch::Check.to_string(), "Check");
        assert_eq!(Switch::CheckOk.to_string(), "CheckOk");
        assert_eq!(Switch::CheckFalse.to_string(), "CheckFalse");
    }
}
