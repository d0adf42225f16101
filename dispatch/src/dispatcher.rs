//! Entry points used by library consumers and by the traversal engine.

use crate::{Access, Oracle, Reflect, Registry, Switch, TypeDescriptor};

/// Whether capability dispatch is enabled when a traversal root does not say otherwise.
pub const fn default_dispatch_enabled() -> bool {
    false
}

/// Configuration for a [Dispatcher].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Whether traversal roots start with capability dispatch enabled.
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: default_dispatch_enabled(),
        }
    }
}

/// Returns the switch for a traversal root.
pub const fn initial(enabled: bool) -> Switch {
    Switch::initial(enabled)
}

/// Answers capability questions for a traversal against a fixed [Oracle].
#[derive(Clone, Debug, Default)]
pub struct Dispatcher<O = Registry> {
    oracle: O,
    cfg: Config,
}

impl<O: Oracle> Dispatcher<O> {
    pub fn new(oracle: O, cfg: Config) -> Self {
        Self { oracle, cfg }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn config(&self) -> Config {
        self.cfg
    }

    /// Returns the root switch under the configured policy.
    pub fn root(&self) -> Switch {
        Switch::initial(self.cfg.enabled)
    }

    /// Returns the root switch, overriding the configured policy.
    pub fn root_with(&self, enabled: bool) -> Switch {
        Switch::initial(enabled)
    }

    /// Returns the switch for a nested field, element, or map value of type `child`.
    ///
    /// Call once per distinct child type and reuse the result for every instance of it.
    pub fn derive_for_nested_type(&self, parent: Switch, child: &TypeDescriptor) -> Switch {
        parent.derive(&self.oracle, child)
    }

    /// Returns the switch for a nested value of type `T`.
    pub fn derive<T: Reflect>(&self, parent: Switch) -> Switch {
        self.derive_for_nested_type(parent, &T::descriptor())
    }

    /// Returns true if the exact type of `value` supplies the full capability.
    pub fn check_capability<T: Reflect>(&self, _value: &T) -> bool {
        self.oracle.query(&T::descriptor(), Access::Shallow)
    }

    /// Returns true if the type of `value`, or a handle to it, supplies the full capability.
    pub fn check_capability_deep<T: Reflect>(&self, _value: &T) -> bool {
        self.oracle.query(&T::descriptor(), Access::Deep)
    }
}
