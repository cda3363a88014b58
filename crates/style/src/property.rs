//! The enable-aware property cell all styles are built from.

use serde::{Deserialize, Serialize};

/// A single styleable value plus a flag recording whether anything has
/// actually set it. Merging respects the flag: a later style only
/// replaces an already-set property when merged with force.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProperty<T> {
    pub enabled: bool,
    pub value: T,
}

impl<T: Clone> StyleProperty<T> {
    /// A property that is set from the start.
    pub fn new(value: T) -> Self {
        Self {
            enabled: true,
            value,
        }
    }

    /// A property holding a fallback value but not yet set.
    pub fn unset(value: T) -> Self {
        Self {
            enabled: false,
            value,
        }
    }

    /// Sets the value and marks the property as set.
    pub fn set(&mut self, value: T) {
        self.enabled = true;
        self.value = value;
    }

    /// Copies `other` over this property. Without force, a property
    /// that is already set wins; with force, `other` always wins, even
    /// when it is itself unset.
    pub fn overwrite_from(&mut self, other: &StyleProperty<T>, force: bool) {
        if force || !self.enabled {
            self.enabled = other.enabled;
            self.value = other.value.clone();
        }
    }

    /// The value, if the property has been set.
    pub fn get(&self) -> Option<&T> {
        self.enabled.then_some(&self.value)
    }
}

/// Copies an enabled property's value into a plain field.
pub(crate) fn apply_property<T: Clone>(property: &StyleProperty<T>, target: &mut T) {
    if property.enabled {
        *target = property.value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_property_yields_nothing() {
        let property = StyleProperty::unset(5u32);
        assert_eq!(property.get(), None);

        let mut property = property;
        property.set(7);
        assert_eq!(property.get(), Some(&7));
    }

    #[test]
    fn overwrite_respects_existing_value() {
        let mut target = StyleProperty::new(1u32);
        target.overwrite_from(&StyleProperty::new(2), false);
        assert_eq!(target.value, 1);

        target.overwrite_from(&StyleProperty::new(2), true);
        assert_eq!(target.value, 2);
    }

    #[test]
    fn unset_target_takes_source_state() {
        let mut target = StyleProperty::unset(0u32);
        target.overwrite_from(&StyleProperty::new(9), false);
        assert!(target.enabled);
        assert_eq!(target.value, 9);

        // Forced overwrite from an unset source clears the flag again.
        target.overwrite_from(&StyleProperty::unset(0), true);
        assert!(!target.enabled);
    }
}
