//! Typed key-value store shared by every node of a tree instance.
//!
//! Keys are [`BlackboardKey<T>`] handles: a stable name plus the declared
//! value type. The first insert under a name fixes its type; later writes or
//! reads with a different type are rejected with
//! [`BlackboardError::TypeMismatch`] instead of silently coercing.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Errors returned by blackboard lookups and writes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BlackboardError {
    /// No value was ever stored under this name.
    #[error("no blackboard key named `{key}`")]
    MissingKey {
        /// Name of the requested key.
        key: String,
    },

    /// The key exists but holds a value of another type.
    #[error("blackboard key `{key}` holds {found}, not {expected}")]
    TypeMismatch {
        /// Name of the requested key.
        key: String,
        /// Type requested by the caller.
        expected: &'static str,
        /// Type fixed when the key was first inserted.
        found: &'static str,
    },
}

/// Typed handle naming a blackboard slot.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Blackboard, BlackboardKey};
///
/// const HEALTH: BlackboardKey<f32> = BlackboardKey::new("health");
///
/// let mut blackboard = Blackboard::new();
/// blackboard.insert(&HEALTH, 100.0).unwrap();
/// assert_eq!(*blackboard.get(&HEALTH).unwrap(), 100.0);
/// ```
pub struct BlackboardKey<T> {
    name: Cow<'static, str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> BlackboardKey<T> {
    /// Creates a key from a static name, usable in `const` items.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _marker: PhantomData,
        }
    }

    /// Creates a key from a runtime-built name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            _marker: PhantomData,
        }
    }

    /// The stable identifier of this key.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for BlackboardKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for BlackboardKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlackboardKey")
            .field("name", &self.name)
            .field("type", &type_name::<T>())
            .finish()
    }
}

struct Slot {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

/// Shared typed storage for a single tree instance.
#[derive(Default)]
pub struct Blackboard {
    slots: HashMap<String, Slot>,
}

impl Blackboard {
    /// Creates an empty blackboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, declaring the key on first use.
    ///
    /// Overwriting is allowed only with the type the key was declared with.
    pub fn insert<T>(&mut self, key: &BlackboardKey<T>, value: T) -> Result<(), BlackboardError>
    where
        T: Any + Send + Sync,
    {
        if let Some(slot) = self.slots.get(key.name())
            && !slot.value.is::<T>()
        {
            return Err(BlackboardError::TypeMismatch {
                key: key.name().to_string(),
                expected: type_name::<T>(),
                found: slot.type_name,
            });
        }

        self.slots.insert(
            key.name().to_string(),
            Slot {
                value: Box::new(value),
                type_name: type_name::<T>(),
            },
        );
        Ok(())
    }

    /// Overwrites an existing value. Unlike [`insert`](Self::insert), the key
    /// must already be declared.
    pub fn set<T>(&mut self, key: &BlackboardKey<T>, value: T) -> Result<(), BlackboardError>
    where
        T: Any + Send + Sync,
    {
        *self.get_mut(key)? = value;
        Ok(())
    }

    pub fn get<T>(&self, key: &BlackboardKey<T>) -> Result<&T, BlackboardError>
    where
        T: Any + Send + Sync,
    {
        let slot = self.slot(key.name())?;
        slot.value
            .downcast_ref::<T>()
            .ok_or_else(|| BlackboardError::TypeMismatch {
                key: key.name().to_string(),
                expected: type_name::<T>(),
                found: slot.type_name,
            })
    }

    pub fn get_mut<T>(&mut self, key: &BlackboardKey<T>) -> Result<&mut T, BlackboardError>
    where
        T: Any + Send + Sync,
    {
        let slot = self
            .slots
            .get_mut(key.name())
            .ok_or_else(|| BlackboardError::MissingKey {
                key: key.name().to_string(),
            })?;
        let found = slot.type_name;
        slot.value
            .downcast_mut::<T>()
            .ok_or_else(|| BlackboardError::TypeMismatch {
                key: key.name().to_string(),
                expected: type_name::<T>(),
                found,
            })
    }

    /// Returns `true` if the key exists and holds a `T`.
    pub fn has_value<T>(&self, key: &BlackboardKey<T>) -> bool
    where
        T: Any + Send + Sync,
    {
        self.slots
            .get(key.name())
            .is_some_and(|slot| slot.value.is::<T>())
    }

    /// Returns `true` if any value is stored under `name`, whatever its type.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Removes a key, releasing its declared type. Returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.slots.remove(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, name: &str) -> Result<&Slot, BlackboardError> {
        self.slots.get(name).ok_or_else(|| BlackboardError::MissingKey {
            key: name.to_string(),
        })
    }
}

impl AsRef<Blackboard> for Blackboard {
    fn as_ref(&self) -> &Blackboard {
        self
    }
}

impl AsMut<Blackboard> for Blackboard {
    fn as_mut(&mut self) -> &mut Blackboard {
        self
    }
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|(name, slot)| (name, slot.type_name)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: BlackboardKey<f32> = BlackboardKey::new("speed");
    const SPEED_AS_INT: BlackboardKey<i32> = BlackboardKey::new("speed");

    #[test]
    fn insert_then_get() {
        let mut bb = Blackboard::new();
        bb.insert(&SPEED, 2.5).unwrap();

        assert_eq!(*bb.get(&SPEED).unwrap(), 2.5);
        assert!(bb.has_value(&SPEED));
        assert_eq!(bb.len(), 1);
    }

    #[test]
    fn type_is_fixed_by_first_insert() {
        let mut bb = Blackboard::new();
        bb.insert(&SPEED, 1.0).unwrap();

        let err = bb.insert(&SPEED_AS_INT, 3).unwrap_err();
        assert!(matches!(err, BlackboardError::TypeMismatch { .. }));
        assert!(!bb.has_value(&SPEED_AS_INT));
        assert!(bb.get(&SPEED_AS_INT).is_err());
        assert_eq!(*bb.get(&SPEED).unwrap(), 1.0);
    }

    #[test]
    fn set_requires_declared_key() {
        let mut bb = Blackboard::new();
        assert_eq!(
            bb.set(&SPEED, 4.0),
            Err(BlackboardError::MissingKey {
                key: "speed".to_string()
            })
        );

        bb.insert(&SPEED, 0.0).unwrap();
        bb.set(&SPEED, 4.0).unwrap();
        assert_eq!(*bb.get(&SPEED).unwrap(), 4.0);
    }

    #[test]
    fn remove_releases_type() {
        let mut bb = Blackboard::new();
        bb.insert(&SPEED, 1.0).unwrap();
        assert!(bb.remove("speed"));
        assert!(!bb.remove("speed"));

        bb.insert(&SPEED_AS_INT, 7).unwrap();
        assert_eq!(*bb.get(&SPEED_AS_INT).unwrap(), 7);
    }

    #[test]
    fn runtime_named_keys_share_slots() {
        let mut bb = Blackboard::new();
        let key = BlackboardKey::<String>::named(format!("target_{}", 3));
        bb.insert(&key, "ghost".to_string()).unwrap();

        assert!(bb.contains("target_3"));
        assert_eq!(bb.keys().collect::<Vec<_>>(), vec!["target_3"]);
    }
}
