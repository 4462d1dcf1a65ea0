//! Renders values for inclusion in failure messages.
//!
//! Values are normally rendered through their [`Debug`] implementation,
//! which already quotes strings and characters. A [`StringMappers`] registry
//! lets callers override the rendering of a concrete type, e.g. to truncate
//! large values or redact sensitive ones.

use std::any::type_name;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Renders one type's values for failure messages.
///
/// The closure receives the value through `&dyn Debug`: mappers are keyed by
/// the value's concrete type, so they know what the debug form looks like,
/// and borrowed values (`&str` of a local, slices) stay mappable without a
/// `'static` bound.
pub type StringMapper = Arc<dyn Fn(&dyn Debug) -> String + Send + Sync>;

/// Immutable registry of per-type string mappers.
///
/// Cloning is cheap; the registry is shared behind an `Arc`.
#[derive(Clone, Default)]
pub struct StringMappers {
    mappers: Arc<HashMap<&'static str, StringMapper>>,
}

impl StringMappers {
    /// Renders `value`, using the mapper registered for its type or falling
    /// back to `Debug` formatting.
    pub fn map<T: Debug + ?Sized>(&self, value: &T) -> String {
        match self.mappers.get(type_name::<T>()) {
            Some(mapper) => mapper(&value),
            None => format!("{value:?}"),
        }
    }

    /// `true` if a mapper is registered for `T`.
    pub fn contains<T: ?Sized>(&self) -> bool {
        self.mappers.contains_key(type_name::<T>())
    }
}

impl Debug for StringMappers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.mappers.keys().collect();
        types.sort_unstable();
        f.debug_struct("StringMappers").field("types", &types).finish()
    }
}

/// Mutable builder for [`StringMappers`].
#[derive(Clone, Default)]
pub struct MutableStringMappers {
    mappers: HashMap<&'static str, StringMapper>,
}

impl MutableStringMappers {
    /// Starts from an immutable registry.
    pub fn from_immutable(mappers: &StringMappers) -> Self {
        Self {
            mappers: (*mappers.mappers).clone(),
        }
    }

    /// Freezes the registry.
    pub fn to_immutable(&self) -> StringMappers {
        StringMappers {
            mappers: Arc::new(self.mappers.clone()),
        }
    }

    /// Registers a mapper for `T`, replacing any previous one.
    pub fn put<T: ?Sized>(
        &mut self,
        mapper: impl Fn(&dyn Debug) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.mappers.insert(type_name::<T>(), Arc::new(mapper));
        self
    }

    /// Removes the mapper for `T`, restoring `Debug` rendering.
    pub fn remove<T: ?Sized>(&mut self) -> &mut Self {
        self.mappers.remove(type_name::<T>());
        self
    }
}

impl Debug for MutableStringMappers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.mappers.keys().collect();
        types.sort_unstable();
        f.debug_struct("MutableStringMappers")
            .field("types", &types)
            .finish()
    }
}
