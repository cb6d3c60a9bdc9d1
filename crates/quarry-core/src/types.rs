use crate::{
    traits::{EntityIdentity, FieldValue},
    value::Value,
};
use std::{fmt, marker::PhantomData};

///
/// EntityRef
///
/// Typed reference to a stored entity by identity string.
/// Keeps the target entity type in the type system without holding the
/// entity itself; constraints built from a reference compare against
/// the identity, never the entity body.
///

pub struct EntityRef<T> {
    id: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EntityRef<T> {
    /// Construct a lazy reference from a known identity.
    #[must_use]
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _marker: PhantomData,
        }
    }

    /// Return the referenced identity string.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl<T: EntityIdentity> EntityRef<T> {
    /// Reference a loaded entity by its identity.
    #[must_use]
    pub fn to(entity: &T) -> Self {
        Self::from_id(entity.id())
    }
}

impl<T> FieldValue for EntityRef<T> {
    fn to_value(&self) -> Value {
        Value::Text(self.id.clone())
    }
}

// Manual impls: the marker type parameter carries no data and must not
// pick up derive bounds.

impl<T> Clone for EntityRef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for EntityRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityRef").field(&self.id).finish()
    }
}

impl<T> PartialEq for EntityRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for EntityRef<T> {}

#[cfg(test)]
mod tests {
    use super::EntityRef;
    use crate::{traits::{EntityIdentity, FieldValue}, value::Value};

    struct Customer {
        id: String,
    }

    impl EntityIdentity for Customer {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn reference_normalizes_to_the_identity_string() {
        let reference = EntityRef::<Customer>::from_id("C-42");
        assert_eq!(reference.to_value(), Value::Text("C-42".to_string()));
    }

    #[test]
    fn loaded_entity_enters_by_identity() {
        let customer = Customer {
            id: "C-7".to_string(),
        };
        let reference = EntityRef::to(&customer);
        assert_eq!(reference.id(), "C-7");
        assert_eq!(reference.to_value(), Value::Text("C-7".to_string()));
    }
}
