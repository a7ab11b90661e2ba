//! Entities: things with a stable identity (products, orders).

pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// First entity in `items` with the given id.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}
