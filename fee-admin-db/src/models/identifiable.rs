/// Trait for entities that can be uniquely identified
pub trait Identifiable {
    /// Key type of the entity (`str` for customers, `i64` for serial tables)
    type Id: ?Sized + Sync;

    /// Returns the unique identifier of the entity
    fn get_id(&self) -> &Self::Id;
}
