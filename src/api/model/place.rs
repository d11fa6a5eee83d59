use juniper::graphql_object;

use crate::api::Context;
use super::owner::Owner;


/// A pizza place.
#[derive(Debug, Clone)]
pub(crate) struct Place {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) owner_id: i32,
}

#[graphql_object(Context = Context)]
impl Place {
    /// The unique ID of this place.
    fn id(&self) -> i32 {
        self.id
    }

    /// The name of this place.
    fn name(&self) -> &str {
        &self.name
    }

    /// The ID of the owner of this place. This reference is not checked on
    /// creation, so it may not refer to any existing owner.
    fn owner_id(&self) -> i32 {
        self.owner_id
    }

    /// The owner of this place, or `null` if `ownerId` is dangling.
    fn owner(&self, context: &Context) -> Option<Owner> {
        context.store.owner(self.owner_id)
    }
}

impl Place {
    pub(crate) fn load_by_id(id: i32, context: &Context) -> Option<Self> {
        context.store.place(id)
    }

    pub(crate) fn load_all(context: &Context) -> Vec<Self> {
        context.store.places()
    }

    pub(crate) fn add(name: String, owner_id: i32, context: &Context) -> Self {
        context.store.add_place(name, owner_id)
    }
}
