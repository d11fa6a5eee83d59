use juniper::graphql_object;

use crate::api::Context;
use super::place::Place;


/// Someone who runs one or more pizza places.
#[derive(Debug, Clone)]
pub(crate) struct Owner {
    pub(crate) id: i32,
    pub(crate) name: String,
}

#[graphql_object(Context = Context)]
impl Owner {
    /// The unique ID of this owner.
    fn id(&self) -> i32 {
        self.id
    }

    /// The owner's name.
    fn name(&self) -> &str {
        &self.name
    }

    /// All pizza places of this owner, in the order they were added. Empty
    /// if no place references this owner.
    fn places(&self, context: &Context) -> Vec<Place> {
        context.store.places_of_owner(self.id)
    }
}

impl Owner {
    pub(crate) fn load_by_id(id: i32, context: &Context) -> Option<Self> {
        context.store.owner(id)
    }

    pub(crate) fn load_all(context: &Context) -> Vec<Self> {
        context.store.owners()
    }

    pub(crate) fn add(name: String, context: &Context) -> Self {
        context.store.add_owner(name)
    }
}
