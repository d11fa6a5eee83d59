use juniper::graphql_object;

use crate::api::Context;
use super::recipe::Recipe;


/// A pizza maker (pizzaiolo).
#[derive(Debug, Clone)]
pub(crate) struct Maker {
    pub(crate) id: i32,
    pub(crate) name: String,
}

#[graphql_object(Context = Context)]
impl Maker {
    /// The unique ID of this maker.
    fn id(&self) -> i32 {
        self.id
    }

    /// The maker's name.
    fn name(&self) -> &str {
        &self.name
    }

    /// All recipes by this maker, in the order they were added.
    fn recipes(&self, context: &Context) -> Vec<Recipe> {
        context.store.recipes_of_maker(self.id)
    }
}

impl Maker {
    pub(crate) fn load_by_id(id: i32, context: &Context) -> Option<Self> {
        context.store.maker(id)
    }

    pub(crate) fn load_all(context: &Context) -> Vec<Self> {
        context.store.makers()
    }

    pub(crate) fn add(name: String, context: &Context) -> Self {
        context.store.add_maker(name)
    }
}
