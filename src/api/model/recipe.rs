use juniper::graphql_object;

use crate::api::Context;
use super::maker::Maker;


/// A pizza recipe.
#[derive(Debug, Clone)]
pub(crate) struct Recipe {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) recipe: String,
    pub(crate) maker_id: i32,
}

#[graphql_object(Context = Context)]
impl Recipe {
    /// The unique ID of this recipe.
    fn id(&self) -> i32 {
        self.id
    }

    /// The name of the pizza this recipe makes.
    fn name(&self) -> &str {
        &self.name
    }

    /// Free-text ingredient description.
    fn recipe(&self) -> &str {
        &self.recipe
    }

    /// The ID of the maker of this recipe. Not checked on creation, so it
    /// may not refer to any existing maker.
    fn maker_id(&self) -> i32 {
        self.maker_id
    }

    /// The maker of this recipe, or `null` if `makerId` is dangling.
    fn maker(&self, context: &Context) -> Option<Maker> {
        context.store.maker(self.maker_id)
    }
}

impl Recipe {
    pub(crate) fn load_by_id(id: i32, context: &Context) -> Option<Self> {
        context.store.recipe(id)
    }

    pub(crate) fn load_all(context: &Context) -> Vec<Self> {
        context.store.recipes()
    }

    pub(crate) fn add(name: String, recipe: String, maker_id: i32, context: &Context) -> Self {
        context.store.add_recipe(name, recipe, maker_id)
    }
}
