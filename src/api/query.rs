use juniper::graphql_object;

use super::{
    Context,
    model::{
        maker::Maker,
        owner::Owner,
        place::Place,
        recipe::Recipe,
    },
};


/// The root query object.
pub(crate) struct Query;

#[graphql_object(Context = Context)]
impl Query {
    /// Returns the pizza place with the given ID, or `null` if the ID is
    /// omitted or does not refer to a place.
    fn place(id: Option<i32>, context: &Context) -> Option<Place> {
        id.and_then(|id| Place::load_by_id(id, context))
    }

    /// Returns all pizza places, in the order they were added.
    fn places(context: &Context) -> Vec<Place> {
        Place::load_all(context)
    }

    /// Returns the owner with the given ID, or `null` if the ID is omitted
    /// or does not refer to an owner.
    fn owner(id: Option<i32>, context: &Context) -> Option<Owner> {
        id.and_then(|id| Owner::load_by_id(id, context))
    }

    /// Returns all owners, in the order they were added.
    fn owners(context: &Context) -> Vec<Owner> {
        Owner::load_all(context)
    }

    /// Returns the pizza maker with the given ID, or `null` if the ID is
    /// omitted or does not refer to a maker.
    fn maker(id: Option<i32>, context: &Context) -> Option<Maker> {
        id.and_then(|id| Maker::load_by_id(id, context))
    }

    /// Returns all pizza makers, in the order they were added.
    fn makers(context: &Context) -> Vec<Maker> {
        Maker::load_all(context)
    }

    /// Returns the recipe with the given ID, or `null` if the ID is omitted
    /// or does not refer to a recipe.
    fn recipe(id: Option<i32>, context: &Context) -> Option<Recipe> {
        id.and_then(|id| Recipe::load_by_id(id, context))
    }

    /// Returns all recipes, in the order they were added.
    fn recipes(context: &Context) -> Vec<Recipe> {
        Recipe::load_all(context)
    }
}
