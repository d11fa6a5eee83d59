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


/// The root mutation object.
///
/// Every mutation is a single atomic append to one collection and returns
/// the newly created record. Missing or wrongly typed arguments are rejected
/// by schema validation before any resolver runs, so a failed request never
/// modifies anything.
pub(crate) struct Mutation;

#[graphql_object(Context = Context)]
impl Mutation {
    /// Adds a new owner and returns it.
    fn add_owner(name: String, context: &Context) -> Owner {
        Owner::add(name, context)
    }

    /// Adds a new pizza place and returns it. The `ownerId` is not checked
    /// against the existing owners; a dangling reference is legal and makes
    /// the `owner` field resolve to `null`.
    fn add_place(name: String, owner_id: i32, context: &Context) -> Place {
        Place::add(name, owner_id, context)
    }

    /// Adds a new pizza maker and returns it.
    fn add_maker(name: String, context: &Context) -> Maker {
        Maker::add(name, context)
    }

    /// Adds a new recipe and returns it. Like `addPlace`, the `makerId` is
    /// not verified.
    fn add_recipe(name: String, recipe: String, maker_id: i32, context: &Context) -> Recipe {
        Recipe::add(name, recipe, maker_id, context)
    }
}
