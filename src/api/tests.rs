//! Tests that execute real GraphQL documents against a freshly seeded store.

use std::sync::Arc;

use juniper::{execute_sync, graphql_value, DefaultScalarValue, Value, Variables};

use crate::store::Store;
use super::{root_node, Context};


fn seeded_context() -> Context {
    Context::new(Arc::new(Store::seeded()))
}

/// Executes the given document and returns the `data` value. Panics on
/// validation or field errors.
fn run(context: &Context, document: &str) -> Value<DefaultScalarValue> {
    let (data, errors) = execute_sync(document, None, &root_node(), &Variables::new(), context)
        .expect("document failed validation");
    assert!(errors.is_empty(), "unexpected field errors: {errors:?}");
    data
}


#[test]
fn seeded_places_are_returned_in_insertion_order() {
    let context = seeded_context();
    let data = run(&context, "{ places { id name ownerId } }");
    assert_eq!(data, graphql_value!({
        "places": [
            { "id": 1, "name": "Francesco's", "ownerId": 1 },
            { "id": 2, "name": "Gallagher's", "ownerId": 2 },
            { "id": 3, "name": "Dominick's", "ownerId": 3 },
        ],
    }));
}

#[test]
fn place_by_id() {
    let context = seeded_context();
    let data = run(&context, "{ place(id: 2) { id name ownerId } }");
    assert_eq!(data, graphql_value!({
        "place": { "id": 2, "name": "Gallagher's", "ownerId": 2 },
    }));
}

#[test]
fn lookups_with_unknown_id_return_null() {
    let context = seeded_context();
    let data = run(&context, "{
        place(id: 17) { id }
        owner(id: 17) { id }
        maker(id: 17) { id }
        recipe(id: 17) { id }
    }");
    assert_eq!(data, graphql_value!({
        "place": null,
        "owner": null,
        "maker": null,
        "recipe": null,
    }));
}

#[test]
fn lookup_without_id_returns_null() {
    let context = seeded_context();
    let data = run(&context, "{ place { id } }");
    assert_eq!(data, graphql_value!({ "place": null }));
}

#[test]
fn place_resolves_its_owner() {
    let context = seeded_context();
    let data = run(&context, "{ place(id: 2) { name owner { id name } } }");
    assert_eq!(data, graphql_value!({
        "place": {
            "name": "Gallagher's",
            "owner": { "id": 2, "name": "Jim Gallagher" },
        },
    }));
}

#[test]
fn owner_resolves_its_places_in_insertion_order() {
    let context = seeded_context();
    run(&context, r#"mutation { addPlace(name: "Francesco's Annex", ownerId: 1) { id } }"#);

    let data = run(&context, "{ owner(id: 1) { places { name } } }");
    assert_eq!(data, graphql_value!({
        "owner": {
            "places": [{ "name": "Francesco's" }, { "name": "Francesco's Annex" }],
        },
    }));
}

#[test]
fn recipe_and_maker_resolve_each_other() {
    let context = seeded_context();

    let data = run(&context, "{ recipe(id: 1) { name recipe maker { name } } }");
    assert_eq!(data, graphql_value!({
        "recipe": {
            "name": "Margherita",
            "recipe": "tomato, mozzarella, basil, olive oil",
            "maker": { "name": "Raffaele Esposito" },
        },
    }));

    let data = run(&context, "{ maker(id: 2) { recipes { id name } } }");
    assert_eq!(data, graphql_value!({
        "maker": {
            "recipes": [{ "id": 2, "name": "Marinara" }],
        },
    }));
}

#[test]
fn add_owner_can_be_queried_afterwards() {
    let context = seeded_context();

    let data = run(&context, r#"mutation { addOwner(name: "New Owner") { id name } }"#);
    assert_eq!(data, graphql_value!({
        "addOwner": { "id": 4, "name": "New Owner" },
    }));

    let data = run(&context, "{ owner(id: 4) { id name } }");
    assert_eq!(data, graphql_value!({
        "owner": { "id": 4, "name": "New Owner" },
    }));

    let data = run(&context, "{ owners { id } }");
    assert_eq!(data, graphql_value!({
        "owners": [{ "id": 1 }, { "id": 2 }, { "id": 3 }, { "id": 4 }],
    }));
}

#[test]
fn add_place_with_dangling_owner_id_succeeds() {
    let context = seeded_context();
    let data = run(&context, r#"mutation {
        addPlace(name: "Pop-up", ownerId: 99) { id name ownerId owner { id } }
    }"#);
    assert_eq!(data, graphql_value!({
        "addPlace": { "id": 4, "name": "Pop-up", "ownerId": 99, "owner": null },
    }));
}

#[test]
fn add_maker_and_recipe() {
    let context = seeded_context();

    let data = run(&context, r#"mutation { addMaker(name: "Gennaro Luciano") { id } }"#);
    assert_eq!(data, graphql_value!({ "addMaker": { "id": 4 } }));

    let data = run(&context, r#"mutation {
        addRecipe(name: "Fritta", recipe: "dough, ricotta, cicoli, pepper", makerId: 4) {
            id
            makerId
        }
    }"#);
    assert_eq!(data, graphql_value!({
        "addRecipe": { "id": 4, "makerId": 4 },
    }));

    let data = run(&context, "{ maker(id: 4) { recipes { name } } }");
    assert_eq!(data, graphql_value!({
        "maker": { "recipes": [{ "name": "Fritta" }] },
    }));
}

#[test]
fn repeated_reads_return_identical_results() {
    let context = seeded_context();
    let first = run(&context, "{ places { id name ownerId } }");
    let second = run(&context, "{ places { id name ownerId } }");
    assert_eq!(first, second);
}

#[test]
fn unknown_field_is_rejected_by_validation() {
    let context = seeded_context();
    let result = execute_sync(
        "{ pastaPlaces { id } }",
        None,
        &root_node(),
        &Variables::new(),
        &context,
    );
    assert!(result.is_err());
}

#[test]
fn mutation_with_missing_argument_is_rejected_without_side_effect() {
    let context = seeded_context();

    let result = execute_sync(
        "mutation { addOwner { id } }",
        None,
        &root_node(),
        &Variables::new(),
        &context,
    );
    assert!(result.is_err());

    // The rejected mutation must not have touched the store.
    let data = run(&context, "{ owners { id } }");
    assert_eq!(data, graphql_value!({
        "owners": [{ "id": 1 }, { "id": 2 }, { "id": 3 }],
    }));
}

#[test]
fn schema_exports_all_object_types() {
    let sdl = root_node().as_sdl();
    for ty in ["type Owner", "type Place", "type Maker", "type Recipe"] {
        assert!(sdl.contains(ty), "missing `{ty}` in schema:\n{sdl}");
    }
}
