//! The in-memory data store.
//!
//! All data lives in four collections that are seeded at startup and only
//! ever appended to. There is no update and no delete. The store is shared
//! between all requests via `Arc`, with a single `RwLock` around the tables:
//! every operation below is one read or one append under the lock, so a
//! GraphQL mutation is a single atomic append and partial writes cannot be
//! observed.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::model::{maker::Maker, owner::Owner, place::Place, recipe::Recipe};


pub(crate) struct Store {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    owners: Table<Owner>,
    places: Table<Place>,
    makers: Table<Maker>,
    recipes: Table<Recipe>,
}

/// One collection of records plus the counter used to assign the next ID.
///
/// The counter is deliberately independent of `rows.len()`: IDs are
/// monotonic for the lifetime of the process, no matter what happens to the
/// collection.
struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Appends the record built by `create` (which receives the assigned ID)
    /// and returns a copy of it.
    fn insert(&mut self, create: impl FnOnce(i32) -> T) -> T {
        let row = create(self.next_id);
        self.next_id += 1;
        self.rows.push(row.clone());
        row
    }
}

impl Store {
    /// Creates a store with the fixed demo data: three records per
    /// collection, with places 1–3 pointing at owners 1–3 and recipes 1–3
    /// pointing at makers 1–3.
    pub(crate) fn seeded() -> Self {
        let store = Self {
            tables: RwLock::new(Tables::default()),
        };

        store.add_owner("Francesco Matterazzo".into());
        store.add_owner("Jim Gallagher".into());
        store.add_owner("Dominick Salerno".into());

        store.add_place("Francesco's".into(), 1);
        store.add_place("Gallagher's".into(), 2);
        store.add_place("Dominick's".into(), 3);

        store.add_maker("Raffaele Esposito".into());
        store.add_maker("Carmine Aiello".into());
        store.add_maker("Luigi Bruno".into());

        store.add_recipe(
            "Margherita".into(),
            "tomato, mozzarella, basil, olive oil".into(),
            1,
        );
        store.add_recipe(
            "Marinara".into(),
            "tomato, garlic, oregano, olive oil".into(),
            2,
        );
        store.add_recipe(
            "Quattro Stagioni".into(),
            "tomato, mozzarella, mushrooms, ham, artichokes, olives".into(),
            3,
        );

        store
    }

    // A poisoned lock still contains consistent data: no method panics
    // between two writes. So we just ignore poisoning.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }


    // ----- Single record lookups. A miss is `None`, never an error. -----

    pub(crate) fn owner(&self, id: i32) -> Option<Owner> {
        self.read().owners.rows.iter().find(|o| o.id == id).cloned()
    }

    pub(crate) fn place(&self, id: i32) -> Option<Place> {
        self.read().places.rows.iter().find(|p| p.id == id).cloned()
    }

    pub(crate) fn maker(&self, id: i32) -> Option<Maker> {
        self.read().makers.rows.iter().find(|m| m.id == id).cloned()
    }

    pub(crate) fn recipe(&self, id: i32) -> Option<Recipe> {
        self.read().recipes.rows.iter().find(|r| r.id == id).cloned()
    }


    // ----- Full listings, in insertion order. -----

    pub(crate) fn owners(&self) -> Vec<Owner> {
        self.read().owners.rows.clone()
    }

    pub(crate) fn places(&self) -> Vec<Place> {
        self.read().places.rows.clone()
    }

    pub(crate) fn makers(&self) -> Vec<Maker> {
        self.read().makers.rows.clone()
    }

    pub(crate) fn recipes(&self) -> Vec<Recipe> {
        self.read().recipes.rows.clone()
    }


    // ----- Relations, in insertion order. -----

    pub(crate) fn places_of_owner(&self, owner_id: i32) -> Vec<Place> {
        self.read().places.rows.iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect()
    }

    pub(crate) fn recipes_of_maker(&self, maker_id: i32) -> Vec<Recipe> {
        self.read().recipes.rows.iter()
            .filter(|r| r.maker_id == maker_id)
            .cloned()
            .collect()
    }


    // ----- Appends. Referenced IDs are not checked: a dangling reference is
    // legal and simply resolves to `null` (see the model types). -----

    pub(crate) fn add_owner(&self, name: String) -> Owner {
        self.write().owners.insert(|id| Owner { id, name })
    }

    pub(crate) fn add_place(&self, name: String, owner_id: i32) -> Place {
        self.write().places.insert(|id| Place { id, name, owner_id })
    }

    pub(crate) fn add_maker(&self, name: String) -> Maker {
        self.write().makers.insert(|id| Maker { id, name })
    }

    pub(crate) fn add_recipe(&self, name: String, recipe: String, maker_id: i32) -> Recipe {
        self.write().recipes.insert(|id| Recipe { id, name, recipe, maker_id })
    }
}


#[cfg(test)]
mod tests {
    use super::Store;

    #[test]
    fn seeded_store_has_three_records_per_collection() {
        let store = Store::seeded();
        assert_eq!(store.owners().len(), 3);
        assert_eq!(store.places().len(), 3);
        assert_eq!(store.makers().len(), 3);
        assert_eq!(store.recipes().len(), 3);
    }

    #[test]
    fn ids_are_assigned_monotonically() {
        let store = Store::seeded();
        assert_eq!(store.add_owner("A".into()).id, 4);
        assert_eq!(store.add_owner("B".into()).id, 5);

        // Counters are per collection.
        assert_eq!(store.add_maker("C".into()).id, 4);
    }

    #[test]
    fn lookup_miss_is_none() {
        let store = Store::seeded();
        assert!(store.owner(17).is_none());
        assert!(store.place(17).is_none());
        assert!(store.maker(17).is_none());
        assert!(store.recipe(17).is_none());
    }

    #[test]
    fn places_of_owner_filters_in_insertion_order() {
        let store = Store::seeded();
        store.add_place("Francesco's Annex".into(), 1);

        let names = store.places_of_owner(1).into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["Francesco's", "Francesco's Annex"]);

        assert!(store.places_of_owner(17).is_empty());
    }

    #[test]
    fn dangling_references_are_allowed() {
        let store = Store::seeded();
        let place = store.add_place("Pop-up".into(), 99);
        assert_eq!(place.owner_id, 99);
        assert!(store.owner(place.owner_id).is_none());
    }
}
