use std::sync::Arc;

use crate::store::Store;


/// The context that is accessible to every resolver in our API.
pub(crate) struct Context {
    pub(crate) store: Arc<Store>,
}

impl juniper::Context for Context {}

impl Context {
    pub(crate) fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}
