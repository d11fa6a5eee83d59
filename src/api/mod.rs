//! Definition of the GraphQL API.

use self::{
    mutation::Mutation,
    query::Query,
};

pub(crate) mod model;

mod context;
mod mutation;
mod query;
mod subscription;

#[cfg(test)]
mod tests;

pub(crate) use self::context::Context;
use self::subscription::Subscription;


/// Creates and returns the API root node.
pub(crate) fn root_node() -> RootNode {
    RootNode::new(Query, Mutation, Subscription::new())
}

/// Type of our API root node.
pub(crate) type RootNode = juniper::RootNode<'static, Query, Mutation, Subscription>;
