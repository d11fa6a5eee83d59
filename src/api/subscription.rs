use juniper::EmptySubscription;

use super::Context;


/// We don't offer any subscriptions, but `juniper` requires a subscription
/// root anyway.
pub(crate) type Subscription = EmptySubscription<Context>;
