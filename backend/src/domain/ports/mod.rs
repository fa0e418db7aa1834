//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`DocumentStore`], [`ActingUserResolver`]) describe what the
//! domain needs from the outside. Driving ports are the use-cases inbound
//! adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod acting_user;
mod articles_command;
mod articles_query;
mod comments_command;
mod comments_query;
mod document_store;
mod topics_query;
mod users_query;

pub use acting_user::ActingUserResolver;
#[cfg(test)]
pub use acting_user::MockActingUserResolver;
pub use articles_command::ArticlesCommand;
#[cfg(test)]
pub use articles_command::MockArticlesCommand;
pub use articles_query::ArticlesQuery;
#[cfg(test)]
pub use articles_query::MockArticlesQuery;
pub use comments_command::CommentsCommand;
#[cfg(test)]
pub use comments_command::MockCommentsCommand;
pub use comments_query::CommentsQuery;
#[cfg(test)]
pub use comments_query::MockCommentsQuery;
#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::{DocumentStore, StoreError};
#[cfg(test)]
pub use topics_query::MockTopicsQuery;
pub use topics_query::TopicsQuery;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
