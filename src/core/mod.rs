pub mod del;
pub mod edit;
pub mod export;
pub mod kit;
pub mod reconcile;
pub mod reply;
pub mod search;
pub mod session;
pub mod upload;
pub mod validate;
