pub mod auth;
pub mod http;
pub mod observability;
pub mod recognition;
pub mod synthesis;

mod provider_factory;

pub use provider_factory::{ProviderFactory, Providers};
