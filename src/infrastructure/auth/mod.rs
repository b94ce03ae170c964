mod credentials;

pub use credentials::{ACCESS_TOKEN_ENV, API_KEY_ENV, Credentials, CredentialsError};
