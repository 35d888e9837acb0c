pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod settings;

pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use settings::ClientSettings;
