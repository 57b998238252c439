pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::ViacepClient;
pub use error::ViacepError;
pub use normalize::{looks_like_cep, normalize_cep, strip_non_digits};
pub use types::CepAddress;
