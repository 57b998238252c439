//! Wire types for the ViaCEP lookup service.

use serde::{Deserialize, Serialize};

/// A successful ViaCEP address response.
///
/// ViaCEP signals "not found" with a 200 response carrying an `erro` marker
/// field instead of an HTTP error status; the client checks that marker on
/// the raw JSON before deserializing into this type, so a value of this type
/// always describes a real address. Unknown response fields (`complemento`,
/// `ibge`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CepAddress {
    /// Formatted CEP as echoed by the service, e.g. `"01310-100"`.
    pub cep: String,
    /// Street name; empty for city-wide CEPs.
    pub logradouro: String,
    /// District; empty for city-wide CEPs.
    pub bairro: String,
    /// City name, e.g. `"São Paulo"`.
    pub localidade: String,
    /// Two-letter state abbreviation, e.g. `"SP"`.
    pub uf: String,
}
