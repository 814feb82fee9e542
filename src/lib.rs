pub mod countries;
pub mod currencies;
pub mod errors;
pub mod languages;
pub mod macro_languages;
pub mod phones;

/// Boilerplate conversions shared across modules live here; the macro
/// names describe what is happening more clearly than the repeated
/// impl blocks would.
mod macros;

#[cfg(test)]
mod tests;

pub use countries::{Country, CountryUnit};
pub use currencies::{AmountError, Currency, CurrencyUnit};
pub use errors::UnitNotFoundError;
pub use languages::{Language, LanguageUnit};
pub use macro_languages::{IndividualStatus, MacroLanguage, MacroLanguageUnit};
pub use phones::{CodeValue, Phone, PhoneUnit, ResolveError};
