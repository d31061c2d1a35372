//! Rule-based field extractors for supplier contracts.

pub mod amounts;
pub mod clean;
pub mod country;
pub mod dates;
pub mod duns;
pub mod flags;
pub mod identifiers;
pub mod keywords;
pub mod locator;
pub mod parties;
pub mod patterns;

pub use amounts::{extract_currency, CurrencyExtractor, PriceExtractor};
pub use clean::{clean_value, is_legal_text, is_likely_name, is_valid_value};
pub use country::extract_country;
pub use dates::format_date;
pub use duns::DunsExtractor;
pub use flags::{extract_hazard_flag, HazardFlagExtractor};
pub use identifiers::{
    contract_number_from_filename, extract_amendment_number, extract_contract_number,
    AmendmentExtractor, ContractNumberExtractor,
};
pub use locator::{find_block_value, find_line_value, BlockLocator, Column, ColumnLayout};
pub use parties::{
    client_name, extract_receiving_plants, AccountManagerExtractor, LocationExtractor,
};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}
