//! The canonical contract record.
//!
//! Every field is a string and is always present. A field that could not be
//! located holds its default sentinel: `"N/A"` for most fields, `"0"` for the
//! amendment number, `"USD"` for currency and `"No"` for the hazardous
//! material indicator.

use serde::{Deserialize, Serialize};

/// Sentinel for a field that was not found.
pub const NOT_FOUND: &str = "N/A";

macro_rules! contract_fields {
    ($( $variant:ident => $field:ident, $key:tt, $label:tt, $default:expr; )+) => {
        /// Identifies one field of [`ExtractedFields`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $( $variant, )+
        }

        impl Field {
            /// All fields in canonical (export) order.
            pub const ALL: &'static [Field] = &[ $( Field::$variant, )+ ];

            /// JSON key of the field.
            pub fn key(self) -> &'static str {
                match self {
                    $( Field::$variant => $key, )+
                }
            }

            /// Human-readable column header.
            pub fn label(self) -> &'static str {
                match self {
                    $( Field::$variant => $label, )+
                }
            }

            /// Value the field holds when nothing was extracted.
            pub fn default_value(self) -> &'static str {
                match self {
                    $( Field::$variant => $default, )+
                }
            }

            /// Look up a field by its JSON key.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $( $key => Some(Field::$variant), )+
                    _ => None,
                }
            }
        }

        /// Normalized record of structured commercial fields for one document or page.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct ExtractedFields {
            $(
                #[serde(rename = $key)]
                pub $field: String,
            )+
        }

        impl Default for ExtractedFields {
            fn default() -> Self {
                Self {
                    $( $field: $default.to_string(), )+
                }
            }
        }

        impl ExtractedFields {
            /// Current value of a field.
            pub fn get(&self, field: Field) -> &str {
                match field {
                    $( Field::$variant => &self.$field, )+
                }
            }

            fn slot_mut(&mut self, field: Field) -> &mut String {
                match field {
                    $( Field::$variant => &mut self.$field, )+
                }
            }
        }
    };
}

contract_fields! {
    ContractNumber => contract_number, "contractNumber", "Contract Number", NOT_FOUND;
    AmendmentNumber => amendment_number, "amendmentNumber", "Amendment Number", "0";
    PartNumber => part_number, "partNumber", "Part Number", NOT_FOUND;
    PartDescription => part_description, "partDescription", "Part Description", NOT_FOUND;
    ProgramName => program_name, "programName", "Program Name", NOT_FOUND;
    DrawingNumber => drawing_number, "drawingNumber", "Drawing Number", NOT_FOUND;
    LessFinishPartNumber => less_finish_part_number, "lessFinishPartNumber", "Less Finish Part Number", NOT_FOUND;
    IssueDate => issue_date, "issueDate", "Issue Date", NOT_FOUND;
    EffectiveDate => effective_date, "effectiveDate", "Effective Date", NOT_FOUND;
    SampleRequiredBy => sample_required_by, "sampleRequiredBy", "Sample Required By", NOT_FOUND;
    Lbe => lbe, "lbe", "LBE", NOT_FOUND;
    SellerNameAndAddress => seller_name_and_address, "sellerNameAndAddress", "Seller Name and Address", NOT_FOUND;
    DunsNumber => duns_number, "dunsNumber", "DUNS Number", NOT_FOUND;
    ManufacturingDunsNumber => manufacturing_duns_number, "manufacturingDunsNumber", "Manufacturing DUNS Number", NOT_FOUND;
    BuyerNameAndAddress => buyer_name_and_address, "buyerNameAndAddress", "Buyer Name and Address", NOT_FOUND;
    ClientName => client_name, "clientName", "Client Name", NOT_FOUND;
    PurchasingContact => purchasing_contact, "purchasingContact", "Purchasing Contact", NOT_FOUND;
    BuyerCode => buyer_code, "buyerCode", "Buyer Code", NOT_FOUND;
    AccountManager => account_manager, "accountManager", "Account Manager", NOT_FOUND;
    MailingAddressInformation => mailing_address_information, "mailingAddressInformation", "Mailing Address Information", NOT_FOUND;
    ManufacturingLocation => manufacturing_location, "manufacturingLocation", "Manufacturing Location", NOT_FOUND;
    ShippingTo => shipping_to, "shippingTo", "Shipping To", NOT_FOUND;
    FreightTerms => freight_terms, "freightTerms", "Freight Terms", NOT_FOUND;
    DeliveryTerms => delivery_terms, "deliveryTerms", "Delivery Terms", NOT_FOUND;
    DeliveryDuns => delivery_duns, "deliveryDuns", "Delivery DUNS", NOT_FOUND;
    ShipFromDuns => ship_from_duns, "shipFromDuns", "Ship From DUNS", NOT_FOUND;
    DailyCapacity => daily_capacity, "dailyCapacity", "Daily Capacity", NOT_FOUND;
    HoursPerDay => hours_per_day, "hoursPerDay", "Hours Per Day", NOT_FOUND;
    ContainerType => container_type, "containerType", "Container Type", NOT_FOUND;
    ReceivingPlants => receiving_plants, "receivingPlants", "Receiving Plants", NOT_FOUND;
    Currency => currency, "currency", "Currency", "USD";
    BasePrice => base_price, "basePrice", "Base Price", NOT_FOUND;
    TotalPrice => total_price, "totalPrice", "Total Price", NOT_FOUND;
    UnitOfMeasure => unit_of_measure, "unitOfMeasure", "Unit of Measure", NOT_FOUND;
    PaymentTerms => payment_terms, "paymentTerms", "Payment Terms", NOT_FOUND;
    ReasonForIssuing => reason_for_issuing, "reasonForIssuing", "Reason for Issuing", NOT_FOUND;
    HazardousMaterialIndicator => hazardous_material_indicator, "hazardousMaterialIndicator", "Hazardous Material Indicator", "No";
    RawMaterialCertAnalysis => raw_material_cert_analysis, "rawMaterialCertAnalysis", "Raw Material Cert Analysis", NOT_FOUND;
    RawMaterialAnnualCert => raw_material_annual_cert, "rawMaterialAnnualCert", "Raw Material Annual Cert", NOT_FOUND;
    Language => language, "language", "Language", NOT_FOUND;
}

impl ExtractedFields {
    /// Create a record with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. Blank values fall back to the field default so that no
    /// field is ever empty.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let value = value.trim();
        *self.slot_mut(field) = if value.is_empty() {
            field.default_value().to_string()
        } else {
            value.to_string()
        };
    }

    /// Set a field from an optional value, using the default when absent.
    pub fn set_opt(&mut self, field: Field, value: Option<String>) {
        match value {
            Some(v) => self.set(field, v),
            None => self.reset(field),
        }
    }

    /// Reset a field to its default.
    pub fn reset(&mut self, field: Field) {
        *self.slot_mut(field) = field.default_value().to_string();
    }

    /// True when the field holds the `"N/A"` sentinel.
    pub fn is_not_found(&self, field: Field) -> bool {
        self.get(field) == NOT_FOUND
    }

    /// Iterate over all fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// Number of fields holding something other than their default.
    pub fn populated_count(&self) -> usize {
        self.iter().filter(|(f, v)| *v != f.default_value()).count()
    }
}
