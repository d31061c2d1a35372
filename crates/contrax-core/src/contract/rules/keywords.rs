//! Multilingual keyword dictionaries, tried in order by the locators.
//!
//! Earlier entries win, so longer and more specific labels come first.

pub const CONTRACT: &[&str] = &[
    "Contract No", "Contract Number", "Order No", "PO No", "Purchase Order",
    "Vertrag Nr", "Vertragsnummer", "Contrat N", "Pedido N", "Contract",
    "Bestellnummer", "Bestellung Nr", "Agreement No", "Agreement Number",
    "Scheduling Agreement", "Contract Identification", "P.O. Number", "P.O. No",
    "Order Number", "Document Number", "Ponum", "Order Id",
];

pub const PART: &[&str] = &[
    "Part No", "Part Number", "Item Code", "Material No", "P/N", "Sachnummer",
    "Teilenummer", "Ref", "Reference", "Item", "Artikelnummer", "Código de pieza",
    "Part #", "Material", "Item Number", "Material Number", "Our Part No",
    "Your Part No", "Material Id", "Part Id",
];

pub const DATE: &[&str] = &[
    "Issue Date", "Date", "Dated", "Datum", "Fecha", "Date d'émission",
    "Erstelldatum", "Effective Date", "Agreement Date", "Entered into", "Made on",
    "Executed on", "Signed on", "As of", "Date of Issue", "Order Date",
    "Creation Date",
];

pub const AMENDMENT: &[&str] = &[
    "Amendment", "Amendment No", "Amendment Number", "Amendment #", "Amnd", "Amdt",
    "Rev", "Revision", "Änderung", "Versión", "Amdt. No.", "Change Level",
    "Revision Level", "Version",
];

pub const BUYER: &[&str] = &[
    "BUYER NAME AND ADDRESS", "Buyer Name and Address", "BUYER NAME", "Buyer Name",
    "Buyer", "Purchaser", "Käufer", "Acheteur", "Comprador", "Bill To", "Sold To",
    "Customer", "Invoice Address", "Bill-To Address", "Buyer Address", "Issued To",
];

pub const SELLER: &[&str] = &[
    "SELLER NAME AND ADDRESS", "Seller Name and Address", "SELLER NAME",
    "Seller Name", "Seller", "Vendor", "Supplier", "Contractor", "Vendor Address",
    "Supplier Address", "Vendor Name", "Supplier Name",
];

pub const PROGRAM: &[&str] = &[
    "Program", "Program Name", "Vehicle", "Platform", "Model", "Project",
    "Application", "Vehicle Line", "Usage", "Program Description",
];

pub const DUNS: &[&str] = &[
    "DUNS", "D-U-N-S", "Dun & Bradstreet", "Duns No", "Duns Number", "DUNS Code",
    "Vendor Code", "Supplier Code", "Supplier No", "Vendor No",
];

pub const ACCOUNT_MANAGER: &[&str] = &[
    "Account Manager", "Purchasing Contact", "Contract Owner", "Owner",
    "Sales Contact", "Sales Rep", "Representative", "Key Account Manager",
    "Salesperson", "Account Mgr", "Program Manager", "Commercial Contact",
    "Seller Contact", "Supplier contact", "Contact Person", "Prepared By",
    "Buyer Contact", "Administrator", "Creator", "Author", "Sales Engineer",
    "Inside Sales", "Customer Service", "Account Administrator", "Contact Name",
    "Submitted By",
];

pub const PRICE: &[&str] = &[
    "Base Price", "Unit Price", "Piece Price", "P/U", "Price", "Cost", "Rate",
    "Amount", "Net Price", "Unit Cost",
];

pub const TOTAL_PRICE: &[&str] = &[
    "Total Price", "Total Amount", "Total Order Value", "Total Cost",
    "Extended Price", "Grand Total", "Total Value", "Net Value", "Order Total",
    "Total",
];

pub const RAW_MATERIAL_CERT: &[&str] = &[
    "Raw Material Cert. Analysis", "Raw Material Certification", "Material Cert",
    "Cert. Analysis", "Certification", "Material Specification",
];

pub const ANNUAL_CERT: &[&str] = &[
    "Raw Material Annual Cert.", "Annual Certification", "Annual Cert",
    "Recertification",
];

pub const LESS_FINISH: &[&str] = &[
    "Less Finish Part Number", "Less Finish P/N", "Less Finish Part No", "LFPN",
    "Base Part Number", "Raw Part Number",
];

pub const LOCATION: &[&str] = &[
    "Manufacturing Location", "Mfg Location", "Plant Location", "Ship From Address",
    "Ship From", "Origin", "Location", "Plant", "Ship-From", "Supplier Address",
    "Shipping Point", "Vendor Location", "Factory", "Site", "Place of Manufacture",
];

pub const SHIP_FROM_DUNS: &[&str] = &[
    "Ship From DUNS", "Ship From Duns", "Supplier DUNS", "Mfg DUNS",
    "Manufacturing DUNS", "Vendor DUNS", "Ship-From DUNS", "Origin DUNS",
];

pub const DELIVERY_DUNS: &[&str] = &[
    "Delivery DUNS", "Ship To DUNS", "Receiving DUNS", "Destination DUNS",
];

pub const PAYMENT_TERMS: &[&str] = &[
    "Payment Terms", "Pay Terms", "Terms of Payment", "Payment", "Terms",
];

pub const FREIGHT_TERMS: &[&str] = &[
    "Freight Terms", "Incoterms", "Shipping Terms", "Delivery Terms",
    "Trade Terms", "Incoterm",
];

pub const DELIVERY_TERMS: &[&str] = &["Delivery Terms"];

pub const CURRENCY: &[&str] = &["Currency", "Curr", "Währung", "Currency Code"];

pub const MAILING_ADDRESS: &[&str] = &[
    "Mailing Address Information", "Mailing Address", "Mail To",
    "Correspondence Address", "Postal Address", "Send Notices To", "Notices To",
    "Bill To Address", "Invoicing Address",
];

pub const PURCHASING_CONTACT: &[&str] = &[
    "Purchasing Contact", "Buyer Contact", "Purchasing Agent", "Buyer Name",
    "Contact", "Buyer", "Authorized By", "Confirmed By",
];

pub const DRAWING_NUMBER: &[&str] = &[
    "Drawing Number", "Drawing No", "Drwg No", "Drawing", "Blueprint", "dwg",
    "Engineering Level",
];

pub const REASON_FOR_ISSUING: &[&str] = &[
    "Reason for Issuing Contract/Amendment", "Reason for Issuing Contract / Amendment",
    "Reason for Issuing", "Reason", "Purpose", "Comments", "Remarks",
    "Description of Change", "Notes", "Change Description",
];

pub const RECEIVING_PLANTS: &[&str] = &[
    "Receiving Plants", "Destination Plant", "Receiving Location", "Ship To",
    "Delivery Address", "Ship-To", "Final Destination", "Plant Code", "Dock Code",
];

pub const HAZARDOUS: &[&str] = &[
    "Hazardous Material", "Hazardous Material Indicator", "HazMat", "Dangerous Goods",
];

pub const PART_DESCRIPTION: &[&str] = &["Part Description", "Description"];

pub const SHIPPING_TO: &[&str] = &["Shipping To", "Ship To"];

pub const UNIT_OF_MEASURE: &[&str] = &["UOM", "Unit of Measure"];

pub const DAILY_CAPACITY: &[&str] = &["Daily Capacity"];

pub const HOURS_PER_DAY: &[&str] = &["Hours Per Day"];

pub const CONTAINER_TYPE: &[&str] = &["Container Type"];

pub const SAMPLE_REQUIRED_BY: &[&str] = &["Sample Required By"];

pub const BUYER_CODE: &[&str] = &["Buyer Code"];

/// Contract vocabulary from non-English documents; any hit triggers enrichment.
pub const FOREIGN_MARKERS: &[&str] = &[
    "vertrag", "bestellung", "contrat", "commande", "pedido", "orden", "auftrag",
    "prix", "fecha", "designacion", "vigencia", "application", "ancien", "netto",
    "合同", "协议", "采购", "订单", "契約", "注文", "соглашение", "договор",
];

/// Line openings that mark the start of the next section inside a block.
pub const NEXT_SECTION_PREFIXES: &[&str] = &[
    "phone", "fax", "email", "buyer code", "remit to", "tax id", "ship via", "f.o.b",
    "this contract is effective", "part description", "drawing number",
    "reason for issuing", "sample required", "hazardous material", "engineer change",
    "payment terms", "freight terms", "delivery terms", "daily capacity",
    "hours per day", "container type", "all prices", "base price", "total price",
];

/// Phrases that end a block anywhere in a line, unless the keyword itself names them.
pub const NEXT_SECTION_MARKERS: &[&str] = &[
    "mailing address", "purchasing contact", "affected p/n", "affected part",
];

/// Openings of boilerplate clauses that are never field values.
pub const LEGAL_OPENINGS: &[&str] = &[
    "is to correct", "to obtain or retain", "of the other for any", "may, in writing",
    "that is an ingredient", "specified in this contract", "is firm and not subject",
    "this contract is effective",
];

pub const LEGAL_PHRASES: &[&str] = &[
    "electronic data interchange", "noncompliance", "periodically", "warranty",
    "infringement",
];

/// Two or more of these in one value marks it as legal prose.
pub const LEGAL_TERMS: &[&str] = &[
    "agreement", "contract", "whereas", "hereto", "hereby", "indemnify", "liability",
    "warrant", "provision", "statute", "govern", "law", "accordance", "behalf",
    "execution", "force", "majeure", "perform", "obligations", "terms and conditions",
];

/// Exact values that are leftover label fragments.
pub const LABEL_PLACEHOLDERS: &[&str] = &[
    "and address", "and address:", "name and address", "information", "information:",
];

/// Substrings that disqualify a candidate value.
pub const INVALID_FRAGMENTS: &[&str] = &[
    "forecasted", "quantity", "comply", "reference", "incorporated", "amended",
    "utilizing", "expressly", "agreed", "between", "pursuant", "supplier capacity",
    "capacity to", "change the", "refer to", "authorized by", "electronically",
    "name and address", "name & address", "buyer name", "seller name",
    "shipping address", "buyer name and address", "seller name and address",
    "purchasing contact", "periodically", "noncompliance", "warranty", "breach",
    "indemnification", "obligations",
];

/// Words that mark the text before a colon as a captured label.
pub const LABEL_HINTS: &[&str] = &[
    "issuing", "reason", "contract", "amendment", "price", "prix", "date", "precio",
];
