//! Prompt construction for translation-aware field extraction.

/// Record keys requested from the model, with translation hints.
///
/// Keys match the camelCase keys of the extraction record so replies can be
/// merged field by field.
pub const REQUESTED_FIELDS: &[(&str, &str)] = &[
    ("contractNumber", ""),
    ("amendmentNumber", ""),
    ("buyerNameAndAddress", "Translate content to English"),
    ("sellerNameAndAddress", "Translate content to English"),
    ("clientName", "Translate content to English"),
    ("partNumber", ""),
    ("partDescription", "Translate content to English"),
    ("issueDate", "Format YYYY-MM-DD"),
    ("currency", "ISO code, e.g. USD, EUR, CNY"),
    ("totalPrice", ""),
    ("paymentTerms", "Translate content to English"),
    ("manufacturingLocation", "Translate content to English"),
    ("shippingTo", "Translate content to English"),
    ("freightTerms", "Translate content to English"),
    ("accountManager", "Translate content to English if descriptive"),
    ("programName", "Translate content to English"),
    ("lbe", "Translate content to English"),
    (
        "language",
        "The detected language name in English, e.g. \"German\", \"Chinese\", \"French\"",
    ),
];

/// Build the extraction prompt for the first `context_chars` characters of `text`.
pub fn build_prompt(text: &str, context_chars: usize) -> String {
    let context: String = text.chars().take(context_chars).collect();

    let mut fields = String::new();
    for (key, hint) in REQUESTED_FIELDS {
        if hint.is_empty() {
            fields.push_str(&format!("- {}\n", key));
        } else {
            fields.push_str(&format!("- {} ({})\n", key, hint));
        }
    }

    format!(
        "You are a contract data extraction expert and translator.\n\
         Analyze the following text. It might be in a foreign language (e.g. German, Spanish, French, Chinese, Japanese).\n\
         \n\
         TASK:\n\
         1. Detect the language of the document.\n\
         2. Extract the key fields listed below.\n\
         3. If an extracted value is not in English, translate it into English before adding it to the JSON.\n\
         \u{20}  Example: if \"Zahlungsbedingungen\" is \"30 Tage netto\", \"paymentTerms\" must be \"30 days net\".\n\
         \u{20}  Example: if \"Designacion\" is \"Puntera\", \"partDescription\" must be \"Toe\".\n\
         \n\
         Return a strict JSON object. If a field is not found, use \"N/A\".\n\
         \n\
         Fields to extract (always return in English):\n\
         {fields}\n\
         Text:\n\
         \"\"\"\n\
         {context}\n\
         \"\"\"\n\
         \n\
         JSON:\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_every_field() {
        let prompt = build_prompt("Vertrag Nr. 4711", 4000);
        for (key, _) in REQUESTED_FIELDS {
            assert!(prompt.contains(&format!("- {}", key)), "missing {}", key);
        }
        assert!(prompt.contains("Vertrag Nr. 4711"));
    }

    #[test]
    fn test_prompt_truncates_context_on_char_boundary() {
        let text = "äöü".repeat(10);
        let prompt = build_prompt(&text, 4);
        assert!(prompt.contains("\"\"\"\näöüä\n\"\"\""));
    }
}
