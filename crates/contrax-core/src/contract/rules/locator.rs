//! Keyword-driven value locators.
//!
//! The line locator reads a value from the same line as its label (or the
//! line right below a bare label). The block locator collects a multi-line
//! block, such as an address, and knows about two-column layouts where the
//! buyer sits on the left and the seller on the right.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::clean::{clean_value, is_legal_text, is_valid_value};
use super::keywords::{NEXT_SECTION_MARKERS, NEXT_SECTION_PREFIXES};
use super::patterns::{
    PatternCache, BARE_DUNS, DUNS_LABELED, DUNS_TRAILING_LABEL, LABEL_TAIL, RULE_LINE,
    SEGMENT_GAP,
};

lazy_static! {
    static ref SAME_LINE_PATTERNS: PatternCache = PatternCache::new();
    static ref BLOCK_LABEL_PATTERNS: PatternCache = PatternCache::new();
}

/// Extra characters a bare label line may carry before look-ahead is skipped.
pub const LOOKAHEAD_SLACK: usize = 20;

/// Tighter slack used for price labels.
pub const PRICE_LOOKAHEAD_SLACK: usize = 15;

/// Lines inspected below a bare label.
const LOOKAHEAD_LINES: usize = 2;

/// A look-ahead line with a colon this early is another label.
const LOOKAHEAD_COLON_LIMIT: usize = 15;

/// Find the first valid value for any keyword, trying keywords in order.
pub fn find_line_value(text: &str, keywords: &[&str]) -> Option<String> {
    find_line_value_where(text, keywords, LOOKAHEAD_SLACK, |_| true)
}

/// Like [`find_line_value`], but a candidate must also pass `accept`.
pub fn find_line_value_where(
    text: &str,
    keywords: &[&str],
    slack: usize,
    accept: impl Fn(&str) -> bool,
) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    for keyword in keywords {
        let Some(pattern) = same_line_pattern(keyword) else {
            continue;
        };
        let bare_keyword = strip_label_punctuation(&keyword.to_lowercase());
        let keyword_lower = keyword.to_lowercase();
        let keyword_len = bare_keyword.chars().count();

        for (index, line) in lines.iter().enumerate() {
            if let Some(caps) = pattern.captures(line) {
                let value = clean_value(&caps[1]);
                if !value.is_empty() && is_valid_value(&value) && accept(&value) {
                    trace!(keyword, value = %value, "same-line match");
                    return Some(value);
                }
            }

            let bare_line = strip_label_punctuation(&line.to_lowercase());
            let bare_line = bare_line.trim();
            if !bare_line.starts_with(&bare_keyword) || bare_line.chars().count() >= keyword_len + slack {
                continue;
            }

            for next in lines.iter().skip(index + 1).take(LOOKAHEAD_LINES) {
                let next = next.trim();
                if next.is_empty() {
                    continue;
                }
                if next.chars().position(|c| c == ':').is_some_and(|i| i < LOOKAHEAD_COLON_LIMIT) {
                    continue;
                }
                if !is_valid_value(next) || next.to_lowercase().contains(&keyword_lower) {
                    continue;
                }
                let value = clean_value(next);
                if !value.is_empty() && accept(&value) {
                    trace!(keyword, value = %value, "look-ahead match");
                    return Some(value);
                }
            }
        }
    }

    None
}

fn same_line_pattern(keyword: &str) -> Option<Regex> {
    SAME_LINE_PATTERNS.get_or_compile(keyword, || {
        format!(r"(?i)(?:^|\s){}[:.\-\s]+(.*)", regex::escape(keyword))
    })
}

fn block_label_pattern(keyword: &str) -> Option<Regex> {
    BLOCK_LABEL_PATTERNS.get_or_compile(keyword, || format!("(?i){}", regex::escape(keyword)))
}

fn strip_label_punctuation(value: &str) -> String {
    value.replace([':', '.', '-'], "")
}

/// Which column of a two-column header a keyword sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// Thresholds used to tell columns apart.
#[derive(Debug, Clone, Copy)]
pub struct ColumnLayout {
    /// Non-space characters before the keyword that put it in the right column.
    pub min_prefix_chars: usize,
    /// Keyword start column beyond which it is in the right column.
    pub right_column_start: usize,
    /// Indentation beyond which a line belongs to the right column.
    pub far_indent: usize,
    /// Indentation below which a line starts at the left margin.
    pub left_margin: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            min_prefix_chars: 4,
            right_column_start: 30,
            far_indent: 30,
            left_margin: 10,
        }
    }
}

impl ColumnLayout {
    /// Column of a keyword whose match starts at byte `start` of `line`.
    pub fn column_of(&self, line: &str, start: usize) -> Column {
        let prefix = &line[..start];
        if self.has_prefix_text(prefix) || prefix.chars().count() > self.right_column_start {
            Column::Right
        } else {
            Column::Left
        }
    }

    fn has_prefix_text(&self, prefix: &str) -> bool {
        prefix.chars().filter(|c| !c.is_whitespace()).count() >= self.min_prefix_chars
    }
}

enum Segment {
    Keep,
    Stop,
}

/// Multi-line block locator.
#[derive(Debug, Clone, Default)]
pub struct BlockLocator {
    layout: ColumnLayout,
}

impl BlockLocator {
    /// Create a locator with the default column thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom column thresholds.
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Collect up to `max_lines` lines following the first keyword that
    /// yields a non-empty block. Lines are joined with `\n`.
    pub fn find(&self, text: &str, keywords: &[&str], max_lines: usize) -> Option<String> {
        let lines: Vec<&str> = text.lines().collect();

        'keywords: for keyword in keywords {
            let Some(pattern) = block_label_pattern(keyword) else {
                continue;
            };
            let keyword_lower = keyword.to_lowercase();

            for (index, line) in lines.iter().enumerate() {
                let Some(found) = pattern.find(line) else {
                    continue;
                };

                let prefix = &line[..found.start()];
                let column = self.layout.column_of(line, found.start());
                let prefix_has_text = self.layout.has_prefix_text(prefix);
                let prefix_is_wide = prefix.chars().count() > self.layout.right_column_start;

                let mut block: Vec<String> = Vec::new();

                let rest = line[found.end()..].trim();
                let rest = if LABEL_TAIL.is_match(&rest.replace([':', '.'], "")) {
                    ""
                } else {
                    rest
                };
                if !rest.is_empty() {
                    let segment = match column {
                        Column::Left => first_segment(rest),
                        Column::Right => rest,
                    };
                    if let Segment::Stop = self.take_segment(segment, &keyword_lower, &mut block) {
                        continue 'keywords;
                    }
                }

                for next in lines.iter().skip(index + 1).take(max_lines) {
                    let trimmed = next.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let indent = next.chars().take_while(|c| c.is_whitespace()).count();

                    let segment = match column {
                        Column::Left => {
                            if indent > self.layout.far_indent {
                                continue;
                            }
                            first_segment(trimmed)
                        }
                        Column::Right => {
                            let parts = segments(trimmed);
                            if indent > self.layout.far_indent {
                                trimmed
                            } else if parts.len() > 1 {
                                parts[parts.len() - 1]
                            } else if prefix_has_text {
                                continue;
                            } else if prefix_is_wide && indent < self.layout.left_margin {
                                break;
                            } else {
                                trimmed
                            }
                        }
                    };

                    if let Segment::Stop = self.take_segment(segment, &keyword_lower, &mut block) {
                        break;
                    }
                }

                if !block.is_empty() {
                    trace!(keyword, lines = block.len(), ?column, "block match");
                    return Some(block.join("\n"));
                }
            }
        }

        None
    }

    fn take_segment(&self, segment: &str, keyword: &str, block: &mut Vec<String>) -> Segment {
        if segment.trim().is_empty() {
            return Segment::Keep;
        }

        let mut value = clean_value(segment);
        if RULE_LINE.is_match(&value) {
            return Segment::Keep;
        }

        if value.to_lowercase().contains("duns") || BARE_DUNS.is_match(&value) {
            value = strip_duns(&value);
            if value.is_empty() {
                return Segment::Keep;
            }
        }

        if is_legal_text(&value) || starts_next_section(&value, keyword) {
            return Segment::Stop;
        }

        if is_valid_value(&value) {
            block.push(value);
        }
        Segment::Keep
    }
}

/// Block locator with default column thresholds.
pub fn find_block_value(text: &str, keywords: &[&str], max_lines: usize) -> Option<String> {
    BlockLocator::new().find(text, keywords, max_lines)
}

fn segments(line: &str) -> Vec<&str> {
    SEGMENT_GAP
        .split(line)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn first_segment(line: &str) -> &str {
    segments(line).into_iter().next().unwrap_or("")
}

fn starts_next_section(value: &str, keyword: &str) -> bool {
    let lower = value.to_lowercase();
    NEXT_SECTION_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
        || NEXT_SECTION_MARKERS
            .iter()
            .any(|marker| lower.contains(marker) && !keyword.contains(marker))
}

fn strip_duns(value: &str) -> String {
    let value = DUNS_LABELED.replace_all(value, "");
    let value = DUNS_TRAILING_LABEL.replace_all(&value, "");
    let value = BARE_DUNS.replace_all(&value, "");
    value.trim().trim_end_matches([',', ';']).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_same_line_value() {
        let text = "Contract No: 4500012345\nPayment Terms: Net 60 days";
        assert_eq!(
            find_line_value(text, &["Payment Terms"]),
            Some("Net 60 days".to_string())
        );
    }

    #[test]
    fn test_keyword_order_wins() {
        let text = "Total: 900.00\nUnit Price: 12.50";
        assert_eq!(
            find_line_value(text, &["Unit Price", "Total"]),
            Some("12.50".to_string())
        );
    }

    #[test]
    fn test_lookahead_below_bare_label() {
        let text = "Part Number\n\nA2C-99812-01\nQuantity: 10";
        assert_eq!(
            find_line_value(text, &["Part Number"]),
            Some("A2C-99812-01".to_string())
        );
    }

    #[test]
    fn test_lookahead_skips_labels() {
        let text = "Payment Terms\nCurrency: EUR\nNet 30";
        assert_eq!(
            find_line_value(text, &["Payment Terms"]),
            Some("Net 30".to_string())
        );
    }

    #[test]
    fn test_accept_predicate() {
        let text = "Price: on request\nBase Price: 12.50 EUR";
        let found = find_line_value_where(text, &["Price"], PRICE_LOOKAHEAD_SLACK, |v| {
            v.chars().any(|c| c.is_ascii_digit())
        });
        assert_eq!(found, Some("12.50 EUR".to_string()));
    }

    #[test]
    fn test_keyword_patterns_are_cached() {
        let first = same_line_pattern("Payment Terms").unwrap();
        let second = same_line_pattern("Payment Terms").unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(block_label_pattern("Sold To").unwrap().is_match("SOLD TO:"));

        let text = "Payment Terms: Net 30";
        assert_eq!(find_line_value(text, &["Payment Terms"]), find_line_value(text, &["Payment Terms"]));
    }

    #[test]
    fn test_missing_keyword() {
        assert_eq!(find_line_value("nothing here", &["Part No"]), None);
    }

    #[test]
    fn test_column_of() {
        let layout = ColumnLayout::default();
        let line = "BUYER NAME AND ADDRESS          SELLER NAME AND ADDRESS";
        assert_eq!(layout.column_of(line, 0), Column::Left);
        let seller = line.find("SELLER").unwrap();
        assert_eq!(layout.column_of(line, seller), Column::Right);
    }

    const TWO_COLUMNS: &str = "\
BUYER NAME AND ADDRESS                  SELLER NAME AND ADDRESS
ACME Automotive GmbH                    Precision Parts Inc
Leopoldstrasse 1                        100 Main Street
80802 Munich                            Detroit, MI 48226
Germany                                 USA
Phone: +49 89 1234                      Phone: 313-555-0100
";

    #[test]
    fn test_two_column_blocks_stay_separate() {
        let buyer = find_block_value(TWO_COLUMNS, &["BUYER NAME AND ADDRESS"], 12).unwrap();
        let seller = find_block_value(TWO_COLUMNS, &["SELLER NAME AND ADDRESS"], 12).unwrap();

        assert_eq!(
            buyer,
            "ACME Automotive GmbH\nLeopoldstrasse 1\n80802 Munich\nGermany"
        );
        assert_eq!(
            seller,
            "Precision Parts Inc\n100 Main Street\nDetroit, MI 48226\nUSA"
        );
    }

    #[test]
    fn test_block_strips_duns() {
        let text = "Seller:\nPrecision Parts Inc\nDUNS: 123456789\n100 Main Street\nPhone: 555";
        let seller = find_block_value(text, &["Seller"], 6).unwrap();
        assert_eq!(seller, "Precision Parts Inc\n100 Main Street");
    }

    #[test]
    fn test_block_stops_at_legal_text() {
        let text = "Buyer\nACME Corp\nThis agreement is governed by the law of Ohio\nSecret Line";
        assert_eq!(
            find_block_value(text, &["Buyer"], 6),
            Some("ACME Corp".to_string())
        );
    }

    #[test]
    fn test_block_stop_on_same_line_tries_next_keyword() {
        let text = "Purchaser: Payment terms apply\nSold To\nACME Corp";
        assert_eq!(
            find_block_value(text, &["Purchaser", "Sold To"], 6),
            Some("ACME Corp".to_string())
        );
    }
}
