//! Plain-text rendering of cards and details.

use std::fmt::Write;

use rcat_core::{Card, Detail};

/// Group digits in threes: `83240525` -> `83,240,525`.
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One line per card.
pub fn card_line(card: &Card) -> String {
    format!(
        "{:<32} {:<10} {:>15}  {}",
        card.name,
        card.region,
        format_population(card.population),
        card.capital
    )
}

/// Multi-line detail block.
pub fn detail_block(detail: &Detail) -> String {
    let borders = if detail.borders.is_empty() {
        "None".to_string()
    } else {
        detail.borders.join(", ")
    };
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", detail.name);
    let rows = [
        ("Native Name", detail.native_name.clone()),
        ("Population", format_population(detail.population)),
        ("Region", detail.region.clone()),
        ("Sub Region", detail.subregion.clone()),
        ("Capital", detail.capital.clone()),
        ("Top Level Domain", detail.top_level_domain.clone()),
        ("Currencies", detail.currencies.clone()),
        ("Languages", detail.languages.clone()),
        ("Border Countries", borders),
        ("Flag", detail.flag_url.clone()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<17} {value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_grouping() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(83_240_525), "83,240,525");
    }

    #[test]
    fn card_line_contains_fields() {
        let card = Card {
            name: "Germany".into(),
            capital: "Berlin".into(),
            population: 83_240_525,
            region: "Europe".into(),
            ..Card::default()
        };
        let line = card_line(&card);
        assert!(line.starts_with("Germany"));
        assert!(line.contains("83,240,525"));
        assert!(line.ends_with("Berlin"));
    }

    #[test]
    fn detail_block_lists_borders_or_none() {
        let mut detail = Detail::default();
        assert!(detail_block(&detail).contains("Border Countries  None"));
        detail.borders = vec!["France".into(), "XXX".into()];
        assert!(detail_block(&detail).contains("France, XXX"));
    }
}
