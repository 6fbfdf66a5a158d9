/// Terminal rendering of identifier descriptions
use crate::core::Description;
use crate::printer::LIMB_HEX_WIDTH;
use std::fmt::Write;

pub struct CliFormatter;

impl CliFormatter {
    /// Hex value with the most significant limb in bold, then an optional
    /// per-limb breakdown
    #[must_use]
    pub fn format_description(description: &Description, show_limbs: bool) -> String {
        let mut output = String::new();

        let (head, rest) = description.hex.split_at(LIMB_HEX_WIDTH);
        let _ = writeln!(output, "\x1b[1m{head}\x1b[22m{rest}");

        if show_limbs {
            let _ = writeln!(output, "{}", "─".repeat(40));
            for (i, limb) in description.limbs.iter().enumerate() {
                let hex = &description.hex[i * LIMB_HEX_WIDTH..(i + 1) * LIMB_HEX_WIDTH];
                let _ = writeln!(output, "  limb[{i}]  {hex}  {limb:>10}");
            }
            let _ = writeln!(output, "  bit length: {}", description.bit_length);
        }

        output
    }

    /// One line of a numbered listing, `index` counted from zero
    #[must_use]
    pub fn format_list_item(index: usize, value: &str) -> String {
        format!("{}. {value}\n", index + 1)
    }

    /// Numbered listing, one value per line
    #[must_use]
    pub fn format_list(values: &[String]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| Self::format_list_item(i, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> Description {
        Description {
            hex: "DEADBEEF123456780000000000000000FFFFFFFF".to_string(),
            limbs: [0xDEAD_BEEF, 0x1234_5678, 0, 0, 0xFFFF_FFFF],
            bit_length: 160,
        }
    }

    #[test]
    fn test_format_description_bolds_first_limb() {
        let output = CliFormatter::format_description(&description(), false);
        assert_eq!(
            output,
            "\x1b[1mDEADBEEF\x1b[22m123456780000000000000000FFFFFFFF\n"
        );
    }

    #[test]
    fn test_format_description_with_limbs() {
        let output = CliFormatter::format_description(&description(), true);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], "  limb[0]  DEADBEEF  3735928559");
        assert_eq!(lines[4], "  limb[2]  00000000           0");
        assert_eq!(lines[7], "  bit length: 160");
    }

    #[test]
    fn test_format_list() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(CliFormatter::format_list(&values), "1. a\n2. b\n");
    }

    #[test]
    fn test_format_list_item() {
        assert_eq!(CliFormatter::format_list_item(0, "a"), "1. a\n");
        assert_eq!(CliFormatter::format_list_item(9_999, "z"), "10000. z\n");
    }
}
