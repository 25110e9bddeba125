use crate::error::Error;
use alloy_primitives::U256;
use leptos::prelude::window;

pub fn alert(msg: impl AsRef<str>) {
    let _ = window().alert_with_message(msg.as_ref());
}

pub fn shorten_address(address: impl ToString) -> String {
    let address = address.to_string();
    if address.len() > 10 {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address // Return the address as is if it's too short to shorten
    }
}

fn ten_pow(decimals: u8) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

/// Formats a raw integer amount as a decimal string, keeping at least one fractional digit.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let factor = ten_pow(decimals);

    let integer_part = amount / factor;
    let fractional_part = amount % factor;

    if decimals == 0 {
        return format!("{integer_part}.0");
    }

    let fractional_str = format!(
        "{:0>width$}",
        fractional_part.to_string(),
        width = decimals as usize
    );
    let trimmed = fractional_str.trim_end_matches('0');

    if trimmed.is_empty() {
        format!("{integer_part}.0")
    } else {
        format!("{integer_part}.{trimmed}")
    }
}

pub fn format_ether(amount: U256) -> String {
    format_units(amount, 18)
}

/// Parses a decimal string into a raw integer amount. Rejects anything with more fractional
/// digits than `decimals`.
pub fn parse_units(amount: impl AsRef<str>, decimals: u8) -> Result<U256, Error> {
    let amount = amount.as_ref().trim();
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));

    let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

    if whole.is_empty() && fraction.is_empty() {
        return Err(Error::invalid_amount(amount));
    }
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(Error::invalid_amount(amount));
    }
    if fraction.len() > decimals as usize {
        return Err(Error::InvalidAmount(format!("{amount} has too many decimals")));
    }

    let digits = format!("{whole}{fraction:0<width$}", width = decimals as usize);

    U256::from_str_radix(&digits, 10).map_err(|_| Error::invalid_amount(amount))
}

/// Rounds a decimal string for display. Unparseable input displays as zero.
pub fn format_fixed(amount: impl AsRef<str>, places: usize) -> String {
    let value = amount.as_ref().trim().parse::<f64>().unwrap_or(0.0);
    format!("{value:.places$}")
}

pub fn format_usd(value: f64) -> String {
    format!("${value:.2}")
}

/// Parses a JSON-RPC hex quantity like `0x1bc16d674ec80000`.
pub fn parse_quantity(quantity: &str) -> Result<U256, Error> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .unwrap_or(quantity);

    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 16)
        .map_err(|error| Error::generic(format!("bad quantity {quantity}: {error}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses() {
        assert_eq!(
            shorten_address("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14"),
            "0xfFf9...6B14"
        );
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }

    #[test]
    fn format_units_trims_trailing_zeros() {
        let one_and_a_half_eth = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_ether(one_and_a_half_eth), "1.5");
        assert_eq!(format_ether(U256::ZERO), "0.0");
        assert_eq!(format_units(U256::from(1_000_000u64), 6), "1.0");
        assert_eq!(format_units(U256::from(1u64), 6), "0.000001");
        assert_eq!(format_units(U256::from(42u64), 0), "42.0");
    }

    #[test]
    fn format_units_gwei() {
        assert_eq!(format_units(U256::from(1_500_000_000u64), 9), "1.5");
        assert_eq!(format_units(U256::from(25_000_000_000u64), 9), "25.0");
    }

    #[test]
    fn parse_units_scales_by_decimals() {
        assert_eq!(parse_units("1.5", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(parse_units("2", 6).unwrap(), U256::from(2_000_000u64));
        assert_eq!(parse_units(".25", 2).unwrap(), U256::from(25u64));
        assert_eq!(parse_units("1.", 2).unwrap(), U256::from(100u64));
        assert_eq!(
            parse_units("0.000000000000000001", 18).unwrap(),
            U256::from(1u64)
        );
    }

    #[test]
    fn parse_units_rejects_garbage() {
        assert!(parse_units("", 18).is_err());
        assert!(parse_units(".", 18).is_err());
        assert!(parse_units("abc", 18).is_err());
        assert!(parse_units("-1", 18).is_err());
        assert!(parse_units("1.2.3", 18).is_err());
        assert!(parse_units("1e5", 18).is_err());
    }

    #[test]
    fn parse_units_rejects_excess_precision() {
        assert_eq!(
            parse_units("0.0000001", 6),
            Err(Error::InvalidAmount("0.0000001 has too many decimals".to_string()))
        );
    }

    #[test]
    fn fixed_formatting() {
        assert_eq!(format_fixed("1.23456789", 4), "1.2346");
        assert_eq!(format_fixed("0", 6), "0.000000");
        assert_eq!(format_fixed("", 2), "0.00");
        assert_eq!(format_usd(3000.0), "$3000.00");
    }

    #[test]
    fn quantities() {
        assert_eq!(parse_quantity("0x0").unwrap(), U256::ZERO);
        assert_eq!(parse_quantity("0x").unwrap(), U256::ZERO);
        assert_eq!(parse_quantity("0x3b9aca00").unwrap(), U256::from(1_000_000_000u64));
        assert!(parse_quantity("0xzz").is_err());
    }
}
