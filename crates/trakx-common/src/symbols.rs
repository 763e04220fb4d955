//! Mapping between native token symbols and their wrapped ERC20 versions.

/// `(native, wrapped)` pairs.
const WRAPPED_SYMBOLS: &[(&str, &str)] = &[("btc", "wbtc"), ("eth", "weth")];

/// `wbtc` -> `btc`, `weth` -> `eth` (case-insensitive); anything else unchanged.
pub fn to_native_symbol(symbol: &str) -> &str {
    WRAPPED_SYMBOLS
        .iter()
        .find(|(_, wrapped)| wrapped.eq_ignore_ascii_case(symbol))
        .map_or(symbol, |(native, _)| *native)
}

/// `btc` -> `wbtc`, `eth` -> `weth` (case-insensitive); anything else unchanged.
pub fn to_wrapped_symbol(symbol: &str) -> &str {
    WRAPPED_SYMBOLS
        .iter()
        .find(|(native, _)| native.eq_ignore_ascii_case(symbol))
        .map_or(symbol, |(_, wrapped)| *wrapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_symbols_both_ways() {
        assert_eq!(to_native_symbol("WBTC"), "btc");
        assert_eq!(to_native_symbol("weth"), "eth");
        assert_eq!(to_wrapped_symbol("BTC"), "wbtc");
        assert_eq!(to_wrapped_symbol("Eth"), "weth");
    }

    #[test]
    fn unknown_symbols_pass_through() {
        assert_eq!(to_native_symbol("USDC"), "USDC");
        assert_eq!(to_wrapped_symbol("wbtc"), "wbtc");
        assert_eq!(to_native_symbol("btc"), "btc");
    }
}
