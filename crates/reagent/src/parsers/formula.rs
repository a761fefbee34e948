use std::iter;

use crate::{Result, errors::ReagentError};

use super::primitives::{CharacterRun, character_run, element_token};

// Public API ==========================================================================================================

/// Splits a formula into element tokens, starting a new token before every uppercase letter
///
/// The tokens are slices of `formula` and, joined back together, always reproduce it exactly. Nothing is validated:
/// a formula that doesn't start with an uppercase letter just yields a first token that doesn't either.
///
/// ```
/// use reagent::parsers::split_before_uppercases;
///
/// let tokens: Vec<_> = split_before_uppercases("MgCl2").collect();
/// assert_eq!(tokens, ["Mg", "Cl2"]);
/// ```
pub fn split_before_uppercases(formula: &str) -> impl Iterator<Item = &str> {
    let mut rest = formula;
    iter::from_fn(move || {
        // NOTE: `element_token` only fails once there is no input left
        let (remaining, token) = element_token(rest).ok()?;
        rest = remaining;
        Some(token)
    })
}

/// Splits an element token into its symbol and the number of atoms it contributes
///
/// Digits are collected separately from everything else, so `"H2e"` is read as `("He", 2)`. A token without any
/// digits counts once, and a token without any letters gives an empty symbol.
///
/// # Errors
///
/// Fails if the token's digits don't fit in a `u32`
pub fn split_at_digit(token: &str) -> Result<(String, u32)> {
    let mut letters = String::new();
    let mut digits = String::new();

    let mut rest = token;
    while let Ok((remaining, run)) = character_run(rest) {
        match run {
            CharacterRun::Digits(run) => digits.push_str(run),
            CharacterRun::Letters(run) => letters.push_str(run),
        }
        rest = remaining;
    }

    let multiplicity: u32 = if digits.is_empty() {
        1
    } else {
        digits
            .parse()
            .map_err(|e| ReagentError::multiplicity(token, &digits, e))?
    };

    Ok((letters, multiplicity))
}

// Module Tests ========================================================================================================
