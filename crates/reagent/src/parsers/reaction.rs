use log::debug;
use miette::SourceSpan;

use crate::{Result, errors::ReagentError};

const ARROW: &str = "->";
const PLUS: char = '+';

/// Splits a reaction equation into its reactant and product formulae
///
/// All whitespace is stripped before splitting, so `"H2 + O2 -> H2O"` and `"H2+O2->H2O"` are read identically.
/// Empty formulae are kept, so a dangling `+` yields an empty string.
///
/// # Errors
///
/// Fails unless the equation contains exactly one `->`
pub fn reaction_sides(equation: &str) -> Result<(Vec<String>, Vec<String>)> {
    let equation: String = equation.chars().filter(|c| !c.is_whitespace()).collect();

    let arrows: Vec<_> = equation
        .match_indices(ARROW)
        .map(|(offset, arrow)| SourceSpan::from(offset..offset + arrow.len()))
        .collect();

    let Some((reactants, products)) = equation.split_once(ARROW) else {
        debug!("rejected the reaction {equation:?}, which has no '{ARROW}'");
        return Err(ReagentError::missing_arrow(&equation).into());
    };

    if arrows.len() > 1 {
        debug!("rejected the reaction {equation:?}, which has {} '{ARROW}'s", arrows.len());
        return Err(ReagentError::extra_arrows(&equation, arrows).into());
    }

    Ok((formulae(reactants), formulae(products)))
}

fn formulae(side: &str) -> Vec<String> {
    side.split(PLUS).map(str::to_owned).collect()
}
