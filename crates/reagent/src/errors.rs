use std::num::ParseIntError;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub type Result<T, E = Box<ReagentError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum ReagentError {
    #[diagnostic(help("element counts must fit in a 32-bit unsigned integer (at most 4294967295)"))]
    #[error("the digits {digits:?} in the element {token:?} could not be read as a count")]
    Multiplicity {
        token: String,
        digits: String,
        #[source]
        source: ParseIntError,
    },

    #[diagnostic(help(
        "the total count for an element must fit in a 32-bit unsigned integer (at most 4294967295)"
    ))]
    #[error("the total number of {symbol:?} atoms overflowed")]
    AtomCountOverflow { symbol: String },

    #[diagnostic(help("separate reactants from products with an arrow, like H2 + O2 -> H2O"))]
    #[error("expected exactly one '->' in the reaction equation, but found none")]
    MissingArrow {
        #[source_code]
        equation: String,
        #[label("no '->' found here")]
        span: SourceSpan,
    },

    #[diagnostic(help(
        "a reaction equation has exactly one reactant side and one product side, so remove all but one '->'"
    ))]
    #[error("expected exactly one '->' in the reaction equation, but found {}", .arrows.len())]
    ExtraArrows {
        #[source_code]
        equation: String,
        #[label(collection, "arrow")]
        arrows: Vec<SourceSpan>,
    },
}

impl ReagentError {
    pub(crate) fn multiplicity(token: &str, digits: &str, source: ParseIntError) -> Self {
        let token = token.to_owned();
        let digits = digits.to_owned();

        Self::Multiplicity {
            token,
            digits,
            source,
        }
    }

    pub(crate) fn atom_count_overflow(symbol: &str) -> Self {
        let symbol = symbol.to_owned();

        Self::AtomCountOverflow { symbol }
    }

    pub(crate) fn missing_arrow(equation: &str) -> Self {
        let span = SourceSpan::from(0..equation.len());
        let equation = equation.to_owned();

        Self::MissingArrow { equation, span }
    }

    pub(crate) fn extra_arrows(equation: &str, arrows: Vec<SourceSpan>) -> Self {
        let equation = equation.to_owned();

        Self::ExtraArrows { equation, arrows }
    }
}
