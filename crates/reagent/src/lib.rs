//! Parsing of flat chemical formulae (like `MgCl2`) and reaction equations (like `H2 + O2 -> H2O`) into atom counts
//!
//! Formulae are split into element tokens at every uppercase letter, and each token is then split into its letters
//! and its digits. No attempt is made to check that the resulting symbols are real elements, and bracketed groups or
//! hydrates (like `Ca(OH)2` or `CuSO4·5H2O`) are not understood.
//!
//! ```
//! use reagent::{count_atoms_in_molecule, parse_chemical_reaction};
//!
//! let (reactants, products) = parse_chemical_reaction("H2 + O2 -> H2O")?;
//! assert_eq!(reactants, ["H2", "O2"]);
//! assert_eq!(products, ["H2O"]);
//!
//! let water = count_atoms_in_molecule("H2O")?;
//! assert_eq!(water.count("H"), 2);
//! assert_eq!(water.count("O"), 1);
//! # Ok::<(), Box<reagent::errors::ReagentError>>(())
//! ```

mod atoms;
pub mod errors;
pub mod parsers;
mod reactions;
#[cfg(test)]
mod testing_tools;

// External Crate Imports
use ahash::HashMap;
use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use static_assertions::assert_impl_all;

// Local Crate Imports
pub use errors::Result;

// ---------------------------------------------------------------------------------------------------------------------

/// The total number of atoms of each element in a single formula
// NOTE: Derefs to the underlying map, so `.get()`, `.len()`, `.iter()`, and friends come for free
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deref, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct AtomCounts(HashMap<String, u32>);

/// A reaction equation, split into its reactant and product formulae
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Reaction {
    reactants: Vec<String>,
    products: Vec<String>,
}

// NOTE: Everything here is built fresh from an input string, so it should always be safe to share between threads
assert_impl_all!(AtomCounts: Send, Sync);
assert_impl_all!(Reaction: Send, Sync);

// Convenience API =====================================================================================================

/// Counts the atoms of every element in `formula`, summing any elements that appear more than once
///
/// # Errors
///
/// Fails if a count (or the sum of counts) for an element doesn't fit in a `u32`
pub fn count_atoms_in_molecule(formula: &str) -> Result<AtomCounts> {
    AtomCounts::new(formula)
}

/// Splits a reaction equation into its reactant and product formulae
///
/// # Errors
///
/// Fails unless `equation` contains exactly one `->`
pub fn parse_chemical_reaction(equation: &str) -> Result<(Vec<String>, Vec<String>)> {
    Reaction::new(equation).map(Reaction::into_sides)
}

/// Counts the atoms in each of the `molecules`, returning one [`AtomCounts`] per formula, in the same order
///
/// # Errors
///
/// Returns the error of the first formula that couldn't be counted
pub fn count_atoms_in_reaction<S: AsRef<str>>(
    molecules: impl IntoIterator<Item = S>,
) -> Result<Vec<AtomCounts>> {
    molecules
        .into_iter()
        .map(|molecule| AtomCounts::new(molecule.as_ref()))
        .collect()
}
