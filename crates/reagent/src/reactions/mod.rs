use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

// External Crate Imports
use itertools::Itertools;
use log::debug;

// Local Crate Imports
use crate::{
    AtomCounts, Reaction, Result, count_atoms_in_reaction, errors::ReagentError,
    parsers::reaction_sides,
};

// Public API ==========================================================================================================

impl Reaction {
    /// Parses a reaction equation like `"H2 + O2 -> H2O"`, ignoring all whitespace
    ///
    /// # Errors
    ///
    /// Fails unless `equation` contains exactly one `->`
    pub fn new(equation: impl AsRef<str>) -> Result<Self> {
        let (reactants, products) = reaction_sides(equation.as_ref())?;
        let reaction = Self {
            reactants,
            products,
        };

        debug!("parsed the reaction {reaction}");
        Ok(reaction)
    }

    #[must_use]
    pub fn reactants(&self) -> &[String] {
        &self.reactants
    }

    #[must_use]
    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// Counts the atoms in each reactant, in order
    ///
    /// # Errors
    ///
    /// Fails if any reactant contains a count that doesn't fit in a `u32`
    pub fn reactant_counts(&self) -> Result<Vec<AtomCounts>> {
        count_atoms_in_reaction(&self.reactants)
    }

    /// Counts the atoms in each product, in order
    ///
    /// # Errors
    ///
    /// Fails if any product contains a count that doesn't fit in a `u32`
    pub fn product_counts(&self) -> Result<Vec<AtomCounts>> {
        count_atoms_in_reaction(&self.products)
    }

    #[must_use]
    pub fn into_sides(self) -> (Vec<String>, Vec<String>) {
        (self.reactants, self.products)
    }
}

impl FromStr for Reaction {
    type Err = Box<ReagentError>;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Reaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reactants = self.reactants.iter().format(" + ");
        let products = self.products.iter().format(" + ");
        write!(f, "{reactants} -> {products}")
    }
}
