use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

// External Crate Imports
use log::trace;

// Local Crate Imports
use crate::{
    AtomCounts, Result,
    errors::ReagentError,
    parsers::{split_at_digit, split_before_uppercases},
};

// Public API ==========================================================================================================

impl AtomCounts {
    /// Counts the atoms of every element in `formula`
    ///
    /// ```
    /// use reagent::AtomCounts;
    ///
    /// let magnesium_chloride = AtomCounts::new("MgCl2")?;
    /// assert_eq!(magnesium_chloride.count("Mg"), 1);
    /// assert_eq!(magnesium_chloride.count("Cl"), 2);
    /// # Ok::<(), Box<reagent::errors::ReagentError>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if a count (or the sum of counts) for an element doesn't fit in a `u32`
    pub fn new(formula: impl AsRef<str>) -> Result<Self> {
        let formula = formula.as_ref();
        let mut atom_counts = Self::default();
        for token in split_before_uppercases(formula) {
            let (symbol, multiplicity) = split_at_digit(token)?;
            atom_counts.add(symbol, multiplicity)?;
        }

        trace!("counted {atom_counts} in the formula {formula:?}");
        Ok(atom_counts)
    }

    /// Adds `multiplicity` atoms of `symbol`, starting from zero if the element hasn't been seen yet
    ///
    /// # Errors
    ///
    /// Fails if the new total doesn't fit in a `u32`
    pub fn add(&mut self, symbol: impl Into<String>, multiplicity: u32) -> Result<()> {
        let symbol = symbol.into();
        let total = self
            .count(&symbol)
            .checked_add(multiplicity)
            .ok_or_else(|| ReagentError::atom_count_overflow(&symbol))?;
        self.0.insert(symbol, total);

        Ok(())
    }

    /// The number of `symbol` atoms counted, or zero if the element never appeared
    #[must_use]
    pub fn count(&self, symbol: &str) -> u32 {
        self.0.get(symbol).copied().unwrap_or_default()
    }

    /// The total number of atoms counted, across all elements
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().copied().map(u64::from).sum()
    }
}

impl FromStr for AtomCounts {
    type Err = Box<ReagentError>;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

// NOTE: Duplicate symbols are summed, saturating at `u32::MAX` since `FromIterator` can't fail
impl<S: Into<String>> FromIterator<(S, u32)> for AtomCounts {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut atom_counts = Self::default();
        for (symbol, multiplicity) in iter {
            let count = atom_counts.0.entry(symbol.into()).or_default();
            *count = count.saturating_add(multiplicity);
        }
        atom_counts
    }
}

// Display Trait Implementation ========================================================================================

// NOTE: Elements are written in Hill order: carbon first, then hydrogen, then everything else alphabetically. Without
// any carbon, everything (hydrogen included) is just alphabetical
impl Display for AtomCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let has_carbon = self.0.contains_key("C");
        let hill_rank = |symbol: &str| match symbol {
            "C" if has_carbon => 0,
            "H" if has_carbon => 1,
            _ => 2,
        };
        let mut elements: Vec<_> = self.0.iter().collect();
        elements.sort_unstable_by(|(a, _), (b, _)| {
            hill_rank(a.as_str())
                .cmp(&hill_rank(b.as_str()))
                .then_with(|| a.cmp(b))
        });

        for (symbol, &count) in elements {
            write!(f, "{symbol}")?;
            if count != 1 {
                write!(f, "{count}")?;
            }
        }

        Ok(())
    }
}

// Module Tests ========================================================================================================
