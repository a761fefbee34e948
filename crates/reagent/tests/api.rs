use indoc::indoc;
use reagent::{
    AtomCounts, Reaction, count_atoms_in_molecule, count_atoms_in_reaction, errors::ReagentError,
    parse_chemical_reaction, parsers::split_before_uppercases,
};

const REACTIONS: &str = indoc! {"
    H2 + O2 -> H2O
    CH4 + O2 -> CO2 + H2O
    NaOH + HCl -> NaCl + H2O
    C6H12O6 + O2 -> CO2 + H2O
"};

#[test]
fn formula_tokens_reconstruct_the_formula() {
    for formula in ["H2O", "MgCl2", "C11H12N2O2", "xYz", "123", "", "Fe2(SO4)3"] {
        let tokens: String = split_before_uppercases(formula).collect();
        assert_eq!(tokens, formula);
    }
}

#[test]
fn counting_molecules() {
    let water = count_atoms_in_molecule("H2O").unwrap();
    assert_eq!(water, AtomCounts::from_iter([("H", 2), ("O", 1)]));

    let magnesium_chloride = count_atoms_in_molecule("MgCl2").unwrap();
    assert_eq!(magnesium_chloride, AtomCounts::from_iter([("Mg", 1), ("Cl", 2)]));

    let sodium = count_atoms_in_molecule("NaNa").unwrap();
    assert_eq!(sodium, AtomCounts::from_iter([("Na", 2)]));
}

#[test]
fn parsing_reactions() {
    let (reactants, products) = parse_chemical_reaction("H2 + O2 -> H2O").unwrap();
    assert_eq!(reactants, ["H2", "O2"]);
    assert_eq!(products, ["H2O"]);

    let counts = count_atoms_in_reaction(&reactants).unwrap();
    assert_eq!(
        counts,
        [AtomCounts::from_iter([("H", 2)]), AtomCounts::from_iter([("O", 2)])]
    );
}

#[test]
fn malformed_reactions() {
    let error = parse_chemical_reaction("H2 + O2 = H2O").unwrap_err();
    assert!(matches!(*error, ReagentError::MissingArrow { .. }));

    let error = parse_chemical_reaction("H2 -> O2 -> H2O").unwrap_err();
    assert!(matches!(*error, ReagentError::ExtraArrows { .. }));
}

#[test]
fn counting_a_list_of_reactions() {
    let summary: Vec<_> = REACTIONS
        .lines()
        .map(|line| {
            let reaction: Reaction = line.parse().unwrap();
            let reactant_atoms: u64 = reaction.reactant_counts().unwrap().iter().map(AtomCounts::total).sum();
            let product_atoms: u64 = reaction.product_counts().unwrap().iter().map(AtomCounts::total).sum();
            (reaction.to_string(), reactant_atoms, product_atoms)
        })
        .collect();

    assert_eq!(
        summary,
        [
            ("H2 + O2 -> H2O".to_owned(), 4, 3),
            ("CH4 + O2 -> CO2 + H2O".to_owned(), 7, 6),
            ("NaOH + HCl -> NaCl + H2O".to_owned(), 5, 5),
            ("C6H12O6 + O2 -> CO2 + H2O".to_owned(), 26, 6),
        ]
    );
}
