mod atom_counts;
