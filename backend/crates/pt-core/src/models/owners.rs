/// Roster offered by the owner picker. Not enforced on stored records.
pub const OWNERS: [&str; 9] = [
    "L.Rossetti",
    "L.Frangella",
    "C.Tedesco",
    "F.Patacconi",
    "P.Epifania",
    "M.Massarotto",
    "C&L",
    "A.Rago",
    "All",
];
