use crate::ForkName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A fork-specific field or cast was requested from a variant that does not have it.
    IncorrectVariant,
    /// Two parts of a record disagree about which fork they belong to.
    InconsistentFork {
        expected: ForkName,
        found: ForkName,
    },
}
