//! Boundary behaviors called out by spec §8 ("Testable properties").
