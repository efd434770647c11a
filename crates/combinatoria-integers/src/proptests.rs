//! Property-based tests for the arithmetic primitives.
