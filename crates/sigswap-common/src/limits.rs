//! Recursion and growth ceilings.
//!
//! Reference expansion follows alias chains through arbitrary user code, so
//! every recursive walk is bounded. Hitting a ceiling is not an error: the
//! walk stops expanding that branch and the request returns whatever was
//! resolved up to that point.

/// Maximum depth when chasing an alias chain from a declaration name.
///
/// Each rebinding adds one level:
///
/// ```typescript
/// function swap(a, b) {}
/// const one = swap;      // depth 1
/// const two = { one };   // depth 2
/// const three = two.one; // depth 3
/// ```
///
/// Real chains are short; the ceiling only exists so that pathological or
/// cyclic inputs cannot stack-overflow the resolver.
pub const MAX_ALIAS_DEPTH: u32 = 32;

/// Maximum number of distinct references visited per reorder request.
///
/// A single hot name in a large project can fan out to thousands of
/// references before classification prunes them. Past this many visited
/// sites the resolver stops accepting new ones.
pub const MAX_REFERENCE_SITES: usize = 4096;
