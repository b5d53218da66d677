//! Centralized limits and thresholds.

/// Maximum nesting depth the parser accepts before failing with a parse
/// error instead of overflowing the stack.
///
/// ```typescript
/// const x = ((((((((((((((((((((1))))))))))))))))))));   // fine
/// // ... thousands of nested parentheses or arrays: rejected
/// ```
pub const MAX_PARSE_DEPTH: u32 = 500;

/// Maximum pre-allocation for the node arena, to avoid capacity overflow in
/// huge files. Nodes beyond this are still allocated on demand.
pub const MAX_NODE_PREALLOC: usize = 5_000_000;

/// Heuristic ratio of tree nodes to source bytes used to pre-size the arena.
pub const NODES_PER_SOURCE_BYTE_DIVISOR: usize = 3;
