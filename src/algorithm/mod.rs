/// Precomputed tile borders per orientation
pub mod edges;
/// Search event hooks and counters
pub mod observer;
/// Set of tiles not yet placed
pub mod pool;
/// Backtracking placement search
pub mod solver;
