pub mod motif;
