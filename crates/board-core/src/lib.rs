//! Chessboard model, render model and two-click piece mover.
//!
//! There is no rules engine here: any piece can be picked up and dropped on
//! any square.

pub mod board;
pub mod color;
pub mod controller;
pub mod piece;
pub mod square;
pub mod view;
