//! **bcimaze-core**: shared types for the BCI maze game.
//!
//! This crate provides the vocabulary used by every other *bcimaze* crate:
//! grid coordinates ([`Point`], [`Range`]) and the movement decision a
//! controller hands to the driver each tick ([`Action`]).

pub mod action;
pub mod geom;

pub use action::Action;
pub use geom::{Point, Range, RangeIter};
