//! Flight route planner.
//!
//! Given a fixed schedule of point-to-point flights, answers: "what is the
//! best way from this city to that one, leaving no earlier than `t1` and
//! arriving no later than `t2`?" Routes can minimize the number of flights,
//! the total fare, or both.

pub mod collections;
pub mod domain;
pub mod planner;
pub mod schedule;
pub mod web;
