//! Subway route and fare planner.
//!
//! Models a network of lines, each a single unbranched chain of track
//! sections, and answers: "what is the shortest way from this station to
//! that one, and what does it cost?"

pub mod domain;
pub mod fare;
pub mod network;
pub mod planner;
