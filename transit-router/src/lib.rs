//! Transit route planner.
//!
//! Loads a bus network (stops, road distances, bus lines), answers
//! statistics queries about it and finds the fastest itinerary between two
//! stops given a fixed wait time at every boarding and a constant bus speed.

pub mod catalogue;
pub mod config;
pub mod domain;
pub mod network;
pub mod requests;
pub mod router;
pub mod web;
