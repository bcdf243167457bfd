//! Rail-to-bus transfer recommendation server.
//!
//! A web application that answers: "I'm waiting for the next inbound
//! train - where should I get off and which bus should I catch to
//! reach my destination fastest?"

pub mod cache;
pub mod domain;
pub mod feed;
pub mod planner;
pub mod web;
