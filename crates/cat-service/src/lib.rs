//! # Cat Service
//!
//! A resource handler for cats: list, show, new, create, edit and update over HTTP, with
//! mass-assignment protection on every write.
//!
//! ## Core Components
//!
//! - **[model]**: the [`Cat`](model::Cat) record and its whitelisted create/update parameters.
//! - **[cat_actor]**: the persistence actor and the validation rules applied on save.
//! - **[clients]**: [`CatClient`](clients::CatClient), the typed handle the controller talks to.
//! - **[params]**: strong parameters (`require` + `permit`).
//! - **[controller]**: one action per route, returning a [`Reply`](controller::Reply).
//! - **[presenter]**: renders replies as HTML.
//! - **[routes]**: the route table and the axum router built from it.
//! - **[lifecycle]**: starts and stops the actor.
//! - **[config]**: command-line configuration.
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test the controller without spawning the actor.

pub mod cat_actor;
pub mod clients;
pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod model;
pub mod params;
pub mod presenter;
pub mod routes;
