pub mod graphs;
pub mod loader;
pub mod search;
pub mod social_network;
pub mod utility;
