pub mod astar;
pub mod astar_enhanced;
pub mod astar_heuristic;
pub mod dijkstra;
pub mod exploration;
pub(crate) mod label_search;
pub mod routing_path;
pub mod routing_path_builder;
pub mod routing_request;
pub mod search_observer;
pub mod search_state;
pub mod search_strategy;
pub mod shortest_path_algorithm;
