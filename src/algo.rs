pub mod all_pairs;
pub mod schedule;
pub mod shortest_paths;
pub mod toposort;
pub mod vertex_cover;

pub use all_pairs::AllPairs;
pub use schedule::Schedule;
pub use shortest_paths::ShortestPaths;
pub use toposort::TopoSort;
pub use vertex_cover::VertexCover;
