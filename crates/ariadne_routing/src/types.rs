/// Dense node index inside a graph. Ascending order follows the external ids.
pub type NodeId = usize;

pub type EdgeId = usize;

/// Node identifier as found in the source data (OSM node id).
pub type ExternalNodeId = i64;
