pub type NodeId = u32;
pub type Distance = i32;

/// marks a cell for which no path is known yet
pub const INFINITY: Distance = i32::MAX;

/// weight of a plain neighbor edge
pub const UNIT_WEIGHT: Distance = 1;

pub type NodeIds = Vec<NodeId>;
pub type Distances = Vec<Distance>;
pub type Arclist = Vec<(NodeId, Distance)>;

pub fn is_finite(distance: Distance) -> bool {
    distance < INFINITY
}

/// adds two distances, returns None if either operand is INFINITY or the finite sum would not fit
pub fn guarded_add(first: Distance, second: Distance) -> Option<Distance> {
    if !is_finite(first) || !is_finite(second) {
        return None;
    }

    first.checked_add(second).filter(|sum| is_finite(*sum))
}
