/// this module contains the data structures shared by the all pairs algorithms

use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use crate::error::{DistanceError, Result};
use crate::types::{Distance, Distances, NodeId, NodeIds, INFINITY};

/// stores a 2d distance matrix inside a single 1d array (row major)
///
/// cells are addressed by (x, y) = (column, row) = (destination index, source index).
/// the matrix exclusively owns its buffer: `clone` creates a deep copy and `take` moves
/// the buffer out and leaves an empty 0x0 matrix behind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Distances,
    width: usize,
    height: usize,
}

impl DistanceMatrix {

    pub fn new(width: usize, height: usize, initial_value: Distance) -> Result<Self> {
        let mut matrix = DistanceMatrix::empty();
        matrix.resize(width, height, initial_value)?;

        Ok(matrix)
    }

    /// creates a matrix where no cell has a known path yet
    pub fn with_infinity(width: usize, height: usize) -> Result<Self> {
        DistanceMatrix::new(width, height, INFINITY)
    }

    pub fn empty() -> Self {
        DistanceMatrix {
            data: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn data(&self) -> &[Distance] {
        &self.data
    }

    pub fn at(&mut self, x: usize, y: usize) -> Result<&mut Distance> {
        let index = self.cell_index(x, y)?;

        Ok(&mut self.data[index])
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Distance> {
        let index = self.cell_index(x, y)?;

        Ok(self.data[index])
    }

    pub fn set(&mut self, x: usize, y: usize, value: Distance) -> Result<()> {
        *self.at(x, y)? = value;

        Ok(())
    }

    /// returns true in case the value has been reduced, false otherwise
    pub fn reduce_value(&mut self, x: usize, y: usize, value: Distance) -> Result<bool> {
        let current_value = self.at(x, y)?;

        if value < *current_value {
            *current_value = value;
            return Ok(true);
        }

        Ok(false)
    }

    pub fn row(&self, y: usize) -> Result<&[Distance]> {
        let range = self.row_range(y)?;

        Ok(&self.data[range])
    }

    pub fn row_mut(&mut self, y: usize) -> Result<&mut [Distance]> {
        let range = self.row_range(y)?;

        Ok(&mut self.data[range])
    }

    /// resizes the matrix to the given dimension and sets all values to the given initial value.
    /// the matrix is left untouched if the new size can't be allocated
    pub fn resize(&mut self, width: usize, height: usize, initial_value: Distance) -> Result<()> {
        let size = width
            .checked_mul(height)
            .ok_or(DistanceError::Allocation { width, height })?;

        if size > self.data.capacity() {
            self.data
                .try_reserve_exact(size - self.data.len())
                .map_err(|_| DistanceError::Allocation { width, height })?;
        }

        self.data.truncate(size);
        self.data.iter_mut().for_each(|entry| *entry = initial_value);
        self.data.resize(size, initial_value);

        self.width = width;
        self.height = height;

        Ok(())
    }

    /// moves the buffer out of this matrix, which becomes an empty 0x0 matrix
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn cell_index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(DistanceError::Index {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y * self.width + x)
    }

    fn row_range(&self, y: usize) -> Result<std::ops::Range<usize>> {
        if y >= self.height {
            return Err(DistanceError::Index {
                x: 0,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width)..((y + 1) * self.width))
    }
}

impl Index<(usize, usize)> for DistanceMatrix {

    type Output = Distance;

    /// panics on out of bounds access, use `get` for a checked lookup
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        match self.cell_index(x, y) {
            Ok(index) => &self.data[index],
            Err(error) => panic!("{}", error),
        }
    }
}

impl IndexMut<(usize, usize)> for DistanceMatrix {

    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        match self.cell_index(x, y) {
            Ok(index) => &mut self.data[index],
            Err(error) => panic!("{}", error),
        }
    }
}

/// translation table between node ids and dense matrix indices.
/// the assignment follows the order in which the ids were handed in and stays fixed afterwards
#[derive(Clone, Debug, Default)]
pub struct NodeIndex {
    node_ids: NodeIds,
    indices: HashMap<NodeId, usize>,
}

impl NodeIndex {

    pub fn new<I: IntoIterator<Item = NodeId>>(node_ids: I) -> Result<Self> {
        let mut node_index = NodeIndex::default();

        for node_id in node_ids {
            if node_index.indices.insert(node_id, node_index.node_ids.len()).is_some() {
                return Err(DistanceError::DuplicateNode(node_id));
            }

            node_index.node_ids.push(node_id);
        }

        Ok(node_index)
    }

    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.indices.contains_key(&node_id)
    }

    pub fn index_of(&self, node_id: NodeId) -> Result<usize> {
        self.try_index_of(node_id).ok_or(DistanceError::InvalidNode(node_id))
    }

    pub fn try_index_of(&self, node_id: NodeId) -> Option<usize> {
        self.indices.get(&node_id).copied()
    }

    pub fn node_id(&self, index: usize) -> Option<NodeId> {
        self.node_ids.get(index).copied()
    }

    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }
}
