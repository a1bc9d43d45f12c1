//! # BSP Tree
//!
//! Binary Space Partitioning tree for boolean mesh operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! Each node stores a splitting plane, the polygons coplanar with it, and
//! front/back subtrees. The plane is kept separately from the polygons:
//! clipping can empty a node's polygon list, and later clips against the
//! same tree still need the plane to route correctly (a cell cutter that
//! misses the geometry entirely must yield an empty intersection, not the
//! whole subject).
//!
//! Traversals (`invert`, `clip_to`, `clip_polygons`, `all_polygons`, drop)
//! are iterative with explicit stacks so deep trees from high-poly meshes
//! cannot overflow the call stack. Construction recurses on the spatial
//! split, whose depth is bounded by the tree depth.

use super::plane::{Classification, Plane};
use super::polygon::Polygon;

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Splitting plane; `None` only for an empty tree
    plane: Option<Plane>,
    /// Polygons coplanar with the splitting plane
    polygons: Vec<Polygon>,
    /// Subtree in front of the plane
    front: Option<Box<BspNode>>,
    /// Subtree behind the plane
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.insert(polygons);
        root
    }

    fn insert(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }

        let plane = *self.plane.get_or_insert(*polygons[0].plane());

        let mut front_polys = Vec::new();
        let mut back_polys = Vec::new();

        for poly in polygons {
            match poly.classify(&plane) {
                Classification::Coplanar => self.polygons.push(poly),
                Classification::Front => front_polys.push(poly),
                Classification::Back => back_polys.push(poly),
                Classification::Spanning => {
                    let (front, back) = poly.split(&plane);
                    front_polys.extend(front);
                    back_polys.extend(back);
                }
            }
        }

        if !front_polys.is_empty() {
            self.front
                .get_or_insert_with(Default::default)
                .insert(front_polys);
        }
        if !back_polys.is_empty() {
            self.back
                .get_or_insert_with(Default::default)
                .insert(back_polys);
        }
    }

    /// Inverts this tree: flips planes and polygons, swaps front/back.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            if let Some(plane) = node.plane.as_mut() {
                *plane = plane.flip();
            }
            for poly in &mut node.polygons {
                poly.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);

            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Clips polygons against this tree's solid.
    ///
    /// Returns the parts of `polygons` outside the solid; parts inside are
    /// discarded.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }
            let plane = match node.plane {
                Some(plane) => plane,
                // Empty tree: nothing to clip against
                None => {
                    result.extend(polys);
                    continue;
                }
            };

            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();
            for poly in polys {
                let (front, back) = poly.split(&plane);
                front_polys.extend(front);
                back_polys.extend(back);
            }

            match node.front.as_deref() {
                Some(front) => stack.push((front, front_polys)),
                None => result.extend(front_polys),
            }
            // No back subtree means the back half-space is inside the solid:
            // those parts are dropped
            if let Some(back) = node.back.as_deref() {
                stack.push((back, back_polys));
            }
        }

        result
    }

    /// Removes the parts of this tree's polygons inside `other`'s solid.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));

            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Collects all polygons from this tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());

            if let Some(front) = node.front.as_deref() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref() {
                stack.push(back);
            }
        }

        result
    }

    /// Total polygon count in this tree.
    #[cfg(test)]
    pub fn polygon_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            count += node.polygons.len();

            if let Some(front) = node.front.as_deref() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref() {
                stack.push(back);
            }
        }

        count
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Iterative drop so deep trees don't overflow the stack
        let mut stack = Vec::new();

        if let Some(front) = self.front.take() {
            stack.push(front);
        }
        if let Some(back) = self.back.take() {
            stack.push(back);
        }

        while let Some(mut node) = stack.pop() {
            if let Some(front) = node.front.take() {
                stack.push(front);
            }
            if let Some(back) = node.back.take() {
                stack.push(back);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn make_triangle(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspNode::new(vec![]);
        assert_eq!(tree.polygon_count(), 0);
        // Clipping against an empty tree keeps everything
        let kept = tree.clip_polygons(vec![make_triangle(0.0)]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_bsp_new_multiple() {
        let tree = BspNode::new(vec![
            make_triangle(0.0),
            make_triangle(1.0),
            make_triangle(-1.0),
        ]);
        assert_eq!(tree.polygon_count(), 3);
    }

    #[test]
    fn test_bsp_all_polygons() {
        let tree = BspNode::new(vec![make_triangle(0.0), make_triangle(1.0)]);
        assert_eq!(tree.all_polygons().len(), 2);
    }

    #[test]
    fn test_bsp_invert_flips_normals() {
        let poly = make_triangle(0.0);
        let original_normal = poly.plane().normal();

        let mut tree = BspNode::new(vec![poly]);
        tree.invert();

        let inverted_normal = tree.all_polygons()[0].plane().normal();
        assert!((original_normal + inverted_normal).length() < 1e-9);
    }

    #[test]
    fn test_bsp_clip_keeps_front() {
        let tree = BspNode::new(vec![make_triangle(0.0)]);
        let result = tree.clip_polygons(vec![make_triangle(1.0)]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_bsp_clip_drops_back() {
        let tree = BspNode::new(vec![make_triangle(0.0)]);
        let result = tree.clip_polygons(vec![make_triangle(-1.0)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_bsp_plane_survives_clipping() {
        // Clip away every polygon of the tree, then make sure the tree
        // still routes clips through its stored planes
        let mut tree = BspNode::new(vec![make_triangle(0.0)]);
        let far_tree = BspNode::new(vec![make_triangle(10.0)]);
        tree.clip_to(&far_tree);

        // Structure kept its plane even if polygons were dropped
        let result = tree.clip_polygons(vec![make_triangle(-1.0)]);
        assert!(result.is_empty());
    }
}
