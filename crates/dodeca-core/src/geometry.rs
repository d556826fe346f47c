//! Static dodecahedron mesh.
//!
//! Vertices come from the closed-form golden-ratio coordinates: the eight
//! corners of the cube `(±1, ±1, ±1)` followed by the corners of three
//! orthogonal golden rectangles. That gives a regular dodecahedron with edge
//! length `2 / φ` centred on the origin.
//!
//! The face table is split into four triplets, each holding the three
//! pentagons around one vertex (5, 0, 6, 3). Every pentagon is a fan of three
//! triangles from that vertex, so the two fan diagonals are the only pairs that
//! appear in more than one of its triangles. The wireframe edge list is derived
//! from that property and never contains a diagonal.

pub const VERTEX_COUNT: usize = 20;
pub const TRIANGLE_COUNT: usize = 36;
pub const EDGE_COUNT: usize = 30;
pub const PENTAGON_COUNT: usize = 12;

const TRIANGLES_PER_PENTAGON: usize = 3;

#[rustfmt::skip]
const FACE_INDICES: [u32; TRIANGLE_COUNT * 3] = [
    // Triplet around vertex 5
    5, 9, 8,    5, 18, 4,   5, 8, 4,
    5, 15, 13,  5, 9, 1,    5, 1, 13,
    5, 18, 19,  5, 15, 7,   5, 19, 7,
    // Triplet around vertex 0
    0, 12, 14,  0, 8, 4,    0, 14, 4,
    0, 16, 17,  0, 12, 2,   0, 17, 2,
    0, 8, 9,    0, 16, 1,   0, 9, 1,
    // Triplet around vertex 6
    6, 19, 18,  6, 14, 4,   6, 18, 4,
    6, 14, 12,  6, 10, 2,   6, 12, 2,
    6, 10, 11,  6, 19, 7,   6, 11, 7,
    // Triplet around vertex 3
    3, 17, 16,  3, 13, 1,   3, 16, 1,
    3, 13, 15,  3, 11, 7,   3, 15, 7,
    3, 11, 10,  3, 17, 2,   3, 10, 2,
];

/// Immutable mesh data for the triangulated dodecahedron.
#[derive(Clone, Debug)]
pub struct Dodecahedron {
    vertices: [[f32; 3]; VERTEX_COUNT],
    face_indices: [u32; TRIANGLE_COUNT * 3],
    edge_indices: [u32; EDGE_COUNT * 2],
}

impl Default for Dodecahedron {
    fn default() -> Self {
        Self::new()
    }
}

impl Dodecahedron {
    pub fn new() -> Self {
        Self {
            vertices: golden_vertices(golden_ratio()),
            face_indices: FACE_INDICES,
            edge_indices: perimeter_edges(&FACE_INDICES),
        }
    }

    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Triangle-list indices, 36 triangles.
    pub fn face_indices(&self) -> &[u32] {
        &self.face_indices
    }

    /// Line-list indices over the 30 pentagon perimeter edges.
    pub fn edge_indices(&self) -> &[u32] {
        &self.edge_indices
    }

    /// Line-list indices outlining every triangle, fan diagonals included.
    pub fn triangle_wire_indices(&self) -> Vec<u32> {
        self.face_indices
            .chunks_exact(3)
            .flat_map(|t| [t[0], t[1], t[1], t[2], t[2], t[0]])
            .collect()
    }

    /// The three face triangles making up pentagon `index`, `None` past 11.
    pub fn pentagon_triangles(&self, index: usize) -> Option<&[u32]> {
        if index >= PENTAGON_COUNT {
            return None;
        }
        let stride = TRIANGLES_PER_PENTAGON * 3;
        self.face_indices.get(index * stride..(index + 1) * stride)
    }
}

/// φ = (1 + √5) / 2
#[inline]
pub fn golden_ratio() -> f32 {
    (1.0 + 5.0_f32.sqrt()) / 2.0
}

fn golden_vertices(phi: f32) -> [[f32; 3]; VERTEX_COUNT] {
    let inv = 1.0 / phi;
    [
        // cube
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        // yz-plane
        [0.0, -phi, -inv],
        [0.0, -phi, inv],
        [0.0, phi, -inv],
        [0.0, phi, inv],
        // xz-plane
        [-inv, 0.0, -phi],
        [-inv, 0.0, phi],
        [inv, 0.0, -phi],
        [inv, 0.0, phi],
        // xy-plane
        [-phi, -inv, 0.0],
        [-phi, inv, 0.0],
        [phi, -inv, 0.0],
        [phi, inv, 0.0],
    ]
}

#[inline]
fn same_edge(a: [u32; 2], b: [u32; 2]) -> bool {
    a == b || a == [b[1], b[0]]
}

fn perimeter_edges(faces: &[u32; TRIANGLE_COUNT * 3]) -> [u32; EDGE_COUNT * 2] {
    let mut edges: Vec<[u32; 2]> = Vec::with_capacity(EDGE_COUNT);
    for pentagon in faces.chunks_exact(TRIANGLES_PER_PENTAGON * 3) {
        let pairs: Vec<[u32; 2]> = pentagon
            .chunks_exact(3)
            .flat_map(|t| [[t[0], t[1]], [t[1], t[2]], [t[0], t[2]]])
            .collect();
        for &pair in &pairs {
            let shared = pairs.iter().filter(|p| same_edge(**p, pair)).count() > 1;
            if !shared && !edges.iter().any(|e| same_edge(*e, pair)) {
                edges.push(pair);
            }
        }
    }
    debug_assert_eq!(edges.len(), EDGE_COUNT);

    let mut out = [0u32; EDGE_COUNT * 2];
    for (slot, edge) in out.chunks_exact_mut(2).zip(&edges) {
        slot.copy_from_slice(edge);
    }
    out
}
