//! JSON Exporter - When you need to see what the pass really produced
//!
//! Pixels hide mistakes. A reversed word, a space on the wrong side, a quad
//! half a pixel off: all of it is obvious once the mesh is written out as
//! plain numbers. This exporter does exactly that.

use serde::{Deserialize, Serialize};
use univ_core::{
    error::{ExportError, Result},
    mesh::MeshBuffer,
    traits::Exporter,
    types::Vertex,
};

/// Schema version for JSON output format
pub const JSON_SCHEMA_VERSION: &str = "1.0";

/// One vertex, flattened
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonVertex {
    pub x: f32,
    pub y: f32,
    pub u: f32,
    pub v: f32,
    pub rgba: [u8; 4],
}

impl From<&Vertex> for JsonVertex {
    fn from(vertex: &Vertex) -> Self {
        Self {
            x: vertex.position.x,
            y: vertex.position.y,
            u: vertex.uv.x,
            v: vertex.uv.y,
            rgba: [vertex.color.r, vertex.color.g, vertex.color.b, vertex.color.a],
        }
    }
}

/// A whole mesh in a debug-friendly format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonMesh {
    /// Schema version for forward compatibility
    pub schema_version: String,
    pub quad_count: usize,
    pub quads: Vec<[JsonVertex; 4]>,
}

impl JsonMesh {
    pub fn from_mesh(mesh: &MeshBuffer) -> Self {
        let quads = mesh
            .quads()
            .iter()
            .map(|quad| std::array::from_fn(|i| JsonVertex::from(&quad[i])))
            .collect();
        Self {
            schema_version: JSON_SCHEMA_VERSION.to_string(),
            quad_count: mesh.len(),
            quads,
        }
    }
}

/// The exporter that turns meshes into structured data
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, one mesh per line
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn export(&self, mesh: &MeshBuffer) -> Result<Vec<u8>> {
        let output = JsonMesh::from_mesh(mesh);
        log::debug!("JsonExporter: {} quads", output.quad_count);

        let encoded = if self.pretty {
            serde_json::to_vec_pretty(&output)
        } else {
            serde_json::to_vec(&output)
        };
        encoded.map_err(|e| ExportError::EncodingFailed(e.to_string()).into())
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use univ_core::{Color, MeshSink, Vec2};

    fn quad(x: f32) -> [Vertex; 4] {
        let corner = |dx: f32, dy: f32| Vertex {
            position: Vec2::new(x + dx, dy),
            uv: Vec2::new(dx, dy),
            color: Color::white(),
        };
        [
            corner(0.0, 1.0),
            corner(1.0, 1.0),
            corner(1.0, 0.0),
            corner(0.0, 0.0),
        ]
    }

    #[test]
    fn test_json_exporter() {
        let exporter = JsonExporter::new();
        assert_eq!(exporter.name(), "JSON");
        assert_eq!(exporter.extension(), "json");
        assert_eq!(exporter.mime_type(), "application/json");

        let mut mesh = MeshBuffer::new();
        mesh.add_quad(&quad(0.0));
        mesh.add_quad(&quad(1.0));

        let bytes = exporter.export(&mesh).unwrap();
        let parsed: JsonMesh = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed.schema_version, JSON_SCHEMA_VERSION);
        assert_eq!(parsed.quad_count, 2);
        assert_eq!(parsed.quads[1][1].x, 2.0);
        assert_eq!(parsed.quads[0][0].rgba, [255, 255, 255, 255]);
    }

    #[test]
    fn test_json_exporter_empty() {
        let bytes = JsonExporter::compact().export(&MeshBuffer::new()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(!text.contains('\n'));
        assert!(text.contains("\"quad_count\":0"));
        assert!(text.contains("\"quads\":[]"));
    }
}
