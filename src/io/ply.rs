// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! ASCII PLY reader and writer, limited to triangulated meshes.
//!
//! The reader takes the first three properties of each vertex row as the
//! position and ignores the rest, so files carrying normals or colors still
//! load. Faces must be triangles.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use glam::DVec3;
use log::{debug, info};

use crate::{
    error::{MeshError, Result},
    mesh::Polyhedron,
};

/// Loads a mesh from an ASCII PLY file and fully initializes it.
pub fn read_ply<P: AsRef<Path>>(path: P) -> Result<Polyhedron> {
    info!("reading {}", path.as_ref().display());
    let file = File::open(path)?;
    read_ply_from(BufReader::new(file))
}

/// Reads a mesh from any buffered reader holding ASCII PLY data.
pub fn read_ply_from<R: BufRead>(reader: R) -> Result<Polyhedron> {
    let mut lines = reader.lines().enumerate();

    let next_line = |lines: &mut dyn Iterator<Item = (usize, std::io::Result<String>)>|
     -> Result<Option<(usize, String)>> {
        for (i, line) in lines {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some((i + 1, trimmed.to_owned())));
            }
        }
        Ok(None)
    };

    let Some((_, magic)) = next_line(&mut lines)? else {
        return Err(MeshError::Truncated);
    };
    if magic != "ply" {
        return Err(MeshError::NotPly);
    }

    // Header: record the vertex and face counts, tolerate format, comment,
    // and property lines, reject elements we cannot represent.
    let mut vertex_count: Option<usize> = None;
    let mut face_count: Option<usize> = None;
    loop {
        let Some((_, line)) = next_line(&mut lines)? else {
            return Err(MeshError::Truncated);
        };
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            ["end_header"] => break,
            ["format", ..] | ["comment", ..] | ["property", ..] => {}
            ["element", "vertex", n] => {
                vertex_count = Some(n.parse().map_err(|_| MeshError::BadHeader(line.clone()))?);
            }
            ["element", "face", n] => {
                face_count = Some(n.parse().map_err(|_| MeshError::BadHeader(line.clone()))?);
            }
            _ => return Err(MeshError::BadHeader(line.clone())),
        }
    }
    let vertex_count = vertex_count.ok_or_else(|| MeshError::BadHeader("missing element vertex".into()))?;
    let face_count = face_count.ok_or_else(|| MeshError::BadHeader("missing element face".into()))?;
    debug!("header declares {vertex_count} vertices and {face_count} faces");

    let mut positions = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        let Some((line_no, line)) = next_line(&mut lines)? else {
            return Err(MeshError::Truncated);
        };
        let mut fields = line.split_whitespace();
        let mut coord = [0.0f64; 3];
        for c in &mut coord {
            *c = fields
                .next()
                .and_then(|f| f.parse().ok())
                .ok_or(MeshError::BadNumber { line: line_no })?;
        }
        positions.push(DVec3::from_array(coord));
    }

    let mut faces = Vec::with_capacity(face_count);
    for i in 0..face_count {
        let Some((line_no, line)) = next_line(&mut lines)? else {
            return Err(MeshError::Truncated);
        };
        let mut fields = line.split_whitespace();
        let count: usize = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or(MeshError::BadNumber { line: line_no })?;
        if count != 3 {
            return Err(MeshError::NonTriangularFace { face: i, count });
        }
        let mut face = [0usize; 3];
        for v in &mut face {
            *v = fields
                .next()
                .and_then(|f| f.parse().ok())
                .ok_or(MeshError::BadNumber { line: line_no })?;
        }
        faces.push(face);
    }

    Polyhedron::build(&positions, &faces)
}

/// Writes a mesh as ASCII PLY.
pub fn write_ply<P: AsRef<Path>>(mesh: &Polyhedron, path: P) -> Result<()> {
    info!("writing {}", path.as_ref().display());
    let file = File::create(path)?;
    write_ply_to(mesh, BufWriter::new(file))
}

/// Writes a mesh as ASCII PLY to any writer: positions only, one triangle
/// per face row.
pub fn write_ply_to<W: Write>(mesh: &Polyhedron, mut writer: W) -> Result<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", mesh.vertices.len())?;
    writeln!(writer, "property double x")?;
    writeln!(writer, "property double y")?;
    writeln!(writer, "property double z")?;
    writeln!(writer, "element face {}", mesh.triangles.len())?;
    writeln!(writer, "property list uchar uint vertex_indices")?;
    writeln!(writer, "end_header")?;

    for v in &mesh.vertices {
        writeln!(writer, "{} {} {}", v.position.x, v.position.y, v.position.z)?;
    }
    for t in &mesh.triangles {
        writeln!(
            writer,
            "3 {} {} {}",
            t.vertices[0], t.vertices[1], t.vertices[2]
        )?;
    }
    writer.flush()?;
    Ok(())
}
