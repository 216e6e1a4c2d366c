use anyhow::{Context, Result};
use glam::{Mat3, Mat4, Vec3};
use log::{info, warn};
use std::path::Path;

/// Vertex layout shared with the model pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Decoded RGBA8 texture ready for upload
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// One drawable chunk of the model: geometry plus its base-color material
pub struct Primitive {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
    pub base_color_factor: [f32; 4],
    pub base_color_texture: Option<TextureData>,
}

pub struct Model {
    pub primitives: Vec<Primitive>,
}

/// Loads a glTF file into mesh primitives with world-space vertices.
/// Node transforms are baked in during the walk, so the renderer only
/// deals with a flat primitive list.
pub fn load_model(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    info!("Loading glTF file: {:?}", path);

    let (gltf, buffers, images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    info!(
        "glTF loaded: {} scenes, {} nodes, {} meshes, {} images",
        gltf.scenes().count(),
        gltf.nodes().count(),
        gltf.meshes().count(),
        images.len()
    );

    let mut primitives = Vec::new();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &images, &Mat4::IDENTITY, &mut primitives)?;
        }
    }

    if primitives.is_empty() {
        anyhow::bail!("No geometry found in glTF file: {:?}", path);
    }

    info!("Extracted {} primitives", primitives.len());
    Ok(Model { primitives })
}

/// Recursively processes glTF nodes, accumulating transforms
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
    parent_transform: &Mat4,
    primitives: &mut Vec<Primitive>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, images, &global_transform, primitives)?;
    }

    for child in node.children() {
        process_node(&child, buffers, images, &global_transform, primitives)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
    transform: &Mat4,
    primitives: &mut Vec<Primitive>,
) -> Result<()> {
    let normal_matrix = Mat3::from_mat4(transform.inverse().transpose());

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|p| transform.transform_point3(Vec3::from_array(p)))
            .collect();

        if positions.is_empty() {
            continue;
        }

        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(iter) => iter
                .map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero())
                .collect(),
            None => vec![Vec3::Y; positions.len()],
        };

        let uvs: Vec<[f32; 2]> = match reader.read_tex_coords(0) {
            Some(iter) => iter.into_f32().collect(),
            None => vec![[0.0, 0.0]; positions.len()],
        };

        let vertices: Vec<ModelVertex> = positions
            .iter()
            .zip(normals.iter())
            .zip(uvs.iter())
            .map(|((p, n), uv)| ModelVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: *uv,
            })
            .collect();

        let indices: Vec<u32> = match reader.read_indices() {
            Some(iter) => iter.into_u32().collect(),
            None => (0..vertices.len() as u32).collect(),
        };

        let material = primitive.material().pbr_metallic_roughness();
        let base_color_factor = material.base_color_factor();
        let base_color_texture = material
            .base_color_texture()
            .and_then(|tex| decode_image(&images[tex.texture().source().index()]));

        primitives.push(Primitive {
            vertices,
            indices,
            base_color_factor,
            base_color_texture,
        });
    }

    Ok(())
}

fn decode_image(data: &gltf::image::Data) -> Option<TextureData> {
    to_rgba8(data.format, &data.pixels).map(|rgba| TextureData {
        width: data.width,
        height: data.height,
        rgba,
    })
}

/// Expand the common 8-bit pixel layouts to RGBA8. Deeper formats are
/// skipped; the renderer substitutes its white fallback texture.
fn to_rgba8(format: gltf::image::Format, pixels: &[u8]) -> Option<Vec<u8>> {
    use gltf::image::Format;

    match format {
        Format::R8G8B8A8 => Some(pixels.to_vec()),
        Format::R8G8B8 => Some(
            pixels
                .chunks_exact(3)
                .flat_map(|c| [c[0], c[1], c[2], 255])
                .collect(),
        ),
        Format::R8 => Some(pixels.iter().flat_map(|&g| [g, g, g, 255]).collect()),
        Format::R8G8 => Some(
            pixels
                .chunks_exact(2)
                .flat_map(|c| [c[0], c[0], c[0], c[1]])
                .collect(),
        ),
        other => {
            warn!("Unsupported texture format {:?}, using fallback", other);
            None
        }
    }
}
