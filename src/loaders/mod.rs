pub mod gltf;

pub use gltf::{load_model, Model, ModelVertex, Primitive, TextureData};
