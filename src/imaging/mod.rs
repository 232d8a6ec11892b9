mod texture;

pub use texture::{load_image_texture, placeholder_texture};
