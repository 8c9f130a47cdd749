//! CPU-side texture data and the keyed store that shares it.
//!
//! Sprites hold an `Arc<TextureData>`. Several sprites may point at the same
//! data loaded once into the [`TextureStore`]; a sprite that needs to edit its
//! pixels takes its own copy first (see
//! [`Sprite::take_ownership_of_texture`](crate::components::sprite::Sprite::take_ownership_of_texture)).

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::{Color, Image};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

/// Decoded RGBA pixels with their dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl TextureData {
    /// Build texture data from raw pixels. Missing pixels are padded with
    /// transparent black and extra ones dropped, so `pixels().len()` is always
    /// `width * height`.
    pub fn new(width: u32, height: u32, mut pixels: Vec<Color>) -> Self {
        pixels.resize(pixel_count(width, height), Color::new(0, 0, 0, 0));
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Texture filled with a single colour.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self::new(width, height, vec![color; pixel_count(width, height)])
    }

    /// Decode an image file through raylib's image loader.
    ///
    /// Does not need an open window.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Texture path is not valid UTF-8: {:?}", path))?;
        let image = Image::load_image(path_str)
            .map_err(|e| format!("Failed to load texture {}: {}", path_str, e))?;
        let width = image.width().max(0) as u32;
        let height = image.height().max(0) as u32;
        let pixels = image.get_image_data().to_vec();
        Ok(Self::new(width, height, pixels))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(pixel_index(self.width, x, y)).copied()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let idx = pixel_index(self.width, x, y);
            self.pixels[idx] = color;
        }
    }
}

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Loaded textures keyed by string IDs.
#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Arc<TextureData>>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) texture data and return the shared handle.
    pub fn insert(&mut self, key: impl Into<String>, data: TextureData) -> Arc<TextureData> {
        let data = Arc::new(data);
        self.map.insert(key.into(), Arc::clone(&data));
        data
    }

    /// Load a texture file under `key`.
    pub fn load(
        &mut self,
        key: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Arc<TextureData>, String> {
        let key = key.into();
        let data = TextureData::load_from_file(path.as_ref())?;
        info!(
            "Loaded texture '{}' ({}x{}) from {:?}",
            key,
            data.width(),
            data.height(),
            path.as_ref()
        );
        Ok(self.insert(key, data))
    }

    pub fn get(&self, key: &str) -> Option<Arc<TextureData>> {
        self.map.get(key).cloned()
    }

    pub fn remove(&mut self, key: &str) -> Option<Arc<TextureData>> {
        self.map.remove(key)
    }
}
