use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::rendering::{BlittableSurface, Rgba};

#[derive(Error, Debug)]
pub enum ImageLoadingError {
    #[error("failed to load image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError
    },
    #[error("image {} is {width}x{height} which exceeds the supported surface size", .path.display())]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32
    }
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<BlittableSurface, ImageLoadingError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| ImageLoadingError::Decode {
        path: path.to_path_buf(),
        source
    })?;
    into_surface(image.to_rgba8(), path)
}

pub fn load_from_memory(bytes: &[u8]) -> Result<BlittableSurface, ImageLoadingError> {
    let path = Path::new("<memory>");
    let image = image::load_from_memory(bytes).map_err(|source| ImageLoadingError::Decode {
        path: path.to_path_buf(),
        source
    })?;
    into_surface(image.to_rgba8(), path)
}

fn into_surface(image: image::RgbaImage, path: &Path) -> Result<BlittableSurface, ImageLoadingError> {
    let (width, height) = image.dimensions();
    let too_large = || ImageLoadingError::TooLarge {
        path: path.to_path_buf(),
        width,
        height
    };
    let surface_width = u16::try_from(width).map_err(|_| too_large())?;
    let surface_height = u16::try_from(height).map_err(|_| too_large())?;

    let pixels = image
        .pixels()
        .map(|&image::Rgba([r, g, b, a])| Rgba::new(r, g, b, a))
        .collect::<Vec<_>>();

    BlittableSurface::from_pixels(surface_width, surface_height, pixels).ok_or_else(too_large)
}
