use crate::RenderError;
use image::{DynamicImage, GenericImageView, ImageFormat};
use lopdf::{Object, Stream, dictionary};

/// One decoded card face, ready for PDF embedding.
///
/// JPEG sources keep their original bytes and go into the document behind
/// a `DCTDecode` filter; everything else is flattened to raw 8-bit RGB.
/// The placed size is always the scaled card box, so the source pixel
/// dimensions only matter for the XObject header.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    encoding: Encoding,
}

#[derive(Debug, Clone)]
enum Encoding {
    Jpeg { data: Vec<u8>, gray: bool },
    Rgb8(Vec<u8>),
}

impl CardImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, RenderError> {
        let format =
            image::guess_format(bytes).map_err(|e| RenderError::ImageDecode(e.to_string()))?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| RenderError::ImageDecode(e.to_string()))?;
        let (width, height) = decoded.dimensions();

        let encoding = match format {
            ImageFormat::Jpeg => Encoding::Jpeg {
                data: bytes.to_vec(),
                gray: matches!(
                    decoded,
                    DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_)
                ),
            },
            _ => Encoding::Rgb8(decoded.into_rgb8().into_raw()),
        };

        Ok(Self {
            width,
            height,
            encoding,
        })
    }

    /// Builds the image XObject stream for this face.
    pub(crate) fn xobject(&self) -> Stream {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "BitsPerComponent" => 8i64,
        };
        match &self.encoding {
            Encoding::Jpeg { data, gray } => {
                let color_space: &[u8] = if *gray { b"DeviceGray" } else { b"DeviceRGB" };
                dict.set("ColorSpace", Object::Name(color_space.to_vec()));
                dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
                Stream::new(dict, data.clone())
            }
            Encoding::Rgb8(data) => {
                dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
                Stream::new(dict, data.clone())
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn rgb_fixture(width: u32, height: u32) -> CardImage {
    CardImage {
        width,
        height,
        encoding: Encoding::Rgb8(vec![0x80; (width * height * 3) as usize]),
    }
}
