//! Single-page PDF composition for the QR code.
//!
//! Units are PDF points (1/72 in) with the origin in the bottom-left corner.

use image::GrayImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Share of the shorter page side taken by the image's longer side
pub const IMAGE_PAGE_FRACTION: f32 = 0.8;

const IMAGE_NAME: &str = "QrCode";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
}

/// Where and how large the image is drawn on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PageLayout {
    /// US letter, 8.5 x 11 in
    pub const fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
        }
    }

    /// Center an `image_width` x `image_height` image, scaled uniformly so its
    /// longer side spans `fraction` of the shorter page side.
    pub fn place(&self, image_width: u32, image_height: u32, fraction: f32) -> Placement {
        let target = self.width.min(self.height) * fraction;
        let longest = image_width.max(image_height).max(1) as f32;
        let scale = target / longest;

        let width = image_width as f32 * scale;
        let height = image_height as f32 * scale;

        Placement {
            x: (self.width - width) / 2.0,
            y: (self.height - height) / 2.0,
            width,
            height,
        }
    }
}

fn real(value: f32) -> Object {
    Object::Real(value.into())
}

/// Build a one-page PDF with `image` centered on a page of `layout`.
pub fn compose_single_page(image: &GrayImage, layout: PageLayout) -> lopdf::Result<Vec<u8>> {
    let placement = layout.place(image.width(), image.height(), IMAGE_PAGE_FRACTION);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut image_stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width() as i64,
            "Height" => image.height() as i64,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8_i64,
        },
        image.as_raw().clone(),
    );
    image_stream.compress()?;
    let image_id = doc.add_object(image_stream);

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! {
            IMAGE_NAME => image_id,
        },
    });

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    real(placement.width),
                    real(0.0),
                    real(0.0),
                    real(placement.height),
                    real(placement.x),
                    real(placement.y),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![real(0.0), real(0.0), real(layout.width), real(layout.height)],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1_i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
