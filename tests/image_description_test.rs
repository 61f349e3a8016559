//! Image description behavior with injected describers.

use std::io::{Cursor, Write};

use docx_rs::{Docx, Paragraph, Run};
use plainify::vision::DescribeImage;
use plainify::{load_document, Block};
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;

struct FixedDescriber(&'static str);

impl DescribeImage for FixedDescriber {
    fn describe(&self, _image: &[u8]) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

struct FailingDescriber;

impl DescribeImage for FailingDescriber {
    fn describe(&self, _image: &[u8]) -> anyhow::Result<String> {
        anyhow::bail!("vision backend offline")
    }
}

/// Tracks how many images a describer saw.
struct CountingDescriber(std::cell::Cell<usize>);

impl DescribeImage for CountingDescriber {
    fn describe(&self, _image: &[u8]) -> anyhow::Result<String> {
        self.0.set(self.0.get() + 1);
        Ok(format!("description {}", self.0.get()))
    }
}

fn tiny_png() -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(image::RgbaImage::new(1, 1))
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

/// Builds a one-paragraph document and injects media parts into the
/// finished package.
fn docx_with_media(media: &[(&str, &[u8])]) -> NamedTempFile {
    let mut packed = Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Body text.")))
        .build()
        .pack(&mut packed)
        .unwrap();

    let mut reader = zip::ZipArchive::new(Cursor::new(packed.into_inner())).unwrap();
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for index in 0..reader.len() {
        let entry = reader.by_index_raw(index).unwrap();
        writer.raw_copy_file(entry).unwrap();
    }
    for (name, bytes) in media {
        writer
            .start_file(format!("word/media/{name}"), SimpleFileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
    }
    let data = writer.finish().unwrap().into_inner();

    let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
    std::fs::write(file.path(), data).unwrap();
    file
}

#[test]
fn images_are_described_and_appended_in_name_order() {
    let png = tiny_png();
    let file = docx_with_media(&[("image2.png", &png), ("image1.png", &png)]);

    let describer = CountingDescriber(std::cell::Cell::new(0));
    let blocks = load_document(file.path(), Some(&describer)).unwrap();

    assert_eq!(
        blocks,
        vec![
            Block::Paragraph {
                text: "Body text.".to_string()
            },
            Block::Image {
                name: "image1.png".to_string(),
                description: "description 1".to_string()
            },
            Block::Image {
                name: "image2.png".to_string(),
                description: "description 2".to_string()
            },
        ]
    );
    assert_eq!(describer.0.get(), 2);
}

#[test]
fn failed_description_becomes_a_placeholder() {
    let png = tiny_png();
    let file = docx_with_media(&[("image1.png", &png)]);

    let blocks = load_document(file.path(), Some(&FailingDescriber)).unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph {
                text: "Body text.".to_string()
            },
            Block::Image {
                name: "image1.png".to_string(),
                description: "Error generating image description: vision backend offline"
                    .to_string()
            },
        ]
    );
}

#[test]
fn no_describer_means_no_image_blocks() {
    let png = tiny_png();
    let file = docx_with_media(&[("image1.png", &png)]);

    let blocks = load_document(file.path(), None).unwrap();
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            text: "Body text.".to_string()
        }]
    );
}

#[test]
fn non_image_media_is_not_described() {
    let file = docx_with_media(&[("notes.txt", b"not an image")]);

    let blocks = load_document(file.path(), Some(&FixedDescriber("unused"))).unwrap();
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            text: "Body text.".to_string()
        }]
    );
}

#[test]
fn document_without_media_keeps_body_only() {
    let file = docx_with_media(&[]);

    let blocks = load_document(file.path(), Some(&FixedDescriber("unused"))).unwrap();
    assert_eq!(blocks.len(), 1);
}
