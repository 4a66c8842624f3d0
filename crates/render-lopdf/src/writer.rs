use crate::RenderError;
use crate::image_data::CardImage;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use log::debug;
use proxyprint_layout::PageSurface;
use proxyprint_types::{Rect, Size};
use std::fs::File;
use std::path::Path;

/// A paginated PDF under construction.
///
/// One content stream and one XObject resource dictionary per page; each
/// placement is a `q cm /ImN Do Q` group stretching the image to its cell.
/// `finish` always closes the page in progress, so a run that aborts
/// mid-layout still produces a readable (if truncated) file, and an empty
/// run produces a single blank page rather than a zero-page document.
pub struct PdfSurface {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page: PageInProgress,
    image_count: usize,
    page_size: Size,
}

#[derive(Default)]
struct PageInProgress {
    operations: Vec<Operation>,
    xobjects: Dictionary,
}

impl PdfSurface {
    pub fn new(page_size: Size) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            page: PageInProgress::default(),
            image_count: 0,
            page_size,
        }
    }

    pub fn page_count(&self) -> usize {
        // Including the page in progress.
        self.page_ids.len() + 1
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = std::mem::take(&mut self.page);
        let content = Content {
            operations: page.operations,
        };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode()?));
        let resources_id = self.doc.add_object(dictionary! {
            "XObject" => page.xobjects,
        });
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.page_size.width),
                Object::Real(self.page_size.height),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        self.page_ids.push(page_id);
        debug!("flushed page {}", self.page_ids.len());
        Ok(())
    }

    /// Flushes the last page and assembles the page tree and catalog.
    pub fn finish(mut self) -> Result<Document, RenderError> {
        self.end_page()?;
        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect();
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        Ok(self.doc)
    }

    /// `finish`, then write the document to `path`.
    pub fn finish_to_file(self, path: &Path) -> Result<(), RenderError> {
        let mut doc = self.finish()?;
        let mut file = File::create(path)?;
        doc.save_to(&mut file)?;
        Ok(())
    }
}

impl PageSurface<CardImage> for PdfSurface {
    type Error = RenderError;

    fn place(&mut self, face: &CardImage, cell: Rect) -> Result<(), RenderError> {
        let image_id = self.doc.add_object(face.xobject());
        self.image_count += 1;
        let name = format!("Im{}", self.image_count);
        self.page
            .xobjects
            .set(name.clone(), Object::Reference(image_id));
        self.page.operations.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Real(cell.width),
                    Object::Real(0.0),
                    Object::Real(0.0),
                    Object::Real(cell.height),
                    Object::Real(cell.x),
                    Object::Real(cell.y),
                ],
            ),
            Operation::new("Do", vec![Object::Name(name.into_bytes())]),
            Operation::new("Q", vec![]),
        ]);
        Ok(())
    }

    fn break_page(&mut self) -> Result<(), RenderError> {
        self.end_page()
    }
}
