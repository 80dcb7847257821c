//! lopdf-backed document provider
//!
//! Copies pages from a source document into a fresh output document,
//! creates blank filler pages, and finalizes the page tree. Source
//! objects are deep-copied so the output never aliases the source.

use crate::assemble::DocumentProvider;
use crate::types::{BookletError, PageHandle, PageSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// [`DocumentProvider`] over a borrowed lopdf [`Document`].
///
/// The output document is built incrementally and owned by the
/// provider until [`serialize`](DocumentProvider::serialize) hands
/// the bytes to the caller.
pub struct PdfProvider<'a> {
    source: &'a Document,
    source_pages: Vec<ObjectId>,
    output: Document,
    pages_tree_id: ObjectId,
    kids: Vec<Object>,
    copied: HashMap<ObjectId, ObjectId>,
}

impl<'a> PdfProvider<'a> {
    pub fn new(source: &'a Document) -> Self {
        let source_pages = source.get_pages().into_values().collect();
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        Self {
            source,
            source_pages,
            output,
            pages_tree_id,
            kids: Vec::new(),
            copied: HashMap::new(),
        }
    }

    /// Deep copy an object from the source into the output, following
    /// references.
    ///
    /// The output id is reserved and cached before recursing, so
    /// cyclic structures (annotation back-links into the page tree)
    /// terminate instead of recursing forever.
    fn copy_object(&mut self, obj: &Object) -> Result<Object> {
        match obj {
            Object::Reference(id) => {
                if let Some(&new_id) = self.copied.get(id) {
                    return Ok(Object::Reference(new_id));
                }

                let new_id = self.output.new_object_id();
                self.copied.insert(*id, new_id);

                let referenced = self.source.get_object(*id)?;
                let copied = self.copy_object(referenced)?;
                self.output.objects.insert(new_id, copied);

                Ok(Object::Reference(new_id))
            }
            Object::Dictionary(dict) => Ok(Object::Dictionary(self.copy_dictionary(dict)?)),
            Object::Array(arr) => {
                let new_arr: Result<Vec<_>> =
                    arr.iter().map(|item| self.copy_object(item)).collect();
                Ok(Object::Array(new_arr?))
            }
            Object::Stream(stream) => {
                let dict = self.copy_dictionary(&stream.dict)?;
                Ok(Object::Stream(Stream {
                    dict,
                    content: stream.content.clone(),
                    allows_compression: stream.allows_compression,
                    start_position: None,
                }))
            }
            // Primitive types: just clone
            _ => Ok(obj.clone()),
        }
    }

    fn copy_dictionary(&mut self, dict: &Dictionary) -> Result<Dictionary> {
        let mut new_dict = Dictionary::new();
        for (key, value) in dict.iter() {
            new_dict.set(key.clone(), self.copy_object(value)?);
        }
        Ok(new_dict)
    }
}

impl DocumentProvider for PdfProvider<'_> {
    fn page_count(&self) -> usize {
        self.source_pages.len()
    }

    fn page_size(&self, index: usize) -> Result<PageSize> {
        let &page_id = self.source_pages.get(index).ok_or_else(|| {
            BookletError::InvalidDocument(format!("page index {} out of range", index))
        })?;
        let page_dict = self.source.get_dictionary(page_id)?;

        if let Ok(media_box) = page_dict.get(b"MediaBox").and_then(|obj| obj.as_array()) {
            let width = media_box.get(2).and_then(extract_number);
            let height = media_box.get(3).and_then(extract_number);
            if let (Some(width), Some(height)) = (width, height) {
                return Ok(PageSize::new(width, height));
            }
        }
        Ok(PageSize::LETTER)
    }

    fn copy_page(&mut self, index: usize) -> Result<PageHandle> {
        let &page_id = self.source_pages.get(index).ok_or_else(|| {
            BookletError::InvalidDocument(format!("page index {} out of range", index))
        })?;
        let page_dict = self.source.get_dictionary(page_id)?.clone();

        // The page's Parent points into the source page tree; it is
        // replaced with the output tree, everything else is copied.
        let mut new_dict = Dictionary::new();
        for (key, value) in page_dict.iter() {
            if key == b"Parent" {
                continue;
            }
            new_dict.set(key.clone(), self.copy_object(value)?);
        }
        new_dict.set("Parent", Object::Reference(self.pages_tree_id));

        Ok(PageHandle(self.output.add_object(new_dict)))
    }

    fn create_blank_page(&mut self, size: PageSize) -> Result<PageHandle> {
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), Vec::new()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(size.width),
                Object::Real(size.height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(Dictionary::new()));

        Ok(PageHandle(self.output.add_object(page_dict)))
    }

    fn append_page(&mut self, handle: PageHandle) -> Result<()> {
        self.kids.push(Object::Reference(handle.0));
        Ok(())
    }

    fn serialize(&mut self) -> Result<Vec<u8>> {
        let count = self.kids.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.kids.clone())),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        self.output.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
