//! In-memory page model: a document of elements addressed by id, plus the
//! "structure ready" lifecycle that triggers handlers once per load.
//!
//! Writes to an id with no matching element are dropped silently, the same
//! contract a real page gives a script that looks up a missing element.

use std::collections::HashMap;

/// A single page element. Only text content matters to the countdown.
#[derive(Debug, Default, Clone)]
struct Element {
    text: String,
}

/// Elements of the hosting page, addressed by id.
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with empty text. The surrounding markup owns element
    /// creation; scripts only mutate text.
    pub fn add_element(&mut self, id: impl Into<String>) {
        self.elements.insert(id.into(), Element::default());
    }

    /// Replace the text content of the element with the given id.
    ///
    /// A missing id makes this a silent no-op; it is logged at debug level
    /// only, never reported.
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        match self.elements.get_mut(id) {
            Some(element) => element.text = text.to_string(),
            None => log::debug!("dropped text write: no element with id {:?}", id),
        }
    }

    pub fn element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|element| element.text.as_str())
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

type ReadyHandler = Box<dyn FnMut(&mut Document)>;

/// A document plus its ready lifecycle. Handlers registered with
/// [`Page::on_ready`] run exactly once, in registration order, when
/// [`Page::load`] fires; a second `load` is a no-op, and handlers registered
/// after the page has loaded never fire.
#[derive(Default)]
pub struct Page {
    document: Document,
    ready_handlers: Vec<ReadyHandler>,
    loaded: bool,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn on_ready(&mut self, handler: impl FnMut(&mut Document) + 'static) {
        self.ready_handlers.push(Box::new(handler));
    }

    /// Fire the "document structure ready" event.
    pub fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;

        let mut handlers = std::mem::take(&mut self.ready_handlers);
        log::debug!("page loaded, running {} ready handler(s)", handlers.len());
        for handler in &mut handlers {
            handler(&mut self.document);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
