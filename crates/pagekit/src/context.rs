//! View state handed to the rendering layer.
//!
//! A [`ViewContext`] is an immutable snapshot of one page: the items to
//! draw, the page controls to show, and a [`PageNavigator`] the renderer can
//! wire to its next/back/jump controls. Subscribers receive contexts wrapped
//! in a [`ViewUpdate`].

use std::fmt;
use std::ops::Range;
use std::sync::{Arc, Weak};

use crate::page;
use crate::paginator::Shared;

/// Snapshot of the paginator's visible state.
pub struct ViewContext<T> {
    source: Arc<[T]>,
    current_index: usize,
    page_size: usize,
    page_indexes: Vec<usize>,
    navigator: PageNavigator<T>,
}

impl<T> ViewContext<T> {
    pub(crate) fn new(
        source: Arc<[T]>,
        current_index: usize,
        page_size: usize,
        navigator: PageNavigator<T>,
    ) -> Self {
        let page_indexes = page::page_indexes(page::page_count(source.len(), page_size));
        Self {
            source,
            current_index,
            page_size,
            page_indexes,
            navigator,
        }
    }

    /// Items on the current page.
    pub fn current_page(&self) -> &[T] {
        &self.source[self.item_range()]
    }

    /// Positions of the current page's items within the source.
    pub fn item_range(&self) -> Range<usize> {
        page::page_bounds(self.source.len(), self.page_size, self.current_index)
    }

    /// Zero-based index of the current page.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Every valid page index, in order.
    pub fn page_indexes(&self) -> &[usize] {
        &self.page_indexes
    }

    pub fn page_count(&self) -> usize {
        self.page_indexes.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The whole collection being paginated.
    pub fn source(&self) -> &Arc<[T]> {
        &self.source
    }

    pub fn is_first_page(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_index == page::last_index(self.page_count())
    }

    /// Handle for driving navigation from the rendered controls.
    pub fn navigator(&self) -> &PageNavigator<T> {
        &self.navigator
    }
}

impl<T> Clone for ViewContext<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            current_index: self.current_index,
            page_size: self.page_size,
            page_indexes: self.page_indexes.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ViewContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("current_page", &self.current_page())
            .field("current_index", &self.current_index)
            .field("page_indexes", &self.page_indexes)
            .field("source_len", &self.source.len())
            .finish()
    }
}

/// What a subscriber should do with its rendered output.
pub enum ViewUpdate<T> {
    /// Replace the rendered page with this context.
    Render(ViewContext<T>),
    /// The source became empty: remove whatever is rendered.
    Clear,
}

impl<T> ViewUpdate<T> {
    /// The context to render, if any.
    pub fn context(&self) -> Option<&ViewContext<T>> {
        match self {
            Self::Render(context) => Some(context),
            Self::Clear => None,
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }
}

impl<T> Clone for ViewUpdate<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Render(context) => Self::Render(context.clone()),
            Self::Clear => Self::Clear,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ViewUpdate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(context) => f.debug_tuple("Render").field(context).finish(),
            Self::Clear => f.write_str("Clear"),
        }
    }
}

/// Weak handle to a paginator's navigation operations.
///
/// Handed out inside every [`ViewContext`] so a renderer can bind its
/// controls without owning the paginator. Once the paginator is dropped the
/// handle becomes inert and every operation returns `None`.
pub struct PageNavigator<T> {
    shared: Weak<Shared<T>>,
}

impl<T: 'static> PageNavigator<T> {
    pub(crate) fn new(shared: Weak<Shared<T>>) -> Self {
        Self { shared }
    }

    /// Advance one page. Returns the resulting index.
    pub fn next(&self) -> Option<usize> {
        self.shared.upgrade().map(|shared| shared.next())
    }

    /// Go back one page. Returns the resulting index.
    pub fn back(&self) -> Option<usize> {
        self.shared.upgrade().map(|shared| shared.back())
    }

    /// Jump to `index`, clamped into the valid page range.
    pub fn go_to_page(&self, index: isize) -> Option<usize> {
        self.shared.upgrade().map(|shared| shared.go_to_page(index))
    }

    /// Whether the paginator behind this handle still exists.
    pub fn is_attached(&self) -> bool {
        self.shared.strong_count() > 0
    }
}

impl<T> Clone for PageNavigator<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for PageNavigator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageNavigator")
            .field("attached", &(self.shared.strong_count() > 0))
            .finish()
    }
}
