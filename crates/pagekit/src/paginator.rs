//! The paginator state machine.
//!
//! A [`Paginator`] is either *Empty* (no source, or an empty one) or
//! *Populated* at some page index. Replacing the source with a non-empty
//! collection moves it to page 0; navigation moves between pages with
//! clamping; replacing the source with nothing clears the view.
//!
//! Every state change is published on [`Paginator::view_changed`] as a
//! [`ViewUpdate`]. Navigation that does not move the index publishes
//! nothing. When a subscriber changes the state from inside a notification,
//! the older update stops being delivered and every subscriber ends on the
//! newest one.
//!
//! # Example
//!
//! ```
//! use pagekit::{Paginator, ViewUpdate};
//!
//! let paginator = Paginator::<u32>::with_page_size(10).unwrap();
//! let _guard = paginator.subscribe(|update| match update {
//!     ViewUpdate::Render(context) => {
//!         println!("page {} of {}", context.current_index() + 1, context.page_count());
//!     }
//!     ViewUpdate::Clear => println!("nothing to show"),
//! });
//!
//! paginator.set_source(Some((0..25).collect::<Vec<u32>>().into()));
//! paginator.next();
//! paginator.go_to_page(99);
//! assert_eq!(paginator.current_index(), 2);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pagekit_core::logging::targets;
use pagekit_core::{ConnectionGuard, Property, ReadOnlyProperty, Signal};
use parking_lot::RwLock;

use crate::config::{DEFAULT_PAGE_SIZE, PaginatorConfig, validate_page_size};
use crate::context::{PageNavigator, ViewContext, ViewUpdate};
use crate::error::Result;
use crate::page;

/// State shared between a paginator and the navigators it hands out.
pub(crate) struct Shared<T> {
    source: RwLock<Option<Arc<[T]>>>,
    page_size: Property<usize>,
    current_index: Property<usize>,
    view_changed: Signal<ViewUpdate<T>>,
    current_index_changed: Signal<usize>,
    /// Bumped on every publish; an emission stops once it is outdated.
    generation: AtomicU64,
}

impl<T: 'static> Shared<T> {
    fn new(page_size: usize) -> Self {
        Self {
            source: RwLock::new(None),
            page_size: Property::new(page_size),
            current_index: Property::new(0),
            view_changed: Signal::new(),
            current_index_changed: Signal::new(),
            generation: AtomicU64::new(0),
        }
    }

    fn source_len(&self) -> usize {
        self.source.read().as_ref().map_or(0, |source| source.len())
    }

    fn page_count(&self) -> usize {
        page::page_count(self.source_len(), self.page_size.get())
    }

    fn view(self: &Arc<Self>) -> Option<ViewContext<T>> {
        let source = self.source.read().clone()?;
        Some(ViewContext::new(
            source,
            self.current_index.get(),
            self.page_size.get(),
            PageNavigator::new(Arc::downgrade(self)),
        ))
    }

    fn publish(self: &Arc<Self>) {
        let update = match self.view() {
            Some(context) => {
                tracing::trace!(
                    target: targets::PAGINATOR,
                    index = context.current_index(),
                    items = context.current_page().len(),
                    "publishing page"
                );
                ViewUpdate::Render(context)
            }
            None => ViewUpdate::Clear,
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view_changed.emit_while(update, || {
            self.generation.load(Ordering::SeqCst) == generation
        });
    }

    fn set_source(self: &Arc<Self>, source: Option<Arc<[T]>>) {
        let source = source.filter(|source| !source.is_empty());

        {
            let mut current = self.source.write();
            if let (Some(old), Some(new)) = (current.as_ref(), source.as_ref())
                && Arc::ptr_eq(old, new)
            {
                tracing::trace!(target: targets::PAGINATOR, "same source assigned, ignoring");
                return;
            }
            *current = source.clone();
        }

        match source {
            Some(source) => {
                tracing::debug!(
                    target: targets::PAGINATOR,
                    len = source.len(),
                    pages = page::page_count(source.len(), self.page_size.get()),
                    "source replaced"
                );
                if self.current_index.set(0) {
                    self.current_index_changed.emit(0);
                }
                self.publish();
            }
            None => {
                tracing::debug!(target: targets::PAGINATOR, "source cleared");
                self.current_index.set_silent(0);
                self.publish();
            }
        }
    }

    fn set_page_size(self: &Arc<Self>, page_size: usize) -> Result<()> {
        let page_size = validate_page_size(page_size)?;
        if !self.page_size.set(page_size) {
            return Ok(());
        }
        tracing::debug!(target: targets::PAGINATOR, page_size, "page size changed");

        let page_count = self.page_count();
        if page_count == 0 {
            return Ok(());
        }

        let clamped = self.current_index.get().min(page::last_index(page_count));
        if self.current_index.set(clamped) {
            self.current_index_changed.emit(clamped);
        }
        self.publish();
        Ok(())
    }

    fn navigate<F>(self: &Arc<Self>, op: &'static str, target: F) -> usize
    where
        F: FnOnce(usize, usize) -> usize,
    {
        let current = self.current_index.get();
        let page_count = self.page_count();
        if page_count == 0 {
            tracing::trace!(target: targets::PAGINATOR, op, "no pages, navigation ignored");
            return current;
        }

        let requested = target(current, page_count);
        if self.current_index.set(requested) {
            tracing::trace!(target: targets::PAGINATOR, op, from = current, to = requested, "page changed");
            self.current_index_changed.emit(requested);
            self.publish();
        } else {
            tracing::trace!(target: targets::PAGINATOR, op, index = current, "index unchanged");
        }
        requested
    }

    pub(crate) fn next(self: &Arc<Self>) -> usize {
        self.navigate("next", |current, page_count| {
            current.saturating_add(1).min(page::last_index(page_count))
        })
    }

    pub(crate) fn back(self: &Arc<Self>) -> usize {
        self.navigate("back", |current, _| current.saturating_sub(1))
    }

    pub(crate) fn go_to_page(self: &Arc<Self>, index: isize) -> usize {
        self.navigate("go_to_page", |_, page_count| {
            page::clamp_index(index, page_count)
        })
    }
}

/// Slices a shared collection into fixed-size pages and tracks the current one.
///
/// The paginator never mutates the collection it is given. All operations
/// take `&self`; state lives in interior-mutable cells so a render callback
/// may navigate from inside a notification.
///
/// Dropping the paginator disconnects every subscriber and turns all
/// outstanding [`PageNavigator`]s inert.
pub struct Paginator<T: 'static> {
    shared: Arc<Shared<T>>,
}

impl<T: 'static> Default for Paginator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Paginator<T> {
    /// Create an empty paginator with [`DEFAULT_PAGE_SIZE`] items per page.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared::new(DEFAULT_PAGE_SIZE)),
        }
    }

    /// Create an empty paginator with a custom page size.
    ///
    /// Fails with [`Error::InvalidPageSize`](crate::Error::InvalidPageSize)
    /// when `page_size` is zero.
    pub fn with_page_size(page_size: usize) -> Result<Self> {
        let page_size = validate_page_size(page_size)?;
        Ok(Self {
            shared: Arc::new(Shared::new(page_size)),
        })
    }

    /// Create an empty paginator from a configuration.
    pub fn with_config(config: &PaginatorConfig) -> Result<Self> {
        Self::with_page_size(config.page_size)
    }

    /// Replace the source collection.
    ///
    /// A non-empty collection resets the current page to 0 and publishes a
    /// [`ViewUpdate::Render`]. `None` or an empty collection publishes
    /// [`ViewUpdate::Clear`]. Assigning the same `Arc` again does nothing.
    pub fn set_source(&self, source: Option<Arc<[T]>>) {
        self.shared.set_source(source);
    }

    /// Drop the source collection and clear the view.
    pub fn clear_source(&self) {
        self.shared.set_source(None);
    }

    /// Advance one page, staying put on the last page. Returns the new index.
    pub fn next(&self) -> usize {
        self.shared.next()
    }

    /// Go back one page, staying put on the first page. Returns the new index.
    pub fn back(&self) -> usize {
        self.shared.back()
    }

    /// Jump to `index`, clamped into `[0, page_count - 1]`. Returns the new index.
    pub fn go_to_page(&self, index: isize) -> usize {
        self.shared.go_to_page(index)
    }

    /// The current view, or `None` while there is nothing to show.
    pub fn current_view(&self) -> Option<ViewContext<T>> {
        self.shared.view()
    }

    /// Change the page size.
    ///
    /// The current index is re-clamped into the new page range and, if a
    /// source is set, the view is republished.
    pub fn set_page_size(&self, page_size: usize) -> Result<()> {
        self.shared.set_page_size(page_size)
    }

    pub fn page_size(&self) -> usize {
        self.shared.page_size.get()
    }

    pub fn current_index(&self) -> usize {
        self.shared.current_index.get()
    }

    /// Read-only access to the current-index cell.
    pub fn current_index_property(&self) -> ReadOnlyProperty<'_, usize> {
        ReadOnlyProperty::new(&self.shared.current_index)
    }

    pub fn page_count(&self) -> usize {
        self.shared.page_count()
    }

    pub fn page_indexes(&self) -> Vec<usize> {
        page::page_indexes(self.page_count())
    }

    /// Whether the paginator is in the Empty state.
    pub fn is_empty(&self) -> bool {
        self.shared.source_len() == 0
    }

    pub fn source(&self) -> Option<Arc<[T]>> {
        self.shared.source.read().clone()
    }

    /// A weak navigation handle, the same kind every [`ViewContext`] carries.
    pub fn navigator(&self) -> PageNavigator<T> {
        PageNavigator::new(Arc::downgrade(&self.shared))
    }

    /// Signal emitted with every view change.
    pub fn view_changed(&self) -> &Signal<ViewUpdate<T>> {
        &self.shared.view_changed
    }

    /// Signal emitted with the new index whenever the current index changes.
    pub fn current_index_changed(&self) -> &Signal<usize> {
        &self.shared.current_index_changed
    }

    /// Connect a renderer to [`view_changed`](Self::view_changed).
    ///
    /// The renderer stays connected for as long as the returned guard lives.
    pub fn subscribe<F>(&self, render: F) -> ConnectionGuard<ViewUpdate<T>>
    where
        F: Fn(&ViewUpdate<T>) + Send + Sync + 'static,
    {
        self.shared.view_changed.connect_scoped(render)
    }
}

impl<T: 'static> Drop for Paginator<T> {
    fn drop(&mut self) {
        tracing::debug!(target: targets::PAGINATOR, "paginator torn down");
        self.shared.view_changed.disconnect_all();
        self.shared.current_index_changed.disconnect_all();
    }
}

impl<T: 'static> fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("len", &self.shared.source_len())
            .field("page_size", &self.page_size())
            .field("current_index", &self.current_index())
            .field("subscribers", &self.shared.view_changed.connection_count())
            .finish()
    }
}
